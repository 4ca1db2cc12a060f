//! Shape classification and contour-to-shape extraction.

mod common;

use flowchart_reader::flowchart::{classify_shape, extract_shape, extract_shapes};
use flowchart_reader::FlowchartError;

use common::*;

fn classify(points: &[Point]) -> ShapeKind {
    let bbox = BoundingBox::enclosing(points).expect("non-empty polygon");
    classify_shape(points, &bbox, &ReconstructionConfig::default())
}

#[test]
fn test_wide_quadrilateral_is_rectangle() {
    let polygon = [pt(0.0, 0.0), pt(100.0, 0.0), pt(100.0, 50.0), pt(0.0, 50.0)];
    assert_eq!(classify(&polygon), ShapeKind::Rectangle);
}

#[test]
fn test_near_square_quadrilateral_is_diamond() {
    let polygon = [pt(25.0, 0.0), pt(50.0, 27.5), pt(25.0, 55.0), pt(0.0, 27.5)];
    assert_eq!(classify(&polygon), ShapeKind::Diamond);
}

#[test]
fn test_axis_aligned_square_is_diamond() {
    // Aspect ratio alone cannot tell a square box from a diamond
    let polygon = [pt(0.0, 0.0), pt(60.0, 0.0), pt(60.0, 60.0), pt(0.0, 60.0)];
    assert_eq!(classify(&polygon), ShapeKind::Diamond);
}

#[test]
fn test_diamond_range_is_inclusive() {
    let config = ReconstructionConfig::default();
    let quad = [pt(0.0, 0.0), pt(1.0, 0.0), pt(1.0, 1.0), pt(0.0, 1.0)];

    let at_min = BoundingBox::new(0.0, 0.0, 80.0, 100.0);
    let at_max = BoundingBox::new(0.0, 0.0, 120.0, 100.0);
    let below = BoundingBox::new(0.0, 0.0, 79.0, 100.0);
    let above = BoundingBox::new(0.0, 0.0, 121.0, 100.0);

    assert_eq!(classify_shape(&quad, &at_min, &config), ShapeKind::Diamond);
    assert_eq!(classify_shape(&quad, &at_max, &config), ShapeKind::Diamond);
    assert_eq!(classify_shape(&quad, &below, &config), ShapeKind::Rectangle);
    assert_eq!(classify_shape(&quad, &above, &config), ShapeKind::Rectangle);
}

#[test]
fn test_flat_quadrilateral_is_rectangle() {
    let config = ReconstructionConfig::default();
    let quad = [pt(0.0, 0.0), pt(1.0, 0.0), pt(1.0, 1.0), pt(0.0, 1.0)];
    let flat = BoundingBox::new(0.0, 0.0, 40.0, 0.0);
    assert_eq!(classify_shape(&quad, &flat, &config), ShapeKind::Rectangle);
}

#[test]
fn test_classification_by_vertex_count() {
    let kinds: Vec<ShapeKind> = (3..=12)
        .map(|n| {
            let contour = circle_contour(0.0, 0.0, 100.0, n);
            classify(&contour.points)
        })
        .collect();

    assert_eq!(kinds[0], ShapeKind::Triangle);
    assert_eq!(kinds[2], ShapeKind::Pentagon);
    assert_eq!(kinds[3], ShapeKind::Polygon);
    assert_eq!(kinds[4], ShapeKind::Polygon);
    assert!(kinds[5..].iter().all(|k| *k == ShapeKind::Circle));
}

#[test]
fn test_triangle_of_any_size() {
    for scale in [40.0, 400.0, 4000.0] {
        let polygon = [pt(0.0, 0.0), pt(scale, 0.0), pt(scale / 2.0, scale)];
        assert_eq!(classify(&polygon), ShapeKind::Triangle);
    }
}

#[test]
fn test_classification_is_repeatable() {
    let polygon = [pt(3.0, 1.0), pt(97.0, 4.0), pt(95.0, 61.0), pt(1.0, 58.0)];
    let first = classify(&polygon);
    for _ in 0..10 {
        assert_eq!(classify(&polygon), first);
    }
}

#[test]
fn test_extract_rectangle() -> anyhow::Result<()> {
    let config = ReconstructionConfig::default();
    let shape = extract_shape(0, &rect_contour(10.0, 20.0, 100.0, 50.0), &config)?
        .expect("rectangle above the noise floor");

    assert_eq!(shape.kind, ShapeKind::Rectangle);
    assert_eq!(shape.polygon.len(), 4);
    assert_eq!(shape.area, 5000.0);
    assert_eq!(shape.bounding_box, BoundingBox::new(10.0, 20.0, 100.0, 50.0));
    assert!((shape.centroid.x - 60.0).abs() < 1e-9);
    assert!((shape.centroid.y - 45.0).abs() < 1e-9);
    assert!(shape.text.is_empty());
    Ok(())
}

#[test]
fn test_dense_border_simplifies_to_corners() -> anyhow::Result<()> {
    let config = ReconstructionConfig::default();
    let contour = dense_rect_contour(0.0, 0.0, 100, 60);
    let shape = extract_shape(0, &contour, &config)?.expect("large rectangle");

    assert_eq!(shape.polygon.len(), 4);
    assert_eq!(shape.kind, ShapeKind::Rectangle);
    assert!((shape.centroid.x - 50.0).abs() < 1e-6);
    assert!((shape.centroid.y - 30.0).abs() < 1e-6);
    Ok(())
}

#[test]
fn test_fine_epsilon_keeps_circle_vertices() -> anyhow::Result<()> {
    let config = ReconstructionConfig {
        approx_epsilon_factor: 0.01,
        ..ReconstructionConfig::default()
    };
    let shape = extract_shape(0, &circle_contour(100.0, 100.0, 50.0, 64), &config)?
        .expect("circle above the noise floor");

    assert!(shape.polygon.len() >= 8, "got {} vertices", shape.polygon.len());
    assert_eq!(shape.kind, ShapeKind::Circle);
    Ok(())
}

#[test]
fn test_noise_floor() -> anyhow::Result<()> {
    let config = ReconstructionConfig::default();

    // 25 x 20 = 500, exactly on the floor
    assert!(extract_shape(0, &rect_contour(0.0, 0.0, 25.0, 20.0), &config)?.is_some());
    assert!(extract_shape(0, &rect_contour(0.0, 0.0, 24.0, 20.0), &config)?.is_none());
    Ok(())
}

#[test]
fn test_reported_area_drives_the_noise_floor() -> anyhow::Result<()> {
    let config = ReconstructionConfig::default();
    let contour = rect_contour(0.0, 0.0, 100.0, 100.0).with_area(10.0);
    assert!(extract_shape(0, &contour, &config)?.is_none());
    Ok(())
}

#[test]
fn test_degenerate_contour_is_dropped() -> anyhow::Result<()> {
    let config = ReconstructionConfig {
        min_shape_area: 0.0,
        ..ReconstructionConfig::default()
    };
    let collinear = RawContour::new(vec![pt(0.0, 0.0), pt(50.0, 0.0), pt(100.0, 0.0)]);
    assert!(extract_shape(0, &collinear, &config)?.is_none());

    // Even when the detector claims an area, an undefined centroid is dropped
    let claimed = collinear.clone().with_area(1000.0);
    assert!(extract_shape(0, &claimed, &config)?.is_none());
    Ok(())
}

#[test]
fn test_short_contour_is_invalid() {
    let config = ReconstructionConfig::default();
    let contours = vec![
        rect_contour(0.0, 0.0, 100.0, 50.0),
        RawContour::new(vec![pt(0.0, 0.0), pt(10.0, 10.0)]),
    ];

    match extract_shapes(&contours, &config) {
        Err(FlowchartError::InvalidContour { index, points }) => {
            assert_eq!(index, 1);
            assert_eq!(points, 2);
        }
        other => panic!("expected InvalidContour, got {:?}", other),
    }
}

#[test]
fn test_extract_shapes_keeps_detection_order() -> anyhow::Result<()> {
    let config = ReconstructionConfig::default();
    let contours = vec![
        square_at(300.0, 300.0, 40.0),
        square_at(10.0, 10.0, 5.0),
        rect_contour(0.0, 0.0, 100.0, 40.0),
    ];

    let shapes = extract_shapes(&contours, &config)?;
    assert_eq!(shapes.len(), 2);
    assert_eq!(shapes[0].kind, ShapeKind::Diamond);
    assert_eq!(shapes[1].kind, ShapeKind::Rectangle);
    Ok(())
}

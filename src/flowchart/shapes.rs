use crate::config::ReconstructionConfig;
use crate::error::{FlowchartError, Result};
use crate::geometry;
use crate::models::{BoundingBox, Point, RawContour, ShapeKind, ShapeRecord};

/// Classify a simplified polygon by its vertex count.
///
/// Quadrilaterals whose bounding box is close to square are read as diamonds,
/// so a near-square rectangle ends up a diamond as well.
pub fn classify_shape(
    polygon: &[Point],
    bounding_box: &BoundingBox,
    config: &ReconstructionConfig,
) -> ShapeKind {
    match polygon.len() {
        3 => ShapeKind::Triangle,
        4 => {
            let ratio = bounding_box.aspect_ratio();
            if ratio >= config.diamond_aspect_min && ratio <= config.diamond_aspect_max {
                ShapeKind::Diamond
            } else {
                ShapeKind::Rectangle
            }
        }
        5 => ShapeKind::Pentagon,
        n if n >= 8 => ShapeKind::Circle,
        _ => ShapeKind::Polygon,
    }
}

/// Turn one raw contour into a shape record.
///
/// Returns `Ok(None)` for noise: contours under the area floor and contours
/// whose centroid is undefined.
pub fn extract_shape(
    index: usize,
    contour: &RawContour,
    config: &ReconstructionConfig,
) -> Result<Option<ShapeRecord>> {
    if contour.points.len() < 3 {
        return Err(FlowchartError::InvalidContour {
            index,
            points: contour.points.len(),
        });
    }

    let area = contour.area();
    if !(area > 0.0 && area >= config.min_shape_area) {
        return Ok(None);
    }

    let Some(centroid) = geometry::centroid(&contour.points) else {
        return Ok(None);
    };
    let Some(bounding_box) = BoundingBox::enclosing(&contour.points) else {
        return Ok(None);
    };

    let epsilon = config.approx_epsilon_factor * geometry::perimeter(&contour.points);
    let polygon = geometry::simplify_closed(&contour.points, epsilon);
    let kind = match BoundingBox::enclosing(&polygon) {
        Some(approx_box) => classify_shape(&polygon, &approx_box, config),
        None => ShapeKind::Polygon,
    };

    Ok(Some(ShapeRecord {
        polygon,
        bounding_box,
        centroid,
        area,
        kind,
        text: String::new(),
    }))
}

/// Extract shapes from all contours, preserving detection order
pub fn extract_shapes(
    contours: &[RawContour],
    config: &ReconstructionConfig,
) -> Result<Vec<ShapeRecord>> {
    let mut shapes = Vec::new();
    for (index, contour) in contours.iter().enumerate() {
        if let Some(shape) = extract_shape(index, contour, config)? {
            shapes.push(shape);
        }
    }
    Ok(shapes)
}

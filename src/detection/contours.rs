use image::GrayImage;
use imageproc::contours::{BorderType, find_contours};
use crate::models::{Point, RawContour};

/// Find the outer borders of foreground regions in a binary image.
///
/// Only top-level borders are kept, so text and decorations drawn inside a
/// shape do not become shapes of their own. Borders of one or two pixels are
/// speckle and are dropped here rather than reported as malformed contours.
pub fn find_external_contours(binary: &GrayImage) -> Vec<RawContour> {
    find_contours::<i32>(binary)
        .into_iter()
        .filter(|c| c.parent.is_none() && matches!(c.border_type, BorderType::Outer))
        .filter(|c| c.points.len() >= 3)
        .map(|c| {
            let points = c.points
                .iter()
                .map(|p| Point::new(p.x as f64, p.y as f64))
                .collect();
            RawContour::new(points)
        })
        .collect()
}

use image::GrayImage;
use imageproc::hough::{LineDetectionOptions, PolarLine, detect_lines};
use crate::config::DetectionConfig;
use crate::models::{LineSegment, Point};

/// Find straight segments in an edge image.
///
/// The Hough transform only yields infinite lines, so each line is walked
/// across the image and cut wherever its edge support breaks for longer than
/// `max_line_gap`.
pub fn find_segments(edges: &GrayImage, config: &DetectionConfig) -> Vec<LineSegment> {
    let options = LineDetectionOptions {
        vote_threshold: config.hough_vote_threshold,
        suppression_radius: config.hough_suppression_radius,
    };

    detect_lines(edges, options)
        .iter()
        .flat_map(|line| trace_segments(edges, line, config))
        .collect()
}

fn trace_segments(edges: &GrayImage, line: &PolarLine, config: &DetectionConfig) -> Vec<LineSegment> {
    let (width, height) = edges.dimensions();
    let theta = (line.angle_in_degrees as f64).to_radians();

    // x*cos(theta) + y*sin(theta) = r
    let normal = (theta.cos(), theta.sin());
    let direction = (-normal.1, normal.0);
    let origin = (line.r as f64 * normal.0, line.r as f64 * normal.1);
    let reach = (width as f64).hypot(height as f64);

    let mut segments = Vec::new();
    let mut run: Option<(Point, Point)> = None;

    let steps = (2.0 * reach).ceil() as usize;
    for step in 0..=steps {
        let t = step as f64 - reach;
        let p = Point::new(origin.0 + t * direction.0, origin.1 + t * direction.1);

        if has_edge_support(edges, &p, normal) {
            run = match run {
                Some((start, last)) if p.distance(&last) > config.max_line_gap => {
                    close_run((start, last), config, &mut segments);
                    Some((p, p))
                }
                Some((start, _)) => Some((start, p)),
                None => Some((p, p)),
            };
        }
    }

    if let Some(open) = run {
        close_run(open, config, &mut segments);
    }

    segments
}

fn close_run(run: (Point, Point), config: &DetectionConfig, segments: &mut Vec<LineSegment>) {
    let segment = LineSegment::new(run.0, run.1);
    if segment.length() >= config.min_line_length {
        segments.push(segment);
    }
}

/// True when an edge pixel lies on the line or one pixel off it
fn has_edge_support(edges: &GrayImage, p: &Point, normal: (f64, f64)) -> bool {
    [-1.0_f64, 0.0, 1.0].iter().any(|offset| {
        let x = (p.x + offset * normal.0).round();
        let y = (p.y + offset * normal.1).round();
        x >= 0.0
            && y >= 0.0
            && (x as u32) < edges.width()
            && (y as u32) < edges.height()
            && edges.get_pixel(x as u32, y as u32)[0] > 0
    })
}

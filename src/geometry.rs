//! Planar polygon helpers used by shape extraction.
//!
//! All polygons are treated as closed: the last point connects back to the first.

use imageproc::geometry::{arc_length, oriented_contour_area};
use imageproc::point::Point as PixelPoint;

use crate::models::Point;

fn to_pixel_points(points: &[Point]) -> Vec<PixelPoint<f64>> {
    points.iter().map(|p| PixelPoint::new(p.x, p.y)).collect()
}

/// Shoelace area of the polygon; the sign follows the winding
pub fn signed_area(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    oriented_contour_area(&to_pixel_points(points))
}

/// Area-weighted centroid, `None` when the polygon encloses no area
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.len() < 3 {
        return None;
    }

    let (mut cx, mut cy, mut twice_area) = (0.0, 0.0, 0.0);
    for (i, p) in points.iter().enumerate() {
        let q = &points[(i + 1) % points.len()];
        let cross = p.x * q.y - q.x * p.y;
        twice_area += cross;
        cx += (p.x + q.x) * cross;
        cy += (p.y + q.y) * cross;
    }

    if twice_area == 0.0 || !twice_area.is_finite() {
        return None;
    }
    let denom = 3.0 * twice_area;
    Some(Point::new(cx / denom, cy / denom))
}

/// Closed perimeter length
pub fn perimeter(points: &[Point]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }
    arc_length(&to_pixel_points(points), true)
}

/// Distance from `p` to the infinite line through `a` and `b`
fn line_distance(p: &Point, a: &Point, b: &Point) -> f64 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len = dx.hypot(dy);
    if len == 0.0 {
        return p.distance(a);
    }
    ((p.x - a.x) * dy - (p.y - a.y) * dx).abs() / len
}

/// Douglas-Peucker simplification of a closed polygon.
///
/// `imageproc::geometry::approximate_polygon_dp` treats its input as an open
/// curve and rejects a zero epsilon, so the ring is handled here.
///
/// The ring is split at the first point and the point farthest from it, and
/// each half is simplified independently, so both split points always survive.
pub fn simplify_closed(points: &[Point], epsilon: f64) -> Vec<Point> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    let anchor = points[0];
    let (split, farthest) = points
        .iter()
        .enumerate()
        .map(|(i, p)| (i, p.distance(&anchor)))
        .fold((0, 0.0), |best, cur| if cur.1 > best.1 { cur } else { best });

    if farthest == 0.0 {
        return vec![anchor];
    }

    // Unrolled ring: index n is the first point again
    let mut ring = points.to_vec();
    ring.push(anchor);

    let mut keep = vec![false; n + 1];
    keep[0] = true;
    keep[split] = true;
    keep[n] = true;

    let mut stack = vec![(0, split), (split, n)];
    while let Some((first, last)) = stack.pop() {
        if last <= first + 1 {
            continue;
        }

        let mut max_dist = 0.0;
        let mut max_idx = first;
        for i in first + 1..last {
            let d = line_distance(&ring[i], &ring[first], &ring[last]);
            if d > max_dist {
                max_dist = d;
                max_idx = i;
            }
        }

        if max_dist > epsilon {
            keep[max_idx] = true;
            stack.push((first, max_idx));
            stack.push((max_idx, last));
        }
    }

    ring.into_iter()
        .take(n)
        .zip(keep)
        .filter_map(|(p, k)| k.then_some(p))
        .collect()
}

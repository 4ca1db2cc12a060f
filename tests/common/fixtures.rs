use flowchart_reader::{LineSegment, Point, RawContour};
use image::{DynamicImage, Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

pub fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

pub fn segment(x1: f64, y1: f64, x2: f64, y2: f64) -> LineSegment {
    LineSegment::new(pt(x1, y1), pt(x2, y2))
}

/// Four-corner contour of an axis-aligned rectangle
pub fn rect_contour(x: f64, y: f64, w: f64, h: f64) -> RawContour {
    RawContour::new(vec![pt(x, y), pt(x + w, y), pt(x + w, y + h), pt(x, y + h)])
}

/// Square contour of side `size` centered on `(cx, cy)`
pub fn square_at(cx: f64, cy: f64, size: f64) -> RawContour {
    rect_contour(cx - size / 2.0, cy - size / 2.0, size, size)
}

/// Rectangle traced one unit at a time, like a pixel border
pub fn dense_rect_contour(x: f64, y: f64, w: u32, h: u32) -> RawContour {
    let mut points = Vec::new();
    for i in 0..w {
        points.push(pt(x + i as f64, y));
    }
    for i in 0..h {
        points.push(pt(x + w as f64, y + i as f64));
    }
    for i in 0..w {
        points.push(pt(x + (w - i) as f64, y + h as f64));
    }
    for i in 0..h {
        points.push(pt(x, y + (h - i) as f64));
    }
    RawContour::new(points)
}

/// Regular polygon approximating a circle
pub fn circle_contour(cx: f64, cy: f64, radius: f64, points: usize) -> RawContour {
    let points = (0..points)
        .map(|i| {
            let angle = i as f64 * std::f64::consts::TAU / points as f64;
            pt(cx + radius * angle.cos(), cy + radius * angle.sin())
        })
        .collect();
    RawContour::new(points)
}

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Black rectangle outline of the given stroke width
pub fn draw_outline(img: &mut RgbImage, x: i32, y: i32, w: u32, h: u32, stroke: u32) {
    draw_filled_rect_mut(img, Rect::at(x, y).of_size(w, h), BLACK);
    draw_filled_rect_mut(
        img,
        Rect::at(x + stroke as i32, y + stroke as i32).of_size(w - 2 * stroke, h - 2 * stroke),
        WHITE,
    );
}

/// Two outlined boxes and a short connector that touches neither
pub fn two_box_image() -> DynamicImage {
    let mut img = RgbImage::from_pixel(400, 300, WHITE);
    draw_outline(&mut img, 40, 40, 120, 80, 4);
    draw_outline(&mut img, 240, 180, 120, 80, 4);
    draw_filled_rect_mut(&mut img, Rect::at(175, 149).of_size(50, 3), BLACK);
    DynamicImage::ImageRgb8(img)
}

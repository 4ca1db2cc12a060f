//! Overlay rendering of a reconstruction on top of the source image.

use image::{DynamicImage, Rgb, RgbImage};
use imageproc::drawing::{
    draw_cross_mut, draw_filled_circle_mut, draw_hollow_rect_mut, draw_line_segment_mut,
};
use imageproc::rect::Rect;

use crate::flowchart::Reconstruction;
use crate::models::ShapeKind;

const SHAPE_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
const DIAMOND_COLOR: Rgb<u8> = Rgb([0, 0, 255]);
const ARROW_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
const TIP_RADIUS: i32 = 3;

/// Draw node boxes, centroids and arrows over a copy of `img`
pub fn draw_overlay(img: &DynamicImage, reconstruction: &Reconstruction) -> RgbImage {
    let mut canvas = img.to_rgb8();

    for node in &reconstruction.graph.nodes {
        let color = if node.kind == ShapeKind::Diamond { DIAMOND_COLOR } else { SHAPE_COLOR };
        let bbox = &node.bounding_box;
        // Rect refuses zero sizes
        let rect = Rect::at(bbox.x.round() as i32, bbox.y.round() as i32)
            .of_size((bbox.width.round() as u32).max(1), (bbox.height.round() as u32).max(1));
        draw_hollow_rect_mut(&mut canvas, rect, color);
        draw_cross_mut(
            &mut canvas,
            color,
            node.position.x.round() as i32,
            node.position.y.round() as i32,
        );
    }

    for arrow in &reconstruction.arrows {
        draw_line_segment_mut(
            &mut canvas,
            (arrow.start.x as f32, arrow.start.y as f32),
            (arrow.end.x as f32, arrow.end.y as f32),
            ARROW_COLOR,
        );
        draw_filled_circle_mut(
            &mut canvas,
            (arrow.tip.x.round() as i32, arrow.tip.y.round() as i32),
            TIP_RADIUS,
            ARROW_COLOR,
        );
    }

    canvas
}

use image::{DynamicImage, GrayImage};
use imageproc::contrast::{ThresholdType, threshold};
use imageproc::filter::gaussian_blur_f32;
use imageproc::edges::canny;

/// Convert image to grayscale
pub fn to_grayscale(img: &DynamicImage) -> GrayImage {
    img.to_luma8()
}

/// Apply Gaussian blur to reduce noise
pub fn apply_blur(img: &GrayImage, sigma: f32) -> GrayImage {
    gaussian_blur_f32(img, sigma)
}

/// Inverse binary threshold: ink at or below `threshold_value` becomes white foreground
pub fn binarize_inverse(img: &GrayImage, threshold_value: u8) -> GrayImage {
    threshold(img, threshold_value, ThresholdType::BinaryInverted)
}

/// Detect edges using Canny edge detector
pub fn detect_edges(img: &GrayImage, low_threshold: f32, high_threshold: f32) -> GrayImage {
    canny(img, low_threshold, high_threshold)
}

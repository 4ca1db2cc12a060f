//! Image-side collaborators: turn a raster flowchart into geometric primitives.

pub mod preprocessing;
pub mod contours;
pub mod lines;
pub mod ocr;

use image::{DynamicImage, GrayImage};
use crate::config::DetectionConfig;
use crate::models::Primitives;

/// Intermediate images of the preprocessing chain
#[derive(Debug, Clone)]
pub struct Preprocessed {
    pub grayscale: GrayImage,
    pub blurred: GrayImage,
    /// Ink as white foreground on black
    pub binary: GrayImage,
    pub edges: GrayImage,
}

impl Preprocessed {
    /// Stage images in order, named for debug output
    pub fn stages(&self) -> [(&'static str, &GrayImage); 4] {
        [
            ("grayscale", &self.grayscale),
            ("blur", &self.blurred),
            ("binary", &self.binary),
            ("edges", &self.edges),
        ]
    }
}

pub fn preprocess(img: &DynamicImage, config: &DetectionConfig) -> Preprocessed {
    let grayscale = preprocessing::to_grayscale(img);
    let blurred = preprocessing::apply_blur(&grayscale, config.blur_sigma);
    let binary = preprocessing::binarize_inverse(&blurred, config.binary_threshold);
    let edges = preprocessing::detect_edges(&binary, config.canny_low, config.canny_high);

    Preprocessed {
        grayscale,
        blurred,
        binary,
        edges,
    }
}

/// Contours from the binary image and segments from the edge image; no text
pub fn detect_primitives(preprocessed: &Preprocessed, config: &DetectionConfig) -> Primitives {
    Primitives {
        contours: contours::find_external_contours(&preprocessed.binary),
        segments: lines::find_segments(&preprocessed.edges, config),
        texts: Vec::new(),
    }
}

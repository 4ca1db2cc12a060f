use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// Thresholds used by the reconstruction core
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconstructionConfig {
    /// Contours with a smaller raw area are noise
    pub min_shape_area: f64,
    /// Segments must be strictly longer than this to become arrows
    pub min_arrow_length: f64,
    /// Douglas-Peucker epsilon as a fraction of the contour perimeter
    pub approx_epsilon_factor: f64,
    /// Inclusive aspect ratio range that turns a quadrilateral into a diamond
    pub diamond_aspect_min: f64,
    pub diamond_aspect_max: f64,
}

impl Default for ReconstructionConfig {
    fn default() -> Self {
        Self {
            min_shape_area: 500.0,
            min_arrow_length: 20.0,
            approx_epsilon_factor: 0.1,
            diamond_aspect_min: 0.8,
            diamond_aspect_max: 1.2,
        }
    }
}

/// Parameters of the image-side detectors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    pub blur_sigma: f32,
    /// Pixels darker than this become foreground
    pub binary_threshold: u8,
    pub canny_low: f32,
    pub canny_high: f32,
    pub hough_vote_threshold: u32,
    pub hough_suppression_radius: u32,
    pub min_line_length: f64,
    pub max_line_gap: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            blur_sigma: 1.1,
            binary_threshold: 127,
            canny_low: 50.0,
            canny_high: 150.0,
            hough_vote_threshold: 50,
            hough_suppression_radius: 8,
            min_line_length: 30.0,
            max_line_gap: 10.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub reconstruction: ReconstructionConfig,
    pub detection: DetectionConfig,
}

impl Config {
    /// Load a config file; missing keys keep their defaults
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

use image::DynamicImage;
pub use ocrs::{OcrEngine, ImageSource};  // Re-export for use in other modules
use ocrs::OcrEngineParams;
use imageproc::contrast::{ThresholdType, otsu_level, threshold};
use rten::Model;
use std::path::Path;

use crate::flowchart::TextRecognizer;
use crate::models::BoundingBox;

/// Initialize OCR engine with models from standard cache location
pub fn init_ocr_engine() -> anyhow::Result<OcrEngine> {
    // Try to load models from standard locations
    let home_dir = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))?;

    let cache_dir = Path::new(&home_dir).join(".cache/ocrs");
    let detection_model_path = cache_dir.join("text-detection.rten");
    let recognition_model_path = cache_dir.join("text-recognition.rten");

    if !detection_model_path.exists() || !recognition_model_path.exists() {
        anyhow::bail!(
            "OCR models not found. Please run: ocrs-cli --help (or download models manually)\n\
             Expected locations:\n  - {}\n  - {}\n\
             Use --skip-ocr to reconstruct without text.",
            detection_model_path.display(),
            recognition_model_path.display()
        );
    }

    let detection_model = Model::load_file(&detection_model_path)?;
    let recognition_model = Model::load_file(&recognition_model_path)?;

    let engine = OcrEngine::new(OcrEngineParams {
        detection_model: Some(detection_model),
        recognition_model: Some(recognition_model),
        ..Default::default()
    })?;

    Ok(engine)
}

/// Pixel rectangle `(x, y, width, height)` covered by a box, clipped to the image.
/// Box edges are inclusive pixel coordinates.
pub fn region_to_pixels(region: &BoundingBox, img: &DynamicImage) -> Option<(u32, u32, u32, u32)> {
    let x0 = region.x.floor().max(0.0);
    let y0 = region.y.floor().max(0.0);
    let x1 = ((region.x + region.width).floor() + 1.0).min(img.width() as f64);
    let y1 = ((region.y + region.height).floor() + 1.0).min(img.height() as f64);

    if !(x1 > x0 && y1 > y0) {
        return None;
    }
    Some((x0 as u32, y0 as u32, (x1 - x0) as u32, (y1 - y0) as u32))
}

/// Crop a region and binarize it with Otsu's threshold, dark text on white
pub fn preprocess_region_for_ocr(img: &DynamicImage, region: &BoundingBox) -> Option<DynamicImage> {
    let (x, y, width, height) = region_to_pixels(region, img)?;
    let gray = img.crop_imm(x, y, width, height).to_luma8();
    let binary = threshold(&gray, otsu_level(&gray), ThresholdType::Binary);

    Some(DynamicImage::ImageLuma8(binary))
}

/// OCR backed text source reading directly from the source image
pub struct OcrsRecognizer<'a> {
    engine: &'a OcrEngine,
    image: &'a DynamicImage,
}

impl<'a> OcrsRecognizer<'a> {
    pub fn new(engine: &'a OcrEngine, image: &'a DynamicImage) -> Self {
        Self { engine, image }
    }
}

impl TextRecognizer for OcrsRecognizer<'_> {
    fn recognize(&self, region: &BoundingBox) -> anyhow::Result<String> {
        let Some(roi) = preprocess_region_for_ocr(self.image, region) else {
            return Ok(String::new());
        };

        // Convert to RGB8 format for OCR
        let img = roi.to_rgb8();
        let img_source = ImageSource::from_bytes(img.as_raw(), img.dimensions())
            .map_err(|_| anyhow::anyhow!("Failed to build OCR input from region"))?;
        let ocr_input = self.engine.prepare_input(img_source)?;
        let text = self.engine.get_text(&ocr_input)?;

        Ok(text.trim().to_string())
    }
}

use crate::models::{BoundingBox, ShapeRecord, TextSnippet};

/// Reads the text inside a rectangular region of the source image
pub trait TextRecognizer {
    fn recognize(&self, region: &BoundingBox) -> anyhow::Result<String>;
}

/// Recognizer for runs where OCR is skipped
#[derive(Debug, Clone, Copy, Default)]
pub struct NoText;

impl TextRecognizer for NoText {
    fn recognize(&self, _region: &BoundingBox) -> anyhow::Result<String> {
        Ok(String::new())
    }
}

/// Serves text that was recognized ahead of time.
///
/// Every snippet whose position falls inside the region contributes, in input
/// order, separated by a single space.
#[derive(Debug, Clone, Copy)]
pub struct SnippetRecognizer<'a> {
    snippets: &'a [TextSnippet],
}

impl<'a> SnippetRecognizer<'a> {
    pub fn new(snippets: &'a [TextSnippet]) -> Self {
        Self { snippets }
    }
}

impl TextRecognizer for SnippetRecognizer<'_> {
    fn recognize(&self, region: &BoundingBox) -> anyhow::Result<String> {
        let parts: Vec<&str> = self
            .snippets
            .iter()
            .filter(|s| region.contains(&s.position))
            .map(|s| s.text.as_str())
            .collect();
        Ok(parts.join(" "))
    }
}

/// Attach the text found in the shape's bounding box.
///
/// Recognition failures leave the text empty.
pub fn associate_text(shape: ShapeRecord, recognizer: &dyn TextRecognizer) -> ShapeRecord {
    let text = recognizer
        .recognize(&shape.bounding_box)
        .map(|t| t.trim().to_string())
        .unwrap_or_default();
    shape.with_text(text)
}

pub fn associate_texts(
    shapes: Vec<ShapeRecord>,
    recognizer: &dyn TextRecognizer,
) -> Vec<ShapeRecord> {
    shapes
        .into_iter()
        .map(|shape| associate_text(shape, recognizer))
        .collect()
}

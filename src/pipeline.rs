use image::DynamicImage;
use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::detection::{self, Preprocessed};
use crate::flowchart::{self, Reconstruction, TextRecognizer};
use crate::models::Primitives;
use crate::render;

/// Debug configuration for pipeline execution
#[derive(Clone, Debug)]
pub struct DebugConfig {
    /// Root directory for debug outputs
    pub output_dir: PathBuf,
    /// Whether debug mode is enabled
    pub enabled: bool,
}

/// Context shared by all pipeline stages
#[derive(Clone, Debug, Default)]
pub struct PipelineContext {
    pub verbose: bool,
    pub debug: Option<DebugConfig>,
}

impl PipelineContext {
    /// Progress message, shown only in verbose mode.
    /// Goes to stderr so stdout stays reserved for the graph.
    pub(crate) fn log(&self, message: impl AsRef<str>) {
        if self.verbose {
            eprintln!("{}", message.as_ref());
        }
    }

    fn debug_dir(&self) -> Option<&Path> {
        self.debug
            .as_ref()
            .filter(|d| d.enabled)
            .map(|d| d.output_dir.as_path())
    }

    /// Save one numbered stage image if debug mode is enabled
    fn save_debug_image(&self, index: usize, name: &str, img: &DynamicImage) -> Result<()> {
        let Some(dir) = self.debug_dir() else {
            return Ok(());
        };

        let filename = format!("{:02}_{}.png", index, name.to_lowercase().replace(' ', "_"));
        img.save(dir.join(&filename))
            .map_err(|e| anyhow::anyhow!("Failed to save debug image: {}", e))?;
        self.log(format!("  Debug: saved {}", filename));

        Ok(())
    }
}

/// Flowchart reconstruction pipeline: preprocessing, primitive detection,
/// then the reconstruction core, strictly in sequence
pub struct Pipeline {
    config: Config,
    context: PipelineContext,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            context: PipelineContext::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn context(&self) -> &PipelineContext {
        &self.context
    }

    /// Enable verbose output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.context.verbose = verbose;
        self
    }

    /// Enable debug mode with output directory
    /// The directory must be empty or non-existent
    pub fn with_debug(mut self, output_dir: PathBuf) -> Result<Self> {
        if output_dir.exists() {
            let entries = std::fs::read_dir(&output_dir)?;
            if entries.count() > 0 {
                return Err(anyhow::anyhow!(
                    "Debug directory is not empty: {}",
                    output_dir.display()
                ));
            }
        } else {
            std::fs::create_dir_all(&output_dir)?;
        }

        self.context.debug = Some(DebugConfig {
            output_dir,
            enabled: true,
        });

        Ok(self)
    }

    /// Preprocess an image and extract contours and segments from it
    pub fn detect(&self, input: &DynamicImage) -> Result<(Preprocessed, Primitives)> {
        self.context.save_debug_image(0, "input", input)?;

        self.context.log("Running step: Preprocessing");
        let preprocessed = detection::preprocess(input, &self.config.detection);
        for (i, (name, img)) in preprocessed.stages().into_iter().enumerate() {
            self.context
                .save_debug_image(i + 1, name, &DynamicImage::ImageLuma8(img.clone()))?;
        }

        self.context.log("Running step: Primitive Detection");
        let primitives = detection::detect_primitives(&preprocessed, &self.config.detection);
        self.context.log(format!(
            "  → {} contours, {} segments",
            primitives.contours.len(),
            primitives.segments.len()
        ));

        Ok((preprocessed, primitives))
    }

    /// Run the reconstruction core on primitives that were detected elsewhere
    pub fn run_primitives(
        &self,
        primitives: &Primitives,
        recognizer: &dyn TextRecognizer,
    ) -> Result<Reconstruction> {
        let reconstruction = flowchart::reconstruct(
            primitives,
            recognizer,
            &self.config.reconstruction,
            &self.context,
        )?;
        Ok(reconstruction)
    }

    /// Run the full pipeline on an image
    pub fn run(&self, input: &DynamicImage, recognizer: &dyn TextRecognizer) -> Result<Reconstruction> {
        let (preprocessed, primitives) = self.detect(input)?;
        let reconstruction = self.run_primitives(&primitives, recognizer)?;

        if self.context.debug_dir().is_some() {
            let overlay = render::draw_overlay(input, &reconstruction);
            let index = preprocessed.stages().len() + 1;
            self.context
                .save_debug_image(index, "overlay", &DynamicImage::ImageRgb8(overlay))?;
        }

        Ok(reconstruction)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

use clap::Parser;
use image::ImageReader;
use std::path::PathBuf;

use flowchart_reader::detection::ocr::{self, OcrsRecognizer};
use flowchart_reader::flowchart::{NoText, SnippetRecognizer};
use flowchart_reader::render;
use flowchart_reader::{Config, Pipeline, Primitives};

#[derive(Parser)]
#[command(name = "flowchart-reader")]
#[command(about = "Reconstruct the node/arrow graph of a flowchart image")]
struct Cli {
    /// Path to input image file
    #[arg(value_name = "IMAGE", required_unless_present = "primitives")]
    image_path: Option<PathBuf>,

    /// Read pre-detected contours, segments and texts from a JSON file instead of an image
    #[arg(long, value_name = "FILE", conflicts_with = "image_path")]
    primitives: Option<PathBuf>,

    /// JSON config file; missing keys keep their defaults
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Minimum contour area for a shape
    #[arg(long)]
    min_shape_area: Option<f64>,

    /// Minimum segment length for an arrow
    #[arg(long)]
    min_arrow_length: Option<f64>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Save intermediate images to directory (must be empty; image input only)
    #[arg(long, value_name = "DIR", conflicts_with = "primitives")]
    debug_out: Option<PathBuf>,

    /// Skip OCR step (nodes get empty text; image input only)
    #[arg(long, conflicts_with = "primitives")]
    skip_ocr: bool,

    /// Save an annotated copy of the input image
    #[arg(long, value_name = "PNG", requires = "image_path")]
    overlay: Option<PathBuf>,

    /// Write the graph to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Pretty-print the JSON graph
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let mut config = match &args.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };
    if let Some(area) = args.min_shape_area {
        config.reconstruction.min_shape_area = area;
    }
    if let Some(length) = args.min_arrow_length {
        config.reconstruction.min_arrow_length = length;
    }

    let mut pipeline = Pipeline::new(config).with_verbose(args.verbose);
    if let Some(debug_dir) = args.debug_out {
        pipeline = pipeline.with_debug(debug_dir)?;
    }

    let reconstruction = if let Some(path) = &args.primitives {
        if args.verbose {
            eprintln!("Loading primitives: {:?}", path);
        }
        let primitives = Primitives::from_json_file(path)?;
        let recognizer = SnippetRecognizer::new(&primitives.texts);
        pipeline.run_primitives(&primitives, &recognizer)?
    } else {
        let image_path = args
            .image_path
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("No input image given"))?;

        if args.verbose {
            eprintln!("Loading image: {:?}", image_path);
        }
        let img = ImageReader::open(image_path)?
            .decode()
            .map_err(|e| anyhow::anyhow!("Failed to decode image: {}", e))?;
        if args.verbose {
            eprintln!("Image loaded: {}x{}\n", img.width(), img.height());
        }

        let reconstruction = if args.skip_ocr {
            pipeline.run(&img, &NoText)?
        } else {
            if args.verbose {
                eprintln!("Initializing OCR engine...");
            }
            let engine = ocr::init_ocr_engine()?;
            pipeline.run(&img, &OcrsRecognizer::new(&engine, &img))?
        };

        if let Some(overlay_path) = &args.overlay {
            render::draw_overlay(&img, &reconstruction)
                .save(overlay_path)
                .map_err(|e| anyhow::anyhow!("Failed to save overlay: {}", e))?;
        }

        reconstruction
    };

    let json = reconstruction.graph.to_json(args.pretty)?;
    match &args.output {
        Some(path) => std::fs::write(path, json)?,
        None => println!("{}", json),
    }

    Ok(())
}

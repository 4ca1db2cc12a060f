pub mod config;
pub mod detection;
pub mod error;
pub mod flowchart;
pub mod geometry;
pub mod models;
pub mod pipeline;
pub mod render;

pub use config::{Config, DetectionConfig, ReconstructionConfig};
pub use error::{FlowchartError, Result};
pub use flowchart::{Reconstruction, reconstruct};
pub use models::{
    ArrowRecord, BoundingBox, Connection, ConnectionKind, FlowchartGraph, LineSegment, Node,
    NodeId, Point, Primitives, RawContour, ShapeKind, ShapeRecord, TextSnippet,
};
pub use pipeline::{DebugConfig, Pipeline, PipelineContext};

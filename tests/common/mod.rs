#![allow(dead_code)]

mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from flowchart_reader for tests
pub use flowchart_reader::{
    BoundingBox, Connection, ConnectionKind, FlowchartGraph, Node, Point, Primitives,
    RawContour, ReconstructionConfig, ShapeKind, TextSnippet,
};

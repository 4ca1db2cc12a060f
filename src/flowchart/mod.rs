//! Flowchart reconstruction from detected primitives.
//!
//! Each stage takes the previous stage's output by value and returns a new
//! value: contours become shape records, shape records gain text, segments
//! become arrows, and both halves are assembled into a [`FlowchartGraph`].

pub mod arrows;
pub mod graph;
pub mod index;
pub mod shapes;
pub mod text;

pub use arrows::{EndPointTip, TipPolicy, resolve_arrow, resolve_arrows};
pub use graph::{build_connections, build_graph, build_nodes};
pub use index::NodeIndex;
pub use shapes::{classify_shape, extract_shape, extract_shapes};
pub use text::{NoText, SnippetRecognizer, TextRecognizer, associate_text, associate_texts};

use crate::config::ReconstructionConfig;
use crate::error::Result;
use crate::models::{ArrowRecord, FlowchartGraph, Primitives};
use crate::pipeline::PipelineContext;

/// Output of one reconstruction pass
#[derive(Debug, Clone, Default)]
pub struct Reconstruction {
    pub graph: FlowchartGraph,
    /// Arrows that survived the length filter, kept for rendering
    pub arrows: Vec<ArrowRecord>,
}

/// Run the whole core over one set of primitives.
///
/// Stage progress is reported through `context` and only in verbose mode.
pub fn reconstruct(
    primitives: &Primitives,
    recognizer: &dyn TextRecognizer,
    config: &ReconstructionConfig,
    context: &PipelineContext,
) -> Result<Reconstruction> {
    context.log(format!(
        "Running step: Shape Extraction (processing {} contours)",
        primitives.contours.len()
    ));
    let shapes = extract_shapes(&primitives.contours, config)?;
    context.log(format!("  → {} shapes", shapes.len()));
    for (i, shape) in shapes.iter().enumerate() {
        context.log(format!(
            "  Shape {}: {} with {} vertices, area={:.1}, centroid=({:.1}, {:.1})",
            i,
            shape.kind,
            shape.polygon.len(),
            shape.area,
            shape.centroid.x,
            shape.centroid.y
        ));
    }

    context.log("Running step: Text Association");
    let shapes = associate_texts(shapes, recognizer);

    context.log(format!(
        "Running step: Arrow Resolution (processing {} segments)",
        primitives.segments.len()
    ));
    let arrows = resolve_arrows(&primitives.segments, &EndPointTip, config);
    context.log(format!("  → {} arrows", arrows.len()));

    context.log("Running step: Graph Assembly");
    let graph = build_graph(shapes, &arrows);
    context.log(format!(
        "  → {} nodes, {} connections",
        graph.nodes.len(),
        graph.connections.len()
    ));

    Ok(Reconstruction { graph, arrows })
}

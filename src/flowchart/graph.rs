use crate::flowchart::index::NodeIndex;
use crate::models::{
    ArrowRecord, Connection, ConnectionKind, FlowchartGraph, Node, ShapeRecord,
};

/// One node per shape; ids follow detection order starting at 0
pub fn build_nodes(shapes: Vec<ShapeRecord>) -> Vec<Node> {
    shapes
        .into_iter()
        .enumerate()
        .map(|(id, shape)| Node {
            id,
            kind: shape.kind,
            text: shape.text,
            position: shape.centroid,
            bounding_box: shape.bounding_box,
        })
        .collect()
}

/// Link the nodes nearest to each arrow's start and end.
///
/// Every arrow yields exactly one connection; self-loops and parallel
/// connections are kept.
pub fn build_connections(nodes: &[Node], arrows: &[ArrowRecord]) -> Vec<Connection> {
    let index = NodeIndex::new(nodes);
    if index.is_empty() {
        return Vec::new();
    }

    arrows
        .iter()
        .filter_map(|arrow| {
            let (from, _) = index.query(&arrow.start)?;
            let (to, _) = index.query(&arrow.end)?;
            Some(Connection {
                from,
                to,
                kind: ConnectionKind::Arrow,
            })
        })
        .collect()
}

pub fn build_graph(shapes: Vec<ShapeRecord>, arrows: &[ArrowRecord]) -> FlowchartGraph {
    let nodes = build_nodes(shapes);
    let connections = build_connections(&nodes, arrows);
    FlowchartGraph { nodes, connections }
}

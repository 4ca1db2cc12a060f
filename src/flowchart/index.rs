use crate::models::{Node, NodeId, Point};

/// Nearest-neighbour lookup over node centroids.
///
/// A linear scan; flowcharts hold tens of nodes, not thousands.
#[derive(Debug, Clone)]
pub struct NodeIndex {
    positions: Vec<Point>,
}

impl NodeIndex {
    pub fn new(nodes: &[Node]) -> Self {
        Self {
            positions: nodes.iter().map(|n| n.position).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Closest node to `point` and its distance; on a tie the lowest id wins
    pub fn query(&self, point: &Point) -> Option<(NodeId, f64)> {
        let mut best: Option<(NodeId, f64)> = None;
        for (id, position) in self.positions.iter().enumerate() {
            let distance = position.distance(point);
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((id, distance)),
            }
        }
        best
    }
}

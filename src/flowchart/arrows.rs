use crate::config::ReconstructionConfig;
use crate::models::{ArrowRecord, LineSegment, Point};

/// Decides which point of a segment is the arrow head
pub trait TipPolicy {
    fn find_tip(&self, segment: &LineSegment) -> Point;
}

/// Treats the end of every segment as the head; no head geometry is inspected
#[derive(Debug, Clone, Copy, Default)]
pub struct EndPointTip;

impl TipPolicy for EndPointTip {
    fn find_tip(&self, segment: &LineSegment) -> Point {
        segment.end
    }
}

/// Resolve one segment into an arrow, or `None` when it is too short
pub fn resolve_arrow(
    segment: &LineSegment,
    policy: &dyn TipPolicy,
    config: &ReconstructionConfig,
) -> Option<ArrowRecord> {
    if segment.length() <= config.min_arrow_length {
        return None;
    }

    Some(ArrowRecord {
        start: segment.start,
        end: segment.end,
        tip: policy.find_tip(segment),
    })
}

pub fn resolve_arrows(
    segments: &[LineSegment],
    policy: &dyn TipPolicy,
    config: &ReconstructionConfig,
) -> Vec<ArrowRecord> {
    segments
        .iter()
        .filter_map(|s| resolve_arrow(s, policy, config))
        .collect()
}

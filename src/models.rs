use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::geometry;

/// A point in image coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// Axis-aligned bounding box, serialized as `[x, y, width, height]`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Smallest box enclosing all points, or `None` for an empty slice
    pub fn enclosing(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Self::new(min_x, min_y, max_x - min_x, max_y - min_y))
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Inclusive containment test
    pub fn contains(&self, p: &Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }
}

impl From<[f64; 4]> for BoundingBox {
    fn from([x, y, width, height]: [f64; 4]) -> Self {
        Self { x, y, width, height }
    }
}

impl From<BoundingBox> for [f64; 4] {
    fn from(b: BoundingBox) -> Self {
        [b.x, b.y, b.width, b.height]
    }
}

/// Closed boundary as reported by the geometry collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawContour {
    pub points: Vec<Point>,
    /// Raw area reported by the detector; computed from the points when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
}

impl RawContour {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points, area: None }
    }

    pub fn with_area(mut self, area: f64) -> Self {
        self.area = Some(area);
        self
    }

    pub fn area(&self) -> f64 {
        self.area.unwrap_or_else(|| geometry::signed_area(&self.points).abs())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
}

impl LineSegment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }
}

/// Text already recognized somewhere in the image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSnippet {
    pub position: Point,
    pub text: String,
}

/// Everything the geometry collaborator hands to the reconstruction core
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Primitives {
    #[serde(default)]
    pub contours: Vec<RawContour>,
    #[serde(default)]
    pub segments: Vec<LineSegment>,
    #[serde(default)]
    pub texts: Vec<TextSnippet>,
}

impl Primitives {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Triangle,
    Rectangle,
    Diamond,
    Pentagon,
    Circle,
    Polygon,
}

impl ShapeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Triangle => "triangle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Diamond => "diamond",
            ShapeKind::Pentagon => "pentagon",
            ShapeKind::Circle => "circle",
            ShapeKind::Polygon => "polygon",
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A detected shape before it becomes a graph node
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeRecord {
    /// Simplified polygon
    pub polygon: Vec<Point>,
    /// Bounding box of the raw contour
    pub bounding_box: BoundingBox,
    pub centroid: Point,
    pub area: f64,
    pub kind: ShapeKind,
    pub text: String,
}

impl ShapeRecord {
    pub fn with_text(self, text: String) -> Self {
        Self { text, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowRecord {
    pub start: Point,
    pub end: Point,
    pub tip: Point,
}

pub type NodeId = usize;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    pub text: String,
    pub position: Point,
    pub bounding_box: BoundingBox,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionKind {
    Arrow,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub from: NodeId,
    pub to: NodeId,
    #[serde(rename = "type")]
    pub kind: ConnectionKind,
}

/// The reconstructed flowchart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowchartGraph {
    pub nodes: Vec<Node>,
    pub connections: Vec<Connection>,
}

impl FlowchartGraph {
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

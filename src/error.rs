use thiserror::Error;

pub type Result<T> = std::result::Result<T, FlowchartError>;

#[derive(Debug, Error)]
pub enum FlowchartError {
    /// A contour with fewer than 3 points cannot describe a shape
    #[error("invalid contour #{index}: expected at least 3 points, got {points}")]
    InvalidContour { index: usize, points: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

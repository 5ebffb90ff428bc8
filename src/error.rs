use crate::surface::ShapeId;

pub type Result<T, E = ChartError> = std::result::Result<T, E>;

/// Errors surfaced before anything is drawn.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("invalid chart configuration: {0}")]
    Configuration(String),

    #[error("invalid color {0:?}")]
    Color(String),

    #[error("failed to parse chart config")]
    Json(#[from] serde_json::Error),

    #[error("no shape with id {0:?} on this surface")]
    UnknownShape(ShapeId),
}

impl ChartError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}

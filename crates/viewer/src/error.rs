use thiserror::Error;

/// Errors surfaced at the viewer boundary.
///
/// Per-panel work is total; only mounting and host-provided JSON can fail.
#[derive(Debug, Error)]
pub enum ViewerError {
    /// The render surface (GPU context, canvas, ...) could not be acquired.
    #[error("render surface unavailable: {0}")]
    SurfaceUnavailable(String),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

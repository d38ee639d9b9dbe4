use thiserror::Error;

/// Failures the engine can report. Everything on the per-tick path is
/// infallible; only building a world or loading settings can fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorldError {
    #[error("world dimensions must be positive (rows={rows}, cols={cols})")]
    InvalidDimensions { rows: u32, cols: u32 },

    #[error("invalid simulation config: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for WorldError {
    fn from(err: serde_json::Error) -> Self {
        WorldError::InvalidConfig(err.to_string())
    }
}

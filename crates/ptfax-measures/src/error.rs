use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum MeasureError {
    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    #[error("measurement row not found: {0}")]
    RowNotFound(Uuid),
}

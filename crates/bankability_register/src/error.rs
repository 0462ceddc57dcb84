use bankability_core::{PolicyError, QuantifyError};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum RegisterError {
    #[error("risk {0} not found")]
    NotFound(Uuid),
    #[error("risk title must not be empty")]
    EmptyTitle,
    #[error(transparent)]
    Quantify(#[from] QuantifyError),
    #[error("invalid quantification policy: {0}")]
    Policy(#[from] PolicyError),
    #[error("malformed risk document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("export write failed: {0}")]
    Io(#[from] std::io::Error),
}

use crate::model::FarmerId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FarmdeskError {
    #[error("Please fill all required fields ({})", .missing.join(", "))]
    Validation { missing: Vec<&'static str> },

    #[error("Farmer not found: {0}")]
    FarmerNotFound(FarmerId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl FarmdeskError {
    /// True when the submitting form should re-prompt instead of giving up.
    pub fn is_recoverable_by_form(&self) -> bool {
        matches!(self, FarmdeskError::Validation { .. })
    }
}

pub type Result<T> = std::result::Result<T, FarmdeskError>;

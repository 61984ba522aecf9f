use thiserror::Error;

use crate::config::Dial;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown policy '{key}'")]
    UnknownPolicy { key: String },

    #[error("Unknown checklist action '{key}'")]
    UnknownAction { key: String },

    #[error("Dial '{dial:?}' is misconfigured: {reason}")]
    InvalidDial { dial: Dial, reason: String },

    #[error("Dial '{dial:?}' is missing from the configuration")]
    MissingDial { dial: Dial },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SimResult<T> = Result<T, SimError>;

//! Error types for ctprobe-fetch.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to open session: {0}")]
    Init(String),

    #[error("transfer failed: {0}")]
    Transfer(String),

    #[error("no URL configured on session")]
    MissingUrl,

    #[error("content type queried before a transfer completed")]
    NotPerformed,
}

#[cfg(feature = "reqwest")]
impl From<crate::effects::ClientSettingError> for FetchError {
    fn from(e: crate::effects::ClientSettingError) -> Self { FetchError::Init(e.to_string()) }
}

pub type Result<T> = std::result::Result<T, FetchError>;

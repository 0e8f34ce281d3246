//! Custom error types for the recommendation pipeline
//!
//! Provides structured, typed errors instead of generic Box<dyn Error>

use thiserror::Error;

/// Top-level pipeline errors. Each request terminates on the first of these;
/// there is no retry logic anywhere in the pipeline.
#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("No price data available for {ticker}")]
    DataUnavailable { ticker: String },

    #[error("OpenAI API quota exceeded. Please check your account balance and billing details.")]
    QuotaExceeded,

    #[error("Analysis failed: {0}")]
    Backend(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed provider response: {0}")]
    Provider(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AdvisorResult<T> = Result<T, AdvisorError>;

impl From<serde_json::Error> for AdvisorError {
    fn from(err: serde_json::Error) -> Self {
        AdvisorError::Provider(err.to_string())
    }
}

/// True when the user should be pointed at billing rather than retrying.
pub fn is_quota_error(err: &AdvisorError) -> bool {
    matches!(err, AdvisorError::QuotaExceeded)
}

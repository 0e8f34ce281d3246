//! TradeAdvisor - AI-powered investment recommendation pipeline
//!
//! Fetches market data and macro indicators, derives volatility and trailing
//! return features, and asks an OpenAI-compatible backend for a single trade
//! recommendation rendered as a fixed-width report.

pub mod cli;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod features;
pub mod llm;
pub mod services;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{AdvisorError, AdvisorResult};
pub use services::advisor::Advisor;
pub use services::prompt::RecommendationRequest;

#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod features_tests;

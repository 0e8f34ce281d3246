use serde::Deserialize;
use std::env;
use std::fs;

use crate::constants::{llm, provider};

#[derive(Clone, Debug, Deserialize)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MarketConfig {
    #[serde(default = "default_market_base_url")]
    pub base_url: String,
    #[serde(default = "default_history_range")]
    pub history_range: String,
    #[serde(default = "default_history_interval")]
    pub history_interval: String,
    #[serde(default = "default_macro_range")]
    pub macro_range: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub market: MarketConfig,
}

fn default_model() -> String {
    llm::DEFAULT_MODEL.to_string()
}

fn default_max_tokens() -> u32 {
    llm::MAX_TOKENS
}

fn default_temperature() -> f32 {
    llm::TEMPERATURE
}

fn default_market_base_url() -> String {
    provider::DEFAULT_BASE_URL.to_string()
}

fn default_history_range() -> String {
    provider::HISTORY_RANGE.to_string()
}

fn default_history_interval() -> String {
    provider::HISTORY_INTERVAL.to_string()
}

fn default_macro_range() -> String {
    provider::MACRO_RANGE.to_string()
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            base_url: default_market_base_url(),
            history_range: default_history_range(),
            history_interval: default_history_interval(),
            macro_range: default_macro_range(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            llm: LlmConfig::default(),
            market: MarketConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load config.yaml when present, otherwise fall back to defaults.
    /// OPENAI_API_KEY always wins over the file so credentials stay
    /// out of checked-in config.
    pub fn load() -> Self {
        let mut config = match fs::read_to_string("config.yaml") {
            Ok(content) => {
                // Strip BOM if present
                let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
                serde_yaml::from_str(content).expect("Failed to parse config.yaml")
            }
            Err(_) => AppConfig::default(),
        };

        if let Ok(key) = env::var("OPENAI_API_KEY") {
            config.llm.api_key = Some(key);
        }

        config
    }
}

//! Unit tests for configuration structures and parsing.

#[cfg(test)]
mod config_tests {
    use crate::config::*;
    use crate::constants::{llm, provider};

    // ============= Default Tests =============

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.llm.model, llm::DEFAULT_MODEL);
        assert_eq!(config.llm.max_tokens, llm::MAX_TOKENS);
        assert_eq!(config.llm.temperature, llm::TEMPERATURE);
        assert!(config.llm.api_key.is_none());
        assert!(config.llm.base_url.is_none());
        assert_eq!(config.market.base_url, provider::DEFAULT_BASE_URL);
        assert_eq!(config.market.history_range, "3mo");
        assert_eq!(config.market.history_interval, "1d");
        assert_eq!(config.market.macro_range, "5d");
    }

    // ============= Deserialize Tests =============

    #[test]
    fn test_llm_config_deserialize() {
        let yaml = r#"
api_key: "sk-test"
base_url: "http://localhost:8080/v1"
model: "gpt-4o-mini"
max_tokens: 600
temperature: 0.3
"#;
        let config: LlmConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:8080/v1"));
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.max_tokens, 600);
        assert_eq!(config.temperature, 0.3);
    }

    #[test]
    fn test_llm_config_deserialize_fills_defaults() {
        let yaml = "api_key: \"sk-test\"\n";
        let config: LlmConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.model, llm::DEFAULT_MODEL);
        assert_eq!(config.max_tokens, llm::MAX_TOKENS);
    }

    #[test]
    fn test_market_config_deserialize() {
        let yaml = r#"
base_url: "http://localhost:9000"
history_range: "6mo"
history_interval: "1h"
macro_range: "1mo"
"#;
        let config: MarketConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.history_range, "6mo");
        assert_eq!(config.history_interval, "1h");
        assert_eq!(config.macro_range, "1mo");
    }

    #[test]
    fn test_app_config_deserialize_partial() {
        let yaml = r#"
llm:
  model: "gpt-4o"
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.llm.model, "gpt-4o");
        assert_eq!(config.market.base_url, provider::DEFAULT_BASE_URL);
    }

    #[test]
    fn test_app_config_deserialize_empty_mapping() {
        let config: AppConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.llm.model, llm::DEFAULT_MODEL);
    }
}

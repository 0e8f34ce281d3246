//! Application-wide constants and magic numbers
//!
//! This module centralizes all hardcoded values to improve maintainability
//! and make the codebase easier to tune.

/// Feature derivation constants
pub mod analysis {
    /// Trading days per year, used to annualize daily volatility
    pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

    /// Lookback window (observations) for the trailing return
    pub const TRAILING_RETURN_WINDOW: usize = 20;

    /// Minimum observations needed to compute a return series
    pub const MIN_VOLATILITY_OBSERVATIONS: usize = 2;
}

/// Market data provider constants
pub mod provider {
    /// Default Yahoo Finance query host
    pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

    /// Price history lookback for feature derivation
    pub const HISTORY_RANGE: &str = "3mo";

    /// Daily bars
    pub const HISTORY_INTERVAL: &str = "1d";

    /// Trailing window for macro indicator fetches
    pub const MACRO_RANGE: &str = "5d";

    /// 10-year treasury yield proxy
    pub const TREASURY_10Y_SYMBOL: &str = "^TNX";

    /// CBOE volatility index
    pub const VIX_SYMBOL: &str = "^VIX";

    /// Yahoo rejects requests without a browser-like user agent
    pub const USER_AGENT: &str =
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
}

/// Text-generation backend constants
pub mod llm {
    /// Default chat completion model
    pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

    /// Bounded output length for the recommendation body
    pub const MAX_TOKENS: u32 = 400;

    /// Low temperature for consistent, factual analysis
    pub const TEMPERATURE: f32 = 0.1;
}

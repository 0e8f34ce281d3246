//! Statistical features derived from a price series.

use crate::constants::analysis;
use crate::data::types::PricePoint;

/// Standard deviation of day-over-day percentage returns, annualized by
/// sqrt(252). Fewer than 2 observations yields 0.0 by policy.
pub fn annualized_volatility(history: &[PricePoint]) -> f64 {
    if history.len() < analysis::MIN_VOLATILITY_OBSERVATIONS {
        return 0.0;
    }

    let returns: Vec<f64> = history
        .windows(2)
        .filter(|w| w[0].close != 0.0)
        .map(|w| (w[1].close - w[0].close) / w[0].close)
        .collect();

    if returns.is_empty() {
        return 0.0;
    }

    let mean = returns.iter().sum::<f64>() / returns.len() as f64;
    let variance =
        returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / returns.len() as f64;

    variance.sqrt() * analysis::TRADING_DAYS_PER_YEAR.sqrt()
}

/// Return over the trailing 20 observations:
/// (latest close - close 20 back) / close 20 back.
/// Fewer than 20 observations yields 0.0 by policy.
pub fn trailing_return(history: &[PricePoint]) -> f64 {
    let window = analysis::TRAILING_RETURN_WINDOW;
    if history.len() < window {
        return 0.0;
    }

    let latest = history[history.len() - 1].close;
    let base = history[history.len() - window].close;
    if base == 0.0 {
        return 0.0;
    }

    (latest - base) / base
}

/// Derived features bundled for prompt assembly.
#[derive(Clone, Copy, Debug, Default)]
pub struct Features {
    pub volatility: f64,
    pub trailing_return: f64,
}

impl Features {
    pub fn derive(history: &[PricePoint]) -> Self {
        Self {
            volatility: annualized_volatility(history),
            trailing_return: trailing_return(history),
        }
    }
}

//! Market data types shared across the pipeline.
//!
//! Everything here is ephemeral: fetched fresh per request, used once to build
//! a prompt and a report, then discarded. Nothing is persisted.

use serde::{Deserialize, Serialize};

/// Latest quote fields for a ticker. Anything beyond the price is
/// best-effort and degrades to None rather than failing the fetch.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Quote {
    pub ticker: String,
    pub price: f64,
    pub pe_ratio: Option<f64>,
    pub sector: Option<String>,
    pub market_cap: Option<f64>,
    pub beta: Option<f64>,
    pub dividend_yield: Option<f64>,
}

/// One daily close observation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Unix epoch seconds
    pub timestamp: i64,
    pub close: f64,
}

/// A single options contract as reported by the provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OptionContract {
    pub strike: f64,
    pub last_price: f64,
    pub volume: Option<u64>,
    pub open_interest: Option<u64>,
}

/// Nearest-expiry at-the-money call and put. Empty when the options fetch
/// failed or the chain had no contracts; the pipeline continues either way.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct OptionsSnapshot {
    /// Expiry date as reported by the provider (e.g. "2026-09-18")
    pub expiry: Option<String>,
    pub atm_call: Option<OptionContract>,
    pub atm_put: Option<OptionContract>,
}

impl OptionsSnapshot {
    pub fn is_empty(&self) -> bool {
        self.atm_call.is_none() && self.atm_put.is_none()
    }
}

/// Macro indicator values. Either instrument may be unavailable without
/// affecting the other.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MacroSnapshot {
    pub treasury_10y: Option<f64>,
    pub vix: Option<f64>,
    /// Observation date, YYYY-MM-DD
    pub date: String,
}

/// Everything the market-data fetch produces for one ticker.
#[derive(Clone, Debug)]
pub struct MarketSnapshot {
    pub quote: Quote,
    pub history: Vec<PricePoint>,
    pub options: OptionsSnapshot,
}

/// Pick the contract whose strike is closest to the current price.
/// Ties keep the earlier contract in provider order.
pub fn select_atm(contracts: &[OptionContract], current_price: f64) -> Option<OptionContract> {
    let mut best: Option<&OptionContract> = None;
    for contract in contracts {
        let dist = (contract.strike - current_price).abs();
        match best {
            Some(b) if dist >= (b.strike - current_price).abs() => {}
            _ => best = Some(contract),
        }
    }
    best.cloned()
}

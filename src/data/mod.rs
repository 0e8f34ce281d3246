pub mod types;
pub mod yahoo;


use async_trait::async_trait;

use crate::error::AdvisorResult;
use types::{MacroSnapshot, MarketSnapshot};

/// Seam between the pipeline and the market-data provider so tests can
/// substitute fixed data for the live client.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Quote, 3-month price history, and best-effort options snapshot for
    /// one ticker. Fails only when the symbol has no price history.
    async fn market_snapshot(&self, ticker: &str) -> AdvisorResult<MarketSnapshot>;

    /// Fixed macro instruments (10Y treasury proxy, VIX). Never fails;
    /// an instrument that cannot be fetched is simply None.
    async fn macro_snapshot(&self) -> MacroSnapshot;
}

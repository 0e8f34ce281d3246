//! Yahoo Finance client.
//!
//! Two endpoints are used: the chart endpoint for daily close history
//! (also covering the macro instruments) and the options endpoint for the
//! nearest-expiry chain plus supplemental quote fields. Options data is
//! best-effort everywhere; only a missing price history is fatal.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use tracing::{info, warn};

use crate::config::MarketConfig;
use crate::constants::provider;
use crate::data::types::{
    select_atm, MacroSnapshot, MarketSnapshot, OptionContract, OptionsSnapshot, PricePoint, Quote,
};
use crate::data::MarketDataProvider;
use crate::error::{AdvisorError, AdvisorResult};

#[derive(Clone)]
pub struct YahooClient {
    client: Client,
    config: MarketConfig,
}

// ============= Chart endpoint payload =============

#[derive(Deserialize, Debug)]
struct ChartResponse {
    chart: ChartEnvelope,
}

#[derive(Deserialize, Debug)]
struct ChartEnvelope {
    result: Option<Vec<ChartResult>>,
}

#[derive(Deserialize, Debug)]
struct ChartResult {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: ChartIndicators,
}

#[derive(Deserialize, Debug)]
struct ChartIndicators {
    quote: Vec<ChartQuote>,
}

#[derive(Deserialize, Debug)]
struct ChartQuote {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

// ============= Options endpoint payload =============

#[derive(Deserialize, Debug)]
struct OptionsResponse {
    #[serde(rename = "optionChain")]
    option_chain: OptionChainEnvelope,
}

#[derive(Deserialize, Debug)]
struct OptionChainEnvelope {
    result: Option<Vec<OptionChainResult>>,
}

#[derive(Deserialize, Debug)]
struct OptionChainResult {
    quote: Option<ProviderQuote>,
    #[serde(default)]
    options: Vec<OptionPeriod>,
}

#[derive(Deserialize, Debug, Default)]
struct ProviderQuote {
    #[serde(rename = "trailingPE")]
    trailing_pe: Option<f64>,
    #[serde(rename = "forwardPE")]
    forward_pe: Option<f64>,
    #[serde(rename = "marketCap")]
    market_cap: Option<f64>,
    beta: Option<f64>,
    sector: Option<String>,
    #[serde(rename = "trailingAnnualDividendYield")]
    dividend_yield: Option<f64>,
}

#[derive(Deserialize, Debug)]
struct OptionPeriod {
    #[serde(rename = "expirationDate")]
    expiration_date: i64,
    #[serde(default)]
    calls: Vec<ProviderContract>,
    #[serde(default)]
    puts: Vec<ProviderContract>,
}

#[derive(Deserialize, Debug)]
struct ProviderContract {
    strike: f64,
    #[serde(rename = "lastPrice", default)]
    last_price: f64,
    #[serde(default)]
    volume: Option<u64>,
    #[serde(rename = "openInterest", default)]
    open_interest: Option<u64>,
}

impl YahooClient {
    pub fn new(config: MarketConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Daily close history over the given range. Null closes (holidays,
    /// partial sessions) are dropped.
    pub async fn get_price_history(
        &self,
        symbol: &str,
        range: &str,
    ) -> AdvisorResult<Vec<PricePoint>> {
        let url = format!(
            "{}/v8/finance/chart/{}?range={}&interval={}",
            self.config.base_url, symbol, range, self.config.history_interval
        );
        let resp = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, provider::USER_AGENT)
            .send()
            .await?;

        let payload: ChartResponse = resp.json().await?;
        let result = payload
            .chart
            .result
            .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) })
            .ok_or_else(|| AdvisorError::DataUnavailable {
                ticker: symbol.to_string(),
            })?;

        let closes = result
            .indicators
            .quote
            .first()
            .map(|q| q.close.clone())
            .unwrap_or_default();

        let history: Vec<PricePoint> = result
            .timestamp
            .iter()
            .zip(closes.iter())
            .filter_map(|(ts, close)| {
                close.map(|c| PricePoint {
                    timestamp: *ts,
                    close: c,
                })
            })
            .collect();

        Ok(history)
    }

    /// Nearest-expiry options chain plus the supplemental quote fields the
    /// provider bundles with it.
    async fn get_option_chain(
        &self,
        symbol: &str,
    ) -> AdvisorResult<(Option<ProviderQuote>, Option<OptionPeriod>)> {
        let url = format!("{}/v7/finance/options/{}", self.config.base_url, symbol);
        let resp = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, provider::USER_AGENT)
            .send()
            .await?;

        let payload: OptionsResponse = resp.json().await?;
        let mut result = payload
            .option_chain
            .result
            .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) })
            .ok_or_else(|| AdvisorError::Provider(format!("empty option chain for {}", symbol)))?;

        // Provider lists periods in expiry order; the first is the nearest.
        let nearest = if result.options.is_empty() {
            None
        } else {
            Some(result.options.remove(0))
        };

        Ok((result.quote.take(), nearest))
    }

    /// Most recent close for one macro instrument over the trailing window.
    async fn get_last_close(&self, symbol: &str) -> AdvisorResult<f64> {
        let history = self
            .get_price_history(symbol, &self.config.macro_range)
            .await?;
        history
            .last()
            .map(|p| p.close)
            .ok_or_else(|| AdvisorError::DataUnavailable {
                ticker: symbol.to_string(),
            })
    }

    fn build_options_snapshot(period: OptionPeriod, current_price: f64) -> OptionsSnapshot {
        let expiry = chrono::DateTime::from_timestamp(period.expiration_date, 0)
            .map(|dt| dt.format("%Y-%m-%d").to_string());

        let calls: Vec<OptionContract> = period.calls.into_iter().map(Into::into).collect();
        let puts: Vec<OptionContract> = period.puts.into_iter().map(Into::into).collect();

        OptionsSnapshot {
            expiry,
            atm_call: select_atm(&calls, current_price),
            atm_put: select_atm(&puts, current_price),
        }
    }
}

impl From<ProviderContract> for OptionContract {
    fn from(c: ProviderContract) -> Self {
        OptionContract {
            strike: c.strike,
            last_price: c.last_price,
            volume: c.volume,
            open_interest: c.open_interest,
        }
    }
}

#[async_trait]
impl MarketDataProvider for YahooClient {
    async fn market_snapshot(&self, ticker: &str) -> AdvisorResult<MarketSnapshot> {
        let ticker = ticker.to_uppercase();

        let history = self
            .get_price_history(&ticker, &self.config.history_range)
            .await?;
        let current_price = history
            .last()
            .map(|p| p.close)
            .ok_or_else(|| AdvisorError::DataUnavailable {
                ticker: ticker.clone(),
            })?;

        info!(
            "📊 {}: {} observations, latest close ${:.2}",
            ticker,
            history.len(),
            current_price
        );

        // Options are best-effort. Any failure degrades to an empty snapshot.
        let (provider_quote, options) = match self.get_option_chain(&ticker).await {
            Ok((quote, Some(period))) => {
                let snapshot = Self::build_options_snapshot(period, current_price);
                if snapshot.is_empty() {
                    warn!("Options data unavailable for {}: chain had no contracts", ticker);
                }
                (quote.unwrap_or_default(), snapshot)
            }
            Ok((quote, None)) => {
                warn!("Options data unavailable for {}: no contracts listed", ticker);
                (quote.unwrap_or_default(), OptionsSnapshot::default())
            }
            Err(e) => {
                warn!("Options data unavailable for {}: {}", ticker, e);
                (ProviderQuote::default(), OptionsSnapshot::default())
            }
        };

        let quote = Quote {
            ticker: ticker.clone(),
            price: current_price,
            pe_ratio: provider_quote.forward_pe.or(provider_quote.trailing_pe),
            sector: provider_quote.sector,
            market_cap: provider_quote.market_cap,
            beta: provider_quote.beta,
            dividend_yield: provider_quote.dividend_yield,
        };

        Ok(MarketSnapshot {
            quote,
            history,
            options,
        })
    }

    async fn macro_snapshot(&self) -> MacroSnapshot {
        let treasury_10y = match self.get_last_close(provider::TREASURY_10Y_SYMBOL).await {
            Ok(v) => Some(v),
            Err(e) => {
                warn!("Could not fetch 10Y treasury rate: {}", e);
                None
            }
        };

        let vix = match self.get_last_close(provider::VIX_SYMBOL).await {
            Ok(v) => Some(v),
            Err(e) => {
                warn!("Could not fetch VIX: {}", e);
                None
            }
        };

        MacroSnapshot {
            treasury_10y,
            vix,
            date: Utc::now().format("%Y-%m-%d").to_string(),
        }
    }
}

//! Prompt assembly for the recommendation backend.
//!
//! Renders fetched market data, derived features, and the caller's risk
//! constraints into one bounded instruction string. The output schema below
//! is asserted via instruction text only; the backend's response is treated
//! as opaque and never parsed against it.

use chrono::Utc;

use crate::data::types::{MacroSnapshot, MarketSnapshot, OptionContract};
use crate::features::Features;

/// Caller-supplied parameters for one recommendation.
/// Validated by the caller before it gets here.
#[derive(Clone, Debug)]
pub struct RecommendationRequest {
    pub ticker: String,
    /// Free text, e.g. "1 month"
    pub time_horizon: String,
    pub capital: f64,
    /// Percent of capital, 0-100
    pub max_loss_pct: f64,
}

impl RecommendationRequest {
    /// Maximum permissible loss in dollars: capital * max_loss_pct / 100.
    pub fn max_loss_amount(&self) -> f64 {
        self.capital * (self.max_loss_pct / 100.0)
    }
}

pub const SYSTEM_PROMPT: &str = "You are an expert quantitative analyst providing specific, \
actionable trade recommendations with precise risk management.";

/// Dollar amount with thousands separators and no cents, e.g. "$10,000".
pub fn format_usd(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if rounded < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

fn fmt_ratio(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| format!("{:.2}", v))
}

fn fmt_pct(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

fn contract_line(kind: &str, contract: &OptionContract, expiry: &str) -> String {
    format!(
        "ATM {} ({}): Strike ${}, Price ${}, Volume {}",
        kind,
        expiry,
        contract.strike,
        contract.last_price,
        contract.volume.unwrap_or(0)
    )
}

/// One line per ATM contract the provider returned; the unavailable
/// placeholder only when there were none at all.
fn options_section(snapshot: &MarketSnapshot) -> String {
    let expiry = snapshot.options.expiry.as_deref().unwrap_or("unknown expiry");

    let mut lines = Vec::new();
    if let Some(call) = &snapshot.options.atm_call {
        lines.push(contract_line("Call", call, expiry));
    }
    if let Some(put) = &snapshot.options.atm_put {
        lines.push(contract_line("Put", put, expiry));
    }

    if lines.is_empty() {
        "Options data unavailable".to_string()
    } else {
        lines.join("\n")
    }
}

/// Render the full user prompt for one recommendation request.
pub fn build_prompt(
    snapshot: &MarketSnapshot,
    features: &Features,
    macros: &MacroSnapshot,
    request: &RecommendationRequest,
) -> String {
    let quote = &snapshot.quote;
    let max_loss = request.max_loss_amount();

    let treasury = macros
        .treasury_10y
        .map_or_else(|| "N/A".to_string(), |v| format!("{:.2}%", v));
    let vix = macros
        .vix
        .map_or_else(|| "N/A".to_string(), |v| format!("{:.1}", v));

    let options = options_section(snapshot);

    format!(
        r#"As a professional investment analyst, provide ONE specific trade recommendation based on this data:

STOCK DATA (as of {date}):
- {ticker}: ${price:.2}
- P/E Ratio: {pe}
- Beta: {beta}
- Sector: {sector}
- Annualized Volatility: {volatility}
- 20-day Return: {trailing}

OPTIONS DATA:
{options}

MACRO CONDITIONS:
- 10Y Treasury: {treasury}
- VIX: {vix}

CONSTRAINTS:
- Time Horizon: {horizon}
- Available Capital: {capital}
- Maximum Loss Limit: {max_loss_pct}% ({max_loss})

POSITION SIZING GUIDANCE:
- For OPTIONS: Maximum position size should utilize significant portion of loss tolerance (aim for 60-80% of max loss for high-conviction trades)
- For STOCKS: Position size based on stop-loss distance from entry price
- ALWAYS ensure maximum possible loss <= {max_loss}

Provide EXACTLY ONE trade recommendation in this format:

RECOMMENDATION:
Trade Type: [Stock/Call Option/Put Option]
Ticker: {ticker}
Strike/Expiry: [If option]
Entry Price Target: $[X.XX]
Position Size: [Shares/Contracts]
Total Investment: $[Amount]

EXIT STRATEGY:
Profit Target: $[Price] ([X]% gain)
Stop Loss: $[Price] ([X]% loss)
Time-based Exit: [Conditions]

RATIONALE:
[2-3 sentences explaining why this trade offers highest expected profit within risk limits]

RISK ANALYSIS:
Maximum Potential Loss: $[Amount] ([X]% of capital)
Risk/Reward Ratio: [X:1]

Be specific with numbers and keep response under 300 words."#,
        date = Utc::now().format("%Y-%m-%d"),
        ticker = quote.ticker,
        price = quote.price,
        pe = fmt_ratio(quote.pe_ratio),
        beta = fmt_ratio(quote.beta),
        sector = quote.sector.as_deref().unwrap_or("N/A"),
        volatility = fmt_pct(features.volatility),
        trailing = fmt_pct(features.trailing_return),
        options = options,
        treasury = treasury,
        vix = vix,
        horizon = request.time_horizon,
        capital = format_usd(request.capital),
        max_loss_pct = request.max_loss_pct,
        max_loss = format_usd(max_loss),
    )
}

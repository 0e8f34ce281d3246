//! Fixed-layout report envelope around the generated recommendation.
//!
//! Purely presentational: the backend text is embedded verbatim and nothing
//! here branches on its content.

use chrono::Utc;

use crate::data::types::{MacroSnapshot, MarketSnapshot};
use crate::features::Features;
use crate::services::prompt::{format_usd, RecommendationRequest};

pub const DISCLAIMER: &str = "⚠️  DISCLAIMER: This is not financial advice. Past performance does not \n\
guarantee future results. Always consult with a qualified financial advisor.";

const BORDER_TOP: &str =
    "╔══════════════════════════════════════════════════════════════╗";
const BORDER_MID: &str =
    "╠══════════════════════════════════════════════════════════════╣";
const BORDER_BOT: &str =
    "╚══════════════════════════════════════════════════════════════╝";

/// Wrap the generated text in the boxed report layout with the same market
/// data that was used to build the prompt.
pub fn render_report(
    generated: &str,
    snapshot: &MarketSnapshot,
    features: &Features,
    macros: &MacroSnapshot,
    request: &RecommendationRequest,
) -> String {
    let treasury = macros
        .treasury_10y
        .map_or_else(|| "N/A".to_string(), |v| format!("{:.2}%", v));
    let vix = macros
        .vix
        .map_or_else(|| "N/A".to_string(), |v| format!("{:.1}", v));

    format!(
        r#"
{top}
║                   INVESTMENT RECOMMENDATION                  ║
{mid}
║ Analysis Date: {date}
║ Target: {ticker}
║ Time Horizon: {horizon}
║ Available Capital: {capital}
║ Max Loss Tolerance: {max_loss_pct}% ({max_loss})
{mid}

{body}

{mid}
║ MARKET DATA SNAPSHOT:
║ Current Price: ${price:.2}
║ Volatility: {volatility:.1}%
║ VIX: {vix}
║ 10Y Treasury: {treasury}
{bot}

{disclaimer}
"#,
        top = BORDER_TOP,
        mid = BORDER_MID,
        bot = BORDER_BOT,
        date = Utc::now().format("%Y-%m-%d %H:%M"),
        ticker = snapshot.quote.ticker,
        horizon = request.time_horizon,
        capital = format_usd(request.capital),
        max_loss_pct = request.max_loss_pct,
        max_loss = format_usd(request.max_loss_amount()),
        body = generated.trim(),
        price = snapshot.quote.price,
        volatility = features.volatility * 100.0,
        vix = vix,
        treasury = treasury,
        disclaimer = DISCLAIMER,
    )
}

//! Pipeline orchestration.
//!
//! One strictly sequential pass per request:
//! fetch market data -> fetch macro indicators -> derive features ->
//! assemble prompt -> generate -> render report.
//! Every failure is terminal for the current request; there are no retries.

use std::sync::Arc;

use tracing::info;

use crate::data::MarketDataProvider;
use crate::error::AdvisorResult;
use crate::features::Features;
use crate::llm::TextGenerator;
use crate::services::prompt::{build_prompt, RecommendationRequest, SYSTEM_PROMPT};
use crate::services::report::render_report;

pub struct Advisor {
    data: Arc<dyn MarketDataProvider>,
    llm: Arc<dyn TextGenerator>,
}

impl Advisor {
    pub fn new(data: Arc<dyn MarketDataProvider>, llm: Arc<dyn TextGenerator>) -> Self {
        Self { data, llm }
    }

    /// Produce one rendered recommendation report, or the first terminal
    /// error encountered along the way.
    pub async fn recommend(&self, request: &RecommendationRequest) -> AdvisorResult<String> {
        let snapshot = self.data.market_snapshot(&request.ticker).await?;
        let macros = self.data.macro_snapshot().await;
        let features = Features::derive(&snapshot.history);

        info!(
            "📈 {}: volatility {:.1}%, 20-day return {:.1}%",
            snapshot.quote.ticker,
            features.volatility * 100.0,
            features.trailing_return * 100.0
        );

        let prompt = build_prompt(&snapshot, &features, &macros, request);
        let generated = self.llm.generate(SYSTEM_PROMPT, &prompt).await?;

        Ok(render_report(
            &generated, &snapshot, &features, &macros, request,
        ))
    }
}

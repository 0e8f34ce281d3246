//! Unit tests for the report envelope.

#[cfg(test)]
mod report_tests {
    use crate::data::types::{MacroSnapshot, MarketSnapshot, OptionsSnapshot, PricePoint, Quote};
    use crate::features::Features;
    use crate::services::prompt::RecommendationRequest;
    use crate::services::report::{render_report, DISCLAIMER};

    fn snapshot() -> MarketSnapshot {
        MarketSnapshot {
            quote: Quote {
                ticker: "NVDA".to_string(),
                price: 181.50,
                pe_ratio: None,
                sector: None,
                market_cap: None,
                beta: None,
                dividend_yield: None,
            },
            history: vec![PricePoint {
                timestamp: 1_700_000_000,
                close: 181.50,
            }],
            options: OptionsSnapshot::default(),
        }
    }

    fn request() -> RecommendationRequest {
        RecommendationRequest {
            ticker: "NVDA".to_string(),
            time_horizon: "1 month".to_string(),
            capital: 10_000.0,
            max_loss_pct: 5.0,
        }
    }

    fn macros() -> MacroSnapshot {
        MacroSnapshot {
            treasury_10y: Some(4.27),
            vix: Some(15.4),
            date: "2026-08-26".to_string(),
        }
    }

    #[test]
    fn test_report_embeds_generated_text_verbatim() {
        let body = "RECOMMENDATION:\nTrade Type: Stock\nBuy 10 shares.";
        let report = render_report(body, &snapshot(), &Features::default(), &macros(), &request());
        assert!(report.contains(body));
    }

    #[test]
    fn test_report_header_fields() {
        let report = render_report("ok", &snapshot(), &Features::default(), &macros(), &request());
        assert!(report.contains("INVESTMENT RECOMMENDATION"));
        assert!(report.contains("Target: NVDA"));
        assert!(report.contains("Time Horizon: 1 month"));
        assert!(report.contains("Available Capital: $10,000"));
        assert!(report.contains("Max Loss Tolerance: 5% ($500)"));
    }

    #[test]
    fn test_report_market_snapshot_footer() {
        let features = Features {
            volatility: 0.352,
            trailing_return: 0.0,
        };
        let report = render_report("ok", &snapshot(), &features, &macros(), &request());
        assert!(report.contains("Current Price: $181.50"));
        assert!(report.contains("Volatility: 35.2%"));
        assert!(report.contains("VIX: 15.4"));
        assert!(report.contains("10Y Treasury: 4.27%"));
    }

    #[test]
    fn test_report_contains_disclaimer() {
        let report = render_report("ok", &snapshot(), &Features::default(), &macros(), &request());
        assert!(report.contains(DISCLAIMER));
        assert!(report.contains("This is not financial advice"));
    }

    #[test]
    fn test_report_macro_placeholders() {
        let empty = MacroSnapshot {
            treasury_10y: None,
            vix: None,
            date: "2026-08-26".to_string(),
        };
        let report = render_report("ok", &snapshot(), &Features::default(), &empty, &request());
        assert!(report.contains("VIX: N/A"));
        assert!(report.contains("10Y Treasury: N/A"));
    }

    #[test]
    fn test_report_is_boxed() {
        let report = render_report("ok", &snapshot(), &Features::default(), &macros(), &request());
        assert!(report.contains('╔'));
        assert!(report.contains('╠'));
        assert!(report.contains('╚'));
    }
}

//! Unit tests for feature derivation - volatility and trailing return.

#[cfg(test)]
mod features_tests {
    use crate::data::types::PricePoint;
    use crate::features::{annualized_volatility, trailing_return, Features};

    fn series(closes: &[f64]) -> Vec<PricePoint> {
        closes
            .iter()
            .enumerate()
            .map(|(i, c)| PricePoint {
                timestamp: 1_700_000_000 + i as i64 * 86_400,
                close: *c,
            })
            .collect()
    }

    // ============= Volatility Tests =============

    #[test]
    fn test_volatility_empty_series() {
        assert_eq!(annualized_volatility(&[]), 0.0);
    }

    #[test]
    fn test_volatility_single_observation() {
        let history = series(&[100.0]);
        assert_eq!(annualized_volatility(&history), 0.0);
    }

    #[test]
    fn test_volatility_constant_prices_is_zero() {
        let history = series(&[100.0, 100.0, 100.0, 100.0]);
        assert_eq!(annualized_volatility(&history), 0.0);
    }

    #[test]
    fn test_volatility_alternating_prices() {
        // Daily returns alternate +10% / -9.0909...%, stddev ~0.0954.
        let history = series(&[100.0, 110.0, 100.0, 110.0, 100.0]);
        let vol = annualized_volatility(&history);
        let expected = 0.095454 * 252.0_f64.sqrt();
        assert!((vol - expected).abs() < 0.01, "vol = {}", vol);
    }

    #[test]
    fn test_volatility_is_annualized() {
        // Uniform daily move of +1% has zero dispersion, so annualization
        // scale should not matter; mix in one different move to check scaling.
        let flat = series(&[100.0, 101.0, 102.01]);
        assert!(annualized_volatility(&flat) < 1e-6);
    }

    // ============= Trailing Return Tests =============

    #[test]
    fn test_trailing_return_short_series_is_zero() {
        let history = series(&[100.0; 19]);
        assert_eq!(trailing_return(&history), 0.0);
    }

    #[test]
    fn test_trailing_return_exactly_twenty_observations() {
        let mut closes = vec![100.0; 19];
        closes.push(110.0);
        // Base is close 20 back, which is the first observation.
        let history = series(&closes);
        let ret = trailing_return(&history);
        assert!((ret - 0.10).abs() < 1e-9, "ret = {}", ret);
    }

    #[test]
    fn test_trailing_return_uses_last_twenty_of_longer_series() {
        // 40 observations: flat at 50, then the final 20 run 100 -> 119.
        let mut closes = vec![50.0; 20];
        closes.extend((0..20).map(|i| 100.0 + i as f64));
        let history = series(&closes);
        let ret = trailing_return(&history);
        assert!((ret - 0.19).abs() < 1e-9, "ret = {}", ret);
    }

    #[test]
    fn test_trailing_return_negative() {
        let mut closes = vec![200.0];
        closes.extend(vec![150.0; 19]);
        let history = series(&closes);
        let ret = trailing_return(&history);
        assert!((ret + 0.25).abs() < 1e-9, "ret = {}", ret);
    }

    // ============= Bundle Tests =============

    #[test]
    fn test_features_derive_degenerate_input() {
        let features = Features::derive(&[]);
        assert_eq!(features.volatility, 0.0);
        assert_eq!(features.trailing_return, 0.0);
    }

    #[test]
    fn test_features_derive_matches_components() {
        let history = series(&(0..30).map(|i| 100.0 + i as f64).collect::<Vec<_>>());
        let features = Features::derive(&history);
        assert_eq!(features.volatility, annualized_volatility(&history));
        assert_eq!(features.trailing_return, trailing_return(&history));
    }
}

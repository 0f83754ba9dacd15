//! Unit tests for the confidence heuristic.

#[cfg(test)]
mod confidence_tests {
    use std::collections::BTreeSet;

    use crate::models::TechnicalIndicators;
    use crate::preferences::Indicator;
    use crate::services::confidence::*;

    fn technical(rsi: f64, macd: f64, volume_trend: f64) -> TechnicalIndicators {
        TechnicalIndicators {
            rsi,
            macd,
            sma_20: 12345.0,
            volume_trend,
        }
    }

    fn prefs(indicators: &[Indicator]) -> BTreeSet<Indicator> {
        indicators.iter().copied().collect()
    }

    #[test]
    fn test_overbought_rsi_only() {
        let score = overall_confidence(&technical(75.0, 0.0, 0.0), &prefs(&[Indicator::Rsi]));
        assert_eq!(score, 0.9);
    }

    #[test]
    fn test_rsi_bands() {
        assert_eq!(rsi_confidence(25.0), 0.9);
        assert_eq!(rsi_confidence(70.0), 0.7);
        assert_eq!(rsi_confidence(65.0), 0.7);
        assert_eq!(rsi_confidence(35.0), 0.7);
        assert_eq!(rsi_confidence(60.0), 0.5);
        assert_eq!(rsi_confidence(50.0), 0.5);
    }

    #[test]
    fn test_macd_confidence() {
        assert_eq!(macd_confidence(0.0), 0.5);
        assert_eq!(macd_confidence(1.0), 0.5);
        assert_eq!(macd_confidence(-0.4), 0.2);
        assert_eq!(macd_confidence(250.0), 0.9);
    }

    #[test]
    fn test_sma_confidence_is_constant() {
        assert_eq!(sma_confidence(0.0), 0.7);
        assert_eq!(sma_confidence(98_000.0), 0.7);
    }

    #[test]
    fn test_volume_confidence() {
        assert_eq!(volume_confidence(0.0), 0.5);
        assert_eq!(volume_confidence(-1.0), 0.9);
        assert!((volume_confidence(0.2) - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_mean_over_preferred() {
        let score = overall_confidence(
            &technical(75.0, 0.0, 0.0),
            &prefs(&[Indicator::Rsi, Indicator::Sma]),
        );
        assert!((score - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_bollinger_has_no_scorer() {
        let tech = technical(75.0, 0.0, 0.0);

        assert_eq!(indicator_confidence(Indicator::Bollinger, &tech), None);
        assert_eq!(overall_confidence(&tech, &prefs(&[Indicator::Bollinger])), 0.0);
        assert_eq!(
            overall_confidence(&tech, &prefs(&[Indicator::Bollinger, Indicator::Rsi])),
            0.9
        );
    }

    #[test]
    fn test_no_preferences_is_zero() {
        assert_eq!(overall_confidence(&technical(75.0, 1.0, 1.0), &BTreeSet::new()), 0.0);
    }

    #[test]
    fn test_nan_indicators_stay_in_range() {
        let all = prefs(&[Indicator::Rsi, Indicator::Macd, Indicator::Sma, Indicator::Volume]);
        let score = overall_confidence(&technical(f64::NAN, f64::NAN, f64::NAN), &all);

        assert!(!score.is_nan());
        assert!((0.0..=1.0).contains(&score));
    }
}

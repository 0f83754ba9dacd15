//! Unit tests for user preferences and their string boundary.

#[cfg(test)]
mod preferences_tests {
    use crate::preferences::*;

    #[test]
    fn test_default_preferences() {
        let prefs = UserPreferences::default();

        assert_eq!(prefs.risk_tolerance, RiskTolerance::Medium);
        assert_eq!(prefs.investment_horizon, InvestmentHorizon::Medium);
        assert_eq!(prefs.max_risk_percentage, 0.7);
        assert_eq!(prefs.notification_frequency, NotificationFrequency::RealTime);
        assert_eq!(prefs.indicator_list(), "RSI,MACD,SMA");
    }

    #[test]
    fn test_enum_parsing_is_case_insensitive() {
        assert_eq!("HIGH".parse::<RiskTolerance>().unwrap(), RiskTolerance::High);
        assert_eq!(" short ".parse::<InvestmentHorizon>().unwrap(), InvestmentHorizon::Short);
        assert_eq!("volume".parse::<Indicator>().unwrap(), Indicator::Volume);
        assert_eq!("Weekly".parse::<NotificationFrequency>().unwrap(), NotificationFrequency::Weekly);
        assert!("extreme".parse::<RiskTolerance>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for tolerance in [RiskTolerance::Low, RiskTolerance::Medium, RiskTolerance::High] {
            assert_eq!(tolerance.to_string().parse::<RiskTolerance>().unwrap(), tolerance);
        }
        assert_eq!(NotificationFrequency::RealTime.to_string(), "real-time");
    }

    #[test]
    fn test_horizon_lookback_days() {
        assert_eq!(InvestmentHorizon::Short.lookback_days(), 180);
        assert_eq!(InvestmentHorizon::Medium.lookback_days(), 365);
        assert_eq!(InvestmentHorizon::Long.lookback_days(), 730);
    }

    #[test]
    fn test_from_answers_blank_uses_defaults() {
        let (prefs, rejected) = UserPreferences::from_answers("", "", "", "", "");

        assert_eq!(prefs, UserPreferences::default());
        assert!(rejected.is_empty());
    }

    #[test]
    fn test_from_answers_full() {
        let (prefs, rejected) =
            UserPreferences::from_answers("high", "rsi, volume,Bollinger", "long", "0.25", "daily");

        assert!(rejected.is_empty());
        assert_eq!(prefs.risk_tolerance, RiskTolerance::High);
        assert_eq!(prefs.investment_horizon, InvestmentHorizon::Long);
        assert_eq!(prefs.max_risk_percentage, 0.25);
        assert_eq!(prefs.notification_frequency, NotificationFrequency::Daily);
        assert_eq!(prefs.indicator_list(), "RSI,VOLUME,BOLLINGER");
    }

    #[test]
    fn test_from_answers_rejects_invalid_values() {
        let (prefs, rejected) = UserPreferences::from_answers("yolo", "RSI,FIB", "forever", "1.5", "hourly");

        assert_eq!(prefs.risk_tolerance, RiskTolerance::Medium);
        assert_eq!(prefs.investment_horizon, InvestmentHorizon::Medium);
        assert_eq!(prefs.max_risk_percentage, DEFAULT_MAX_RISK_PERCENTAGE);
        assert_eq!(prefs.notification_frequency, NotificationFrequency::RealTime);
        // the valid indicator survives
        assert_eq!(prefs.indicator_list(), "RSI");
        assert_eq!(rejected.len(), 5);
    }

    #[test]
    fn test_from_answers_only_unknown_indicators_falls_back() {
        let (prefs, rejected) = UserPreferences::from_answers("", "FIB,ICHIMOKU", "", "", "");

        assert_eq!(prefs.preferred_indicators, default_indicators());
        assert_eq!(rejected.len(), 2);
    }

    #[test]
    fn test_duplicate_indicators_collapse() {
        let (prefs, _) = UserPreferences::from_answers("", "SMA,sma,RSI", "", "", "");
        assert_eq!(prefs.preferred_indicators.len(), 2);
        assert_eq!(prefs.indicator_list(), "RSI,SMA");
    }
}

//! Unit tests for Coinbase candle decoding and request windows.

#[cfg(test)]
mod coinbase_tests {
    use chrono::{Duration, TimeZone, Utc};

    use crate::constants::market::MAX_CANDLES_PER_REQUEST;
    use crate::data::coinbase::{candles_to_market_data, request_windows, Candle};
    use crate::preferences::InvestmentHorizon;

    const DAILY: i64 = 86_400;

    #[test]
    fn test_candle_deserialize_from_array() {
        let json = r#"[[1700000000, 35000.5, 36000.0, 35500.0, 35900.25, 1234.5]]"#;
        let candles: Vec<Candle> = serde_json::from_str(json).unwrap();

        assert_eq!(candles.len(), 1);
        assert_eq!(candles[0].time(), 1_700_000_000);
        assert_eq!(candles[0].close(), 35900.25);
        assert_eq!(candles[0].volume(), 1234.5);
    }

    #[test]
    fn test_candles_sorted_oldest_first() {
        // Coinbase returns newest first
        let candles = vec![
            Candle(300, 0.0, 0.0, 0.0, 3.0, 30.0),
            Candle(200, 0.0, 0.0, 0.0, 2.0, 20.0),
            Candle(100, 0.0, 0.0, 0.0, 1.0, 10.0),
        ];

        let data = candles_to_market_data(candles);

        assert_eq!(data.prices, vec![1.0, 2.0, 3.0]);
        assert_eq!(data.volumes, vec![10.0, 20.0, 30.0]);
        assert_eq!(data.dates.len(), 3);
        assert!(data.dates[0] < data.dates[2]);
        assert_eq!(data.dates[0].timestamp(), 100);
    }

    #[test]
    fn test_overlapping_windows_deduplicated() {
        let candles = vec![
            Candle(100, 0.0, 0.0, 0.0, 1.0, 10.0),
            Candle(200, 0.0, 0.0, 0.0, 2.0, 20.0),
            Candle(200, 0.0, 0.0, 0.0, 2.0, 20.0),
            Candle(300, 0.0, 0.0, 0.0, 3.0, 30.0),
        ];

        let data = candles_to_market_data(candles);

        assert_eq!(data.len(), 3);
        assert_eq!(data.prices.len(), data.volumes.len());
        assert_eq!(data.prices.len(), data.dates.len());
    }

    #[test]
    fn test_empty_candles() {
        let data = candles_to_market_data(vec![]);
        assert!(data.is_empty());
    }

    // ============= Request Window Tests =============

    #[test]
    fn test_request_windows_cover_every_horizon() {
        let end = Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 0).unwrap();
        let max_window = Duration::seconds(DAILY * MAX_CANDLES_PER_REQUEST);

        for horizon in [InvestmentHorizon::Short, InvestmentHorizon::Medium, InvestmentHorizon::Long] {
            let start = end - Duration::days(horizon.lookback_days());
            let windows = request_windows(start, end, DAILY);

            assert!(!windows.is_empty());
            assert_eq!(windows.first().unwrap().0, start);
            assert_eq!(windows.last().unwrap().1, end);
            for pair in windows.windows(2) {
                assert_eq!(pair[0].1, pair[1].0, "gap between request windows");
            }
            for (from, to) in &windows {
                assert!(from < to);
                assert!(*to - *from <= max_window);
            }
        }
    }

    #[test]
    fn test_request_window_counts() {
        let end = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let count = |days: i64| request_windows(end - Duration::days(days), end, DAILY).len();

        assert_eq!(count(180), 1);
        assert_eq!(count(300), 1);
        assert_eq!(count(365), 2);
        assert_eq!(count(730), 3);
    }

    #[test]
    fn test_request_windows_empty_range() {
        let end = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();

        assert!(request_windows(end, end, DAILY).is_empty());
        assert!(request_windows(end, end - Duration::days(1), DAILY).is_empty());
        assert!(request_windows(end - Duration::days(10), end, 0).is_empty());
    }
}

//! Application-wide constants and magic numbers
//!
//! Indicator windows, scoring thresholds and parser fallbacks live here so the
//! pipeline stages never disagree about them.

/// Indicator lookback windows
pub mod indicators {
    pub const RSI_PERIOD: usize = 14;
    pub const MACD_FAST: usize = 12;
    pub const MACD_SLOW: usize = 26;
    pub const MACD_SIGNAL: usize = 9;
    pub const SMA_WINDOW: usize = 20;
    pub const VOLUME_WINDOW: usize = 20;

    /// RSI reported when the average loss is zero but prices went up
    pub const RSI_MAX: f64 = 100.0;

    /// RSI reported for a perfectly flat series (no gains, no losses)
    pub const RSI_NEUTRAL: f64 = 50.0;
}

/// Per-indicator confidence heuristics
pub mod confidence {
    pub const RSI_STRONG_UPPER: f64 = 70.0;
    pub const RSI_STRONG_LOWER: f64 = 30.0;
    pub const RSI_MODERATE_UPPER: f64 = 60.0;
    pub const RSI_MODERATE_LOWER: f64 = 40.0;

    pub const STRONG: f64 = 0.9;
    pub const MODERATE: f64 = 0.7;
    pub const WEAK: f64 = 0.5;

    /// Trend-following baseline. Does not vary with the SMA value.
    pub const SMA_BASELINE: f64 = 0.7;

    /// Ceiling for MACD and volume scores
    pub const CAP: f64 = 0.9;
}

/// Fallbacks applied when model output is missing or unparseable
pub mod defaults {
    pub const RISK_SCORE: f64 = 0.5;
    pub const REASONING: &str = "Insufficient data for analysis";
    pub const MITIGATION_PREFIX: &str = " Risk mitigation: ";
}

/// Market data
pub mod market {
    /// Coinbase returns at most this many candles per request
    pub const MAX_CANDLES_PER_REQUEST: i64 = 300;

    pub const SHORT_HORIZON_DAYS: i64 = 180;
    pub const MEDIUM_HORIZON_DAYS: i64 = 365;
    pub const LONG_HORIZON_DAYS: i64 = 730;

    pub const QUOTE_CURRENCY: &str = "USD";

    pub const DEFAULT_SUPPORTED_SYMBOLS: [&str; 8] =
        ["BTC", "ETH", "SOL", "DOT", "ADA", "XRP", "LTC", "BCH"];
}

/// Memory keys
pub mod memory {
    pub const HISTORICAL_SUFFIX: &str = "_historical";
}

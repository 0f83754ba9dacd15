//! Technical indicator snapshot.
//!
//! Every function reads a chronologically ordered series (oldest first) and
//! returns one value describing the latest observation. Series shorter than
//! the lookback produce `NaN` instead of an error.

use crate::constants::indicators::*;
use crate::models::{MarketData, TechnicalIndicators};

pub fn compute(data: &MarketData) -> TechnicalIndicators {
    TechnicalIndicators {
        rsi: rsi(&data.prices, RSI_PERIOD),
        macd: macd_histogram(&data.prices, MACD_FAST, MACD_SLOW, MACD_SIGNAL),
        sma_20: sma(&data.prices, SMA_WINDOW),
        volume_trend: volume_trend(&data.volumes, VOLUME_WINDOW),
    }
}

/// Relative Strength Index with Wilder smoothing.
///
/// Needs `period + 1` prices. A series with no losses reads 100, a flat
/// series reads 50.
pub fn rsi(prices: &[f64], period: usize) -> f64 {
    if period == 0 || prices.len() < period + 1 {
        return f64::NAN;
    }

    let deltas: Vec<f64> = prices.windows(2).map(|w| w[1] - w[0]).collect();
    let (seed, rest) = deltas.split_at(period);

    let p = period as f64;
    let mut avg_gain = seed.iter().filter(|d| **d > 0.0).sum::<f64>() / p;
    let mut avg_loss = -seed.iter().filter(|d| **d < 0.0).sum::<f64>() / p;

    for delta in rest {
        let (gain, loss) = if *delta > 0.0 { (*delta, 0.0) } else { (0.0, -delta) };
        avg_gain = (avg_gain * (p - 1.0) + gain) / p;
        avg_loss = (avg_loss * (p - 1.0) + loss) / p;
    }

    if avg_loss == 0.0 {
        return if avg_gain == 0.0 { RSI_NEUTRAL } else { RSI_MAX };
    }

    let rs = avg_gain / avg_loss;
    100.0 - 100.0 / (1.0 + rs)
}

/// Exponential moving average seeded with the first value, `alpha = 2/(span+1)`.
pub fn ema(values: &[f64], span: usize) -> Vec<f64> {
    let alpha = 2.0 / (span as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    let mut prev = match values.first() {
        Some(v) => *v,
        None => return out,
    };
    out.push(prev);
    for v in &values[1..] {
        prev = alpha * v + (1.0 - alpha) * prev;
        out.push(prev);
    }
    out
}

/// Latest MACD line minus latest signal line.
pub fn macd_histogram(prices: &[f64], fast: usize, slow: usize, signal: usize) -> f64 {
    if prices.is_empty() {
        return f64::NAN;
    }

    let fast_ema = ema(prices, fast);
    let slow_ema = ema(prices, slow);
    let macd_line: Vec<f64> = fast_ema
        .iter()
        .zip(&slow_ema)
        .map(|(f, s)| f - s)
        .collect();
    let signal_line = ema(&macd_line, signal);

    match (macd_line.last(), signal_line.last()) {
        (Some(m), Some(s)) => m - s,
        _ => f64::NAN,
    }
}

/// Mean of the last `window` values.
pub fn sma(values: &[f64], window: usize) -> f64 {
    if window == 0 || values.len() < window {
        return f64::NAN;
    }
    let tail = &values[values.len() - window..];
    tail.iter().sum::<f64>() / window as f64
}

/// Fractional deviation of the latest volume from its trailing mean.
pub fn volume_trend(volumes: &[f64], window: usize) -> f64 {
    let avg = sma(volumes, window);
    match volumes.last() {
        Some(latest) if !avg.is_nan() => latest / avg - 1.0,
        _ => f64::NAN,
    }
}

use std::collections::BTreeSet;

use crate::constants::confidence::*;
use crate::models::TechnicalIndicators;
use crate::preferences::Indicator;

pub fn rsi_confidence(rsi: f64) -> f64 {
    if rsi > RSI_STRONG_UPPER || rsi < RSI_STRONG_LOWER {
        STRONG
    } else if rsi > RSI_MODERATE_UPPER || rsi < RSI_MODERATE_LOWER {
        MODERATE
    } else {
        WEAK
    }
}

pub fn macd_confidence(macd: f64) -> f64 {
    if macd != 0.0 {
        (macd.abs() / 2.0).min(CAP)
    } else {
        WEAK
    }
}

/// Constant: the SMA only sets a trend-following baseline.
pub fn sma_confidence(_sma: f64) -> f64 {
    SMA_BASELINE
}

pub fn volume_confidence(volume_trend: f64) -> f64 {
    (volume_trend.abs() + 0.5).min(CAP)
}

/// Score for one indicator, or `None` when it has no scorer (Bollinger).
pub fn indicator_confidence(indicator: Indicator, technical: &TechnicalIndicators) -> Option<f64> {
    match indicator {
        Indicator::Rsi => Some(rsi_confidence(technical.rsi)),
        Indicator::Macd => Some(macd_confidence(technical.macd)),
        Indicator::Sma => Some(sma_confidence(technical.sma_20)),
        Indicator::Volume => Some(volume_confidence(technical.volume_trend)),
        Indicator::Bollinger => None,
    }
}

/// Mean score over the preferred indicators that have a scorer; 0 when none do.
pub fn overall_confidence(technical: &TechnicalIndicators, preferred: &BTreeSet<Indicator>) -> f64 {
    let scores: Vec<f64> = preferred
        .iter()
        .filter_map(|i| indicator_confidence(*i, technical))
        .collect();

    let total: f64 = scores.iter().sum();
    total / scores.len().max(1) as f64
}

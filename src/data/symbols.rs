//! Symbol normalization helpers.
//!
//! Canonical symbol (used internally): the upper-case base asset, e.g. "BTC".
//!
//! Exchange mappings:
//! - Coinbase: "BTC-USD"

use crate::constants::market::QUOTE_CURRENCY;
use crate::error::{AnalyzerError, Result};

pub fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase()
}

pub fn to_coinbase_product_id(canonical: &str) -> String {
    format!("{}-{}", canonical, QUOTE_CURRENCY)
}

/// Normalize `raw` and check it against the allow-list.
pub fn ensure_supported(raw: &str, supported: &[String]) -> Result<String> {
    let symbol = normalize(raw);
    if supported.iter().any(|s| s.eq_ignore_ascii_case(&symbol)) {
        Ok(symbol)
    } else {
        Err(AnalyzerError::unsupported_symbol(&symbol, supported))
    }
}

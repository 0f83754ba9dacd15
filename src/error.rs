//! Custom error types for the analyzer
//!
//! Only `UnsupportedSymbol` aborts an analysis. Everything else is raised by
//! the outer clients and absorbed by the pipeline into default values.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalyzerError>;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("Unsupported token: {symbol}. Supported tokens are: {supported}")]
    UnsupportedSymbol { symbol: String, supported: String },

    #[error("Market data request failed (HTTP {status}): {body}")]
    MarketData { status: u16, body: String },

    #[error("LLM error: {0}")]
    Llm(#[from] async_openai::error::OpenAIError),

    #[error("LLM request timed out after {0}s")]
    Timeout(u64),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AnalyzerError {
    pub fn unsupported_symbol(symbol: &str, supported: &[String]) -> Self {
        AnalyzerError::UnsupportedSymbol {
            symbol: symbol.to_string(),
            supported: supported.join(", "),
        }
    }
}

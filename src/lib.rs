//! Crypto Analyzer - LLM-assisted cryptocurrency analysis
//!
//! This library fetches price history, computes a technical indicator
//! snapshot, asks a language model for risk and action calls, and turns the
//! answers into a scored trading decision.

pub mod agents;
pub mod config;
pub mod console;
pub mod constants;
pub mod data;
pub mod error;
pub mod llm;
pub mod models;
pub mod preferences;
pub mod services;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{AnalyzerError, Result};
pub use models::{Action, Analysis, Decision, MarketData, TechnicalIndicators};
pub use preferences::UserPreferences;
pub use services::analyzer::CryptoAnalyzer;

#[cfg(test)]
mod preferences_tests;

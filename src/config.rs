use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::constants::market;
use crate::error::{AnalyzerError, Result};

pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Generation options sent with every model request.
#[derive(Clone, Debug, Deserialize)]
pub struct LlmConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_llm_base_url")]
    pub base_url: Option<String>,
    #[serde(default = "default_llm_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_candidate_count")]
    pub candidate_count: u8,
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    #[serde(default = "default_stream")]
    pub stream: bool,
}

fn default_llm_base_url() -> Option<String> {
    Some("https://generativelanguage.googleapis.com/v1beta/openai".to_string())
}
fn default_llm_model() -> String {
    "gemini-2.0-flash".to_string()
}
fn default_temperature() -> f32 {
    0.1
}
fn default_candidate_count() -> u8 {
    1
}
fn default_max_output_tokens() -> u32 {
    512
}
fn default_stream() -> bool {
    true
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_llm_base_url(),
            model: default_llm_model(),
            temperature: default_temperature(),
            candidate_count: default_candidate_count(),
            max_output_tokens: default_max_output_tokens(),
            stream: default_stream(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct MarketDataConfig {
    #[serde(default = "default_market_base_url")]
    pub base_url: String,
    /// Candle size in seconds (86400 = daily)
    #[serde(default = "default_granularity")]
    pub granularity_secs: i64,
}

fn default_market_base_url() -> String {
    "https://api.exchange.coinbase.com".to_string()
}
fn default_granularity() -> i64 {
    86_400
}

impl Default for MarketDataConfig {
    fn default() -> Self {
        Self {
            base_url: default_market_base_url(),
            granularity_secs: default_granularity(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_supported_symbols")]
    pub supported_symbols: Vec<String>,

    /// Daily risk-free rate used for the risk-adjusted return of past data
    #[serde(default)]
    pub risk_free_rate: f64,

    /// Upper bound on each model call and market-data request
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub market_data: MarketDataConfig,
}

fn default_supported_symbols() -> Vec<String> {
    market::DEFAULT_SUPPORTED_SYMBOLS
        .iter()
        .map(|s| s.to_string())
        .collect()
}
fn default_request_timeout() -> u64 {
    30
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            supported_symbols: default_supported_symbols(),
            risk_free_rate: 0.0,
            request_timeout_secs: default_request_timeout(),
            llm: LlmConfig::default(),
            market_data: MarketDataConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load `config.yaml` (or `$ANALYZER_CONFIG`), then fill the API key from
    /// the environment when the file leaves it out.
    pub fn load() -> Result<Self> {
        let config_path =
            env::var("ANALYZER_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut config = if Path::new(&config_path).exists() {
            Self::from_file(&config_path)?
        } else {
            info!("ℹ️ {} not found - using built-in defaults", config_path);
            AppConfig::default()
        };

        if config.llm.api_key.is_none() {
            config.llm.api_key = env::var("GEMINI_API_KEY")
                .or_else(|_| env::var("OPENAI_API_KEY"))
                .ok();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // Strip BOM if present
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let config: AppConfig = serde_yaml::from_str(content)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.supported_symbols.is_empty() {
            return Err(AnalyzerError::Config(
                "supported_symbols must not be empty".to_string(),
            ));
        }
        if self.llm.candidate_count == 0 {
            return Err(AnalyzerError::Config(
                "llm.candidate_count must be at least 1".to_string(),
            ));
        }
        if self.market_data.granularity_secs <= 0 {
            return Err(AnalyzerError::Config(
                "market_data.granularity_secs must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

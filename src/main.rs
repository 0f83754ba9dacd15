use std::sync::Arc;

use crypto_analyzer::config::AppConfig;
use crypto_analyzer::console::Console;
use crypto_analyzer::data::coinbase::CoinbaseMarketData;
use crypto_analyzer::data::store::InMemoryStore;
use crypto_analyzer::llm::LLMClient;
use crypto_analyzer::services::analyzer::CryptoAnalyzer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();

    // Setup Logging (stderr, so the report on stdout stays readable)
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Crypto Analyzer...");

    // Load Configuration
    let config = AppConfig::load()?;
    info!(
        "Loaded Configuration: model={}, symbols={:?}, timeout={}s",
        config.llm.model, config.supported_symbols, config.request_timeout_secs
    );

    // Initialize Clients
    if config.llm.api_key.is_none() {
        warn!("⚠️ No LLM API key configured (GEMINI_API_KEY) - model calls will fall back to defaults");
    }
    if let Some(url) = &config.llm.base_url {
        info!("Using LLM Base URL: {}", url);
    }
    let llm_client = Arc::new(LLMClient::new(&config.llm, config.request_timeout_secs));
    let market = Arc::new(CoinbaseMarketData::new(&config.market_data, config.request_timeout_secs)?);
    let memory = Arc::new(InMemoryStore::new());

    let analyzer = CryptoAnalyzer::new(llm_client, market, memory, &config);
    let mut console = Console::new(tokio::io::stdin(), analyzer);

    tokio::select! {
        result = console.run() => {
            if let Err(e) = result {
                warn!("Console stopped: {}", e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            println!("\nExiting...");
        }
    }

    println!("Analysis session ended.");
    Ok(())
}

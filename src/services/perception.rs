use std::sync::Arc;
use tracing::{error, info};

use crate::agents::{market::MarketAnalystAgent, Agent};
use crate::data::symbols::ensure_supported;
use crate::data::MarketDataSource;
use crate::error::Result;
use crate::llm::TextModel;
use crate::models::{MarketContext, MarketData, TechnicalIndicators};
use crate::preferences::UserPreferences;
use crate::services::{indicators, parser, prompts};

/// What the analyzer knows about a symbol before deciding.
#[derive(Clone, Debug)]
pub struct Perception {
    pub symbol: String,
    pub market_data: MarketData,
    pub technical: TechnicalIndicators,
    pub market_context: MarketContext,
}

pub struct PerceptionLayer {
    market: Arc<dyn MarketDataSource>,
    model: Arc<dyn TextModel>,
    supported_symbols: Vec<String>,
}

impl PerceptionLayer {
    pub fn new(
        market: Arc<dyn MarketDataSource>,
        model: Arc<dyn TextModel>,
        supported_symbols: Vec<String>,
    ) -> Self {
        Self {
            market,
            model,
            supported_symbols,
        }
    }

    /// Fails only for a symbol outside the allow-list. A failed fetch leaves
    /// the series empty and the indicators NaN.
    pub async fn perceive(&self, symbol: &str, preferences: &UserPreferences) -> Result<Perception> {
        let symbol = ensure_supported(symbol, &self.supported_symbols)?;

        let market_data = match self
            .market
            .fetch_history(&symbol, preferences.investment_horizon)
            .await
        {
            Ok(data) => data,
            Err(e) => {
                error!("❌ [PERCEPTION] Market data fetch from {} failed for {}: {}", self.market.name(), symbol, e);
                MarketData::default()
            }
        };

        let technical = indicators::compute(&market_data);
        info!("👁️ [PERCEPTION] {} indicators: {}", symbol, prompts::format_indicators(&technical));

        let context_prompt = prompts::market_context_prompt(&symbol, preferences.investment_horizon);
        let context_text = MarketAnalystAgent
            .run_or_empty(&context_prompt, self.model.as_ref())
            .await;
        let market_context = parser::parse_market_context(&context_text);
        info!("👁️ [PERCEPTION] Market trend identified: {}", market_context.trend);

        Ok(Perception {
            symbol,
            market_data,
            technical,
            market_context,
        })
    }
}

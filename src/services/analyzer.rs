use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::data::store::{historical_key, MemoryBackend};
use crate::data::symbols::normalize;
use crate::data::MarketDataSource;
use crate::error::Result;
use crate::llm::TextModel;
use crate::models::Analysis;
use crate::preferences::UserPreferences;
use crate::services::decision::DecisionEngine;
use crate::services::perception::PerceptionLayer;

/// Perceive → remember → decide → store.
pub struct CryptoAnalyzer {
    perception: PerceptionLayer,
    decision: DecisionEngine,
    memory: Arc<dyn MemoryBackend>,
}

impl CryptoAnalyzer {
    pub fn new(
        model: Arc<dyn TextModel>,
        market: Arc<dyn MarketDataSource>,
        memory: Arc<dyn MemoryBackend>,
        config: &AppConfig,
    ) -> Self {
        Self {
            perception: PerceptionLayer::new(market, model.clone(), config.supported_symbols.clone()),
            decision: DecisionEngine::new(model, config.risk_free_rate),
            memory,
        }
    }

    pub async fn analyze(&self, symbol: &str, preferences: &UserPreferences) -> Result<Analysis> {
        info!("🚀 [ANALYZER] Starting analysis for {}", symbol);

        let perceived = self.perception.perceive(symbol, preferences).await?;

        let key = historical_key(&perceived.symbol);
        let context = preferences.investment_horizon.to_string();
        let historical = self.memory.retrieve(&key, &context).await;
        if historical.is_some() {
            info!("🗄️ [MEMORY] Historical data found for {}", perceived.symbol);
        }

        let decision = self
            .decision
            .make_decision(&perceived.technical, preferences, historical.as_ref())
            .await;

        let analysis = Analysis {
            symbol: perceived.symbol,
            timestamp: Utc::now(),
            technical_analysis: perceived.technical,
            market_data: perceived.market_data,
            decision,
            market_context: perceived.market_context,
            memory_context: historical,
        };

        // The stored copy drops its own memory_context so entries never nest.
        let mut stored = analysis.clone();
        stored.memory_context = None;
        match serde_json::to_value(&stored) {
            Ok(payload) => self.memory.store(&key, payload, &context).await,
            Err(e) => warn!("⚠️ [MEMORY] Could not serialize analysis for {}: {}", analysis.symbol, e),
        }

        info!(
            "✅ [ANALYZER] {} -> {} (confidence {:.2}, risk {:.2})",
            analysis.symbol, analysis.decision.action, analysis.decision.confidence, analysis.decision.risk_score
        );
        Ok(analysis)
    }

    /// Last stored analysis for `symbol`, if any.
    pub async fn history(&self, symbol: &str) -> Result<Option<Analysis>> {
        let key = historical_key(&normalize(symbol));
        match self.memory.retrieve(&key, "").await {
            Some(payload) => Ok(Some(serde_json::from_value(payload)?)),
            None => Ok(None),
        }
    }
}

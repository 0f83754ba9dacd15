use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

use crate::agents::{action::ActionAgent, risk::RiskAgent, validation::ValidationAgent, Agent};
use crate::llm::TextModel;
use crate::models::{Decision, MarketData, TechnicalIndicators};
use crate::preferences::UserPreferences;
use crate::services::confidence::overall_confidence;
use crate::services::parser::{ActionRecommendation, RiskAssessment, ValidationReport};
use crate::services::prompts;

/// Risk prompt → confidence → action prompt → validation prompt → `Decision`.
///
/// Runs strictly in sequence and always yields a complete decision: model
/// failures surface as empty text, which parses into the defaults.
pub struct DecisionEngine {
    model: Arc<dyn TextModel>,
    risk_free_rate: f64,
}

impl DecisionEngine {
    pub fn new(model: Arc<dyn TextModel>, risk_free_rate: f64) -> Self {
        Self { model, risk_free_rate }
    }

    pub async fn make_decision(
        &self,
        technical: &TechnicalIndicators,
        preferences: &UserPreferences,
        historical: Option<&Value>,
    ) -> Decision {
        if let Some(ret) = historical.and_then(|h| self.historical_risk_adjusted_return(h)) {
            info!("🧠 [DECISION] Risk-adjusted return of previous data: {:.6}", ret);
        }

        // 1. Risk
        let risk_prompt = prompts::risk_assessment_prompt(technical, preferences);
        let risk_text = RiskAgent.run_or_empty(&risk_prompt, self.model.as_ref()).await;
        let risk = RiskAssessment::parse(&risk_text);
        let risk_score = risk.risk_score();
        info!(
            "🧠 [DECISION] Risk level: {} (score {:.2})",
            risk.level.map(|l| l.to_string()).unwrap_or_else(|| "default".to_string()),
            risk_score
        );

        // 2. Confidence
        let confidence = overall_confidence(technical, &preferences.preferred_indicators);
        info!("🧠 [DECISION] Indicator confidence: {:.2}", confidence);

        // 3. Action
        let action_prompt = prompts::action_recommendation_prompt(risk_score, confidence, preferences);
        let action_text = ActionAgent.run_or_empty(&action_prompt, self.model.as_ref()).await;
        let recommendation = ActionRecommendation::parse(&action_text);
        let action = recommendation.action();
        let reasoning = recommendation.reasoning();

        // 4. Validation (informational)
        let validation_prompt = prompts::validation_prompt(action, confidence);
        let validation_text = ValidationAgent.run_or_empty(&validation_prompt, self.model.as_ref()).await;
        let validation = ValidationReport::parse(&validation_text);
        match validation.passed() {
            Some(true) => info!("🧠 [DECISION] Validation passed ({:?})", validation),
            Some(false) => warn!("🧠 [DECISION] Validation flagged the decision ({:?})", validation),
            None => info!("🧠 [DECISION] No validation verdict"),
        }

        Decision {
            action,
            confidence,
            risk_score,
            reasoning,
            timestamp: Utc::now(),
        }
    }

    fn historical_risk_adjusted_return(&self, historical: &Value) -> Option<f64> {
        let market_data: MarketData = historical
            .get("market_data")
            .and_then(|v| serde_json::from_value(v.clone()).ok())?;
        risk_adjusted_return(&market_data.returns(), self.risk_free_rate)
    }
}

/// Mean excess return over `risk_free_rate`; `None` for an empty series.
pub fn risk_adjusted_return(returns: &[f64], risk_free_rate: f64) -> Option<f64> {
    if returns.is_empty() {
        return None;
    }
    let excess: f64 = returns.iter().map(|r| r - risk_free_rate).sum();
    Some(excess / returns.len() as f64)
}

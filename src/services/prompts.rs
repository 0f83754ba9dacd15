//! Prompt templates.
//!
//! The tagged output lines (`RISK:`, `ACTION:`, ...) are what the response
//! parser scans for, so they must stay verbatim.

use crate::models::{Action, TechnicalIndicators};
use crate::preferences::{InvestmentHorizon, UserPreferences};

pub fn format_indicators(technical: &TechnicalIndicators) -> String {
    format!(
        "RSI:{:.2},MACD:{:.2},SMA20:{:.2},VOL:{:.2}",
        technical.rsi, technical.macd, technical.sma_20, technical.volume_trend
    )
}

pub fn risk_assessment_prompt(technical: &TechnicalIndicators, preferences: &UserPreferences) -> String {
    format!(
        "Analyze crypto market risk:
Technical: {}
Risk Tolerance: {}
Horizon: {}
Output:
RISK:[LOW/MEDIUM/HIGH]
EVIDENCE:[key factors]
CONFIDENCE:[0-1]",
        format_indicators(technical),
        preferences.risk_tolerance,
        preferences.investment_horizon
    )
}

pub fn action_recommendation_prompt(risk_score: f64, confidence: f64, preferences: &UserPreferences) -> String {
    format!(
        "Recommend crypto trade action:
Risk:{:.2}
Confidence:{:.2}
Tolerance:{}
Horizon:{}
Indicators:{}
Output:
ACTION:[BUY/SELL/HOLD]
REASON:[main factor]
SUPPORT:[considerations]
MITIGATION:[measures]",
        risk_score,
        confidence,
        preferences.risk_tolerance,
        preferences.investment_horizon,
        preferences.indicator_list()
    )
}

pub fn validation_prompt(action: Action, confidence: f64) -> String {
    format!(
        "Validate crypto decision:
Action:{}
Confidence:{:.2}
Output:
QUALITY:[pass/fail]
LOGIC:[valid/invalid]
RISK:[acceptable/high]
ALTERNATIVES:[options]",
        action, confidence
    )
}

pub fn market_context_prompt(symbol: &str, horizon: InvestmentHorizon) -> String {
    format!(
        "Analyze {} market context:
Timeframe:{}
Output:
TREND:[UP/DOWN/SIDEWAYS]
VOLUME:[INCREASING/DECREASING/STABLE]
SUPPORT:[levels]
RESISTANCE:[levels]
PATTERNS:[formations]",
        symbol, horizon
    )
}

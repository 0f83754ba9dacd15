//! Tagged-line parsing of model output.
//!
//! Model answers are scanned line by line. A trimmed line that starts with
//! `TAG:` hands the rest of the line, stripped of whitespace and square
//! brackets, to the setter registered for that tag. Everything else is
//! ignored, and fields nobody set keep the defaults from `constants::defaults`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::defaults;
use crate::models::{Action, MarketContext, Trend, VolumeProfile};

pub type Setter<T> = fn(&mut T, &str);

/// Apply `rules` to every tagged line of `text`. Tags are case-sensitive and
/// given without the trailing colon.
pub fn scan_tagged_lines<T>(text: &str, target: &mut T, rules: &[(&str, Setter<T>)]) {
    for line in text.lines().map(str::trim) {
        for (tag, setter) in rules {
            if let Some(value) = line.strip_prefix(tag).and_then(|rest| rest.strip_prefix(':')) {
                setter(target, clean_value(value));
                break;
            }
        }
    }
}

pub fn clean_value(raw: &str) -> &str {
    raw.trim_matches(|c: char| c == '[' || c == ']' || c.is_whitespace())
}

// ============= Risk =============

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn score(&self) -> f64 {
        match self {
            RiskLevel::Low => 0.3,
            RiskLevel::Medium => 0.5,
            RiskLevel::High => 0.7,
        }
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "LOW" => Ok(RiskLevel::Low),
            "MEDIUM" => Ok(RiskLevel::Medium),
            "HIGH" => Ok(RiskLevel::High),
            other => Err(format!("unknown risk level '{}'", other)),
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RiskAssessment {
    pub level: Option<RiskLevel>,
    pub evidence: Option<String>,
    pub confidence: Option<f64>,
}

impl RiskAssessment {
    pub fn parse(text: &str) -> Self {
        let mut out = Self::default();
        scan_tagged_lines(
            text,
            &mut out,
            &[
                ("RISK", |o: &mut Self, v| {
                    // first recognised level wins
                    if o.level.is_none() {
                        o.level = v.parse().ok();
                    }
                }),
                ("EVIDENCE", |o: &mut Self, v| {
                    if !v.is_empty() {
                        o.evidence = Some(v.to_string());
                    }
                }),
                ("CONFIDENCE", |o: &mut Self, v| {
                    o.confidence = v.parse::<f64>().ok().filter(|c| (0.0..=1.0).contains(c));
                }),
            ],
        );
        out
    }

    pub fn risk_score(&self) -> f64 {
        self.level.map(|l| l.score()).unwrap_or(defaults::RISK_SCORE)
    }
}

/// Risk score in {0.3, 0.5, 0.7}; 0.5 when no `RISK:` line is recognised.
pub fn extract_risk_score(text: &str) -> f64 {
    RiskAssessment::parse(text).risk_score()
}

// ============= Action =============

/// Parsed trade call. `REASON` and `SUPPORT` share one reasoning slot and the
/// later line wins. `MITIGATION` is appended to whatever reasoning is set at
/// that point, so a later `REASON` or `SUPPORT` line discards it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActionRecommendation {
    pub action: Option<Action>,
    pub reasoning: Option<String>,
}

impl ActionRecommendation {
    pub fn parse(text: &str) -> Self {
        let mut out = Self::default();
        scan_tagged_lines(
            text,
            &mut out,
            &[
                ("ACTION", |o: &mut Self, v| {
                    if let Ok(action) = v.parse() {
                        o.action = Some(action);
                    }
                }),
                ("REASON", Self::set_reasoning),
                ("SUPPORT", Self::set_reasoning),
                ("MITIGATION", |o: &mut Self, v| {
                    if !v.is_empty() {
                        let mut reasoning = o.reasoning();
                        reasoning.push_str(defaults::MITIGATION_PREFIX);
                        reasoning.push_str(v);
                        o.reasoning = Some(reasoning);
                    }
                }),
            ],
        );
        out
    }

    fn set_reasoning(&mut self, value: &str) {
        if !value.is_empty() {
            self.reasoning = Some(value.to_string());
        }
    }

    pub fn action(&self) -> Action {
        self.action.unwrap_or_default()
    }

    pub fn reasoning(&self) -> String {
        self.reasoning
            .clone()
            .unwrap_or_else(|| defaults::REASONING.to_string())
    }
}

pub fn extract_action_and_reasoning(text: &str) -> (Action, String) {
    let rec = ActionRecommendation::parse(text);
    (rec.action(), rec.reasoning())
}

// ============= Validation =============

/// Reviewer verdict. Logged only; the decision never reads it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationReport {
    pub quality: Option<String>,
    pub logic: Option<String>,
    pub risk: Option<String>,
    pub alternatives: Option<String>,
}

impl ValidationReport {
    pub fn parse(text: &str) -> Self {
        let mut out = Self::default();
        scan_tagged_lines(
            text,
            &mut out,
            &[
                ("QUALITY", |o: &mut Self, v| o.quality = non_empty_upper(v)),
                ("LOGIC", |o: &mut Self, v| o.logic = non_empty_upper(v)),
                ("RISK", |o: &mut Self, v| o.risk = non_empty_upper(v)),
                ("ALTERNATIVES", |o: &mut Self, v| {
                    o.alternatives = Some(v.to_string()).filter(|s| !s.is_empty())
                }),
            ],
        );
        out
    }

    pub fn passed(&self) -> Option<bool> {
        self.quality.as_deref().map(|q| q == "PASS")
    }
}

fn non_empty_upper(v: &str) -> Option<String> {
    Some(v.to_uppercase()).filter(|s| !s.is_empty())
}

// ============= Market context =============

pub fn parse_market_context(text: &str) -> MarketContext {
    let mut out = MarketContext::default();
    scan_tagged_lines(
        text,
        &mut out,
        &[
            ("TREND", |o: &mut MarketContext, v| {
                if let Ok(trend) = v.parse::<Trend>() {
                    o.trend = trend;
                }
            }),
            ("VOLUME", |o: &mut MarketContext, v| {
                if let Ok(profile) = v.parse::<VolumeProfile>() {
                    o.volume_profile = profile;
                }
            }),
            ("SUPPORT", |o: &mut MarketContext, v| o.support_levels = parse_levels(v)),
            ("RESISTANCE", |o: &mut MarketContext, v| o.resistance_levels = parse_levels(v)),
            ("PATTERNS", |o: &mut MarketContext, v| {
                o.patterns = v
                    .split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(str::to_string)
                    .collect();
            }),
        ],
    );
    out
}

/// Comma-separated price levels; entries that are not numbers are skipped.
fn parse_levels(v: &str) -> Vec<f64> {
    v.split(',')
        .map(|x| x.trim().trim_start_matches('$'))
        .filter_map(|x| x.parse::<f64>().ok())
        .collect()
}

//! User preferences and their string boundary.
//!
//! Every enum here parses from console input through `FromStr` and prints
//! back through `Display`; nothing else in the crate handles the raw strings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::constants::market;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Low,
    #[default]
    Medium,
    High,
}

impl FromStr for RiskTolerance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(RiskTolerance::Low),
            "medium" => Ok(RiskTolerance::Medium),
            "high" => Ok(RiskTolerance::High),
            other => Err(format!("unknown risk tolerance '{}'", other)),
        }
    }
}

impl fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskTolerance::Low => "low",
            RiskTolerance::Medium => "medium",
            RiskTolerance::High => "high",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Indicator {
    Rsi,
    Macd,
    Sma,
    Volume,
    Bollinger,
}

impl FromStr for Indicator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "RSI" => Ok(Indicator::Rsi),
            "MACD" => Ok(Indicator::Macd),
            "SMA" => Ok(Indicator::Sma),
            "VOLUME" => Ok(Indicator::Volume),
            "BOLLINGER" => Ok(Indicator::Bollinger),
            other => Err(format!("unknown indicator '{}'", other)),
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Indicator::Rsi => "RSI",
            Indicator::Macd => "MACD",
            Indicator::Sma => "SMA",
            Indicator::Volume => "VOLUME",
            Indicator::Bollinger => "BOLLINGER",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestmentHorizon {
    Short,
    #[default]
    Medium,
    Long,
}

impl InvestmentHorizon {
    /// Days of daily history fetched for this horizon.
    pub fn lookback_days(&self) -> i64 {
        match self {
            InvestmentHorizon::Short => market::SHORT_HORIZON_DAYS,
            InvestmentHorizon::Medium => market::MEDIUM_HORIZON_DAYS,
            InvestmentHorizon::Long => market::LONG_HORIZON_DAYS,
        }
    }
}

impl FromStr for InvestmentHorizon {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "short" => Ok(InvestmentHorizon::Short),
            "medium" => Ok(InvestmentHorizon::Medium),
            "long" => Ok(InvestmentHorizon::Long),
            other => Err(format!("unknown investment horizon '{}'", other)),
        }
    }
}

impl fmt::Display for InvestmentHorizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InvestmentHorizon::Short => "short",
            InvestmentHorizon::Medium => "medium",
            InvestmentHorizon::Long => "long",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationFrequency {
    #[default]
    RealTime,
    Daily,
    Weekly,
}

impl FromStr for NotificationFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "real-time" | "realtime" => Ok(NotificationFrequency::RealTime),
            "daily" => Ok(NotificationFrequency::Daily),
            "weekly" => Ok(NotificationFrequency::Weekly),
            other => Err(format!("unknown notification frequency '{}'", other)),
        }
    }
}

impl fmt::Display for NotificationFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NotificationFrequency::RealTime => "real-time",
            NotificationFrequency::Daily => "daily",
            NotificationFrequency::Weekly => "weekly",
        };
        f.write_str(s)
    }
}

pub const DEFAULT_MAX_RISK_PERCENTAGE: f64 = 0.7;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub risk_tolerance: RiskTolerance,
    pub preferred_indicators: BTreeSet<Indicator>,
    pub investment_horizon: InvestmentHorizon,
    /// Fraction in [0, 1]
    pub max_risk_percentage: f64,
    pub notification_frequency: NotificationFrequency,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            risk_tolerance: RiskTolerance::default(),
            preferred_indicators: default_indicators(),
            investment_horizon: InvestmentHorizon::default(),
            max_risk_percentage: DEFAULT_MAX_RISK_PERCENTAGE,
            notification_frequency: NotificationFrequency::default(),
        }
    }
}

pub fn default_indicators() -> BTreeSet<Indicator> {
    [Indicator::Rsi, Indicator::Macd, Indicator::Sma].into_iter().collect()
}

impl UserPreferences {
    /// Build preferences from raw console answers.
    ///
    /// Blank answers take the default. Unknown values fall back to the default
    /// as well, and are returned in the second tuple element so the caller can
    /// tell the user what was ignored.
    pub fn from_answers(
        risk_tolerance: &str,
        indicators: &str,
        horizon: &str,
        max_risk: &str,
        notifications: &str,
    ) -> (Self, Vec<String>) {
        let mut rejected = Vec::new();

        let risk_tolerance = parse_or_default(risk_tolerance, &mut rejected);
        let investment_horizon = parse_or_default(horizon, &mut rejected);
        let notification_frequency = parse_or_default(notifications, &mut rejected);

        let mut preferred_indicators = BTreeSet::new();
        for token in indicators.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            match token.parse::<Indicator>() {
                Ok(indicator) => {
                    preferred_indicators.insert(indicator);
                }
                Err(e) => rejected.push(e),
            }
        }
        if preferred_indicators.is_empty() {
            preferred_indicators = default_indicators();
        }

        let max_risk_percentage = match max_risk.trim() {
            "" => DEFAULT_MAX_RISK_PERCENTAGE,
            raw => match raw.parse::<f64>() {
                Ok(v) if (0.0..=1.0).contains(&v) => v,
                _ => {
                    rejected.push(format!("max risk percentage '{}' is not in [0, 1]", raw));
                    DEFAULT_MAX_RISK_PERCENTAGE
                }
            },
        };

        let prefs = Self {
            risk_tolerance,
            preferred_indicators,
            investment_horizon,
            max_risk_percentage,
            notification_frequency,
        };
        (prefs, rejected)
    }

    /// Comma-joined indicator list, e.g. `RSI,MACD,SMA`.
    pub fn indicator_list(&self) -> String {
        self.preferred_indicators
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

fn parse_or_default<T>(raw: &str, rejected: &mut Vec<String>) -> T
where
    T: FromStr<Err = String> + Default,
{
    if raw.trim().is_empty() {
        return T::default();
    }
    raw.parse().unwrap_or_else(|e| {
        rejected.push(e);
        T::default()
    })
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Snapshot of the latest indicator values. Computed fresh for every analysis.
///
/// Fields are NaN when the series was too short; serde_json writes those as
/// `null`, so they are read back as NaN.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TechnicalIndicators {
    #[serde(deserialize_with = "nan_if_null")]
    pub rsi: f64,
    #[serde(deserialize_with = "nan_if_null")]
    pub macd: f64,
    #[serde(deserialize_with = "nan_if_null")]
    pub sma_20: f64,
    #[serde(deserialize_with = "nan_if_null")]
    pub volume_trend: f64,
}

fn nan_if_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// Parallel, chronologically ordered close/volume/date series.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
    pub prices: Vec<f64>,
    pub volumes: Vec<f64>,
    pub dates: Vec<DateTime<Utc>>,
}

impl MarketData {
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Simple period-over-period returns of the close series.
    pub fn returns(&self) -> Vec<f64> {
        self.prices
            .windows(2)
            .filter(|w| w[0] != 0.0)
            .map(|w| (w[1] - w[0]) / w[0])
            .collect()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Buy,
    Sell,
    #[default]
    Hold,
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BUY" => Ok(Action::Buy),
            "SELL" => Ok(Action::Sell),
            "HOLD" => Ok(Action::Hold),
            other => Err(format!("unknown action '{}'", other)),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Buy => "BUY",
            Action::Sell => "SELL",
            Action::Hold => "HOLD",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub action: Action,
    /// In [0, 1]
    pub confidence: f64,
    /// In [0, 1]
    pub risk_score: f64,
    pub reasoning: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Sideways,
}

impl FromStr for Trend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "UP" => Ok(Trend::Up),
            "DOWN" => Ok(Trend::Down),
            "SIDEWAYS" => Ok(Trend::Sideways),
            other => Err(format!("unknown trend '{}'", other)),
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Trend::Up => "UP",
            Trend::Down => "DOWN",
            Trend::Sideways => "SIDEWAYS",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VolumeProfile {
    Increasing,
    Decreasing,
    #[default]
    Stable,
}

impl FromStr for VolumeProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "INCREASING" => Ok(VolumeProfile::Increasing),
            "DECREASING" => Ok(VolumeProfile::Decreasing),
            "STABLE" => Ok(VolumeProfile::Stable),
            other => Err(format!("unknown volume profile '{}'", other)),
        }
    }
}

impl fmt::Display for VolumeProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            VolumeProfile::Increasing => "INCREASING",
            VolumeProfile::Decreasing => "DECREASING",
            VolumeProfile::Stable => "STABLE",
        };
        f.write_str(s)
    }
}

/// Model's qualitative read of the market, parsed from the context prompt.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketContext {
    pub trend: Trend,
    pub volume_profile: VolumeProfile,
    pub support_levels: Vec<f64>,
    pub resistance_levels: Vec<f64>,
    pub patterns: Vec<String>,
}

/// One complete orchestration run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub symbol: String,
    pub timestamp: DateTime<Utc>,
    pub technical_analysis: TechnicalIndicators,
    pub market_data: MarketData,
    pub decision: Decision,
    #[serde(default)]
    pub market_context: MarketContext,
    /// Payload of the previous analysis for this symbol, if any
    #[serde(default)]
    pub memory_context: Option<Value>,
}

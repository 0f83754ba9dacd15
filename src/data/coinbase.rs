use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use super::symbols::to_coinbase_product_id;
use super::MarketDataSource;
use crate::config::MarketDataConfig;
use crate::constants::market::MAX_CANDLES_PER_REQUEST;
use crate::error::{AnalyzerError, Result};
use crate::models::MarketData;
use crate::preferences::InvestmentHorizon;

/// One Coinbase candle: `[time, low, high, open, close, volume]`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Candle(pub i64, pub f64, pub f64, pub f64, pub f64, pub f64);

impl Candle {
    pub fn time(&self) -> i64 {
        self.0
    }
    pub fn close(&self) -> f64 {
        self.4
    }
    pub fn volume(&self) -> f64 {
        self.5
    }
}

/// Coinbase Exchange public candles. No credentials needed.
#[derive(Clone)]
pub struct CoinbaseMarketData {
    client: Client,
    base_url: String,
    granularity_secs: i64,
}

impl CoinbaseMarketData {
    pub fn new(config: &MarketDataConfig, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("crypto_analyzer/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            granularity_secs: config.granularity_secs,
        })
    }

    async fn get_candles(
        &self,
        product_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Candle>> {
        let url = format!("{}/products/{}/candles", self.base_url, product_id);
        let resp = self
            .client
            .get(&url)
            .query(&[
                ("granularity", self.granularity_secs.to_string()),
                ("start", start.to_rfc3339()),
                ("end", end.to_rfc3339()),
            ])
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(AnalyzerError::MarketData {
                status: status.as_u16(),
                body: text,
            });
        }

        let candles: Vec<Candle> = serde_json::from_str(&text)?;
        Ok(candles)
    }
}

#[async_trait]
impl MarketDataSource for CoinbaseMarketData {
    fn name(&self) -> &'static str {
        "coinbase"
    }

    async fn fetch_history(&self, symbol: &str, horizon: InvestmentHorizon) -> Result<MarketData> {
        let product_id = to_coinbase_product_id(symbol);
        let end = Utc::now();
        let start = end - Duration::days(horizon.lookback_days());

        info!("📊 [MARKET] Fetching {} candles for {} ({} days)", self.name(), product_id, horizon.lookback_days());

        let mut candles = Vec::new();
        for (chunk_start, chunk_end) in request_windows(start, end, self.granularity_secs) {
            let chunk = self.get_candles(&product_id, chunk_start, chunk_end).await?;
            debug!("📊 [MARKET] {} candles in {} .. {}", chunk.len(), chunk_start, chunk_end);
            candles.extend(chunk);
        }

        let data = candles_to_market_data(candles);
        info!("📊 [MARKET] {} observations for {}", data.len(), product_id);
        Ok(data)
    }
}

/// Split `[start, end)` into back-to-back request windows of at most
/// `MAX_CANDLES_PER_REQUEST` candles each. Empty when `start >= end` or the
/// granularity is not positive.
pub fn request_windows(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    granularity_secs: i64,
) -> Vec<(DateTime<Utc>, DateTime<Utc>)> {
    if granularity_secs <= 0 {
        return Vec::new();
    }
    let window = Duration::seconds(granularity_secs * MAX_CANDLES_PER_REQUEST);

    let mut windows = Vec::new();
    let mut chunk_start = start;
    while chunk_start < end {
        let chunk_end = (chunk_start + window).min(end);
        windows.push((chunk_start, chunk_end));
        chunk_start = chunk_end;
    }
    windows
}

/// Sort candles oldest first, drop duplicate timestamps, and split them into
/// parallel series.
pub fn candles_to_market_data(mut candles: Vec<Candle>) -> MarketData {
    candles.sort_by_key(Candle::time);
    candles.dedup_by_key(|c| c.time());

    let mut data = MarketData::default();
    for candle in candles {
        let Some(date) = DateTime::from_timestamp(candle.time(), 0) else {
            continue;
        };
        data.prices.push(candle.close());
        data.volumes.push(candle.volume());
        data.dates.push(date);
    }
    data
}

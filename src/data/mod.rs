pub mod coinbase;
pub mod store;
pub mod symbols;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::MarketData;
use crate::preferences::InvestmentHorizon;

/// Source of chronologically ordered close/volume history.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    fn name(&self) -> &'static str;

    async fn fetch_history(&self, symbol: &str, horizon: InvestmentHorizon) -> Result<MarketData>;
}

#[cfg(test)]
mod coinbase_tests;

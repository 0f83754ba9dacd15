use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde_json::Value;
use std::sync::Arc;

use crate::constants::memory::HISTORICAL_SUFFIX;

/// Key under which the latest analysis of `symbol` is remembered.
pub fn historical_key(symbol: &str) -> String {
    format!("{}{}", symbol, HISTORICAL_SUFFIX)
}

#[derive(Clone, Debug, PartialEq)]
pub struct MemoryEntry {
    pub data: Value,
    pub context: String,
    pub timestamp: DateTime<Utc>,
}

/// Key-value memory of prior analyses.
///
/// `store` is an unconditional upsert. `context` is recorded on store but does
/// not take part in lookup.
#[async_trait]
pub trait MemoryBackend: Send + Sync {
    async fn store(&self, key: &str, data: Value, context: &str);
    async fn retrieve(&self, key: &str, context: &str) -> Option<Value>;
}

/// Process-lifetime memory. No eviction, no expiry.
#[derive(Clone, Debug, Default)]
pub struct InMemoryStore {
    entries: Arc<DashMap<String, MemoryEntry>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, key: &str) -> Option<MemoryEntry> {
        self.entries.get(key).map(|e| e.value().clone())
    }
}

#[async_trait]
impl MemoryBackend for InMemoryStore {
    async fn store(&self, key: &str, data: Value, context: &str) {
        self.entries.insert(
            key.to_string(),
            MemoryEntry {
                data,
                context: context.to_string(),
                timestamp: Utc::now(),
            },
        );
    }

    async fn retrieve(&self, key: &str, _context: &str) -> Option<Value> {
        self.entries.get(key).map(|e| e.data.clone())
    }
}

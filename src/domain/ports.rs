use crate::domain::model::RhymeKey;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashSet;
use std::time::Duration;

/// Word-relations service queried for near rhymes.
///
/// Returns the raw entries; shape checking happens in `core::filter` so a
/// single malformed entry never fails the whole lookup.
#[async_trait]
pub trait RhymeSource: Send + Sync {
    async fn rhymes_for(&self, key: &RhymeKey) -> Result<Vec<serde_json::Value>>;
}

/// Static list of common English nouns.
#[async_trait]
pub trait NounSource: Send + Sync {
    async fn fetch_nouns(&self) -> Result<HashSet<String>>;
}

/// Thresholds applied to raw rhyme entries. Each comparison is strict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRules {
    pub min_score: i64,
    pub max_syllables: u64,
    pub min_word_length: usize,
    pub noun_tag: String,
}

impl Default for FilterRules {
    fn default() -> Self {
        Self {
            min_score: 90,
            max_syllables: 3,
            min_word_length: 3,
            noun_tag: "n".to_string(),
        }
    }
}

pub trait ConfigProvider: Send + Sync {
    fn rhyme_endpoint(&self) -> &str;
    fn max_results(&self) -> u64;
    fn noun_list_url(&self) -> &str;
    fn noun_filter_enabled(&self) -> bool;
    fn request_timeout(&self) -> Duration;
    fn filter_rules(&self) -> &FilterRules;
    fn seed(&self) -> Option<u64>;
}

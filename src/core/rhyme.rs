use crate::core::filter::filter_candidates;
use crate::core::nouns::CommonNounFilter;
use crate::core::syllable::derive_alternate_key;
use crate::domain::model::{Candidate, RhymeKey};
use crate::domain::ports::{ConfigProvider, FilterRules, NounSource, RhymeSource};
use crate::utils::error::Result;

/// Looks up rhymes for a key, falling back to the alternate key and then
/// narrowing to common nouns.
pub struct RhymeClient<S: RhymeSource, N: NounSource> {
    source: S,
    nouns: Option<CommonNounFilter<N>>,
    rules: FilterRules,
}

impl<S: RhymeSource, N: NounSource> RhymeClient<S, N> {
    pub fn new(source: S, nouns: N, rules: FilterRules) -> Self {
        Self {
            source,
            nouns: Some(CommonNounFilter::new(nouns)),
            rules,
        }
    }

    pub fn from_config<C: ConfigProvider>(source: S, nouns: N, config: &C) -> Self {
        let mut client = Self::new(source, nouns, config.filter_rules().clone());
        if !config.noun_filter_enabled() {
            client.nouns = None;
        }
        client
    }

    /// An empty result means no rhyme was found for either key. Errors from
    /// the rhyme service are returned; the noun list never fails a lookup.
    pub async fn fetch_candidates(&self, key: &RhymeKey) -> Result<Vec<Candidate>> {
        let mut candidates = self.lookup(key).await?;

        if candidates.is_empty() {
            let alternate = derive_alternate_key(key);
            if alternate == *key {
                tracing::debug!("Alternate key for '{}' is identical, not retrying", key);
            } else {
                tracing::info!("No rhymes for '{}', retrying with '{}'", key, alternate);
                candidates = self.lookup(&alternate).await?;
            }
        }

        if candidates.is_empty() {
            return Ok(candidates);
        }

        Ok(match &self.nouns {
            Some(filter) => filter.restrict(candidates).await,
            None => candidates,
        })
    }

    async fn lookup(&self, key: &RhymeKey) -> Result<Vec<Candidate>> {
        let entries = self.source.rhymes_for(key).await?;
        let candidates = filter_candidates(&entries, &self.rules);
        tracing::debug!(
            "Key '{}': {} entries, {} kept",
            key,
            entries.len(),
            candidates.len()
        );
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::LimerickError;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::collections::{HashMap, HashSet};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockRhymes {
        responses: HashMap<String, Vec<Value>>,
        queried: Arc<Mutex<Vec<String>>>,
        fail: bool,
    }

    impl MockRhymes {
        fn with(mut self, key: &str, entries: Vec<Value>) -> Self {
            self.responses.insert(key.to_string(), entries);
            self
        }

        fn queried(&self) -> Vec<String> {
            self.queried.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RhymeSource for MockRhymes {
        async fn rhymes_for(&self, key: &RhymeKey) -> Result<Vec<Value>> {
            self.queried.lock().unwrap().push(key.as_str().to_string());
            if self.fail {
                return Err(LimerickError::StatusError {
                    url: "http://rhymes.test/words".to_string(),
                    status: 500,
                });
            }
            Ok(self.responses.get(key.as_str()).cloned().unwrap_or_default())
        }
    }

    #[derive(Clone, Default)]
    struct MockNouns {
        words: Vec<&'static str>,
        fetches: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl NounSource for MockNouns {
        async fn fetch_nouns(&self) -> Result<HashSet<String>> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(self.words.iter().map(|w| w.to_string()).collect())
        }
    }

    fn entry(word: &str) -> Value {
        json!({"word": word, "score": 95, "numSyllables": 2, "tags": ["n"]})
    }

    fn words(candidates: &[Candidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.word.as_str()).collect()
    }

    #[tokio::test]
    async fn test_primary_key_hit_is_narrowed_to_nouns() {
        let rhymes = MockRhymes::default().with("na", vec![entry("tuna"), entry("kahuna")]);
        let nouns = MockNouns {
            words: vec!["tuna"],
            ..Default::default()
        };
        let client = RhymeClient::new(rhymes.clone(), nouns.clone(), FilterRules::default());

        let found = client.fetch_candidates(&RhymeKey::new("na")).await.unwrap();
        assert_eq!(words(&found), vec!["tuna"]);
        assert_eq!(rhymes.queried(), vec!["na"]);
        assert_eq!(nouns.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_falls_back_to_alternate_key() {
        let rhymes = MockRhymes::default()
            .with("bert", vec![entry("hi")])
            .with("ert", vec![entry("dessert")]);
        let client = RhymeClient::new(rhymes.clone(), MockNouns::default(), FilterRules::default());

        let found = client.fetch_candidates(&RhymeKey::new("bert")).await.unwrap();
        assert_eq!(words(&found), vec!["dessert"]);
        assert_eq!(rhymes.queried(), vec!["bert", "ert"]);
    }

    #[tokio::test]
    async fn test_no_match_skips_noun_list() {
        let rhymes = MockRhymes::default();
        let nouns = MockNouns::default();
        let client = RhymeClient::new(rhymes.clone(), nouns.clone(), FilterRules::default());

        let found = client.fetch_candidates(&RhymeKey::new("na")).await.unwrap();
        assert!(found.is_empty());
        assert_eq!(rhymes.queried(), vec!["na", "a"]);
        assert_eq!(nouns.fetches.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_identical_alternate_key_is_not_requeried() {
        let rhymes = MockRhymes::default();
        let client = RhymeClient::new(rhymes.clone(), MockNouns::default(), FilterRules::default());

        let found = client.fetch_candidates(&RhymeKey::new("ert")).await.unwrap();
        assert!(found.is_empty());
        assert_eq!(rhymes.queried(), vec!["ert"]);
    }

    #[tokio::test]
    async fn test_service_failure_is_returned() {
        let rhymes = MockRhymes {
            fail: true,
            ..Default::default()
        };
        let client = RhymeClient::new(rhymes, MockNouns::default(), FilterRules::default());

        let err = client.fetch_candidates(&RhymeKey::new("na")).await.unwrap_err();
        assert!(err.is_network());
    }
}

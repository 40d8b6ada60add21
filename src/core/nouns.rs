use crate::domain::model::Candidate;
use crate::domain::ports::NounSource;
use std::collections::HashSet;

/// Narrows candidates to recognizable nouns, when that leaves any.
pub struct CommonNounFilter<N: NounSource> {
    source: N,
}

impl<N: NounSource> CommonNounFilter<N> {
    pub fn new(source: N) -> Self {
        Self { source }
    }

    /// The noun list is fetched on every call. If it cannot be fetched, or
    /// no candidate is on it, the candidates are returned unchanged.
    pub async fn restrict(&self, candidates: Vec<Candidate>) -> Vec<Candidate> {
        let nouns = match self.source.fetch_nouns().await {
            Ok(nouns) => nouns,
            Err(e) => {
                tracing::warn!("Noun list unavailable, keeping all rhymes: {}", e);
                return candidates;
            }
        };

        let common = intersect(&candidates, &nouns);
        tracing::debug!(
            "{} of {} rhymes are common nouns",
            common.len(),
            candidates.len()
        );
        if common.is_empty() {
            candidates
        } else {
            common
        }
    }
}

/// Candidates whose word is in `nouns`, exact and case-sensitive.
pub fn intersect(candidates: &[Candidate], nouns: &HashSet<String>) -> Vec<Candidate> {
    candidates
        .iter()
        .filter(|candidate| nouns.contains(&candidate.word))
        .cloned()
        .collect()
}

use crate::domain::model::Candidate;
use crate::domain::ports::FilterRules;
use serde_json::Value;
use thiserror::Error;

/// Why a raw rhyme entry could not be read as a [`Candidate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntryRejection {
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("field `{0}` has an unexpected type")]
    WrongType(&'static str),
}

fn field<'a>(entry: &'a Value, name: &'static str) -> Result<&'a Value, EntryRejection> {
    entry.get(name).ok_or(EntryRejection::MissingField(name))
}

pub fn parse_entry(entry: &Value) -> Result<Candidate, EntryRejection> {
    let word = field(entry, "word")?
        .as_str()
        .ok_or(EntryRejection::WrongType("word"))?;
    let score = field(entry, "score")?
        .as_f64()
        .ok_or(EntryRejection::WrongType("score"))?;
    let num_syllables = field(entry, "numSyllables")?
        .as_u64()
        .ok_or(EntryRejection::WrongType("numSyllables"))?;
    let tags = field(entry, "tags")?
        .as_array()
        .ok_or(EntryRejection::WrongType("tags"))?
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect();

    Ok(Candidate {
        word: word.to_string(),
        score,
        num_syllables,
        tags,
    })
}

pub fn accepts(rules: &FilterRules, candidate: &Candidate) -> bool {
    candidate.score > rules.min_score as f64
        && candidate.tags.iter().any(|tag| *tag == rules.noun_tag)
        && candidate.num_syllables < rules.max_syllables
        && candidate.word.chars().count() > rules.min_word_length
}

/// Keeps well-formed entries that pass every rule, in service order.
/// Malformed entries are skipped.
pub fn filter_candidates(entries: &[Value], rules: &FilterRules) -> Vec<Candidate> {
    entries
        .iter()
        .filter_map(|entry| match parse_entry(entry) {
            Ok(candidate) => Some(candidate),
            Err(rejection) => {
                tracing::debug!("Skipping rhyme entry {}: {}", entry, rejection);
                None
            }
        })
        .filter(|candidate| accepts(rules, candidate))
        .collect()
}

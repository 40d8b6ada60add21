use crate::domain::model::Candidate;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Uniformly random word from `candidates`, or `None` when there are none.
pub fn pick_one<'a, R: Rng + ?Sized>(rng: &mut R, candidates: &'a [Candidate]) -> Option<&'a str> {
    candidates.choose(rng).map(|candidate| candidate.word.as_str())
}

pub mod filter;
pub mod limerick;
pub mod name;
pub mod nouns;
pub mod prompt;
pub mod rhyme;
pub mod selector;
pub mod session;
pub mod syllable;

pub use crate::domain::model::{Candidate, Limerick, Name, RhymeKey, SessionState};
pub use crate::domain::ports::{ConfigProvider, FilterRules, NounSource, RhymeSource};
pub use crate::utils::error::Result;

use std::fmt;

/// A validated, capitalized name: only alphabetic characters, first letter
/// uppercase and the rest lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(String);

impl Name {
    /// Only `core::name::normalize` may build one, so the invariant holds.
    pub(crate) fn new_unchecked(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Terminal sound of a name, used only as a lookup key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RhymeKey(String);

impl RhymeKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RhymeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A word returned by the rhyme service, with the metadata the filter needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub word: String,
    pub score: f64,
    pub num_syllables: u64,
    pub tags: Vec<String>,
}

/// Five rendered lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limerick {
    pub lines: [String; 5],
}

impl fmt::Display for Limerick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

/// State carried through the interactive loop and handed back when it ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub keep_playing: bool,
    pub last_name: Option<Name>,
    pub rounds_played: usize,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            keep_playing: true,
            last_name: None,
            rounds_played: 0,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

//! Rhyme keys are approximated from the spelling of a name.
//!
//! The primary key runs from the last vowel of the name to its end, plus
//! the letter just before that vowel. The alternate key drops that extra
//! letter and is used when the primary key finds nothing.

use crate::domain::model::{Name, RhymeKey};

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c.to_ascii_lowercase())
}

/// Byte offset of the last vowel in `text`, if any.
fn last_vowel(text: &str) -> Option<usize> {
    text.char_indices()
        .rev()
        .find(|(_, c)| is_vowel(*c))
        .map(|(i, _)| i)
}

/// Names shorter than three letters are used whole. A vowel in first
/// position has no preceding letter, so the key starts at the vowel.
/// A name without vowels is used whole.
pub fn derive_key(name: &Name) -> RhymeKey {
    let text = name.as_str();
    if text.chars().count() < 3 {
        return RhymeKey::new(text);
    }

    let start = match last_vowel(text) {
        Some(vowel) => text[..vowel]
            .char_indices()
            .next_back()
            .map_or(vowel, |(i, _)| i),
        None => 0,
    };
    RhymeKey::new(&text[start..])
}

/// Looser fallback: from the last vowel of `key` to its end.
pub fn derive_alternate_key(key: &RhymeKey) -> RhymeKey {
    let text = key.as_str();
    let start = last_vowel(text).unwrap_or(0);
    RhymeKey::new(&text[start..])
}

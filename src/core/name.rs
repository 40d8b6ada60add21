use crate::domain::model::Name;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("name is empty")]
    Empty,

    #[error("name contains non-letter characters")]
    NonAlphabetic,
}

/// Uppercase the first character and lowercase the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Validates raw user input and returns it as a capitalized [`Name`].
pub fn normalize(raw: &str) -> Result<Name, NameError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(NameError::Empty);
    }
    if !trimmed.chars().all(char::is_alphabetic) {
        return Err(NameError::NonAlphabetic);
    }
    Ok(Name::new_unchecked(capitalize(trimmed)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("deBOLEENA"), "Deboleena");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("éLODIE"), "Élodie");
    }

    #[test]
    fn test_normalize_accepts_letters_only() {
        assert_eq!(normalize("robert").unwrap().as_str(), "Robert");
        assert_eq!(normalize("  ANNA\n").unwrap().as_str(), "Anna");
        assert_eq!(normalize("a").unwrap().as_str(), "A");
    }

    #[test]
    fn test_normalize_rejects_invalid_input() {
        assert_eq!(normalize(""), Err(NameError::Empty));
        assert_eq!(normalize("   "), Err(NameError::Empty));
        assert_eq!(normalize("R2D2"), Err(NameError::NonAlphabetic));
        assert_eq!(normalize("Mary Ann"), Err(NameError::NonAlphabetic));
        assert_eq!(normalize("o'brien"), Err(NameError::NonAlphabetic));
    }

    #[test]
    fn test_normalized_name_is_alphabetic_and_capitalized() {
        for raw in ["zoe", "ZOE", "zOe", "Zoe"] {
            let name = normalize(raw).unwrap();
            assert!(name.as_str().chars().all(char::is_alphabetic));
            assert!(name.as_str().chars().next().unwrap().is_uppercase());
            assert_eq!(name.as_str(), "Zoe");
        }
    }
}

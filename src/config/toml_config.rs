use crate::config::Settings;
use crate::utils::error::{LimerickError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional configuration file. Every key may be omitted.
///
/// ```toml
/// [rhyme]
/// endpoint = "https://api.datamuse.com/words"
/// max_results = 100
/// timeout_seconds = 10
///
/// [nouns]
/// url = "http://www.desiquintans.com/downloads/nounlist/nounlist.txt"
/// enabled = true
///
/// [filter]
/// min_score = 90
/// max_syllables = 3
/// min_word_length = 3
/// noun_tag = "n"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub rhyme: Option<RhymeSection>,
    pub nouns: Option<NounSection>,
    pub filter: Option<FilterSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RhymeSection {
    pub endpoint: Option<String>,
    pub max_results: Option<u64>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NounSection {
    pub url: Option<String>,
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterSection {
    pub min_score: Option<i64>,
    pub max_syllables: Option<u64>,
    pub min_word_length: Option<usize>,
    pub noun_tag: Option<String>,
}

impl TomlConfig {
    /// Reads and parses a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| LimerickError::ConfigError {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Overwrites every key present in the file.
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(rhyme) = &self.rhyme {
            if let Some(endpoint) = &rhyme.endpoint {
                settings.rhyme_endpoint = endpoint.clone();
            }
            if let Some(max_results) = rhyme.max_results {
                settings.max_results = max_results;
            }
            if let Some(timeout) = rhyme.timeout_seconds {
                settings.timeout_seconds = timeout;
            }
        }

        if let Some(nouns) = &self.nouns {
            if let Some(url) = &nouns.url {
                settings.noun_list_url = url.clone();
            }
            if let Some(enabled) = nouns.enabled {
                settings.noun_filter_enabled = enabled;
            }
        }

        if let Some(filter) = &self.filter {
            if let Some(min_score) = filter.min_score {
                settings.filter.min_score = min_score;
            }
            if let Some(max_syllables) = filter.max_syllables {
                settings.filter.max_syllables = max_syllables;
            }
            if let Some(min_word_length) = filter.min_word_length {
                settings.filter.min_word_length = min_word_length;
            }
            if let Some(tag) = &filter.noun_tag {
                settings.filter.noun_tag = tag.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_overrides_only_given_keys() {
        let config = TomlConfig::from_toml_str(
            r#"
[rhyme]
timeout_seconds = 3

[filter]
min_score = 50
"#,
        )
        .unwrap();

        let mut settings = Settings::default();
        config.apply_to(&mut settings);

        assert_eq!(settings.timeout_seconds, 3);
        assert_eq!(settings.filter.min_score, 50);
        assert_eq!(settings.filter.max_syllables, 3);
        assert_eq!(settings.rhyme_endpoint, crate::config::DEFAULT_RHYME_ENDPOINT);
    }

    #[test]
    fn test_empty_file_changes_nothing() {
        let mut settings = Settings::default();
        TomlConfig::from_toml_str("").unwrap().apply_to(&mut settings);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let err = TomlConfig::from_toml_str("[rhyme\nendpoint = ").unwrap_err();
        assert!(matches!(err, LimerickError::TomlError(_)));
    }

    #[test]
    fn test_missing_file_is_a_config_error() {
        let err = TomlConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, LimerickError::ConfigError { .. }));
    }
}

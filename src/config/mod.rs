#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::{ConfigProvider, FilterRules};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use std::time::Duration;

pub const DEFAULT_RHYME_ENDPOINT: &str = "https://api.datamuse.com/words";
pub const DEFAULT_NOUN_LIST_URL: &str =
    "http://www.desiquintans.com/downloads/nounlist/nounlist.txt";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const DEFAULT_MAX_RESULTS: u64 = 100;

/// Fully resolved configuration: defaults, then the TOML file, then flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub rhyme_endpoint: String,
    pub max_results: u64,
    pub noun_list_url: String,
    pub noun_filter_enabled: bool,
    pub timeout_seconds: u64,
    pub filter: FilterRules,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rhyme_endpoint: DEFAULT_RHYME_ENDPOINT.to_string(),
            max_results: DEFAULT_MAX_RESULTS,
            noun_list_url: DEFAULT_NOUN_LIST_URL.to_string(),
            noun_filter_enabled: true,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            filter: FilterRules::default(),
            seed: None,
        }
    }
}

impl ConfigProvider for Settings {
    fn rhyme_endpoint(&self) -> &str {
        &self.rhyme_endpoint
    }

    fn max_results(&self) -> u64 {
        self.max_results
    }

    fn noun_list_url(&self) -> &str {
        &self.noun_list_url
    }

    fn noun_filter_enabled(&self) -> bool {
        self.noun_filter_enabled
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn filter_rules(&self) -> &FilterRules {
        &self.filter
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("rhyme_endpoint", &self.rhyme_endpoint)?;
        validate_positive_number("max_results", self.max_results, 1)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        validate_non_empty_string("noun_tag", &self.filter.noun_tag)?;
        if self.noun_filter_enabled {
            validate_url("noun_list_url", &self.noun_list_url)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.request_timeout(), Duration::from_secs(10));
        assert_eq!(settings.filter_rules().min_score, 90);
    }

    #[test]
    fn test_bad_values_are_rejected() {
        let settings = Settings {
            timeout_seconds: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());

        let settings = Settings {
            rhyme_endpoint: "datamuse".to_string(),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_noun_url_ignored_when_filter_disabled() {
        let settings = Settings {
            noun_list_url: String::new(),
            noun_filter_enabled: false,
            ..Settings::default()
        };
        assert!(settings.validate().is_ok());
    }
}

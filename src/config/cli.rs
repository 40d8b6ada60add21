use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "limerick-gen")]
#[command(about = "Personalized Limerick Generator: a limerick that rhymes with your name")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Datamuse-compatible `/words` endpoint
    #[arg(long)]
    pub rhyme_endpoint: Option<String>,

    /// Maximum number of rhymes requested per lookup
    #[arg(long)]
    pub max_results: Option<u64>,

    /// URL of a newline-delimited list of common nouns
    #[arg(long)]
    pub noun_list_url: Option<String>,

    /// Skip narrowing rhymes to common nouns
    #[arg(long)]
    pub no_noun_filter: bool,

    /// Timeout for each HTTP request, in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Seed for reproducible rhyme and template choices
    #[arg(long)]
    pub seed: Option<u64>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliConfig {
    /// Defaults, then the configuration file, then flags given here.
    pub fn resolve(&self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(path) = &self.config {
            tracing::debug!("Loading configuration from {}", path);
            TomlConfig::from_file(path)?.apply_to(&mut settings);
        }

        if let Some(endpoint) = &self.rhyme_endpoint {
            settings.rhyme_endpoint = endpoint.clone();
        }
        if let Some(max_results) = self.max_results {
            settings.max_results = max_results;
        }
        if let Some(url) = &self.noun_list_url {
            settings.noun_list_url = url.clone();
        }
        if self.no_noun_filter {
            settings.noun_filter_enabled = false;
        }
        if let Some(timeout) = self.timeout {
            settings.timeout_seconds = timeout;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_parse() {
        let cli = CliConfig::parse_from([
            "limerick-gen",
            "--timeout",
            "4",
            "--seed",
            "9",
            "--no-noun-filter",
            "-v",
        ]);
        assert_eq!(cli.timeout, Some(4));
        assert_eq!(cli.seed, Some(9));
        assert!(cli.no_noun_filter);
        assert!(cli.verbose);
    }

    #[test]
    fn test_resolve_without_flags_gives_defaults() {
        let settings = CliConfig::parse_from(["limerick-gen"]).resolve().unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = CliConfig {
            rhyme_endpoint: Some("http://localhost:9000/words".to_string()),
            timeout: Some(2),
            no_noun_filter: true,
            ..CliConfig::default()
        };
        let settings = cli.resolve().unwrap();
        assert_eq!(settings.rhyme_endpoint, "http://localhost:9000/words");
        assert_eq!(settings.timeout_seconds, 2);
        assert!(!settings.noun_filter_enabled);
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LimerickError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("{url} responded with status {status}")]
    StatusError { url: String, status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Input stream closed")]
    InputClosed,
}

impl LimerickError {
    /// Whether this error came from talking to a remote service.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::HttpError(_) | Self::StatusError { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::HttpError(e) if e.is_timeout() => {
                "The rhyme service took too long to answer".to_string()
            }
            Self::HttpError(_) | Self::StatusError { .. } => {
                "Unable to reach the rhyme service".to_string()
            }
            Self::IoError(e) => format!("Could not read or write the console: {}", e),
            Self::SerializationError(_) => "The rhyme service sent an unexpected reply".to_string(),
            Self::TomlError(e) => format!("The configuration file is not valid TOML: {}", e),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            Self::InputClosed => "No more input".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::HttpError(_) | Self::StatusError { .. } => {
                "Check your network connection or raise --timeout"
            }
            Self::SerializationError(_) => "Check that --rhyme-endpoint points at a Datamuse-compatible API",
            Self::TomlError(_) | Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command-line flags and try again"
            }
            Self::IoError(_) | Self::InputClosed => "Run the generator from an interactive terminal",
        }
    }
}

pub type Result<T> = std::result::Result<T, LimerickError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_is_network() {
        let err = LimerickError::StatusError {
            url: "http://localhost/words".to_string(),
            status: 503,
        };
        assert!(err.is_network());
        assert_eq!(err.to_string(), "http://localhost/words responded with status 503");
        assert!(err.recovery_suggestion().contains("network"));
    }

    #[test]
    fn test_config_error_is_not_network() {
        let err = LimerickError::ConfigError {
            message: "missing endpoint".to_string(),
        };
        assert!(!err.is_network());
        assert_eq!(err.user_friendly_message(), "Configuration problem: missing endpoint");
    }
}

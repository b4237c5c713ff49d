//! Error types for configuration loading.

use thiserror::Error;

/// Result alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Primary error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable was absent or empty.
    #[error("missing required environment variable")]
    MissingVar {
        /// Name of the absent variable.
        name: &'static str,
    },
    /// An environment variable held a value that failed to parse.
    #[error("invalid environment variable value")]
    InvalidVar {
        /// Name of the offending variable.
        name: &'static str,
        /// Offending value as provided.
        value: String,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_stay_constant() {
        let missing = ConfigError::MissingVar {
            name: "DATABASE_URL",
        };
        assert_eq!(
            missing.to_string(),
            "missing required environment variable"
        );

        let invalid = ConfigError::InvalidVar {
            name: "HTTP_PORT",
            value: "eighty".to_string(),
            reason: "not a number",
        };
        assert_eq!(invalid.to_string(), "invalid environment variable value");
    }
}

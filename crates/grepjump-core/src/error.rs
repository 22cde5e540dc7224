//! Error types shared across the grepjump crates

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Malformed editor record: {message}")]
    Record { message: String },

    // ─────────────────────────────────────────────────────────────
    // Command Construction Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Arguments template has no %1 file placeholder")]
    MissingPathPlaceholder,
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn record(message: impl Into<String>) -> Self {
        Self::Record {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::config("store unavailable");
        assert_eq!(err.to_string(), "Configuration error: store unavailable");

        let err = Error::record("expected 5 fields");
        assert_eq!(err.to_string(), "Malformed editor record: expected 5 fields");

        let err = Error::MissingPathPlaceholder;
        assert!(err.to_string().contains("%1"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}

//! Error types for the site header CLI

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
///
/// The header core never fails; these only surface from configuration,
/// file handling and argument parsing.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid command arguments
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// Site definition could not be loaded or is inconsistent
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// HTML document cannot host the header
    #[error("invalid document: {0}")]
    InvalidDocument(String),

    /// IO error
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArguments(_) => 64,   // EX_USAGE
            CliError::InvalidDocument(_) => 65,    // EX_DATAERR
            CliError::IoError(_) => 74,            // EX_IOERR
            CliError::InvalidConfig(_) => 78,      // EX_CONFIG
            CliError::SerializationError(_) => 65, // EX_DATAERR
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_arguments_returns_exit_code_64() {
        let err = CliError::InvalidArguments("test".to_string());
        assert_eq!(err.exit_code(), 64);
    }

    #[test]
    fn invalid_config_returns_exit_code_78() {
        let err = CliError::InvalidConfig("test".to_string());
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn invalid_document_returns_exit_code_65() {
        let err = CliError::InvalidDocument("test".to_string());
        assert_eq!(err.exit_code(), 65);
    }

    #[test]
    fn io_error_returns_exit_code_74() {
        let err = CliError::from(std::io::Error::other("boom"));
        assert_eq!(err.exit_code(), 74);
    }

    #[test]
    fn error_messages_carry_context() {
        let err = CliError::InvalidConfig("duplicate page key 'cart'".to_string());
        assert_eq!(err.to_string(), "invalid config: duplicate page key 'cart'");
    }
}

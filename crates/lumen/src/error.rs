//! # LUMEN Error Types
//!
//! Errors that can occur while setting up a run. The frame path itself
//! never fails: pools report exhaustion with `None` and the line buffer
//! drops what does not fit.

use thiserror::Error;

/// Errors that can occur before the first frame.
#[derive(Error, Debug)]
pub enum LumenError {
    /// The configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid TOML for [`crate::LumenConfig`].
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration parsed but holds values the renderer cannot use.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for LUMEN setup.
pub type LumenResult<T> = Result<T, LumenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_message() {
        let err = LumenError::InvalidConfig("lines.capacity must be even".to_string());
        assert_eq!(
            err.to_string(),
            "invalid configuration: lines.capacity must be even"
        );
    }

    #[test]
    fn test_io_error_converts() {
        fn open() -> LumenResult<String> {
            Ok(std::fs::read_to_string("/definitely/not/here.toml")?)
        }
        assert!(matches!(open(), Err(LumenError::Io(_))));
    }
}

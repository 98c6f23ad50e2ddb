//! Error types for the warehouse loader.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for loader operations.
#[derive(Debug, Error)]
pub enum DwhError {
    /// No settings file at any of the searched locations.
    #[error("Configuration not found (searched: {})", display_paths(.searched))]
    ConfigNotFound { searched: Vec<PathBuf> },

    /// The settings file exists but is not valid.
    #[error("Configuration error in {}: {}", .path.display(), .message)]
    Config { path: PathBuf, message: String },

    /// A settings section required by the requested operation is absent.
    #[error("Missing section [{0}] in the configuration")]
    MissingSection(&'static str),

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// A statement was rejected by the warehouse.
    #[error("Execution error in {stage} statement #{index}: {message}")]
    Execution {
        stage: String,
        index: usize,
        message: String,
    },

    /// Database error outside of a statement list (transactions, schema setup).
    #[error("Database error: {0}")]
    Database(String),
}

impl DwhError {
    /// Create an execution error for the statement at `index` (1-based) of `stage`.
    pub fn execution(stage: impl Into<String>, index: usize, message: impl Into<String>) -> Self {
        Self::Execution {
            stage: stage.into(),
            index,
            message: message.into(),
        }
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for loader operations.
pub type DwhResult<T> = Result<T, DwhError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DwhError::execution("insert", 3, "relation \"users\" does not exist");
        assert_eq!(
            err.to_string(),
            "Execution error in insert statement #3: relation \"users\" does not exist"
        );
    }

    #[test]
    fn test_not_found_lists_paths() {
        let err = DwhError::ConfigNotFound {
            searched: vec![PathBuf::from("dwh.toml"), PathBuf::from("/etc/dwh.toml")],
        };
        assert_eq!(
            err.to_string(),
            "Configuration not found (searched: dwh.toml, /etc/dwh.toml)"
        );
    }

    #[test]
    fn test_missing_section() {
        let err = DwhError::MissingSection("cluster");
        assert_eq!(err.to_string(), "Missing section [cluster] in the configuration");
    }
}

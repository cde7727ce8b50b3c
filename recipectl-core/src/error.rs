//! Structured error types for recipectl-core library.
//!
//! Uses `thiserror` for better API surface and error composition.
//! The binary crate (recipectl-cli) uses `anyhow` for convenience,
//! but library consumers get structured, composable errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for recipectl-core operations
#[derive(Error, Debug)]
pub enum RecipeError {
    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Config file exists but is not valid TOML for our schema
    #[error("Failed to parse config file {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Config could not be rendered back to TOML
    #[error("Failed to serialize config: {source}")]
    ConfigSerialize {
        #[from]
        source: toml::ser::Error,
    },

    /// An environment override holds a value we cannot use
    #[error("Invalid value for {var}: {reason}")]
    InvalidEnv { var: String, reason: String },

    /// No database is configured under the requested alias
    #[error("No database configured under alias '{alias}'")]
    UnknownDatabase { alias: String },

    /// Configuration error
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for recipectl-core operations
pub type Result<T> = std::result::Result<T, RecipeError>;

impl RecipeError {
    /// Create a config parse error
    pub fn config_parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::ConfigParse {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid environment value error
    pub fn invalid_env(var: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidEnv {
            var: var.into(),
            reason: reason.into(),
        }
    }

    /// Create an unknown database alias error
    pub fn unknown_database(alias: impl Into<String>) -> Self {
        Self::UnknownDatabase {
            alias: alias.into(),
        }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}

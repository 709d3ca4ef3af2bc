//! Commerce error types.
//!
//! Cart operations themselves never fail; these errors come from the edges
//! where untrusted values enter: prices and configuration files.

use thiserror::Error;

/// Errors that can occur around the cart.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Price is negative, not a number, or too large to represent.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Failed to read a configuration file.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML or JSON for the expected shape.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<toml::de::Error> for CommerceError {
    fn from(e: toml::de::Error) -> Self {
        CommerceError::Config(e.to_string())
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Config(e.to_string())
    }
}

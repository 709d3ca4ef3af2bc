//! Storefront configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::money::Money;

/// Storefront configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Shipping charges shown in the order summary.
    #[serde(default)]
    pub shipping: ShippingConfig,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StorefrontConfig {
    /// Load config from a file; `.json` files are read as JSON, anything
    /// else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CommerceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CommerceError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, CommerceError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), CommerceError> {
        self.shipping.flat_rate_money().map(|_| ())
    }
}

/// Shipping configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingConfig {
    /// Flat shipping charge in rupees.
    #[serde(default = "default_flat_rate")]
    pub flat_rate: f64,
}

fn default_flat_rate() -> f64 {
    200.0
}

impl Default for ShippingConfig {
    fn default() -> Self {
        Self {
            flat_rate: default_flat_rate(),
        }
    }
}

impl ShippingConfig {
    /// The flat rate as money.
    pub fn flat_rate_money(&self) -> Result<Money, CommerceError> {
        Money::from_decimal(self.flat_rate)
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Single-line output with spans inline.
    #[default]
    Compact,
    /// Multi-line human-readable output.
    Pretty,
    /// JSON lines for log aggregation.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            format: LogFormat::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(
            config.shipping.flat_rate_money().unwrap(),
            Money::from_minor(20_000)
        );
        assert_eq!(config.logging.filter, "info");
        assert_eq!(config.logging.format, LogFormat::Compact);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = StorefrontConfig::from_toml_str("").unwrap();
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_parse_toml() {
        let config = StorefrontConfig::from_toml_str(
            r#"
            [shipping]
            flat_rate = 350.5

            [logging]
            filter = "olish_commerce=debug"
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.shipping.flat_rate_money().unwrap().display(),
            "Rs.350.50"
        );
        assert_eq!(config.logging.filter, "olish_commerce=debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_negative_shipping_rejected() {
        let err = StorefrontConfig::from_toml_str("[shipping]\nflat_rate = -1.0\n").unwrap_err();
        assert!(matches!(err, CommerceError::InvalidPrice(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let err = StorefrontConfig::from_toml_str("[logging]\nformat = \"loud\"\n").unwrap_err();
        assert!(matches!(err, CommerceError::Config(_)));
    }

    #[test]
    fn test_malformed_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.json");
        std::fs::write(&path, r#"{"logging":{"format":"loud"}}"#).unwrap();

        let err = StorefrontConfig::load(&path).unwrap_err();
        assert!(matches!(err, CommerceError::Config(_)));

        std::fs::write(&path, "{ not json").unwrap();
        let err = StorefrontConfig::load(&path).unwrap_err();
        assert!(matches!(err, CommerceError::Config(_)));
    }

    #[test]
    fn test_load_json_and_toml_files() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("storefront.json");
        std::fs::write(&json_path, r#"{"shipping":{"flat_rate":150.0}}"#).unwrap();
        let config = StorefrontConfig::load(&json_path).unwrap();
        assert_eq!(config.shipping.flat_rate, 150.0);

        let toml_path = dir.path().join("storefront.toml");
        std::fs::write(&toml_path, "[logging]\nformat = \"pretty\"\n").unwrap();
        let config = StorefrontConfig::load(&toml_path).unwrap();
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_load_missing_file() {
        let err = StorefrontConfig::load("/nonexistent/olish/storefront.toml").unwrap_err();
        assert!(matches!(err, CommerceError::Io { .. }));
    }
}

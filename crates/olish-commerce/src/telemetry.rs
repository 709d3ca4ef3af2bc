//! Tracing subscriber setup.
//!
//! The cart emits `debug` events for every change and `trace` events for
//! no-op mutations and subscriptions; session start and end log at `info`.
//! `RUST_LOG` overrides the configured filter:
//!
//! ```bash
//! RUST_LOG=olish_commerce=debug cargo run
//! ```

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Install the global tracing subscriber described by `config`.
///
/// Returns `false` if a global subscriber was already installed, in which
/// case the existing one is left untouched.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let installed = match config.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_harmless() {
        let config = LoggingConfig {
            filter: "not a [valid filter".to_string(),
            format: LogFormat::Json,
        };
        // Whichever call installed the subscriber, one is in place now.
        init_tracing(&config);
        assert!(!init_tracing(&LoggingConfig::default()));
    }
}

//! Structured logging foundation.
//!
//! The codec crates only emit `tracing` events. Hosts that do not install
//! their own subscriber can call [`init_logging`] once at startup:
//!
//! ```ignore
//! use rr_common::logging::{init_logging, LogConfig};
//!
//! init_logging(&LogConfig::from_env()).ok();
//! ```
//!
//! All output goes to stderr.

pub mod config;

pub use config::{LogConfig, LogFormat, LogLevel, LOG_FORMAT_ENV, LOG_LEVEL_ENV};

use std::io::IsTerminal;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, EnvFilter};

/// Targets the configured level applies to.
const CODEC_TARGETS: &[&str] = &["rr_common", "rr_types"];

fn default_filter(level: LogLevel) -> EnvFilter {
    let directives = CODEC_TARGETS
        .iter()
        .map(|target| format!("{target}={}", LevelFilter::from(level)))
        .collect::<Vec<_>>()
        .join(",");
    EnvFilter::new(directives)
}

fn build_filter(config: &LogConfig) -> EnvFilter {
    config
        .directives
        .as_deref()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| default_filter(config.level))
}

/// Install a global subscriber for the codec crates.
///
/// The filter comes from `config` alone: its `RUST_LOG` directives if it
/// carries any, otherwise its level. Fails if a global subscriber is already
/// installed.
pub fn init_logging(config: &LogConfig) -> Result<(), TryInitError> {
    let filter = build_filter(config);

    match config.format {
        LogFormat::Human => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(std::io::stderr().is_terminal());

            if config.timestamps {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt_layer)
                    .try_init()
            } else {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt_layer.without_time())
                    .try_init()
            }
        }
        LogFormat::Jsonl => {
            let json_layer = fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false);
            tracing_subscriber::registry()
                .with(filter)
                .with(json_layer)
                .try_init()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_covers_codec_targets() {
        let filter = default_filter(LogLevel::Debug).to_string();
        assert!(filter.contains("rr_common=debug"));
        assert!(filter.contains("rr_types=debug"));
    }

    #[test]
    fn test_filter_prefers_config_directives() {
        let config = LogConfig {
            directives: Some("rr_types=trace".to_string()),
            ..LogConfig::default()
        };
        let filter = build_filter(&config).to_string();
        assert!(filter.contains("rr_types=trace"));
        assert!(!filter.contains("rr_common"));
    }

    #[test]
    fn test_filter_uses_level_without_directives() {
        let config = LogConfig::default().with_level(LogLevel::Warn);
        let filter = build_filter(&config).to_string();
        assert!(filter.contains("rr_common=warn"));
        assert!(filter.contains("rr_types=warn"));
    }

    #[test]
    fn test_second_init_is_rejected() {
        let config = LogConfig::default().with_level(LogLevel::Off);
        // The first call may lose to another test in this binary.
        let _ = init_logging(&config);
        assert!(init_logging(&config).is_err());
    }
}

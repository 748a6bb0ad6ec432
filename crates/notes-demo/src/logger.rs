//! Terminal logging using simplelog
//!
//! Log records go to stderr so stdout only carries the state snapshot.

use anyhow::{Context, Result};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

/// Map a `RUST_LOG` value to a level, Info when unrecognised
fn level_from(value: &str) -> LevelFilter {
    match value.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Initialize stderr logging, level taken from `RUST_LOG`
pub fn init() -> Result<()> {
    let level = std::env::var("RUST_LOG")
        .map(|v| level_from(&v))
        .unwrap_or(LevelFilter::Info);

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|c| c) // Fallback if local time offset fails
        .build();

    TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)
        .context("Failed to initialize logger")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_env_value() {
        assert_eq!(level_from("DEBUG"), LevelFilter::Debug);
        assert_eq!(level_from("trace"), LevelFilter::Trace);
        assert_eq!(level_from("off"), LevelFilter::Off);
        assert_eq!(level_from("verbose"), LevelFilter::Info);
    }
}

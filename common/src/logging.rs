//! Logging setup helpers.
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to the binary or test that links sift. These helpers wrap the usual
//! `tracing_subscriber::fmt()` setup so callers do not have to repeat it.

use tracing::Level;

use crate::error::{Result, SiftError};

/// Parse a level name such as `"debug"` or `"WARN"`.
pub fn parse_level(level: &str) -> Result<Level> {
    level.trim().parse::<Level>().map_err(|e| {
        SiftError::configuration_error_with_source(format!("unknown log level '{}'", level), e)
    })
}

/// Install a global fmt subscriber that prints events at `level` and above.
///
/// Fails if a global subscriber has already been installed.
pub fn try_init_tracing(level: Level) -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .try_init()
        .map_err(|e| {
            SiftError::configuration_error_with_source(
                "a global tracing subscriber is already installed",
                anyhow::anyhow!(e),
            )
        })
}

/// Install a subscriber that writes through the test harness capture.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_test_writer()
        .try_init();
}

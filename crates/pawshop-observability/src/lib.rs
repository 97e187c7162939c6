//! Logging for the Pawshop storefront.
//!
//! This crate provides:
//! - `LogEntry` - Structured log entry with JSON and human renderings
//! - `ConsoleLayer` - `tracing` layer writing entries to the browser console or stderr
//! - `init` - One-shot global subscriber setup from `LogConfig`

mod layer;
mod logging;

pub use layer::*;
pub use logging::*;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install the console layer as the global subscriber.
///
/// Returns `false` if a global subscriber was already installed; the
/// existing one is kept.
pub fn init(config: &LogConfig) -> bool {
    let level: tracing::Level = config.level.into();
    tracing_subscriber::registry()
        .with(LevelFilter::from_level(level))
        .with(ConsoleLayer::new(config.format))
        .try_init()
        .is_ok()
}

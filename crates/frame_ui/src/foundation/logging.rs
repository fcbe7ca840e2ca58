//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace, LevelFilter};

/// Initialize the logging system
///
/// `level` applies to every module; `RUST_LOG` still adds per-module filters.
/// Returns `false` if the host already installed a logger.
#[must_use]
pub fn init(level: LevelFilter) -> bool {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .try_init()
        .is_ok()
}

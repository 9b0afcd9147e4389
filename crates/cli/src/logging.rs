//! Logger initialization for the `life` binary.
//!
//! Library crates log through the `log` facade; this is the only place a
//! backend (`env_logger`) is installed.

use std::sync::Once;

static INIT: Once = Once::new();

/// Maps `-v` occurrences to a default level filter.
pub fn level_for(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    }
}

/// Initializes the global logger once; later calls are ignored.
///
/// `RUST_LOG` wins over the verbosity flag when it is set.
pub fn init_logging(verbosity: u8) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        match std::env::var("RUST_LOG") {
            Ok(filter) => {
                builder.parse_filters(&filter);
            }
            Err(_) => {
                builder.filter_level(level_for(verbosity));
            }
        }
        builder.format_timestamp_millis();
        builder.init();
        log::debug!("logging initialized");
    });
}

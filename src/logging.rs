//! Logging setup
//!
//! Events go to stderr through `tracing-subscriber`. `RUST_LOG` wins when set;
//! otherwise the level comes from `--verbose` / `--quiet`.

use std::env;
use std::sync::Once;

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Pick the crate's log level from the CLI flags. Quiet wins over verbose.
pub fn level_for(verbose: bool, quiet: bool) -> Level {
    if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

pub fn init(verbose: bool, quiet: bool) {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let filter = if env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_CRATE_NAME"),
                level_for(verbose, quiet)
            ))
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .init();
    });
}

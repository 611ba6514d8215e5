//! Logging subscriber initialisation.

use std::io;

use clap::Args;
use tracing_subscriber::{
    EnvFilter, Registry,
    layer::{Layer, SubscriberExt},
    util::{SubscriberInitExt, TryInitError},
};

/// Logging settings.
#[derive(Debug, Args)]
pub(crate) struct LoggingArgs {
    /// Filter used when `RUST_LOG` is unset (e.g. `info`, `storefront=debug`)
    #[arg(long, default_value = "info")]
    pub log_filter: String,

    /// Emit logs as JSON lines instead of compact text
    #[arg(long, env = "STOREFRONT_LOG_JSON")]
    pub json_logs: bool,
}

/// Install the global subscriber. Logs go to stderr so stdout only carries the tables.
pub(crate) fn init_subscriber(args: &LoggingArgs) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_filter));

    if args.json_logs {
        install(
            filter,
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(io::stderr),
        )
    } else {
        install(
            filter,
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(io::stderr),
        )
    }
}

fn install<L>(filter: EnvFilter, fmt_layer: L) -> Result<(), TryInitError>
where
    L: Layer<Registry> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .try_init()
}

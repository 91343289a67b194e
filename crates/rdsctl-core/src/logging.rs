//! Tracing setup for binaries built on this crate

use tracing::debug;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directive for a `-v` count
pub fn filter_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "rdsctl_core=warn",
        1 => "rdsctl_core=info",
        2 => "rdsctl_core=debug",
        _ => "rdsctl_core=trace",
    }
}

/// Install a compact fmt subscriber
///
/// `RUST_LOG` takes precedence over the verbosity level. Fails if a global
/// subscriber is already set.
pub fn init_tracing(verbose: u8) -> Result<(), TryInitError> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(filter_directive(verbose))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .compact(),
        )
        .try_init()?;

    debug!("Tracing initialized with verbosity level: {}", verbose);
    Ok(())
}

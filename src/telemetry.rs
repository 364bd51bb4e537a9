//! Tracing subscriber setup shared by the binaries.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter for the server when `RUST_LOG` is unset.
pub const SERVER_FILTER: &str = "info,calc_engine=debug";

/// Default filter for the CLI when `RUST_LOG` is unset.
pub const CLI_FILTER: &str = "warn";

/// Installs a formatted subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence over `default_filter`. Returns `false` when a
/// global subscriber was already installed; that one stays in place.
pub fn init_tracing(default_filter: &str) -> bool {
    let installed = tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();

    match installed {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!(error = %err, "Tracing subscriber already installed");
            false
        }
    }
}

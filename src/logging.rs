//! Tracing setup for the whole process.

use tracing_subscriber::EnvFilter;

/// Configure tracing once at application startup. All services and spans use
/// this configuration.
///
/// The configured level is the fallback; set `RUST_LOG` to override it, for
/// example `RUST_LOG=shop_backend::service=debug`.
pub fn setup_tracing(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}

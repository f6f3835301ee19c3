//! Tracing initialization logic.

use crate::config::{Config, DEFAULT_LOG_FILTER};
use tracing::{debug, info};
use std::io::IsTerminal;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber: a stderr fmt layer, JSON-formatted when
/// the formatted values themselves go out as JSON.
pub fn init_tracing(cfg: &Config) {
    let filter = EnvFilter::try_new(&cfg.log_filter).unwrap_or_else(|e| {
        eprintln!("Warning: Invalid log filter '{}': {e}", cfg.log_filter);
        EnvFilter::new(DEFAULT_LOG_FILTER) // Default filter on parse error
    });

    let text_layer = (!cfg.json).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .with_target(cfg.verbose)
            .with_level(true)
    });
    let json_layer = cfg.json.then(|| {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(cfg.verbose)
            .with_level(true)
    });

    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::registry()
        .with(text_layer)
        .with(json_layer)
        .with(filter)
        .try_init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        // Use option_env! for build info to avoid build errors outside a git checkout
        git_sha = option_env!("VERGEN_GIT_SHA").unwrap_or("unknown"),
        build_ts = option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown"),
        "nanofmt starting"
    );

    debug!(kind = ?cfg.kind,
        micro = ?cfg.micro,
        json = cfg.json,
        verbose = cfg.verbose,
        log_filter = %cfg.log_filter,
        "Configuration loaded");
}

//! Structured logging setup for the regolith tools.
//!
//! Console output with uptime timestamps and module paths via the `tracing`
//! ecosystem, filterable through `RUST_LOG`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter: `info` everywhere, with the noisier GPU crates muted.
const DEFAULT_FILTER: &str = "info,wgpu=warn,naga=warn";

/// Initialize the tracing subscriber.
///
/// Respects `RUST_LOG` when set; otherwise falls back to
/// [`default_env_filter`]. Call once at process startup; a second call
/// panics (the global subscriber can only be installed once).
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_env_filter());

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}

/// The default `EnvFilter` used when `RUST_LOG` is unset.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_contents() {
        let filter = format!("{}", default_env_filter());
        assert!(filter.contains("info"));
        assert!(filter.contains("wgpu=warn"));
    }

    #[test]
    fn test_common_rust_log_strings_parse() {
        for s in ["info", "debug,regolith_field=trace", "warn", "error"] {
            assert!(
                EnvFilter::try_new(s).is_ok(),
                "filter string {s:?} should parse"
            );
        }
    }
}

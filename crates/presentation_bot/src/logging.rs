//! Tracing subscriber setup

use infrastructure::{LogFormat, LoggingConfig};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Determine log filter level from verbosity count
///
/// No flag keeps the configured filter.
pub const fn filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Filter directives used when `RUST_LOG` is unset
pub fn resolve_filter(config_filter: &str, verbose: u8) -> String {
    filter_from_verbosity(verbose).map_or_else(|| config_filter.to_string(), str::to_string)
}

/// Install the global subscriber
///
/// `RUST_LOG` wins over `-v`, which wins over the configured filter.
pub fn init_tracing(config: &LoggingConfig, verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(resolve_filter(&config.filter, verbose)));

    let registry = tracing_subscriber::registry().with(filter);
    match config.format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flag_keeps_configured_filter() {
        assert_eq!(filter_from_verbosity(0), None);
        assert_eq!(resolve_filter("info,teloxide=warn", 0), "info,teloxide=warn");
    }

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(resolve_filter("info", 1), "debug");
        assert_eq!(resolve_filter("info", 2), "trace");
        assert_eq!(resolve_filter("info", 9), "trace");
    }
}

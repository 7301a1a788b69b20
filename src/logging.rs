//! Diagnostic logging
//!
//! Progress lines go to stdout; tracing output goes to stderr so the two
//! never interleave in a pipe. Set `SCAFFOLD_LOG` (an `EnvFilter`
//! directive such as `debug` or `scaffold=trace`) to see per-write events.

use std::sync::Once;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV_VAR: &str = "SCAFFOLD_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Later calls are no-ops.
pub fn init() {
    let filter = std::env::var(LOG_ENV_VAR).unwrap_or_else(|_| DEFAULT_FILTER.to_string());
    init_with_filter(&filter);
}

pub fn init_with_filter(filter: &str) {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_level(true)
            .compact()
            .with_writer(std::io::stderr);

        let filter_layer =
            EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter_layer)
            .with(fmt_layer)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_with_filter("not a [valid filter");
        init_with_filter("debug");
        tracing::debug!("still alive");
    }
}

//! Opt-in JSON tracing to a file in the host's log directory.
//!
//! Without the `trace` feature this is a no-op so release builds carry no
//! subscriber.

use std::path::Path;

#[cfg(feature = "trace")]
const TRACE_FILE: &str = "bell-trace.jsonl";

/// Used when `RUST_LOG` is unset or unparsable.
#[cfg(feature = "trace")]
const DEFAULT_FILTER: &str = "bell_engine=debug,bell_session=debug,bell_core=debug";

#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) {
    use std::sync::Once;

    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let (writer, guard) =
            tracing_appender::non_blocking(tracing_appender::rolling::never(log_dir, TRACE_FILE));
        // Flushing stops when the guard drops; the keyboard never shuts down cleanly
        std::mem::forget(guard);

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        tracing_subscriber::fmt()
            .json()
            .with_writer(writer)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_env_filter(filter)
            .init();
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &Path) {}

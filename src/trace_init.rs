#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

/// Keeps the background log writer alive. Dropping it flushes buffered
/// events and stops writing, so hold it for as long as tracing is wanted.
#[must_use = "dropping the guard stops trace output"]
pub struct TraceGuard {
    #[cfg(feature = "trace")]
    _worker: tracing_appender::non_blocking::WorkerGuard,
}

/// Install a JSON subscriber writing to `lipi-trace.jsonl` in `log_dir`.
/// Only the first call has an effect and returns the writer guard; later
/// calls return `None`. `RUST_LOG` overrides the filter.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> Option<TraceGuard> {
    let mut installed = None;
    INIT.call_once(|| {
        let file_appender = tracing_appender::rolling::never(log_dir, "lipi-trace.jsonl");
        let (non_blocking, worker) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::fmt()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new("lipi_core=debug,lipi_session=debug")
                }),
            )
            .init();
        tracing::debug!(version = crate::version(), "tracing initialised");
        installed = Some(TraceGuard { _worker: worker });
    });
    installed
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) -> Option<TraceGuard> {
    None
}

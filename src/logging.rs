//! Logging setup for the `lox-scan` binary.

use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const DEFAULT_LEVEL: &str = "warn";

/// Installs a stderr subscriber. `RUST_LOG` wins over `default_level`.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::{Event, Subscriber};
    use tracing_subscriber::layer::{Context, Layer};

    struct CountEvents(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for CountEvents {
        fn on_event(&self, _event: &Event<'_>, _ctx: Context<'_, S>) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn events_seen(level: &str, source: &str) -> usize {
        let seen = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::new(level))
            .with(CountEvents(seen.clone()));

        tracing::subscriber::with_default(subscriber, || {
            let output = lox_scanner::scan(source);
            assert!(output.had_error());
        });

        seen.load(Ordering::SeqCst)
    }

    #[test]
    fn test_default_level_keeps_scan_errors_off_stderr() {
        assert_eq!(events_seen(DEFAULT_LEVEL, "var x = @;"), 0);
    }

    #[test]
    fn test_debug_level_shows_scan_errors() {
        // One event per error plus the end-of-scan summary.
        assert_eq!(events_seen("lox_scanner=debug", "@ #"), 3);
    }
}

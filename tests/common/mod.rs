use std::sync::Once;

static INIT: Once = Once::new();

/// Routes `tracing` output through the test harness. `RUST_LOG=debug` shows
/// per-fragment and per-round events.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

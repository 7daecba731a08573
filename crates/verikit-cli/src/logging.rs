use tracing_subscriber::{prelude::*, util::SubscriberInitExt, EnvFilter};

/// Diagnostics go to stderr, filtered by `RUST_LOG`; stdout stays free for
/// `--json` output.
pub fn init() {
    tracing_subscriber::Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(std::io::stderr)
                .with_filter(EnvFilter::from_default_env()),
        )
        .init();
}

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the stderr subscriber. Tracing is opt-in via `RUST_LOG`; an
/// unset, blank or unparsable filter leaves logging off.
pub fn init() {
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|raw| {
            let raw = raw.trim();
            if raw.is_empty() {
                return None;
            }
            EnvFilter::try_new(raw).ok()
        })
        .unwrap_or_else(|| EnvFilter::new("off"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

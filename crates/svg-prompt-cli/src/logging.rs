//! Diagnostic logging to stderr.

use tracing_subscriber::EnvFilter;

/// Default filter for a given `-v` count.
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Install a stderr fmt subscriber. `RUST_LOG` takes precedence over `-v`.
///
/// Stdout is reserved for the prompt text.
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(default_directive(0), "warn");
        assert_eq!(default_directive(1), "debug");
        assert_eq!(default_directive(5), "trace");
    }
}

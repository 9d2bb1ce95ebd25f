//! Initialization that needs to be done on startup

use tracing_subscriber::EnvFilter;

/// Installs the global log subscriber.
///
/// Logs go to stderr so they never mix with the report on stdout. The filter comes from
/// `RUST_LOG` and defaults to `warn`. Calling this more than once is harmless.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_init_twice() {
        super::init();
        super::init();
    }
}

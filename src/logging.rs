//! Logging setup.
//!
//! Events go to stderr so that callers printing a book to stdout are not
//! interleaved with log output.

use crate::config::Config;
use tracing_subscriber::EnvFilter;

/// Install a global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `config.log_level` is used. Returns
/// `false` if a global subscriber was already installed, which makes repeat
/// calls harmless.
pub fn init(config: &Config) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        let config = Config::default();
        init(&config);
        assert!(!init(&config));
    }
}

//! Log output for the command line tools
//!
//! The library logs through the `log` facade. The binaries install a
//! `tracing-subscriber` formatter, whose `log` bridge picks those records up.

use tracing_subscriber::EnvFilter;

/// Default filter directive for a `-v` count
pub fn filter_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "starprep=info",
        1 => "starprep=debug",
        _ => "starprep=trace",
    }
}

/// Install the global subscriber; `RUST_LOG` overrides the verbosity flag
pub fn init_logging(verbose: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for_verbosity(verbose)));

    // Tests may call this more than once
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_for_verbosity() {
        assert_eq!(filter_for_verbosity(0), "starprep=info");
        assert_eq!(filter_for_verbosity(1), "starprep=debug");
        assert_eq!(filter_for_verbosity(5), "starprep=trace");
    }

    #[test]
    fn test_init_twice() {
        init_logging(0);
        init_logging(2);
        log::info!("logging initialised");
    }
}

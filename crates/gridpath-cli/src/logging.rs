//! Log output for the binary.

use std::io;

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber. `RUST_LOG` wins over `verbose`, which
/// selects warn, debug or trace.
///
/// Fails if a global subscriber or `log` logger is already installed.
pub fn init_tracing(verbose: u8) -> Result<()> {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // try_init also routes `log` records from the library crates.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_reports_failure() {
        // The first call may succeed or lose to another global logger.
        let _ = init_tracing(0);
        let err = init_tracing(2).unwrap_err();
        assert!(err.to_string().contains("log subscriber"), "{err}");
    }
}

//! Tracing bootstrap for hosts and tests
//!
//! The engine only emits `tracing` events; it never installs a subscriber on
//! its own. Hosts that have no logging setup of their own can call
//! [`init_tracing`] once at startup.

use tracing_subscriber::EnvFilter;

use super::error::{CoreError, CoreResult};

/// Default filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "tactical_realms=info";

/// Install a global `fmt` subscriber filtered by `RUST_LOG`
///
/// Falls back to `default_filter` when the environment variable is missing
/// or unparsable. Calling this more than once returns
/// [`CoreError::DiagnosticsInit`] instead of panicking, so test binaries can
/// call it from every test.
pub fn init_tracing(default_filter: &str) -> CoreResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| CoreError::DiagnosticsInit {
            message: e.to_string(),
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init()
        .map_err(|e| CoreError::DiagnosticsInit {
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        //! A second installation reports an error instead of panicking
        // Another test may have installed the subscriber first.
        let _ = init_tracing(DEFAULT_FILTER);
        let second = init_tracing(DEFAULT_FILTER);

        assert!(matches!(second, Err(CoreError::DiagnosticsInit { .. })));
    }
}

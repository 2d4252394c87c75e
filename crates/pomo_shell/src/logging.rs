//! Logging setup
//!
//! Log records go to stderr through `env_logger`; stdout is reserved for the shell's
//! diagnostic lines.

pub use log::{debug, error, info, trace, warn};

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info";

/// Initialize the logging system
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let env = env_logger::Env::default().default_filter_or(DEFAULT_FILTER);
    let _ = env_logger::Builder::from_env(env)
        .target(env_logger::Target::Stderr)
        .format_timestamp_millis()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice() {
        init();
        init();
        info!("logging initialized twice without panicking");
    }
}

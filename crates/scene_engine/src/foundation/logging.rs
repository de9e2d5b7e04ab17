//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system.
///
/// `default_level` is used as the filter when `RUST_LOG` is not set. Returns
/// `false` if a logger was already installed.
pub fn init(default_level: &str) -> bool {
    let env = env_logger::Env::default().default_filter_or(default_level);
    env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_harmless() {
        let _ = init("debug");
        assert!(!init("info"));
    }
}

//! Logging setup for the `sitecfg` binary via `tracing-subscriber`.

use crate::config::Error;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber, writing to stderr so that exported
/// configuration on stdout stays clean.
///
/// If `prefer_level` is `true`, `level` takes precedence and `RUST_LOG` is only
/// used as a fallback when `level` is invalid. If `prefer_level` is `false`,
/// `RUST_LOG` takes precedence and `level` is the fallback.
pub fn init(level: &str, prefer_level: bool) -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(level, prefer_level)?)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| Error::Logger(format!("failed to set subscriber: {}", e)))
}

fn filter(level: &str, prefer_level: bool) -> Result<EnvFilter, Error> {
    if prefer_level {
        match EnvFilter::try_new(level) {
            Ok(filter) => Ok(filter),
            Err(level_err) => EnvFilter::try_from_default_env().map_err(|env_err| {
                Error::Logger(format!(
                    "invalid log level '{}': {}; RUST_LOG parse failed: {}",
                    level, level_err, env_err
                ))
            }),
        }
    } else {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level))
            .map_err(|e| Error::Logger(format!("invalid log level '{}': {}", level, e)))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_explicit_level_wins() -> Result<(), Error> {
        assert_eq!("debug", filter("debug", true)?.to_string());
        assert_eq!("trace", filter("trace", true)?.to_string());
        Ok(())
    }
}

//! Logging setup.
//!
//! `RUST_LOG` wins when set. Otherwise the `-v` count picks the level, and
//! without `-v` the configured level is used. With none of them, nothing is
//! logged.

use nu_ansi_term::Color;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Map a `-v` count to a level. Zero means no level was requested.
pub fn level_for_verbosity(verbose: u8) -> Option<LevelFilter> {
    match verbose {
        0 => None,
        1 => Some(LevelFilter::ERROR),
        2 => Some(LevelFilter::WARN),
        3 => Some(LevelFilter::INFO),
        4 => Some(LevelFilter::DEBUG),
        _ => Some(LevelFilter::TRACE),
    }
}

/// Install the stderr subscriber.
pub fn init(verbose: u8, configured: Option<&str>) {
    let requested = level_for_verbosity(verbose);
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let level = requested
                .or_else(|| configured.and_then(|level| level.parse::<LevelFilter>().ok()));
            match level {
                Some(level) => EnvFilter::new(level.to_string()),
                None => return,
            }
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if let Some(level) = requested {
        let notice = format!("Verbose logging is enabled. (LEVEL={level})");
        if std::io::stderr().is_terminal() {
            eprintln!("{}", Color::Yellow.paint(notice));
        } else {
            eprintln!("{notice}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(level_for_verbosity(0), None);
        assert_eq!(level_for_verbosity(1), Some(LevelFilter::ERROR));
        assert_eq!(level_for_verbosity(2), Some(LevelFilter::WARN));
        assert_eq!(level_for_verbosity(3), Some(LevelFilter::INFO));
        assert_eq!(level_for_verbosity(4), Some(LevelFilter::DEBUG));
        assert_eq!(level_for_verbosity(5), Some(LevelFilter::TRACE));
        assert_eq!(level_for_verbosity(9), Some(LevelFilter::TRACE));
    }
}

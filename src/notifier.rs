//! Logging setup.
//!
//! Diagnostics go through `log` to `env_logger` on stderr so they never mix with the
//! rendered tree or graph on stdout. [`VerbosityLevel`] maps the `-v` count to a level
//! filter; `RUST_LOG` is still honored on top of it.

use env_logger::Env;
use log::LevelFilter;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VerbosityLevel {
    Quiet = 0, // Warnings and errors only
    Info = 1,
    Debug = 2,
    Trace = 3,
}

impl From<u8> for VerbosityLevel {
    fn from(level: u8) -> Self {
        match level {
            0 => VerbosityLevel::Quiet,
            1 => VerbosityLevel::Info,
            2 => VerbosityLevel::Debug,
            _ => VerbosityLevel::Trace,
        }
    }
}

impl VerbosityLevel {
    pub fn to_log_level(self) -> LevelFilter {
        match self {
            VerbosityLevel::Quiet => LevelFilter::Warn,
            VerbosityLevel::Info => LevelFilter::Info,
            VerbosityLevel::Debug => LevelFilter::Debug,
            VerbosityLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Install the global logger. Later calls are ignored.
pub fn init_logging(verbosity: VerbosityLevel) {
    let _ = env_logger::Builder::from_env(Env::default())
        .filter_level(verbosity.to_log_level())
        .format_timestamp(None)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_from_count() {
        assert_eq!(VerbosityLevel::from(0), VerbosityLevel::Quiet);
        assert_eq!(VerbosityLevel::from(1), VerbosityLevel::Info);
        assert_eq!(VerbosityLevel::from(2), VerbosityLevel::Debug);
        assert_eq!(VerbosityLevel::from(7), VerbosityLevel::Trace);
    }

    #[test]
    fn test_quiet_keeps_warnings() {
        assert_eq!(VerbosityLevel::Quiet.to_log_level(), LevelFilter::Warn);
        assert_eq!(VerbosityLevel::Trace.to_log_level(), LevelFilter::Trace);
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        init_logging(VerbosityLevel::Quiet);
        init_logging(VerbosityLevel::Debug);
    }
}

// src/logging.rs
// =============================================================================
// Log level selection and tracing subscriber setup.
//
// The CLI accepts the classic level names (DEBUG, INFO, WARNING, ERROR,
// CRITICAL). tracing has no CRITICAL level, so it shares ERROR's filter.
// All log output goes to stderr; stdout carries only the crawl results.
// =============================================================================

use clap::ValueEnum;
use tracing::level_filters::LevelFilter;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    #[value(name = "DEBUG")]
    Debug,
    #[value(name = "INFO")]
    Info,
    #[value(name = "WARNING")]
    Warning,
    #[value(name = "ERROR")]
    Error,
    #[value(name = "CRITICAL")]
    Critical,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warning => LevelFilter::WARN,
            LogLevel::Error | LogLevel::Critical => LevelFilter::ERROR,
        }
    }
}

// Installs the global subscriber. Call once, before the crawl starts.
pub fn init_logging(level: LogLevel) {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::from(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_mapping() {
        assert_eq!(LevelFilter::from(LogLevel::Debug), LevelFilter::DEBUG);
        assert_eq!(LevelFilter::from(LogLevel::Info), LevelFilter::INFO);
        assert_eq!(LevelFilter::from(LogLevel::Warning), LevelFilter::WARN);
        assert_eq!(LevelFilter::from(LogLevel::Error), LevelFilter::ERROR);
        assert_eq!(LevelFilter::from(LogLevel::Critical), LevelFilter::ERROR);
    }

    #[test]
    fn test_parse_level_names() {
        assert_eq!(LogLevel::from_str("WARNING", false), Ok(LogLevel::Warning));
        assert_eq!(LogLevel::from_str("CRITICAL", false), Ok(LogLevel::Critical));
        assert!(LogLevel::from_str("TRACE", false).is_err());
    }
}

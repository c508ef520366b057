/// Core logging implementation with automatic filtering
///
/// Filtering rules:
/// 1. Errors are always shown
/// 2. Debug level requires `--debug-<tag>` (or a Debug/Verbose minimum level)
/// 3. Verbose level requires `--verbose`
/// 4. Other levels are compared against the minimum level threshold
use super::config::{get_logger_config, LoggerConfig};
use super::levels::LogLevel;
use super::tags::LogTag;

pub fn should_log(tag: &LogTag, level: LogLevel) -> bool {
    should_log_with(&get_logger_config(), tag, level)
}

pub(crate) fn should_log_with(config: &LoggerConfig, tag: &LogTag, level: LogLevel) -> bool {
    if level == LogLevel::Error {
        return true;
    }

    if level == LogLevel::Debug {
        return config.min_level >= LogLevel::Debug
            || config.debug_tags.contains(&tag.to_debug_key());
    }

    if level == LogLevel::Verbose {
        return config.min_level == LogLevel::Verbose;
    }

    level <= config.min_level
}

/// Check the filter, then hand off to the formatter
pub fn log_internal(tag: LogTag, level: LogLevel, message: &str) {
    if !should_log(&tag, level) {
        return;
    }

    super::format::format_and_log(tag, level, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(min_level: LogLevel, debug_tags: &[&str]) -> LoggerConfig {
        LoggerConfig {
            min_level,
            debug_tags: debug_tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_errors_always_logged() {
        let quiet = config(LogLevel::Error, &[]);
        assert!(should_log_with(&quiet, &LogTag::Api, LogLevel::Error));
        assert!(!should_log_with(&quiet, &LogTag::Api, LogLevel::Info));
    }

    #[test]
    fn test_debug_gated_per_tag() {
        let cfg = config(LogLevel::Info, &["api"]);
        assert!(should_log_with(&cfg, &LogTag::Api, LogLevel::Debug));
        assert!(!should_log_with(&cfg, &LogTag::Report, LogLevel::Debug));
    }

    #[test]
    fn test_verbose_requires_verbose_level() {
        let cfg = config(LogLevel::Info, &["api"]);
        assert!(!should_log_with(&cfg, &LogTag::Api, LogLevel::Verbose));

        let verbose = config(LogLevel::Verbose, &[]);
        assert!(should_log_with(&verbose, &LogTag::Api, LogLevel::Verbose));
        assert!(should_log_with(&verbose, &LogTag::Report, LogLevel::Debug));
    }

    #[test]
    fn test_levels_compared_to_minimum() {
        let cfg = config(LogLevel::Warning, &[]);
        assert!(should_log_with(&cfg, &LogTag::Report, LogLevel::Warning));
        assert!(!should_log_with(&cfg, &LogTag::Report, LogLevel::Info));
    }
}

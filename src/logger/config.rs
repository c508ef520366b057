/// Logger configuration: minimum level and per-tag debug switches
use super::levels::LogLevel;
use super::tags::LogTag;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::RwLock;

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Messages above this level are dropped
    pub min_level: LogLevel,
    /// Tags with debug output enabled (keys from `LogTag::to_debug_key`)
    pub debug_tags: HashSet<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            debug_tags: HashSet::new(),
        }
    }
}

static LOGGER_CONFIG: Lazy<RwLock<LoggerConfig>> =
    Lazy::new(|| RwLock::new(LoggerConfig::default()));

/// Snapshot of the current configuration
pub fn get_logger_config() -> LoggerConfig {
    match LOGGER_CONFIG.read() {
        Ok(config) => config.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Apply an in-place change to the global configuration
pub fn update_logger_config<F>(update: F)
where
    F: FnOnce(&mut LoggerConfig),
{
    match LOGGER_CONFIG.write() {
        Ok(mut current) => update(&mut *current),
        Err(poisoned) => update(&mut *poisoned.into_inner()),
    }
}

/// Enable `--debug-<tag>` output for a tag
pub fn enable_debug_for(tag: LogTag) {
    update_logger_config(|config| {
        config.debug_tags.insert(tag.to_debug_key());
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_info() {
        let config = LoggerConfig::default();
        assert_eq!(config.min_level, LogLevel::Info);
        assert!(config.debug_tags.is_empty());
    }
}

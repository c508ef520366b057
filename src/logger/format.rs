//! Log formatting and output with ANSI colors
//!
//! Logs go to stderr; stdout carries only the report.

use super::levels::LogLevel;
use super::tags::LogTag;
use chrono::Local;
use colored::*;
use std::io::{stderr, ErrorKind, Write};

/// Log format widths for alignment
const TAG_WIDTH: usize = 7;
const LEVEL_WIDTH: usize = 7;

/// Format and output a log message
pub fn format_and_log(tag: LogTag, level: LogLevel, message: &str) {
    let time = Local::now().format("%H:%M:%S").to_string();
    let line = if colored::control::SHOULD_COLORIZE.should_colorize() {
        format!(
            "{} [{}] [{}] {}",
            time.dimmed(),
            format_tag(&tag),
            format_level(level),
            format_message(level, message)
        )
    } else {
        format!("{} {}", time, plain_line(tag, level, message))
    };
    print_stderr_safe(&line);
}

/// Uncolored rendering of a log line (no timestamp)
pub fn plain_line(tag: LogTag, level: LogLevel, message: &str) -> String {
    format!(
        "[{:<tag_width$}] [{:<level_width$}] {}",
        tag.to_plain_string(),
        level.as_str(),
        message,
        tag_width = TAG_WIDTH,
        level_width = LEVEL_WIDTH
    )
}

fn format_tag(tag: &LogTag) -> ColoredString {
    let label = format!("{:<width$}", tag.to_plain_string(), width = TAG_WIDTH);
    match tag {
        LogTag::System => label.bright_yellow().bold(),
        LogTag::Config => label.bright_magenta().bold(),
        LogTag::Api => label.bright_cyan().bold(),
        LogTag::Report => label.bright_green().bold(),
    }
}

fn format_level(level: LogLevel) -> ColoredString {
    let label = format!("{:<width$}", level.as_str(), width = LEVEL_WIDTH);
    match level {
        LogLevel::Error => label.red().bold(),
        LogLevel::Warning => label.yellow().bold(),
        LogLevel::Info => label.green(),
        LogLevel::Debug => label.purple(),
        LogLevel::Verbose => label.dimmed(),
    }
}

fn format_message(level: LogLevel, message: &str) -> ColoredString {
    match level {
        LogLevel::Error => message.red(),
        LogLevel::Warning => message.yellow(),
        LogLevel::Verbose => message.dimmed(),
        _ => message.normal(),
    }
}

/// Write a line to stderr, ignoring broken pipes
fn print_stderr_safe(line: &str) {
    let mut handle = stderr().lock();
    if let Err(e) = writeln!(handle, "{}", line) {
        if e.kind() != ErrorKind::BrokenPipe {
            eprintln!("logger write failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line_alignment() {
        let line = plain_line(LogTag::Api, LogLevel::Info, "hello");
        assert_eq!(line, "[API    ] [INFO   ] hello");
    }

    #[test]
    fn test_plain_line_keeps_message() {
        let line = plain_line(
            LogTag::Report,
            LogLevel::Error,
            "Failed to analyze the token on base.",
        );
        assert!(line.starts_with("[REPORT ] [ERROR  ]"));
        assert!(line.ends_with("Failed to analyze the token on base."));
    }
}

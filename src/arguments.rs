/// Command-line arguments for superchain_check
///
/// The data file is the only input. The remaining flags tune logging and the
/// HTTP client and all have working defaults.
use crate::apis::goplus::{GOPLUS_BASE_URL, RATE_LIMIT_PER_MINUTE, TIMEOUT_SECS};
use crate::logger::LogTag;
use clap::Parser;
use std::path::PathBuf;

/// Printed when no data file is given
pub const USAGE_MESSAGE: &str =
    "Please provide the relative path to the data.json file as a command-line argument.";

#[derive(Parser, Debug)]
#[command(name = "superchain_check")]
#[command(about = "Token security report for Superchain networks (GoPlus API)", long_about = None)]
#[command(version)]
pub struct Args {
    /// Path to the token data file, relative to the project root
    #[arg(value_name = "DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Show verbose logs (includes raw API responses)
    #[arg(long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Debug logs for API requests
    #[arg(long)]
    pub debug_api: bool,

    /// Debug logs for report assembly
    #[arg(long)]
    pub debug_report: bool,

    /// Debug logs for input loading and path resolution
    #[arg(long)]
    pub debug_config: bool,

    /// HTTP request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = TIMEOUT_SECS)]
    pub timeout: u64,

    /// Maximum API requests per minute (0 disables pacing)
    #[arg(long, value_name = "N", default_value_t = RATE_LIMIT_PER_MINUTE)]
    pub rate_limit: usize,

    /// GoPlus API base URL
    #[arg(long, value_name = "URL", default_value = GOPLUS_BASE_URL)]
    pub api_url: String,
}

impl Args {
    /// Tags selected with `--debug-<tag>` flags
    pub fn debug_tags(&self) -> Vec<LogTag> {
        let mut tags = Vec::new();
        if self.debug_api {
            tags.push(LogTag::Api);
        }
        if self.debug_report {
            tags.push(LogTag::Report);
        }
        if self.debug_config {
            tags.push(LogTag::Config);
        }
        tags
    }
}

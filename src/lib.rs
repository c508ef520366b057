pub mod apis;
pub mod arguments;
pub mod checker;
pub mod config;
pub mod errors; // Run-level and API error types
pub mod logger;
pub mod networks;
pub mod paths;
pub mod report;

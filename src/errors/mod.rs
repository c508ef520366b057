/// Error types for superchain-check
///
/// `CheckError` covers failures that stop the run (input loading, client setup).
/// `ApiError` covers per-network analysis failures, which only skip that network.
use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// RUN-LEVEL ERRORS
// =============================================================================

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid token data in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to create HTTP client: {0}")]
    Http(String),
}

impl CheckError {
    /// Process exit code for this error
    ///
    /// A missing input file keeps exit code 0, matching the tool's historical
    /// behavior; everything else is a hard failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            CheckError::FileNotFound(_) => 0,
            CheckError::Io { .. } | CheckError::Parse { .. } | CheckError::Http(_) => 1,
        }
    }
}

// =============================================================================
// API ERRORS
// =============================================================================

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Not found")]
    NotFound,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("API rejected request (code {code}): {message}")]
    Rejected { code: i64, message: String },

    #[error("Rate limiter unavailable: {0}")]
    RateLimiter(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_decode() {
            ApiError::InvalidResponse(err.to_string())
        } else {
            ApiError::NetworkError(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_message() {
        let err = CheckError::FileNotFound(PathBuf::from("/tmp/data.json"));
        assert_eq!(err.to_string(), "File not found: /tmp/data.json");
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn test_parse_error_is_fatal() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = CheckError::Parse {
            path: PathBuf::from("data.json"),
            source,
        };
        assert!(err.to_string().starts_with("Invalid token data in data.json:"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_rejected_display() {
        let err = ApiError::Rejected {
            code: 4012,
            message: "chain not supported".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API rejected request (code 4012): chain not supported"
        );
    }
}

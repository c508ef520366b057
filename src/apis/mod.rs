/// External analysis API clients
pub mod client;
pub mod goplus;

pub use crate::errors::ApiError;
pub use goplus::{AnalysisResult, GoPlusClient};

use async_trait::async_trait;

/// Source of token security analyses
///
/// One call performs both the token security and the rug-pull lookup for a
/// single address; any failure fails the whole analysis.
#[async_trait]
pub trait TokenAnalyzer: Send + Sync {
    async fn analyze(&self, address: &str, chain_id: &str) -> Result<AnalysisResult, ApiError>;
}

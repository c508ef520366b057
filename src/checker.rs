/// Runs the analysis across every configured network and builds the report
///
/// Networks are visited in table order, one at a time. A failing network is
/// logged and left out of the report; it never stops the run.
use crate::apis::{ApiError, TokenAnalyzer};
use crate::config::TokensConfig;
use crate::logger::{self, LogTag};
use crate::networks::NETWORKS;
use crate::report::{Report, NO_NETWORKS_MESSAGE};

/// A network whose analysis failed
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkFailure {
    pub network: String,
    pub error: ApiError,
}

#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub report: Report,
    pub failures: Vec<NetworkFailure>,
}

impl CheckOutcome {
    /// Text to print on stdout
    pub fn output(&self) -> String {
        self.report
            .render()
            .unwrap_or_else(|| NO_NETWORKS_MESSAGE.to_string())
    }
}

fn failure_message(network: &str) -> String {
    format!("Failed to analyze the token on {}.", network)
}

pub async fn run_check<A>(config: &TokensConfig, analyzer: &A) -> CheckOutcome
where
    A: TokenAnalyzer + ?Sized,
{
    let mut report = Report::new();
    let mut failures = Vec::new();

    for network in NETWORKS {
        let Some(address) = config.address_for(network.name) else {
            continue;
        };

        logger::info(
            LogTag::Report,
            &format!(
                "Analyzing {} on {} (chain {})",
                address, network.name, network.chain_id
            ),
        );

        match analyzer.analyze(address, network.chain_id).await {
            Ok(result) => report.push_section(network.name, &result),
            Err(error) => {
                logger::error(
                    LogTag::Api,
                    &format!("Error occurred during analysis: {}", error),
                );
                logger::error(LogTag::Report, &failure_message(network.name));
                failures.push(NetworkFailure {
                    network: network.name.to_string(),
                    error,
                });
            }
        }
    }

    logger::debug(
        LogTag::Report,
        &format!(
            "{} section(s) written, {} network(s) failed",
            report.section_count(),
            failures.len()
        ),
    );

    CheckOutcome { report, failures }
}

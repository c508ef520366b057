/// Report assembly
///
/// A `Report` collects per-network sections in the order they are added and
/// renders them as one Markdown document with a definitions footer.
pub mod format;

pub use format::{format_analysis, format_network_section};

use crate::apis::AnalysisResult;

pub const REPORT_TITLE: &str = "# Token Analysis Results";

/// Printed instead of a report when no configured network could be reported
pub const NO_NETWORKS_MESSAGE: &str = "No supported token networks found in the data.json file.";

/// Field reference pages for the two GoPlus endpoints
pub const DEFINITION_LINKS: [&str; 2] = [
    "https://docs.gopluslabs.io/reference/response-details",
    "https://docs.gopluslabs.io/reference/response-details-7",
];

#[derive(Debug, Clone)]
pub struct Report {
    body: String,
    sections: usize,
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}

impl Report {
    pub fn new() -> Self {
        Self {
            body: format!("{}\n\n", REPORT_TITLE),
            sections: 0,
        }
    }

    /// Append a network section followed by a blank line
    pub fn push_section(&mut self, network: &str, result: &AnalysisResult) {
        self.body.push_str(&format_network_section(network, result));
        self.body.push('\n');
        self.sections += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.sections == 0
    }

    pub fn section_count(&self) -> usize {
        self.sections
    }

    /// Final Markdown text, or `None` when no section was added
    pub fn render(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }

        let mut text = self.body.clone();
        text.push_str("\nReport definitions:\n");
        for link in DEFINITION_LINKS {
            text.push_str(&format!("* {}\n", link));
        }
        Some(text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_renders_nothing() {
        let report = Report::new();
        assert!(report.is_empty());
        assert_eq!(report.render(), None);
    }

    #[test]
    fn test_render_layout() {
        let mut report = Report::new();
        let result = AnalysisResult {
            address: "0xabc".to_string(),
            ..Default::default()
        };
        report.push_section("zora", &result);

        assert_eq!(report.section_count(), 1);
        assert_eq!(
            report.render().unwrap(),
            "# Token Analysis Results\n\n\
             ## Zora\n\n\
             No rug pull security data available.\n\n\n\
             Report definitions:\n\
             * https://docs.gopluslabs.io/reference/response-details\n\
             * https://docs.gopluslabs.io/reference/response-details-7"
        );
    }
}

//! Map link output formatter

use crate::error::Result;
use crate::format::{OutputFormatter, Report};

/// URL formatter - one map link per pharmacy, nearest first
pub struct UrlFormatter;

impl OutputFormatter for UrlFormatter {
    fn name(&self) -> &str {
        "url"
    }

    fn description(&self) -> &str {
        "Map link per pharmacy"
    }

    /// Pharmacies without a usable position are skipped
    fn format(&self, report: &Report) -> Result<String> {
        let links: Vec<String> = report
            .pharmacies()
            .filter(|r| r.entity.coordinate.is_finite())
            .map(|r| r.entity.map_url())
            .collect();

        Ok(links.join("\n"))
    }
}

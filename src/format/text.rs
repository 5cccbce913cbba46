//! Human-readable text output formatter

use crate::error::Result;
use crate::feed::FeedItem;
use crate::format::{OutputFormatter, Report};

/// Text formatter - outputs a numbered list of pharmacies
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable list"
    }

    fn format(&self, report: &Report) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!("On-duty pharmacies near {}\n", report.label));
        output.push_str(&format!("Location: {}\n", report.location));
        output.push_str(&format!(
            "Fetched: {}\n\n",
            report.fetched_at.format("%Y-%m-%d %H:%M UTC")
        ));

        let mut rank = 0;
        for item in &report.feed {
            match item {
                FeedItem::Card(ranked) => {
                    rank += 1;
                    let pharmacy = &ranked.entity;
                    output.push_str(&format!(
                        "{:>2}. {} [{}]\n",
                        rank,
                        pharmacy.name,
                        ranked.distance_label()
                    ));
                    if !pharmacy.address.is_empty() {
                        output.push_str(&format!("    {}\n", pharmacy.address));
                    }
                    if !pharmacy.phone.is_empty() {
                        output.push_str(&format!("    Tel: {}\n", pharmacy.phone));
                    }
                    if pharmacy.coordinate.is_finite() {
                        output.push_str(&format!("    Map: {}\n", pharmacy.map_url()));
                    }
                }
                FeedItem::Ad { .. } => output.push_str("    ---- sponsored ----\n"),
            }
        }

        if rank == 0 {
            output.push_str("No on-duty pharmacies found.\n");
        }

        Ok(output)
    }
}

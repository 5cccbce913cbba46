//! Output formatters
//!
//! Provides trait-based output formatting for ranked search results.

pub mod gpx;
pub mod json;
pub mod text;
pub mod url;

use crate::coord::Coordinate;
use crate::error::Result;
use crate::feed::{interleave, FeedItem};
use crate::pharmacy::Pharmacy;
use crate::rank::Ranked;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Information about an output format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Format name
    pub name: String,
    /// Format description
    pub description: String,
}

/// A finished search, ready for output
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Search reference point
    pub location: Coordinate,
    /// Human-readable description of the reference point
    pub label: String,
    pub fetched_at: DateTime<Utc>,
    /// Ranked pharmacies with promotional slots interleaved
    pub feed: Vec<FeedItem<Ranked<Pharmacy>>>,
}

impl Report {
    /// Build a report, inserting an ad slot after every `ad_interval` cards
    pub fn new(
        location: Coordinate,
        label: impl Into<String>,
        results: Vec<Ranked<Pharmacy>>,
        ad_interval: usize,
    ) -> Self {
        Self {
            location,
            label: label.into(),
            fetched_at: Utc::now(),
            feed: interleave(results, ad_interval),
        }
    }

    /// The ranked pharmacies, without ad slots
    pub fn pharmacies(&self) -> impl Iterator<Item = &Ranked<Pharmacy>> {
        self.feed.iter().filter_map(FeedItem::card)
    }
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// Format the search report
    fn format(&self, report: &Report) -> Result<String>;
}

/// Get a formatter by name
pub fn get_formatter(name: &str) -> Option<Box<dyn OutputFormatter>> {
    match name.to_lowercase().as_str() {
        "json" => Some(Box::new(json::JsonFormatter)),
        "text" => Some(Box::new(text::TextFormatter)),
        "gpx" => Some(Box::new(gpx::GpxFormatter)),
        "url" => Some(Box::new(url::UrlFormatter)),
        _ => None,
    }
}

/// List all available formatters
pub fn available_formats() -> Vec<FormatInfo> {
    ["json", "text", "gpx", "url"]
        .into_iter()
        .filter_map(get_formatter)
        .map(|f| FormatInfo {
            name: f.name().to_string(),
            description: f.description().to_string(),
        })
        .collect()
}

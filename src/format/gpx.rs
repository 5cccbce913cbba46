//! GPX output formatter

use crate::error::Result;
use crate::format::{OutputFormatter, Report};

/// GPX formatter - outputs a waypoint per pharmacy
pub struct GpxFormatter;

impl OutputFormatter for GpxFormatter {
    fn name(&self) -> &str {
        "gpx"
    }

    fn description(&self) -> &str {
        "GPX waypoint file"
    }

    fn format(&self, report: &Report) -> Result<String> {
        let mut gpx = String::new();

        gpx.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        gpx.push('\n');
        gpx.push_str(r#"<gpx version="1.1" creator="duty-pharmacy">"#);
        gpx.push('\n');

        gpx.push_str("  <metadata>\n");
        gpx.push_str(&format!(
            "    <name>On-duty pharmacies near {}</name>\n",
            escape(&report.label)
        ));
        gpx.push_str(&format!("    <time>{}</time>\n", report.fetched_at.to_rfc3339()));
        gpx.push_str("  </metadata>\n");

        gpx.push_str(&format!(
            r#"  <wpt lat="{}" lon="{}">"#,
            report.location.lat, report.location.lng
        ));
        gpx.push('\n');
        gpx.push_str("    <name>Search location</name>\n");
        gpx.push_str("  </wpt>\n");

        // Waypoints need a position; pharmacies without one are left out
        for ranked in report.pharmacies().filter(|r| r.entity.coordinate.is_finite()) {
            let pharmacy = &ranked.entity;
            gpx.push_str(&format!(
                r#"  <wpt lat="{}" lon="{}">"#,
                pharmacy.coordinate.lat, pharmacy.coordinate.lng
            ));
            gpx.push('\n');
            gpx.push_str(&format!("    <name>{}</name>\n", escape(&pharmacy.name)));
            gpx.push_str(&format!(
                "    <desc>{} ({})</desc>\n",
                escape(&pharmacy.address),
                ranked.distance_label()
            ));
            gpx.push_str("    <sym>Pharmacy</sym>\n");
            gpx.push_str("  </wpt>\n");
        }

        gpx.push_str("</gpx>\n");
        Ok(gpx)
    }
}

/// Escape text for XML element content
fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

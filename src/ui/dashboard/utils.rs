//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::EventSource;
use ratatui::prelude::Color;

/// Get a ratatui color for an event source
pub fn get_source_color(source: &EventSource) -> Color {
    match source {
        EventSource::Config => Color::Cyan,
        EventSource::Navigation => Color::Yellow,
        EventSource::Shell => Color::Green,
    }
}

/// Format an uptime duration as a short human-readable string
pub fn format_uptime(uptime: std::time::Duration) -> String {
    let secs = uptime.as_secs();
    if secs >= 86400 {
        format!(
            "{}d {}h {}m",
            secs / 86400,
            (secs % 86400) / 3600,
            (secs % 3600) / 60
        )
    } else if secs >= 3600 {
        format!(
            "{}h {}m {}s",
            secs / 3600,
            (secs % 3600) / 60,
            secs % 60
        )
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            // Extract MM-DD from date and HH:MM from time
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(hour_min) = time_part.get(0..5) {
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_timestamp_keeps_month_day_and_time() {
        assert_eq!(
            format_compact_timestamp("2023-09-15 14:30:05"),
            "09-15 14:30"
        );
    }

    #[test]
    fn unparseable_timestamp_passes_through() {
        assert_eq!(format_compact_timestamp("just now"), "just now");
    }

    #[test]
    fn uptime_scales_its_units() {
        use std::time::Duration;
        assert_eq!(format_uptime(Duration::from_secs(42)), "0m 42s");
        assert_eq!(format_uptime(Duration::from_secs(3700)), "1h 1m 40s");
        assert_eq!(format_uptime(Duration::from_secs(90_061)), "1d 1h 1m");
    }
}

//! Display formatting for sizes and timestamps

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
const INVALID_DATE: &str = "Invalid Date";

/// Round to `digits` decimals with ties going up, then print with exactly that many.
fn to_fixed(value: f64, digits: i32) -> String {
    let scale = 10f64.powi(digits);
    let rounded = (value * scale + 0.5).floor() / scale;
    format!("{:.*}", digits as usize, rounded)
}

/// Human-readable size: `0 -> "0 Bytes"`, `1536 -> "1.5 KB"`.
///
/// Up to two decimals with trailing zeros dropped; sizes past GB stay in GB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut exponent = 0;
    while exponent < SIZE_UNITS.len() - 1 && bytes >= 1024u64.pow(exponent as u32 + 1) {
        exponent += 1;
    }
    let scaled = to_fixed(bytes as f64 / 1024f64.powi(exponent as i32), 2);
    let trimmed = scaled.trim_end_matches('0').trim_end_matches('.');

    format!("{} {}", trimmed, SIZE_UNITS[exponent])
}

/// Size in megabytes with one decimal, as shown on video cards.
pub fn format_megabytes(bytes: u64) -> String {
    to_fixed(bytes as f64 / 1024.0 / 1024.0, 1)
}

/// Parse the timestamp shapes the backend emits.
///
/// Offsets are converted to local time; naive values are taken as local.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, pattern) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Short date for cards and table cells: `dd.mm.yyyy`.
pub fn format_short_date(value: &str) -> String {
    parse_timestamp(value)
        .map(|dt| dt.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

/// Long date with time, e.g. `5 March 2024, 09:07`.
pub fn format_date(value: &str) -> String {
    parse_timestamp(value)
        .map(|dt| dt.format("%-d %B %Y, %H:%M").to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

/// Clip duration in `m:ss`.
pub fn format_duration(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

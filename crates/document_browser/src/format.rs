//! Display formatting for listing cells and upload rows.

use chrono::{DateTime, Utc};

const BYTE_UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

/// Formats a byte count using base-1024 units with up to two decimals (`1.5 KB`, `2 MB`).
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", BYTE_UNITS[unit])
}

/// Listing "File size" cell: `-` for folders and empty files.
pub fn format_file_size_cell(file_size: Option<u64>) -> String {
    match file_size {
        Some(size) if size > 0 => format_bytes(size),
        _ => "-".to_string(),
    }
}

/// Formats a timestamp as `{day} {Mon} {year}` (`5 Apr 2025`), in UTC.
pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%-d %b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bytes_use_binary_units_and_trim_zeros() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(2 * 1024 * 1024), "2 MB");
        assert_eq!(format_bytes(1_288_490_189), "1.2 GB");
        assert_eq!(format_bytes(u64::MAX), "16384 PB");
    }

    #[test]
    fn empty_sizes_render_as_dash() {
        assert_eq!(format_file_size_cell(None), "-");
        assert_eq!(format_file_size_cell(Some(0)), "-");
        assert_eq!(format_file_size_cell(Some(1024)), "1 KB");
    }

    #[test]
    fn dates_render_short_month() {
        let at = Utc.with_ymd_and_hms(2025, 4, 5, 23, 10, 0).unwrap();
        assert_eq!(format_date(&at), "5 Apr 2025");
    }
}

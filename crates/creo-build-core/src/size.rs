//! Human-readable file sizes.

use std::fs;
use std::path::Path;

const UNITS: [&str; 3] = ["B", "KB", "MB"];

/// Placeholder shown when a size cannot be determined.
pub const UNKNOWN_SIZE: &str = "Unknown";

/// Format a byte count as `"<value> <unit>"`.
///
/// The unit is chosen by `floor(log1024(bytes))`, capped at megabytes. The
/// value is rounded to two decimals with trailing zeros dropped, so `1536`
/// formats as `"1.5 KB"` and `0` as `"0 B"`.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut exponent = 0;
    while exponent + 1 < UNITS.len() && bytes >= 1024u64.pow(exponent as u32 + 1) {
        exponent += 1;
    }

    let scaled = bytes as f64 / 1024f64.powi(exponent as i32);
    let rounded = (scaled * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[exponent])
}

/// Stat `path` and format its length, or [`UNKNOWN_SIZE`] if it cannot be read.
pub fn file_size(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    match fs::metadata(path) {
        Ok(meta) => format_size(meta.len()),
        Err(e) => {
            tracing::warn!("Could not read size of {}: {}", path.display(), e);
            UNKNOWN_SIZE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_zero_bytes() {
        assert_eq!(format_size(0), "0 B");
    }

    #[test]
    fn test_byte_range() {
        assert_eq!(format_size(1), "1 B");
        assert_eq!(format_size(1000), "1000 B");
        assert_eq!(format_size(1023), "1023 B");
    }

    #[test]
    fn test_kilobyte_range() {
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(2047), "2 KB");
        assert_eq!(format_size(10 * 1024 + 123), "10.12 KB");
    }

    #[test]
    fn test_megabyte_range() {
        assert_eq!(format_size(1024 * 1024), "1 MB");
        assert_eq!(format_size(5 * 1024 * 1024 / 2), "2.5 MB");
    }

    #[test]
    fn test_large_sizes_stay_in_megabytes() {
        assert_eq!(format_size(2 * 1024 * 1024 * 1024), "2048 MB");
    }

    #[test]
    fn test_unit_matches_magnitude() {
        for bytes in [1u64, 512, 1023, 1024, 4096, 1048575, 1048576, 9_999_999] {
            let label = format_size(bytes);
            let unit = if bytes < 1024 {
                " B"
            } else if bytes < 1024 * 1024 {
                " KB"
            } else {
                " MB"
            };
            assert!(label.ends_with(unit), "{} -> {}", bytes, label);
        }
    }

    #[test]
    fn test_file_size() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let path = temp.path().join("creo.css");
        fs::write(&path, vec![b'a'; 2048]).expect("Failed to write file");

        assert_eq!(file_size(&path), "2 KB");
    }

    #[test]
    fn test_missing_file_is_unknown() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        assert_eq!(file_size(temp.path().join("missing.css")), UNKNOWN_SIZE);
    }
}

/// Format size in human-readable format using binary units.
///
/// The value is rounded to two decimals and trailing zeros are trimmed,
/// so 1024 renders as "1.0 KB" and 1536 as "1.5 KB". Zero is "0B".
/// Counts below 1 KB print as whole bytes ("512 B") with no decimal part.
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

    if bytes == 0 {
        return "0B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    if unit_idx == 0 {
        return format!("{} B", bytes);
    }

    let mut number = format!("{:.2}", size);
    while number.ends_with('0') && !number.ends_with(".0") {
        number.pop();
    }
    format!("{} {}", number, UNITS[unit_idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_zero() {
        assert_eq!(format_size(0), "0B");
    }

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(format_size(1), "1 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1023), "1023 B");
        assert!(!format_size(512).contains('.'));
    }

    #[test]
    fn test_format_size_kilobytes() {
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(1024 * 150), "150.0 KB");
    }

    #[test]
    fn test_format_size_keeps_two_decimals() {
        // 1.2345 MB
        assert_eq!(format_size(1_294_467), "1.23 MB");
    }

    #[test]
    fn test_format_size_megabytes() {
        assert_eq!(format_size(1048576), "1.0 MB");
        assert_eq!(format_size(1_050_624), "1.0 MB");
    }

    #[test]
    fn test_format_size_gigabytes() {
        assert_eq!(format_size(1073741824), "1.0 GB");
    }

    #[test]
    fn test_format_size_large_units() {
        assert_eq!(format_size(1099511627776), "1.0 TB");
        assert_eq!(format_size(1u64 << 60), "1.0 EB");
        assert_eq!(format_size(u64::MAX), "16.0 EB");
    }
}

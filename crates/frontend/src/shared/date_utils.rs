/// Utilities for date and time display
///
/// The backend sends ISO dates; the UI shows `YYYY-MM-DD` (and drops the
/// fractional part of timestamps).

/// "2024-03-15T14:02:26.123Z" -> "2024-03-15 14:02:26"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        let time = time_part.split('.').next().unwrap_or(time_part);
        let time = time.trim_end_matches('Z');
        return format!("{} {}", date_part, time);
    }
    datetime_str.to_string()
}

/// "2024-03-15T14:02:26Z" or "2024-03-15" -> "2024-03-15"
pub fn format_date(date_str: &str) -> String {
    date_str.split('T').next().unwrap_or(date_str).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "2024-03-15 14:02:26"
        );
        assert_eq!(
            format_datetime("2024-12-31T23:59:59Z"),
            "2024-12-31 23:59:59"
        );
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "2024-03-15");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "2024-03-15");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }
}

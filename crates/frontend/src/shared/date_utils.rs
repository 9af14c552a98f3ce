/// Date and time formatting for table cells
use chrono::{DateTime, NaiveDate, Utc};

/// Example: 2024-03-15 -> "15.03.2024"
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Example: 2024-03-15T14:02:26Z -> "15.03.2024 14:02"
pub fn format_datetime(datetime: &DateTime<Utc>) -> String {
    datetime.format("%d.%m.%Y %H:%M").to_string()
}

/// Format a timestamp the backend sends as plain text
///
/// RFC 3339 values and bare dates are reformatted; anything else is shown
/// as received.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return format_datetime(&datetime.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return format_date(&date);
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_date(&date), "15.03.2024");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("2024-03-15T14:02:26.123Z"), "15.03.2024 14:02");
        assert_eq!(format_timestamp("2024-12-31T23:59:59+00:00"), "31.12.2024 23:59");
        assert_eq!(format_timestamp("2024-03-15"), "15.03.2024");
    }

    #[test]
    fn test_unparseable_passes_through() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}

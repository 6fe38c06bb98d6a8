//! Display formatting shared by cards, panels and modals

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Format a consumption reading in kWh (without unit).
///
/// Readings strictly between 0 and 0.01 use scientific notation so tiny
/// draws stay visible; everything else (including missing, zero, negative
/// and NaN) is fixed-point with two decimals.
pub fn format_consumption(consumption: Option<f64>) -> String {
    let value = consumption
        .filter(|c| c.is_finite() && *c > 0.0)
        .unwrap_or(0.0);

    if value > 0.0 && value < 0.01 {
        format!("{:.2e}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// `kitchen_light` -> `Kitchen Light`
pub fn format_device_name(name: &str) -> String {
    name.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Share of `part` in `total` as a one-decimal percentage string
pub fn format_percentage(part: f64, total: f64) -> String {
    if total > 0.0 && part.is_finite() {
        format!("{:.1}", part / total * 100.0)
    } else {
        "0.0".to_string()
    }
}

/// Parse the timestamp formats the backend emits
pub fn parse_timestamp(ts: &str) -> Option<NaiveDateTime> {
    let ts = ts.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return Some(dt.naive_local());
    }

    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(ts, fmt).ok())
}

/// Header label for the snapshot time
pub fn format_data_timestamp(ts: &str) -> String {
    match parse_timestamp(ts) {
        Some(dt) => format!("Data from: {}", dt.format("%Y-%m-%d %H:%M:%S")),
        None if ts.is_empty() => "Data from: Loading...".to_string(),
        None => format!("Data from: {}", ts),
    }
}

/// `Today at HH:MM` for entries from `today`, a full date and time otherwise
pub fn format_log_time(ts: &str, today: NaiveDate) -> String {
    match parse_timestamp(ts) {
        Some(dt) if dt.date() == today => format!("Today at {}", dt.format("%H:%M")),
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => ts.to_string(),
    }
}

/// Short time-of-day label for chart axes
pub fn format_clock(ts: &str) -> String {
    parse_timestamp(ts)
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| ts.to_string())
}

/// Today's date in the browser's local zone
pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consumption_scientific_branch() {
        assert_eq!(format_consumption(Some(0.0042)), "4.20e-3");
        assert_eq!(format_consumption(Some(0.00999)), "9.99e-3");
        assert_eq!(format_consumption(Some(0.000123)), "1.23e-4");
    }

    #[test]
    fn test_consumption_fixed_branch() {
        assert_eq!(format_consumption(Some(1.236)), "1.24");
        assert_eq!(format_consumption(Some(0.01)), "0.01");
        assert_eq!(format_consumption(Some(12.0)), "12.00");
    }

    #[test]
    fn test_consumption_falsy_values() {
        assert_eq!(format_consumption(None), "0.00");
        assert_eq!(format_consumption(Some(0.0)), "0.00");
        assert_eq!(format_consumption(Some(-3.5)), "0.00");
        assert_eq!(format_consumption(Some(-0.001)), "0.00");
        assert_eq!(format_consumption(Some(f64::NAN)), "0.00");
    }

    #[test]
    fn test_consumption_branch_boundary_property() {
        for c in [0.0001, 0.005, 0.0099, 0.01, 0.5, 3.0, 250.0] {
            let formatted = format_consumption(Some(c));
            let scientific = formatted.contains('e');
            assert_eq!(scientific, c > 0.0 && c < 0.01, "value {}", c);
        }
    }

    #[test]
    fn test_device_name() {
        assert_eq!(format_device_name("sound_system"), "Sound System");
        assert_eq!(format_device_name("tv"), "Tv");
        assert_eq!(format_device_name("a__b"), "A B");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(format_percentage(6.0, 10.0), "60.0");
        assert_eq!(format_percentage(2.0, 10.0), "20.0");
        assert_eq!(format_percentage(1.0, 0.0), "0.0");
    }

    #[test]
    fn test_parse_timestamp_formats() {
        assert!(parse_timestamp("2025-03-01 14:05:09").is_some());
        assert!(parse_timestamp("2025-03-01T14:05:09.123").is_some());
        assert!(parse_timestamp("2025-03-01T14:05:09Z").is_some());
        assert!(parse_timestamp("not a time").is_none());
    }

    #[test]
    fn test_log_time_today_and_earlier() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(format_log_time("2025-03-01 14:05:09", today), "Today at 14:05");
        assert_eq!(
            format_log_time("2025-02-28 23:59:00", today),
            "2025-02-28 23:59:00"
        );
        assert_eq!(format_log_time("garbage", today), "garbage");
    }

    #[test]
    fn test_data_timestamp() {
        assert_eq!(
            format_data_timestamp("2025-03-01 14:05:09"),
            "Data from: 2025-03-01 14:05:09"
        );
        assert_eq!(format_data_timestamp(""), "Data from: Loading...");
    }
}

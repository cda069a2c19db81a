use chrono::{Local, NaiveDate, NaiveDateTime};

/// Calendar date in the browser's time zone. Attendance "today" is local,
/// never UTC.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn format_date_input(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `09:05 AM`, or `-` when absent.
pub fn format_time_12h(time: Option<NaiveDateTime>) -> String {
    time.map(|t| t.format("%I:%M %p").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// `Tue, Mar 4, 2025`
pub fn format_date_long(date: NaiveDate) -> String {
    date.format("%a, %b %-d, %Y").to_string()
}

/// Long form of a stored `YYYY-MM-DD` value; anything else is shown as-is.
pub fn display_stored_date(value: &str) -> String {
    parse_date_input(value)
        .map(format_date_long)
        .unwrap_or_else(|| value.to_string())
}

/// `March 2025`
pub fn format_month_year(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_else(|| format!("{}/{}", month, year))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 4)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn twelve_hour_clock_pads_and_marks_meridiem() {
        assert_eq!(format_time_12h(Some(at(9, 5))), "09:05 AM");
        assert_eq!(format_time_12h(Some(at(17, 30))), "05:30 PM");
        assert_eq!(format_time_12h(None), "-");
    }

    #[test]
    fn long_and_month_formats() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        assert_eq!(format_date_long(date), "Tue, Mar 4, 2025");
        assert_eq!(format_month_year(2025, 3), "March 2025");
        assert_eq!(format_month_year(2025, 13), "13/2025");
        assert_eq!(display_stored_date("2025-03-04"), "Tue, Mar 4, 2025");
        assert_eq!(display_stored_date("next week"), "next week");
    }

    #[test]
    fn date_input_round_trips_html_value() {
        let date = parse_date_input(" 2025-12-31 ").unwrap();
        assert_eq!(format_date_input(date), "2025-12-31");
        assert!(parse_date_input("31/12/2025").is_none());
    }
}

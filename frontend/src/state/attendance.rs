use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::{
    api::AttendanceRecord,
    utils::time::{format_date_input, format_date_long, format_month_year},
};

/// Where an employee stands for the current local day. Variants are ordered
/// by progress through the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TodayStatus {
    NotMarked,
    InMarked,
    Complete,
}

impl TodayStatus {
    pub fn can_mark_in(self, loading: bool) -> bool {
        !loading && self == TodayStatus::NotMarked
    }

    pub fn can_mark_out(self, loading: bool) -> bool {
        !loading && self == TodayStatus::InMarked
    }

    /// The later of the two; a confirmed mark is never undone by a stale fetch.
    pub fn at_least(self, floor: TodayStatus) -> TodayStatus {
        self.max(floor)
    }

    pub fn label(self) -> &'static str {
        match self {
            TodayStatus::NotMarked => "Not marked",
            TodayStatus::InMarked => "Checked in",
            TodayStatus::Complete => "Completed",
        }
    }
}

pub fn today_record(records: &[AttendanceRecord], today: NaiveDate) -> Option<&AttendanceRecord> {
    records.iter().find(|record| record.date == today)
}

pub fn derive_today_status(records: &[AttendanceRecord], today: NaiveDate) -> TodayStatus {
    match today_record(records, today) {
        Some(record) if record.in_time.is_some() && record.out_time.is_some() => {
            TodayStatus::Complete
        }
        Some(record) if record.in_time.is_some() => TodayStatus::InMarked,
        _ => TodayStatus::NotMarked,
    }
}

pub fn worked_duration(
    in_time: Option<NaiveDateTime>,
    out_time: Option<NaiveDateTime>,
) -> Option<Duration> {
    let (start, end) = (in_time?, out_time?);
    (end >= start).then(|| end - start)
}

/// `8h 30m`; `-` until both ends are marked.
pub fn format_worked(in_time: Option<NaiveDateTime>, out_time: Option<NaiveDateTime>) -> String {
    match worked_duration(in_time, out_time) {
        Some(duration) => format!(
            "{}h {}m",
            duration.num_hours(),
            duration.num_minutes() % 60
        ),
        None => "-".to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceFilter {
    Today,
    Week,
    Month,
    All,
    Date(NaiveDate),
    /// End date is exclusive on the backend.
    Range { start: NaiveDate, end: NaiveDate },
    MonthOf { year: i32, month: u32 },
}

impl AttendanceFilter {
    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            AttendanceFilter::Today => vec![("filter", "today".into())],
            AttendanceFilter::Week => vec![("filter", "week".into())],
            AttendanceFilter::Month => vec![("filter", "month".into())],
            AttendanceFilter::All => vec![("filter", "all".into())],
            AttendanceFilter::Date(date) => vec![("date", format_date_input(*date))],
            AttendanceFilter::Range { start, end } => vec![
                ("start_date", format_date_input(*start)),
                ("end_date", format_date_input(*end)),
            ],
            AttendanceFilter::MonthOf { year, month } => {
                vec![("month", month.to_string()), ("year", year.to_string())]
            }
        }
    }

    pub fn label(&self) -> String {
        match self {
            AttendanceFilter::Today => "Today".into(),
            AttendanceFilter::Week => "This Week".into(),
            AttendanceFilter::Month => "This Month".into(),
            AttendanceFilter::All => "All Time".into(),
            AttendanceFilter::Date(date) => format_date_long(*date),
            AttendanceFilter::Range { start, end } => format!(
                "Week ({} to {})",
                format_date_long(*start),
                format_date_long(*end)
            ),
            AttendanceFilter::MonthOf { year, month } => format_month_year(*year, *month),
        }
    }
}

/// Filter buttons. Custom kinds need extra inputs before they resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Today,
    Week,
    Month,
    All,
    CustomDate,
    CustomWeek,
    CustomMonth,
}

impl FilterKind {
    pub const EMPLOYEE: [FilterKind; 7] = [
        FilterKind::Today,
        FilterKind::Week,
        FilterKind::Month,
        FilterKind::All,
        FilterKind::CustomDate,
        FilterKind::CustomWeek,
        FilterKind::CustomMonth,
    ];

    // `/attendance/all` has no unbounded range.
    pub const ADMIN: [FilterKind; 6] = [
        FilterKind::Today,
        FilterKind::Week,
        FilterKind::Month,
        FilterKind::CustomDate,
        FilterKind::CustomWeek,
        FilterKind::CustomMonth,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FilterKind::Today => "Today",
            FilterKind::Week => "This Week",
            FilterKind::Month => "This Month",
            FilterKind::All => "All Time",
            FilterKind::CustomDate => "Custom Date",
            FilterKind::CustomWeek => "Custom Week",
            FilterKind::CustomMonth => "Custom Month",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterInputs {
    pub date: NaiveDate,
    pub range_start: Option<NaiveDate>,
    pub range_end: Option<NaiveDate>,
    pub year: i32,
    pub month: u32,
}

impl FilterInputs {
    pub fn starting(today: NaiveDate) -> Self {
        use chrono::Datelike;
        Self {
            date: today,
            range_start: None,
            range_end: None,
            year: today.year(),
            month: today.month(),
        }
    }

    /// `None` while a custom week is missing either end.
    pub fn resolve(&self, kind: FilterKind) -> Option<AttendanceFilter> {
        Some(match kind {
            FilterKind::Today => AttendanceFilter::Today,
            FilterKind::Week => AttendanceFilter::Week,
            FilterKind::Month => AttendanceFilter::Month,
            FilterKind::All => AttendanceFilter::All,
            FilterKind::CustomDate => AttendanceFilter::Date(self.date),
            FilterKind::CustomWeek => AttendanceFilter::Range {
                start: self.range_start?,
                end: self.range_end?,
            },
            FilterKind::CustomMonth => AttendanceFilter::MonthOf {
                year: self.year,
                month: self.month,
            },
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttendanceStats {
    pub total_days: usize,
    pub complete_days: usize,
}

impl AttendanceStats {
    pub fn from_records(records: &[AttendanceRecord]) -> Self {
        Self {
            total_days: records.len(),
            complete_days: records
                .iter()
                .filter(|r| r.in_time.is_some() && r.out_time.is_some())
                .count(),
        }
    }

    pub fn percentage(&self) -> f64 {
        if self.total_days == 0 {
            return 0.0;
        }
        self.complete_days as f64 / self.total_days as f64 * 100.0
    }

    pub fn percentage_label(&self) -> String {
        format!("{:.1}", self.percentage())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmed_progress_outranks_a_stale_fetch() {
        assert_eq!(TodayStatus::NotMarked.at_least(TodayStatus::InMarked), TodayStatus::InMarked);
        assert_eq!(TodayStatus::Complete.at_least(TodayStatus::InMarked), TodayStatus::Complete);
        assert!(!TodayStatus::NotMarked.at_least(TodayStatus::InMarked).can_mark_in(false));
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        day(d).and_hms_opt(h, m, 0).unwrap()
    }

    fn record(d: u32, in_time: Option<NaiveDateTime>, out_time: Option<NaiveDateTime>) -> AttendanceRecord {
        AttendanceRecord {
            id: Some(format!("r{}", d)),
            employee_id: 7,
            date: day(d),
            in_time,
            out_time,
            status: Some("present".into()),
            hours_worked: 0.0,
            in_time_display: None,
            out_time_display: None,
        }
    }

    #[test]
    fn today_record_picks_the_matching_day() {
        let records = vec![record(3, Some(at(3, 9, 0)), None), record(4, Some(at(4, 8, 45)), None)];
        assert_eq!(today_record(&records, day(4)).map(|r| r.date), Some(day(4)));
        assert!(today_record(&records, day(5)).is_none());
    }

    #[test]
    fn status_follows_todays_record_only() {
        let records = vec![
            record(3, Some(at(3, 9, 0)), Some(at(3, 17, 0))),
            record(4, Some(at(4, 9, 0)), None),
        ];
        assert_eq!(derive_today_status(&records, day(4)), TodayStatus::InMarked);
        assert_eq!(derive_today_status(&records, day(3)), TodayStatus::Complete);
        assert_eq!(derive_today_status(&records, day(5)), TodayStatus::NotMarked);
        assert_eq!(derive_today_status(&[], day(5)), TodayStatus::NotMarked);
    }

    #[test]
    fn record_without_in_time_is_not_marked() {
        let records = vec![record(4, None, None)];
        assert_eq!(derive_today_status(&records, day(4)), TodayStatus::NotMarked);
    }

    #[test]
    fn mark_actions_follow_status_and_loading() {
        assert!(TodayStatus::NotMarked.can_mark_in(false));
        assert!(!TodayStatus::NotMarked.can_mark_out(false));
        assert!(!TodayStatus::InMarked.can_mark_in(false));
        assert!(TodayStatus::InMarked.can_mark_out(false));
        assert!(!TodayStatus::Complete.can_mark_in(false));
        assert!(!TodayStatus::Complete.can_mark_out(false));

        assert!(!TodayStatus::NotMarked.can_mark_in(true));
        assert!(!TodayStatus::InMarked.can_mark_out(true));
    }

    #[test]
    fn worked_time_formats_hours_and_minutes() {
        assert_eq!(format_worked(Some(at(4, 9, 0)), Some(at(4, 17, 30))), "8h 30m");
        assert_eq!(format_worked(Some(at(4, 9, 0)), None), "-");
        assert_eq!(format_worked(None, None), "-");
        assert!(worked_duration(Some(at(4, 17, 0)), Some(at(4, 9, 0))).is_none());
    }

    #[test]
    fn filter_queries_match_backend_parameters() {
        assert_eq!(
            AttendanceFilter::Month.query(),
            vec![("filter", "month".to_string())]
        );
        assert_eq!(
            AttendanceFilter::Range { start: day(3), end: day(10) }.query(),
            vec![
                ("start_date", "2025-03-03".to_string()),
                ("end_date", "2025-03-10".to_string())
            ]
        );
        assert_eq!(
            AttendanceFilter::MonthOf { year: 2025, month: 2 }.query(),
            vec![("month", "2".to_string()), ("year", "2025".to_string())]
        );
        assert_eq!(AttendanceFilter::MonthOf { year: 2025, month: 2 }.label(), "February 2025");
    }

    #[test]
    fn custom_week_needs_both_ends() {
        let mut inputs = FilterInputs::starting(day(4));
        assert!(inputs.resolve(FilterKind::CustomWeek).is_none());
        inputs.range_start = Some(day(3));
        assert!(inputs.resolve(FilterKind::CustomWeek).is_none());
        inputs.range_end = Some(day(10));
        assert_eq!(
            inputs.resolve(FilterKind::CustomWeek),
            Some(AttendanceFilter::Range { start: day(3), end: day(10) })
        );
        assert_eq!(
            inputs.resolve(FilterKind::CustomMonth),
            Some(AttendanceFilter::MonthOf { year: 2025, month: 3 })
        );
    }

    #[test]
    fn stats_count_only_complete_days() {
        let records = vec![
            record(1, Some(at(1, 9, 0)), Some(at(1, 17, 0))),
            record(2, Some(at(2, 9, 0)), None),
            record(3, Some(at(3, 9, 0)), Some(at(3, 18, 0))),
        ];
        let stats = AttendanceStats::from_records(&records);
        assert_eq!(stats.total_days, 3);
        assert_eq!(stats.complete_days, 2);
        assert_eq!(stats.percentage_label(), "66.7");
        assert_eq!(AttendanceStats::from_records(&[]).percentage_label(), "0.0");
    }
}

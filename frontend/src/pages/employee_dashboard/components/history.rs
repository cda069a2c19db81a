use super::SECTION_CLASS;
use crate::{
    api::{ApiError, AttendanceRecord},
    components::{layout::LoadingSpinner, messages::InlineError},
    state::attendance::format_worked,
    utils::time::{format_date_long, format_time_12h},
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    Present,
    Incomplete,
    Absent,
}

impl DayStatus {
    pub fn of(record: &AttendanceRecord) -> Self {
        match (record.in_time, record.out_time) {
            (Some(_), Some(_)) => DayStatus::Present,
            (Some(_), None) => DayStatus::Incomplete,
            _ => DayStatus::Absent,
        }
    }

    fn label(self) -> &'static str {
        match self {
            DayStatus::Present => "Present",
            DayStatus::Incomplete => "Incomplete",
            DayStatus::Absent => "Absent",
        }
    }

    fn badge(self) -> &'static str {
        match self {
            DayStatus::Present => "bg-status-success-bg text-status-success-text",
            DayStatus::Incomplete => "bg-status-warning-bg text-status-warning-text",
            DayStatus::Absent => "bg-status-error-bg text-status-error-text",
        }
    }
}

pub fn empty_history_text(label: &str) -> String {
    format!("No attendance records found for {}", label.to_lowercase())
}

#[component]
pub fn HistoryRow(record: AttendanceRecord) -> impl IntoView {
    let status = DayStatus::of(&record);
    view! {
        <tr class="border-b border-border">
            <td class="px-4 py-3 text-sm text-fg">{format_date_long(record.date)}</td>
            <td class="px-4 py-3 text-sm text-fg-muted">{record.date.format("%A").to_string()}</td>
            <td class="px-4 py-3 text-sm text-fg">{format_time_12h(record.in_time)}</td>
            <td class="px-4 py-3 text-sm text-fg">{format_time_12h(record.out_time)}</td>
            <td class="px-4 py-3 text-sm font-semibold text-fg">
                {format_worked(record.in_time, record.out_time)}
            </td>
            <td class="px-4 py-3 text-sm">
                <span class=format!("rounded-full px-3 py-1 text-xs font-semibold {}", status.badge())>
                    {status.label()}
                </span>
            </td>
        </tr>
    }
}

/// History table for the active filter. `label` is `None` while the filter
/// still needs input, which renders as a prompt instead of a fetch.
#[component]
pub fn AttendanceHistory(
    #[prop(into)] records: Signal<Option<Result<Vec<AttendanceRecord>, ApiError>>>,
    #[prop(into)] label: Signal<Option<String>>,
) -> impl IntoView {
    let heading = move || match label.get() {
        Some(label) => format!("Attendance History - {}", label),
        None => "Attendance History".to_string(),
    };
    let count = move || match records.get() {
        Some(Ok(list)) => format!("({} records)", list.len()),
        _ => String::new(),
    };

    view! {
        <section class=SECTION_CLASS>
            <h2 class="text-xl font-bold text-fg">
                {heading}
                <span class="ml-2 text-sm font-normal text-fg-muted">{count}</span>
            </h2>
            {move || match (label.get(), records.get()) {
                (None, _) => view! {
                    <p class="py-8 text-center text-sm text-fg-muted">"Pick both week dates"</p>
                }
                    .into_view(),
                (_, None) => view! { <LoadingSpinner /> }.into_view(),
                (_, Some(Err(err))) => view! { <InlineError error=Signal::derive(move || Some(err.clone())) /> }.into_view(),
                (Some(label), Some(Ok(list))) if list.is_empty() => view! {
                    <p class="py-8 text-center text-sm text-fg-muted">{empty_history_text(&label)}</p>
                }
                    .into_view(),
                (_, Some(Ok(list))) => view! {
                    <div class="overflow-x-auto">
                        <table class="min-w-full">
                            <thead>
                                <tr class="text-left text-xs uppercase text-fg-muted">
                                    <th class="px-4 py-2">"Date"</th>
                                    <th class="px-4 py-2">"Day"</th>
                                    <th class="px-4 py-2">"IN Time"</th>
                                    <th class="px-4 py-2">"OUT Time"</th>
                                    <th class="px-4 py-2">"Total Hours"</th>
                                    <th class="px-4 py-2">"Status"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {list
                                    .into_iter()
                                    .map(|record| view! { <HistoryRow record=record /> })
                                    .collect_view()}
                            </tbody>
                        </table>
                    </div>
                }
                    .into_view(),
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::record;
    use chrono::NaiveDate;

    #[test]
    fn status_follows_marked_times() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        assert_eq!(DayStatus::of(&record(day, Some((9, 0)), Some((17, 30)))), DayStatus::Present);
        assert_eq!(DayStatus::of(&record(day, Some((9, 0)), None)), DayStatus::Incomplete);
        assert_eq!(DayStatus::of(&record(day, None, None)), DayStatus::Absent);
    }

    #[test]
    fn empty_text_lowercases_the_filter_label() {
        assert_eq!(
            empty_history_text("This Month"),
            "No attendance records found for this month"
        );
    }
}

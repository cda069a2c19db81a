use crate::state::attendance::AttendanceStats;
use leptos::*;

#[component]
fn StatCard(label: &'static str, #[prop(into)] value: Signal<String>, #[prop(optional)] hint: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="rounded-lg bg-surface-elevated p-6 shadow">
            <p class="text-xs font-bold uppercase tracking-widest text-fg-muted">{label}</p>
            <p class="mt-2 text-3xl font-extrabold text-fg">{value}</p>
            {hint.map(|hint| view! { <p class="mt-1 text-xs text-fg-muted">{hint}</p> })}
        </div>
    }
}

#[component]
pub fn StatsCards(#[prop(into)] stats: Signal<AttendanceStats>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-4 md:grid-cols-3">
            <StatCard
                label="Days Present"
                value=Signal::derive(move || stats.get().complete_days.to_string())
                hint="Both IN & OUT marked"
            />
            <StatCard label="Total Days" value=Signal::derive(move || stats.get().total_days.to_string()) />
            <StatCard
                label="Attendance %"
                value=Signal::derive(move || format!("{}%", stats.get().percentage_label()))
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::record, ssr::render_page};
    use chrono::NaiveDate;

    #[test]
    fn cards_count_complete_days() {
        let html = render_page(|| {
            let day = |d| NaiveDate::from_ymd_opt(2025, 3, d).unwrap();
            let records = vec![
                record(day(3), Some((9, 0)), Some((17, 30))),
                record(day(4), Some((9, 0)), None),
                record(day(5), Some((9, 0)), Some((18, 0))),
            ];
            let stats = AttendanceStats::from_records(&records);
            view! { <StatsCards stats=Signal::derive(move || stats) /> }
        });
        assert!(html.contains("Days Present"));
        assert!(html.contains("66.7%"));
    }
}

use crate::state::attendance::{FilterInputs, FilterKind};
use crate::utils::time::{format_date_input, parse_date_input};
use leptos::*;

const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const INPUT_CLASS: &str = "w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-form-control-text";

fn button_class(active: bool) -> &'static str {
    if active {
        "rounded-md px-3 py-2 text-xs sm:text-sm font-semibold bg-action-primary-bg text-action-primary-text shadow"
    } else {
        "rounded-md px-3 py-2 text-xs sm:text-sm font-semibold bg-surface-muted text-fg hover:bg-action-ghost-bg-hover"
    }
}

fn date_value(date: Option<chrono::NaiveDate>) -> String {
    date.map(format_date_input).unwrap_or_default()
}

/// Filter buttons plus the inputs the custom kinds need.
#[component]
pub fn AttendanceFilterBar(
    kinds: &'static [FilterKind],
    kind: RwSignal<FilterKind>,
    inputs: RwSignal<FilterInputs>,
) -> impl IntoView {
    let buttons = kinds
        .iter()
        .map(|option| {
            let option = *option;
            view! {
                <button
                    type="button"
                    class=move || button_class(kind.get() == option)
                    on:click=move |_| kind.set(option)
                >
                    {option.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="space-y-3">
            <div class="grid grid-cols-2 sm:grid-cols-4 lg:grid-cols-7 gap-2">{buttons}</div>
            {move || match kind.get() {
                FilterKind::CustomDate => view! {
                    <label class="block text-sm text-fg-muted">
                        "Select Date"
                        <input
                            type="date"
                            class=INPUT_CLASS
                            prop:value=move || format_date_input(inputs.with(|i| i.date))
                            on:change=move |ev| {
                                if let Some(date) = parse_date_input(&event_target_value(&ev)) {
                                    inputs.update(|i| i.date = date);
                                }
                            }
                        />
                    </label>
                }
                    .into_view(),
                FilterKind::CustomWeek => view! {
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-3">
                        <label class="block text-sm text-fg-muted">
                            "Week Start"
                            <input
                                type="date"
                                class=INPUT_CLASS
                                prop:value=move || date_value(inputs.with(|i| i.range_start))
                                on:change=move |ev| {
                                    let start = parse_date_input(&event_target_value(&ev));
                                    inputs.update(|i| i.range_start = start);
                                }
                            />
                        </label>
                        <label class="block text-sm text-fg-muted">
                            "Week End"
                            <input
                                type="date"
                                class=INPUT_CLASS
                                prop:value=move || date_value(inputs.with(|i| i.range_end))
                                on:change=move |ev| {
                                    let end = parse_date_input(&event_target_value(&ev));
                                    inputs.update(|i| i.range_end = end);
                                }
                            />
                        </label>
                    </div>
                }
                    .into_view(),
                FilterKind::CustomMonth => view! {
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-3">
                        <label class="block text-sm text-fg-muted">
                            "Month"
                            <select
                                class=INPUT_CLASS
                                on:change=move |ev| {
                                    if let Ok(month) = event_target_value(&ev).parse::<u32>() {
                                        inputs.update(|i| i.month = month);
                                    }
                                }
                            >
                                {MONTHS
                                    .iter()
                                    .enumerate()
                                    .map(|(index, name)| {
                                        let value = index as u32 + 1;
                                        view! {
                                            <option
                                                value=value.to_string()
                                                selected=move || inputs.with(|i| i.month == value)
                                            >
                                                {*name}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </label>
                        <label class="block text-sm text-fg-muted">
                            "Year"
                            <input
                                type="number"
                                class=INPUT_CLASS
                                prop:value=move || inputs.with(|i| i.year.to_string())
                                on:change=move |ev| {
                                    if let Ok(year) = event_target_value(&ev).parse::<i32>() {
                                        inputs.update(|i| i.year = year);
                                    }
                                }
                            />
                        </label>
                    </div>
                }
                    .into_view(),
                _ => ().into_view(),
            }}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use chrono::NaiveDate;

    fn render(kind: FilterKind, kinds: &'static [FilterKind]) -> String {
        render_to_string(move || {
            let today = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
            let kind = create_rw_signal(kind);
            let inputs = create_rw_signal(FilterInputs::starting(today));
            view! { <AttendanceFilterBar kinds=kinds kind=kind inputs=inputs /> }
        })
    }

    #[test]
    fn admin_set_has_no_all_time_button() {
        let html = render(FilterKind::Today, &FilterKind::ADMIN);
        assert!(html.contains("Custom Week"));
        assert!(!html.contains("All Time"));
    }

    #[test]
    fn custom_week_shows_both_range_inputs() {
        let html = render(FilterKind::CustomWeek, &FilterKind::EMPLOYEE);
        assert!(html.contains("Week Start"));
        assert!(html.contains("Week End"));
    }

    #[test]
    fn custom_month_lists_month_names() {
        let html = render(FilterKind::CustomMonth, &FilterKind::EMPLOYEE);
        assert!(html.contains("September"));
        assert!(html.contains("Year"));
    }
}

use super::DANGER_LINK;
use crate::{
    api::{AllAttendanceResponse, AttendanceRecord, EmployeeAttendance},
    components::{
        attendance_filter::AttendanceFilterBar,
        confirm_dialog::{ConfirmDialog, PendingConfirm},
        layout::LoadingSpinner,
        messages::{EmptyState, InlineError},
    },
    pages::admin::{repository::AdminRepository, view_model::run_and_report},
    state::attendance::{FilterInputs, FilterKind},
    utils::{
        lifetime::ComponentLifetime,
        time::{format_date_long, format_time_12h, today_local},
    },
};
use leptos::*;

pub fn hours_label(hours: f64) -> String {
    format!("{}h", (hours * 100.0).round() / 100.0)
}

pub fn bulk_deleted_message(count: u32) -> String {
    format!("Deleted {} attendance record(s) successfully!", count)
}

pub fn showing_label(data: &AllAttendanceResponse) -> String {
    format!(
        "Showing: {} to {}",
        format_date_long(data.date_range.start),
        format_date_long(data.date_range.end)
    )
}

fn time_cell(display: &Option<String>, fallback: Option<chrono::NaiveDateTime>) -> String {
    display
        .clone()
        .filter(|text| !text.trim().is_empty())
        .unwrap_or_else(|| format_time_12h(fallback))
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordTarget {
    pub record_id: String,
    pub employee_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeTarget {
    pub employee_id: u32,
    pub employee_name: String,
}

#[component]
fn RecordRow(
    record: AttendanceRecord,
    employee_name: String,
    on_delete: Callback<RecordTarget>,
) -> impl IntoView {
    let target = record.id.clone().map(|record_id| RecordTarget {
        record_id,
        employee_name,
    });
    view! {
        <tr class="border-b border-border text-sm">
            <td class="px-3 py-2 text-fg">{format_date_long(record.date)}</td>
            <td class="px-3 py-2 text-fg">{time_cell(&record.in_time_display, record.in_time)}</td>
            <td class="px-3 py-2 text-fg">{time_cell(&record.out_time_display, record.out_time)}</td>
            <td class="px-3 py-2 text-fg">{hours_label(record.hours_worked)}</td>
            <td class="px-3 py-2">
                {target.map(|target| view! {
                    <button
                        type="button"
                        class=DANGER_LINK
                        title="Delete record"
                        on:click=move |_| on_delete.call(target.clone())
                    >
                        "🗑️"
                    </button>
                })}
            </td>
        </tr>
    }
}

#[component]
pub fn EmployeeAttendanceCard(
    data: EmployeeAttendance,
    on_delete_record: Callback<RecordTarget>,
    on_delete_all: Callback<EmployeeTarget>,
) -> impl IntoView {
    let all_target = EmployeeTarget {
        employee_id: data.employee_id,
        employee_name: data.employee_name.clone(),
    };
    let name = data.employee_name.clone();
    let records = data.records;
    let rows = (!records.is_empty()).then(|| {
        records
            .into_iter()
            .map(|record| view! {
                <RecordRow record=record employee_name=name.clone() on_delete=on_delete_record />
            })
            .collect_view()
    });

    view! {
        <article class="rounded-lg border border-border bg-surface-elevated p-5 shadow-sm space-y-4">
            <div class="flex items-start justify-between gap-3">
                <div>
                    <h3 class="text-lg font-semibold text-fg">{data.employee_name}</h3>
                    <p class="text-xs text-fg-muted">{format!("ID: {} | {}", data.employee_id, data.email)}</p>
                </div>
                <button
                    type="button"
                    class="rounded-md px-3 py-1 text-sm font-semibold bg-status-error-bg text-status-error-text hover:opacity-80"
                    on:click=move |_| on_delete_all.call(all_target.clone())
                >
                    "🗑️ Delete All"
                </button>
            </div>
            <div class="grid grid-cols-3 gap-3 text-center">
                <div class="rounded-md bg-surface-muted p-3">
                    <p class="text-xs text-fg-muted">"Present"</p>
                    <p class="text-xl font-bold text-fg">{data.summary.present_days}</p>
                </div>
                <div class="rounded-md bg-surface-muted p-3">
                    <p class="text-xs text-fg-muted">"Hours"</p>
                    <p class="text-xl font-bold text-fg">{hours_label(data.summary.total_hours)}</p>
                </div>
                <div class="rounded-md bg-surface-muted p-3">
                    <p class="text-xs text-fg-muted">"Days"</p>
                    <p class="text-xl font-bold text-fg">{data.summary.total_days}</p>
                </div>
            </div>
            {match rows {
                Some(rows) => view! {
                    <div class="overflow-x-auto">
                        <table class="min-w-full">
                            <thead>
                                <tr class="text-left text-xs uppercase text-fg-muted">
                                    <th class="px-3 py-2">"Date"</th>
                                    <th class="px-3 py-2">"In Time"</th>
                                    <th class="px-3 py-2">"Out Time"</th>
                                    <th class="px-3 py-2">"Hours"</th>
                                    <th class="px-3 py-2">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>{rows}</tbody>
                        </table>
                    </div>
                }
                .into_view(),
                None => view! {
                    <p class="py-6 text-center text-sm text-fg-muted">"No attendance records for this period"</p>
                }
                .into_view(),
            }}
        </article>
    }
}

#[component]
pub fn AttendanceTab(repository: AdminRepository) -> impl IntoView {
    let repository = store_value(repository);
    let kind = create_rw_signal(FilterKind::Today);
    let inputs = create_rw_signal(FilterInputs::starting(today_local()));
    let reload = create_rw_signal(0u32);
    let lifetime = ComponentLifetime::bind();
    let pending_record = PendingConfirm::<RecordTarget>::new();
    let pending_employee = PendingConfirm::<EmployeeTarget>::new();

    let attendance = create_resource(
        move || (inputs.with(|i| i.resolve(kind.get())), reload.get()),
        move |(filter, _)| {
            let repo = repository.get_value();
            async move {
                match filter {
                    Some(filter) => repo.attendance(filter).await.map(Some),
                    None => Ok(None),
                }
            }
        },
    );
    let refetch = move || reload.update(|n| *n = n.wrapping_add(1));

    let record_lifetime = lifetime.clone();
    let on_confirm_record = Callback::new(move |_| {
        let Some(target) = pending_record.take() else {
            return;
        };
        let repo = repository.get_value();
        let work = async move {
            repo.delete_attendance_record(&target.record_id).await?;
            refetch();
            Ok(())
        };
        run_and_report(
            &record_lifetime,
            work,
            "delete attendance",
            "Attendance record deleted successfully!".into(),
        );
    });

    let on_confirm_employee = Callback::new(move |_| {
        let Some(target) = pending_employee.take() else {
            return;
        };
        let Some(filter) = inputs.with_untracked(|i| i.resolve(kind.get_untracked())) else {
            return;
        };
        let repo = repository.get_value();
        lifetime.spawn(async move {
            match repo.delete_employee_attendance(target.employee_id, filter).await {
                Ok(resp) => {
                    refetch();
                    crate::utils::notify::alert(&bulk_deleted_message(resp.deleted_count));
                }
                Err(err) if err.is_cancelled() => {}
                Err(err) => {
                    log::warn!("bulk attendance delete failed: {}", err);
                    crate::utils::notify::alert(&crate::utils::notify::failure_message(
                        "delete attendance",
                        &err.error,
                    ));
                }
            }
        });
    });

    let record_message = Signal::derive(move || {
        pending_record
            .target()
            .map(|t| format!("Delete this attendance record for {}?", t.employee_name))
            .unwrap_or_default()
    });
    let employee_message = Signal::derive(move || {
        pending_employee
            .target()
            .map(|t| format!("Delete all attendance records for {} in this period?", t.employee_name))
            .unwrap_or_default()
    });

    let body = move || {
        attendance.get().map(|result| match result {
            Err(err) => {
                let error = create_rw_signal(Some(err));
                view! { <InlineError error=error /> }.into_view()
            }
            Ok(None) => view! {
                <EmptyState title="Pick both week dates" description="Choose a start and end date to load a custom week." />
            }
            .into_view(),
            Ok(Some(data)) if data.attendance.is_empty() => view! {
                <div class="space-y-4">
                    <p class="text-sm text-fg-muted">{showing_label(&data)}</p>
                    <EmptyState title="No attendance data available" />
                </div>
            }
            .into_view(),
            Ok(Some(data)) => {
                let label = showing_label(&data);
                let cards = data
                    .attendance
                    .into_iter()
                    .map(|employee| view! {
                        <EmployeeAttendanceCard
                            data=employee
                            on_delete_record=Callback::new(move |t| pending_record.ask(t))
                            on_delete_all=Callback::new(move |t| pending_employee.ask(t))
                        />
                    })
                    .collect_view();
                view! {
                    <div class="space-y-4">
                        <p class="text-sm text-fg-muted">{label}</p>
                        {cards}
                    </div>
                }
                .into_view()
            }
        })
    };

    view! {
        <div class="space-y-6">
            <div class="rounded-lg bg-surface-elevated p-6 shadow-sm">
                <AttendanceFilterBar kinds=&FilterKind::ADMIN kind=kind inputs=inputs />
            </div>
            <Suspense fallback=move || view! {
                <div class="flex flex-col items-center py-12">
                    <LoadingSpinner />
                    <p class="mt-4 text-sm text-fg-muted">"Loading attendance data..."</p>
                </div>
            }>
                {body}
            </Suspense>
            <ConfirmDialog
                is_open=pending_record.is_open()
                title="Delete attendance record"
                message=record_message
                confirm_label="Delete"
                on_confirm=on_confirm_record
                on_cancel=Callback::new(move |_| pending_record.dismiss())
                destructive=true
            />
            <ConfirmDialog
                is_open=pending_employee.is_open()
                title="Delete attendance records"
                message=employee_message
                confirm_label="Delete"
                on_confirm=on_confirm_employee
                on_cancel=Callback::new(move |_| pending_employee.dismiss())
                destructive=true
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_are_rounded_to_two_places() {
        assert_eq!(hours_label(8.5), "8.5h");
        assert_eq!(hours_label(7.666_666), "7.67h");
        assert_eq!(hours_label(0.0), "0h");
    }

    #[test]
    fn bulk_message_reports_the_count() {
        assert_eq!(
            bulk_deleted_message(3),
            "Deleted 3 attendance record(s) successfully!"
        );
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::AttendanceSummary;
    use crate::test_support::{helpers::record, ssr::render_page};
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    #[test]
    fn card_shows_summary_and_records() {
        let html = render_page(|| {
            let data = EmployeeAttendance {
                employee_id: 7,
                employee_name: "Asha Menon".into(),
                email: "asha@example.com".into(),
                records: vec![record(day(4), Some((9, 0)), Some((17, 30)))],
                summary: AttendanceSummary {
                    total_hours: 8.5,
                    present_days: 1,
                    total_days: 1,
                },
            };
            view! {
                <EmployeeAttendanceCard
                    data=data
                    on_delete_record=Callback::new(|_| {})
                    on_delete_all=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("ID: 7 | asha@example.com"));
        assert!(html.contains("🗑️ Delete All"));
        assert!(html.contains("Tue, Mar 4, 2025"));
        assert!(html.contains("8.5h"));
    }

    #[test]
    fn card_without_records_says_so() {
        let html = render_page(|| {
            let data = EmployeeAttendance {
                employee_id: 3,
                employee_name: "Ravi".into(),
                email: "ravi@example.com".into(),
                records: Vec::new(),
                summary: AttendanceSummary::default(),
            };
            view! {
                <EmployeeAttendanceCard
                    data=data
                    on_delete_record=Callback::new(|_| {})
                    on_delete_all=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("No attendance records for this period"));
    }

    #[test]
    fn tab_shows_admin_filters() {
        let html = render_page(|| {
            let repository = AdminRepository::new_with_client(std::rc::Rc::new(
                crate::api::ApiClient::new_with_base_url("http://api"),
            ));
            view! { <AttendanceTab repository=repository /> }
        });
        assert!(html.contains("Today"));
        assert!(!html.contains("All Time"));
    }
}

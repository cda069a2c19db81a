use crate::pages::employee_dashboard::{
    components::{AttendanceHistory, MarkAttendanceSection, QuickLinksSection, StatsCards},
    layout::EmployeeDashboardFrame,
    view_model::use_employee_dashboard_view_model,
};
use crate::{
    api::Employee,
    components::attendance_filter::AttendanceFilterBar,
    state::{
        attendance::{AttendanceStats, FilterKind},
        navigation::{use_navigator, Page},
        session::{use_session, Role},
    },
};
use leptos::*;

#[component]
pub fn EmployeeDashboardPanel(employee: Employee) -> impl IntoView {
    let employee_id = employee.id;
    let vm = use_employee_dashboard_view_model(employee.clone());
    let session = use_session();
    let navigator = use_navigator();

    let on_logout = Callback::new(move |_| {
        session.end(Role::Employee);
        log::info!("employee {} logged out", employee_id);
        navigator.navigate(Page::EmployeePortal);
    });
    let records = Signal::derive(move || vm.records.get());
    let stats = Signal::derive(move || match vm.records.get() {
        Some(Ok(list)) => AttendanceStats::from_records(&list),
        _ => AttendanceStats::from_records(&[]),
    });

    view! {
        <EmployeeDashboardFrame name=employee.name employee_id=employee.id on_logout=on_logout>
            <QuickLinksSection links=vm.quick_links />
            <MarkAttendanceSection
                feedback=vm.feedback
                status=Signal::derive(move || vm.today_status())
                today=Signal::derive(move || vm.today_record())
                on_mark=Callback::new(move |direction| vm.mark(direction))
            />
            <StatsCards stats=stats />
            <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <h3 class="text-lg font-bold text-fg">"🔍 Filter Attendance"</h3>
                <AttendanceFilterBar
                    kinds=&FilterKind::EMPLOYEE
                    kind=vm.filter_kind
                    inputs=vm.filter_inputs
                />
            </section>
            <AttendanceHistory records=records label=Signal::derive(move || vm.filter_label()) />
        </EmployeeDashboardFrame>
    }
}

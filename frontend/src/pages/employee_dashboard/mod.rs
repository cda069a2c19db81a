use crate::{
    components::guard::RequireSession,
    state::{
        navigation::{use_navigator, Page},
        session::{use_session, Role},
    },
};
use leptos::*;

pub mod components;
pub mod layout;
pub mod panel;
pub mod repository;
pub mod view_model;

pub use panel::EmployeeDashboardPanel;

#[component]
pub fn EmployeeDashboardPage(employee_id: u32) -> impl IntoView {
    view! {
        <RequireSession role=Role::Employee>
            <OwnedDashboard employee_id=employee_id />
        </RequireSession>
    }
}

/// Shows the dashboard only to the employee it belongs to; anyone else is
/// sent back to the employee login.
#[component]
fn OwnedDashboard(employee_id: u32) -> impl IntoView {
    let owner = view_model::dashboard_owner(use_session().employee_profile(), employee_id);
    if owner.is_none() {
        log::warn!("dashboard {} requested without its employee signed in", employee_id);
        let navigator = use_navigator();
        create_effect(move |_| navigator.navigate(Page::EmployeeLogin));
    }
    owner.map(|employee| view! { <EmployeeDashboardPanel employee=employee /> })
}

mod panel;
mod repository;

pub use panel::EmployeePortalPanel;

use leptos::*;

#[component]
pub fn EmployeePortalPage() -> impl IntoView {
    view! { <EmployeePortalPanel /> }
}

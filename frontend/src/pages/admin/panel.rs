use crate::pages::admin::{
    components::{
        admin_links::AdminLinksTab, attendance::AttendanceTab, careers::CareersTab,
        employees::EmployeesTab, news::NewsTab,
    },
    layout::{AdminDashboardFrame, AdminTabBar},
    view_model::{use_admin_view_model, AdminTab},
};
use crate::{
    components::guard::end_session,
    state::session::{use_session, Role},
};
use leptos::*;

#[component]
pub fn AdminPanel() -> impl IntoView {
    let vm = use_admin_view_model();
    let session = use_session();
    let on_logout = Callback::new(move |_| end_session(&session, Role::Admin));
    let repository = store_value(vm.repository.clone());
    let tab = vm.tab;

    view! {
        <AdminDashboardFrame on_logout=on_logout>
            <AdminTabBar tab=tab />
            {move || {
                let repository = repository.get_value();
                match tab.get() {
                    AdminTab::News => view! { <NewsTab repository=repository /> }.into_view(),
                    AdminTab::Careers => view! { <CareersTab repository=repository /> }.into_view(),
                    AdminTab::Employees => view! { <EmployeesTab repository=repository /> }.into_view(),
                    AdminTab::Attendance => view! { <AttendanceTab repository=repository /> }.into_view(),
                    AdminTab::MyLinks => view! { <AdminLinksTab repository=repository /> }.into_view(),
                }
            }}
        </AdminDashboardFrame>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::provide_signed_in, ssr::render_page};

    #[test]
    fn dashboard_opens_on_news_with_every_tab_listed() {
        let html = render_page(|| {
            provide_signed_in(Role::Admin);
            view! { <AdminPanel /> }
        });
        for tab in AdminTab::ALL {
            let label = tab.label().replace('&', "&amp;");
            assert!(html.contains(tab.label()) || html.contains(&label));
        }
        assert!(html.contains("Logout"));
        assert!(html.contains("➕ Add News&#x2F;Event"));
    }
}

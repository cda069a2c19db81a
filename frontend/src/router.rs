use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use std::rc::Rc;

use crate::{
    api::ApiClient,
    components::layout::{Footer, Header, ScrollTopButton},
    pages::{
        AboutPage, AdminDashboardPage, AdminLoginPage, CareersPage, ContactPage,
        EmployeeDashboardPage, EmployeeLoginPage, EmployeePortalPage, ForgotPasswordPage,
        HomePage, NewsPage, NotFoundPage, PortalPage, ResetPasswordPage, ServicesPage,
    },
    state::{
        navigation::{
            page_from_state, provide_navigator, use_navigator, BrowserHistory, DeepLink,
            HistoryBackend, Navigator, Page,
        },
        portal::PortalSelection,
        session::{provide_session, Role, Session},
    },
};

/// The landing page draws its own full-bleed footer area.
pub fn shows_site_chrome(page: Page) -> bool {
    page != Page::Home
}

pub fn render_page(page: Page) -> View {
    match page {
        Page::Home => view! { <HomePage /> }.into_view(),
        Page::About => view! { <AboutPage /> }.into_view(),
        Page::Services => view! { <ServicesPage /> }.into_view(),
        Page::Contact => view! { <ContactPage /> }.into_view(),
        Page::News => view! { <NewsPage /> }.into_view(),
        Page::Careers => view! { <CareersPage /> }.into_view(),
        Page::Portal => view! { <PortalPage /> }.into_view(),
        Page::AdminLogin => view! { <AdminLoginPage /> }.into_view(),
        Page::ForgotPassword => view! { <ForgotPasswordPage role=Role::Admin /> }.into_view(),
        Page::ResetPassword => view! { <ResetPasswordPage role=Role::Admin /> }.into_view(),
        Page::AdminDashboard => view! { <AdminDashboardPage /> }.into_view(),
        Page::EmployeePortal => view! { <EmployeePortalPage /> }.into_view(),
        Page::EmployeeLogin => view! { <EmployeeLoginPage /> }.into_view(),
        Page::EmployeeForgotPassword => {
            view! { <ForgotPasswordPage role=Role::Employee /> }.into_view()
        }
        Page::EmployeeResetPassword => {
            view! { <ResetPasswordPage role=Role::Employee /> }.into_view()
        }
        Page::EmployeeDashboard(id) => view! { <EmployeeDashboardPage employee_id=id /> }.into_view(),
        Page::NotFound => view! { <NotFoundPage /> }.into_view(),
    }
}

/// Renders whatever page the navigator holds, inside the site chrome.
#[component]
pub fn Shell() -> impl IntoView {
    let page = use_navigator().page();
    let chrome = move || shows_site_chrome(page.get());

    view! {
        <Title text=move || page.get().title() />
        <div class="min-h-screen flex flex-col bg-surface text-fg">
            <Header />
            <main class="flex-1">{move || render_page(page.get())}</main>
            <Show when=chrome>
                <Footer />
                <ScrollTopButton />
            </Show>
        </div>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let session = Session::browser();
    provide_session(session.clone());
    provide_context(ApiClient::new().with_session(session));
    provide_context(PortalSelection::new());

    let history: Rc<dyn HistoryBackend> = Rc::new(BrowserHistory);
    let navigator = Navigator::bootstrap(history, DeepLink::from_location());
    provide_navigator(navigator.clone());

    let _popstate = window_event_listener(ev::popstate, move |event| {
        navigator.on_pop_state(page_from_state(&event.state()));
    });

    view! { <Shell /> }
}

pub fn mount_app() {
    mount_to_body(App);
}

#[cfg(test)]
mod tests {
    use super::shows_site_chrome;
    use crate::state::navigation::Page;

    #[test]
    fn home_hides_footer_and_scroll_button() {
        assert!(!shows_site_chrome(Page::Home));
        assert!(shows_site_chrome(Page::Careers));
        assert!(shows_site_chrome(Page::EmployeeDashboard(4)));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use crate::test_support::helpers::provide_test_navigator;

    fn render_at(page: Page) -> String {
        render_to_string(move || {
            provide_meta_context();
            provide_session(Session::in_memory());
            let (navigator, _) = provide_test_navigator();
            navigator.navigate(page);
            view! { <Shell /> }
        })
    }

    #[test]
    fn shell_renders_the_current_page() {
        let html = render_at(Page::NotFound);
        assert!(html.contains("Portal"));
        assert!(html.contains("Back to Home"));
    }

    #[test]
    fn admin_dashboard_needs_a_session() {
        let html = render_at(Page::AdminDashboard);
        assert!(!html.contains("Manage website content and postings"));
    }
}

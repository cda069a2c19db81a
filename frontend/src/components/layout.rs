use crate::state::navigation::{use_navigator, Page};
use leptos::*;

const NAV_ITEMS: [(Page, &str); 7] = [
    (Page::Home, "Home"),
    (Page::About, "About Us"),
    (Page::Services, "Services"),
    (Page::News, "News & Events"),
    (Page::Careers, "Careers"),
    (Page::Contact, "Contact"),
    (Page::Portal, "Portal"),
];

fn nav_link_class(active: bool) -> &'static str {
    if active {
        "px-3 py-2 rounded-md text-sm font-medium text-fg bg-action-ghost-bg-hover"
    } else {
        "px-3 py-2 rounded-md text-sm font-medium text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
    }
}

/// Portal screens highlight the "Portal" entry.
fn highlights(item: Page, current: Page) -> bool {
    match item {
        Page::Portal => matches!(
            current,
            Page::Portal
                | Page::AdminLogin
                | Page::ForgotPassword
                | Page::ResetPassword
                | Page::AdminDashboard
                | Page::EmployeePortal
                | Page::EmployeeLogin
                | Page::EmployeeForgotPassword
                | Page::EmployeeResetPassword
                | Page::EmployeeDashboard(_)
        ),
        other => other == current,
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let navigator = use_navigator();
    let current = navigator.page();
    let (menu_open, set_menu_open) = create_signal(false);
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    let links = move |mobile: bool| {
        let navigator = navigator.clone();
        NAV_ITEMS
            .iter()
            .map(|(page, label)| {
                let page = *page;
                let navigator = navigator.clone();
                view! {
                    <button
                        type="button"
                        class=move || {
                            let base = nav_link_class(highlights(page, current.get()));
                            if mobile { format!("block w-full text-left {}", base) } else { base.to_string() }
                        }
                        on:click=move |_| {
                            set_menu_open.set(false);
                            navigator.navigate(page);
                        }
                    >
                        {*label}
                    </button>
                }
            })
            .collect_view()
    };
    let desktop_links = links.clone();

    view! {
        <header class="sticky top-0 z-40 bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-fg tracking-wide">"MAG MARINE"</h1>
                    <nav class="hidden lg:flex space-x-2">{desktop_links(false)}</nav>
                    <button
                        type="button"
                        class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                        on:click=toggle_menu
                        aria-expanded=move || menu_open.get()
                        aria-controls="mobile-nav"
                    >
                        <span class="sr-only">
                            {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                        </span>
                        <svg class="h-6 w-6" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                        </svg>
                    </button>
                </div>
                <Show when=move || menu_open.get()>
                    <nav id="mobile-nav" class="lg:hidden border-t border-border px-2 py-3 space-y-1">
                        {links(true)}
                    </nav>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let navigator = use_navigator();
    let year = chrono::Datelike::year(&crate::utils::time::today_local());
    let quick_links = [
        (Page::About, "About Us"),
        (Page::Services, "Services"),
        (Page::Careers, "Careers"),
    ]
    .into_iter()
    .map(|(page, label)| {
        let navigator = navigator.clone();
        view! {
            <li>
                <button
                    type="button"
                    class="text-sm text-fg-muted hover:text-fg"
                    on:click=move |_| navigator.navigate(page)
                >
                    {label}
                </button>
            </li>
        }
    })
    .collect_view();

    view! {
        <footer class="bg-surface-muted border-t border-border">
            <div class="max-w-7xl mx-auto px-4 py-10 grid grid-cols-1 md:grid-cols-4 gap-8">
                <div class="md:col-span-2">
                    <h3 class="text-lg font-bold text-fg mb-3">"MAG MARINE SERVICES"</h3>
                    <p class="text-sm text-fg-muted leading-relaxed">
                        "Your trusted partner in marine engineering, diving services, and maritime solutions."
                    </p>
                </div>
                <div>
                    <h4 class="text-base font-semibold text-fg mb-3">"Quick Links"</h4>
                    <ul class="space-y-2">{quick_links}</ul>
                </div>
                <div>
                    <h4 class="text-base font-semibold text-fg mb-3">"Contact"</h4>
                    <ul class="space-y-2 text-sm text-fg-muted">
                        <li>"Email: hello@magmarine.in"</li>
                        <li>"Phone: 0484 312140"</li>
                    </ul>
                </div>
            </div>
            <p class="border-t border-border py-6 text-center text-sm text-fg-muted">
                {format!("© {} Mag Marine Services Pvt. Ltd. All rights reserved.", year)}
            </p>
        </footer>
    }
}

#[component]
pub fn ScrollTopButton() -> impl IntoView {
    let navigator = use_navigator();
    view! {
        <button
            type="button"
            aria-label="Scroll to top"
            class="fixed bottom-6 right-4 md:bottom-8 md:right-8 z-50 rounded-full p-3 shadow-lg bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
            on:click=move |_| navigator.scroll_to_top()
        >
            <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 10l7-7m0 0l7 7m-7-7v18"/>
            </svg>
        </button>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portal_entry_stays_active_inside_portal_flows() {
        assert!(highlights(Page::Portal, Page::EmployeeDashboard(3)));
        assert!(highlights(Page::Portal, Page::AdminLogin));
        assert!(!highlights(Page::Portal, Page::News));
        assert!(highlights(Page::News, Page::News));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::provide_test_navigator;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn header_lists_public_pages() {
        let html = render_to_string(move || {
            provide_test_navigator();
            view! { <Header /> }
        });
        assert!(html.contains("About Us"));
        assert!(html.contains("News &amp; Events") || html.contains("News & Events"));
        assert!(html.contains("Portal"));
    }

    #[test]
    fn footer_and_feedback_render() {
        let html = render_to_string(move || {
            provide_test_navigator();
            view! {
                <div>
                    <Footer />
                    <ScrollTopButton />
                    <LoadingSpinner />
                </div>
            }
        });
        assert!(html.contains("MAG MARINE SERVICES"));
        assert!(html.contains("Scroll to top"));
        assert!(html.contains("animate-spin"));
    }
}

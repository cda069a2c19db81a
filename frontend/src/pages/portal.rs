use crate::state::navigation::{use_navigator, Page};
use leptos::*;

#[component]
fn PortalChoice(
    title: &'static str,
    description: &'static str,
    action_label: &'static str,
    target: Page,
) -> impl IntoView {
    let navigator = use_navigator();
    view! {
        <div class="rounded-lg border border-border bg-surface-elevated p-8 shadow-sm flex flex-col">
            <h2 class="text-2xl font-bold text-fg">{title}</h2>
            <p class="mt-3 flex-1 text-sm text-fg-muted">{description}</p>
            <button
                type="button"
                class="mt-6 rounded-md py-3 text-sm font-semibold text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover"
                on:click=move |_| navigator.navigate(target)
            >
                {action_label}
            </button>
        </div>
    }
}

#[component]
pub fn PortalPage() -> impl IntoView {
    view! {
        <div class="bg-surface pt-16 pb-20">
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
                <h1 class="text-4xl font-bold text-fg text-center">"Portal"</h1>
                <p class="mt-3 text-center text-fg-muted">"Choose how you want to sign in."</p>
                <div class="mt-10 grid grid-cols-1 md:grid-cols-2 gap-6">
                    <PortalChoice
                        title="Admin Portal"
                        description="Manage news, careers, employees, quick links and attendance."
                        action_label="Admin Login"
                        target=Page::AdminLogin
                    />
                    <PortalChoice
                        title="Employee Portal"
                        description="Mark your attendance, open your quick links and review your history."
                        action_label="Employee Login"
                        target=Page::EmployeePortal
                    />
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_page;

    #[test]
    fn offers_both_portals() {
        let html = render_page(|| view! { <PortalPage /> });
        assert!(html.contains("Admin Login"));
        assert!(html.contains("Employee Login"));
    }
}

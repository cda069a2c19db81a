use super::view_model::use_employee_login_view_model;
use crate::components::messages::InlineError;
use crate::state::{
    navigation::{use_navigator, Page},
    portal::use_portal_selection,
};
use leptos::*;

const INPUT_CLASS: &str = "appearance-none rounded-md block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus sm:text-sm";

#[component]
pub fn EmployeeLoginPanel() -> impl IntoView {
    let vm = use_employee_login_view_model();
    let navigator = use_navigator();
    let selection = use_portal_selection();
    let email = vm.email;
    let password = vm.password;
    let login_action = vm.login_action;
    let pending = login_action.pending();
    let selected = Signal::derive(move || selection.get());

    let to_portal = {
        let navigator = navigator.clone();
        move |_| navigator.navigate(Page::EmployeePortal)
    };
    let to_forgot = move |_| navigator.navigate(Page::EmployeeForgotPassword);

    view! {
        <div class="min-h-[70vh] flex items-center justify-center bg-surface py-12 px-4">
            <div class="max-w-md w-full space-y-6">
                <div class="text-center">
                    <h2 class="text-3xl font-extrabold text-fg">"Employee Login"</h2>
                    {move || match selected.get() {
                        Some(employee) => view! {
                            <p class="mt-2 text-sm text-fg-muted">
                                {format!("Signing in as {} (ID: {})", employee.name, employee.id)}
                            </p>
                        }
                            .into_view(),
                        None => view! {
                            <p class="mt-2 text-sm text-status-warning-text">
                                "No employee selected. Go back to the portal and choose your name."
                            </p>
                        }
                            .into_view(),
                    }}
                </div>
                <InlineError error=vm.error />
                <form
                    class="space-y-4"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        let id = selected.get_untracked().map(|e| e.id);
                        login_action.dispatch((id, email.get(), password.get()));
                    }
                >
                    <input
                        type="email"
                        autocomplete="username"
                        class=INPUT_CLASS
                        placeholder="Email"
                        prop:value=email
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        autocomplete="current-password"
                        class=INPUT_CLASS
                        placeholder="Password"
                        prop:value=password
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button
                        type="submit"
                        disabled=move || pending.get() || selected.with(Option::is_none)
                        class="w-full flex justify-center py-2 px-4 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                    >
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <div class="flex justify-between text-sm">
                    <button type="button" class="font-medium text-link hover:text-link-hover" on:click=to_forgot>
                        "Forgot password?"
                    </button>
                    <button type="button" class="font-medium text-link hover:text-link-hover" on:click=to_portal>
                        "Choose a different employee"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::employee, ssr::render_page};

    #[test]
    fn shows_selected_employee() {
        let html = render_page(|| {
            use_portal_selection().select(employee(9));
            view! { <EmployeeLoginPanel /> }
        });
        assert!(html.contains("Signing in as Asha Menon (ID: 9)"));
    }

    #[test]
    fn warns_without_selection() {
        let html = render_page(|| view! { <EmployeeLoginPanel /> });
        assert!(html.contains("No employee selected"));
    }
}

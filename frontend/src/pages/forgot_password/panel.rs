use super::view_model::use_forgot_password_view_model;
use crate::components::messages::InlineError;
use crate::state::{
    navigation::{use_navigator, Page},
    portal::use_portal_selection,
    session::Role,
};
use leptos::*;

fn login_page(role: Role) -> Page {
    match role {
        Role::Admin => Page::AdminLogin,
        Role::Employee => Page::EmployeeLogin,
    }
}

fn recipient_hint(role: Role, employee_name: Option<&str>) -> String {
    match (role, employee_name) {
        (Role::Admin, _) => "We'll email a reset link to the registered admin address.".to_string(),
        (Role::Employee, Some(name)) => {
            format!("We'll email a reset link to the address registered for {}.", name)
        }
        (Role::Employee, None) => {
            "Choose your name on the employee portal before requesting a reset link.".to_string()
        }
    }
}

#[component]
pub fn ForgotPasswordPanel(role: Role) -> impl IntoView {
    let vm = use_forgot_password_view_model(role);
    let navigator = use_navigator();
    let selection = use_portal_selection();
    let error = vm.error;
    let success = vm.success;
    let submit_action = vm.submit_action;
    let pending = submit_action.pending();

    let selected = Signal::derive(move || selection.get());
    let can_submit = move || role == Role::Admin || selected.with(Option::is_some);
    let back_to_login = move |_| navigator.navigate(login_page(role));

    view! {
        <div class="min-h-[70vh] flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                        "Reset your password"
                    </h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        {move || recipient_hint(role, selected.get().as_ref().map(|e| e.name.as_str()))}
                    </p>
                </div>
                <Show
                    when=move || success.with(Option::is_some)
                    fallback=move || view! {
                        <form
                            class="space-y-6"
                            on:submit=move |ev| {
                                ev.prevent_default();
                                submit_action.dispatch(selected.get_untracked().map(|e| e.id));
                            }
                        >
                            <InlineError error=error />
                            <button
                                type="submit"
                                disabled=move || pending.get() || !can_submit()
                                class="w-full flex justify-center py-2 px-4 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                            >
                                {move || if pending.get() { "Sending..." } else { "Send Reset Link" }}
                            </button>
                        </form>
                    }
                >
                    <div class="rounded-md bg-status-success-bg p-4 text-status-success-text">
                        <h3 class="text-sm font-medium">{move || success.get().unwrap_or_default()}</h3>
                        <p class="mt-2 text-sm">"Check your email for the reset link."</p>
                    </div>
                </Show>
                <div class="text-sm text-center">
                    <button
                        type="button"
                        class="font-medium text-link hover:text-link-hover"
                        on:click=back_to_login
                    >
                        "Back to login"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_follows_role_and_selection() {
        assert!(recipient_hint(Role::Admin, None).contains("admin"));
        assert!(recipient_hint(Role::Employee, Some("Asha Menon")).contains("Asha Menon"));
        assert!(recipient_hint(Role::Employee, None).contains("employee portal"));
        assert_eq!(login_page(Role::Employee), Page::EmployeeLogin);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::employee, ssr::render_page};

    #[test]
    fn admin_variant_can_submit_immediately() {
        let html = render_page(|| view! { <ForgotPasswordPanel role=Role::Admin /> });
        assert!(html.contains("Send Reset Link"));
        assert!(html.contains("registered admin address"));
    }

    #[test]
    fn employee_variant_names_the_selected_employee() {
        let html = render_page(|| {
            use_portal_selection().select(employee(4));
            view! { <ForgotPasswordPanel role=Role::Employee /> }
        });
        assert!(html.contains("Asha Menon"));
    }
}

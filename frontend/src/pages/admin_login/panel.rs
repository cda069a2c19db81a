use super::view_model::use_admin_login_view_model;
use crate::components::messages::InlineError;
use crate::state::navigation::{use_navigator, Page};
use leptos::*;

const INPUT_CLASS: &str = "appearance-none rounded-md block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus sm:text-sm";

#[component]
pub fn AdminLoginPanel() -> impl IntoView {
    let vm = use_admin_login_view_model();
    let navigator = use_navigator();
    let email = vm.email;
    let password = vm.password;
    let login_action = vm.login_action;
    let pending = login_action.pending();
    let to_forgot = {
        let navigator = navigator.clone();
        move |_| navigator.navigate(Page::ForgotPassword)
    };
    let to_portal = move |_| navigator.navigate(Page::Portal);

    view! {
        <div class="min-h-[70vh] flex items-center justify-center bg-surface py-12 px-4">
            <div class="max-w-md w-full space-y-6">
                <h2 class="text-center text-3xl font-extrabold text-fg">"Admin Login"</h2>
                <InlineError error=vm.error />
                <form
                    class="space-y-4"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        login_action.dispatch((email.get(), password.get()));
                    }
                >
                    <div>
                        <label for="admin-email" class="block text-sm font-medium text-fg mb-1">"Email"</label>
                        <input
                            id="admin-email"
                            type="email"
                            autocomplete="username"
                            class=INPUT_CLASS
                            placeholder="admin@magmarine.in"
                            prop:value=email
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label for="admin-password" class="block text-sm font-medium text-fg mb-1">"Password"</label>
                        <input
                            id="admin-password"
                            type="password"
                            autocomplete="current-password"
                            class=INPUT_CLASS
                            prop:value=password
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>
                    <button
                        type="submit"
                        disabled=move || pending.get()
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
                        "Back to portal"
                    </button>
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
    fn renders_login_form() {
        let html = render_page(|| view! { <AdminLoginPanel /> });
        assert!(html.contains("Admin Login"));
        assert!(html.contains("Forgot password?"));
        assert!(html.contains("admin-password"));
    }
}

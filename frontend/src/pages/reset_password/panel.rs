use super::view_model::use_reset_password_view_model;
use crate::state::{
    navigation::{use_navigator, Page},
    session::Role,
};
use leptos::*;

const INPUT_CLASS: &str = "appearance-none rounded-md block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus sm:text-sm";

fn after_reset(role: Role) -> Page {
    match role {
        Role::Admin => Page::AdminLogin,
        Role::Employee => Page::EmployeePortal,
    }
}

#[component]
pub fn ResetPasswordPanel(role: Role) -> impl IntoView {
    let vm = use_reset_password_view_model(role);
    let navigator = use_navigator();
    let password = vm.password;
    let confirm = vm.confirm;
    let error = vm.error;
    let success = vm.success;
    let submit_action = vm.submit_action;
    let has_token = vm.has_token;
    let pending = submit_action.pending();
    let heading = match role {
        Role::Admin => "Set new admin password",
        Role::Employee => "Set new employee password",
    };

    view! {
        <div class="min-h-[70vh] flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">{heading}</h2>
                <Show when=move || !has_token fallback=|| ()>
                    <div class="rounded-md bg-status-warning-bg p-4 text-sm text-status-warning-text">
                        "This reset link is missing its token. Request a new link and open it from your email."
                    </div>
                </Show>
                <Show
                    when=move || success.with(Option::is_some)
                    fallback=move || view! {
                        <form
                            class="space-y-4"
                            on:submit=move |ev| {
                                ev.prevent_default();
                                submit_action.dispatch((password.get(), confirm.get()));
                            }
                        >
                            <input
                                type="password"
                                autocomplete="new-password"
                                required
                                class=INPUT_CLASS
                                placeholder="New password"
                                prop:value=password
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <input
                                type="password"
                                autocomplete="new-password"
                                required
                                class=INPUT_CLASS
                                placeholder="Confirm new password"
                                prop:value=confirm
                                on:input=move |ev| confirm.set(event_target_value(&ev))
                            />
                            {move || error.get().map(|err| view! {
                                <div class="rounded-md bg-status-error-bg p-4 text-sm text-status-error-text">{err}</div>
                            })}
                            <button
                                type="submit"
                                disabled=move || pending.get() || !has_token
                                class="w-full flex justify-center py-2 px-4 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                            >
                                {move || if pending.get() { "Resetting..." } else { "Reset Password" }}
                            </button>
                        </form>
                    }
                >
                    <div class="rounded-md bg-status-success-bg p-4 text-status-success-text">
                        <h3 class="text-sm font-medium">{move || success.get().unwrap_or_default()}</h3>
                    </div>
                </Show>
                <div class="text-sm text-center">
                    <button
                        type="button"
                        class="font-medium text-link hover:text-link-hover"
                        on:click=move |_| navigator.navigate(after_reset(role))
                    >
                        "Back to login"
                    </button>
                </div>
            </div>
        </div>
    }
}

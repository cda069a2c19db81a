use super::repository::{matches_search, EmployeePortalRepository};
use crate::api::{ApiClient, Employee};
use crate::components::{layout::LoadingSpinner, messages::EmptyState};
use crate::state::{
    navigation::{use_navigator, Page},
    portal::use_portal_selection,
};
use leptos::*;
use std::rc::Rc;

#[component]
fn EmployeeTile(employee: Employee, on_select: Callback<Employee>) -> impl IntoView {
    let initial = employee
        .name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();
    let picked = employee.clone();
    view! {
        <button
            type="button"
            class="flex items-center gap-4 w-full rounded-lg border border-border bg-surface-elevated p-4 text-left hover:border-action-primary-border hover:shadow-md"
            on:click=move |_| on_select.call(picked.clone())
        >
            <span class="flex h-12 w-12 items-center justify-center rounded-full bg-action-primary-bg text-lg font-bold text-action-primary-text">
                {initial}
            </span>
            <span>
                <span class="block font-semibold text-fg">{employee.name.clone()}</span>
                <span class="block text-sm text-fg-muted">{format!("ID: {}", employee.id)}</span>
            </span>
        </button>
    }
}

#[component]
pub fn EmployeePortalPanel() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = EmployeePortalRepository::new_with_client(Rc::new(api));
    let navigator = use_navigator();
    let selection = use_portal_selection();
    let search = create_rw_signal(String::new());

    let employees = create_resource(
        || (),
        move |_| {
            let repo = repository.clone();
            async move { repo.list_employees().await }
        },
    );

    let on_select = Callback::new(move |employee: Employee| {
        log::info!("employee {} selected on portal", employee.id);
        selection.select(employee);
        navigator.navigate(Page::EmployeeLogin);
    });

    view! {
        <div class="bg-surface pt-16 pb-20">
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
                <h1 class="text-4xl font-bold text-fg text-center">"Employee Portal"</h1>
                <p class="mt-3 text-center text-fg-muted">"Select your name to sign in."</p>
                <input
                    type="search"
                    class="mt-8 w-full rounded-md border border-form-control-border bg-form-control-bg px-4 py-2 text-form-control-text"
                    placeholder="Search by name or ID"
                    prop:value=search
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <div class="mt-6">
                    <Suspense fallback=move || view! { <LoadingSpinner /> }>
                        {move || {
                            employees
                                .get()
                                .map(|result| match result {
                                    Ok(list) => {
                                        let visible = move || {
                                            let query = search.get();
                                            list.iter()
                                                .filter(|employee| matches_search(employee, &query))
                                                .cloned()
                                                .collect::<Vec<_>>()
                                        };
                                        view! {
                                            <Show
                                                when={
                                                    let visible = visible.clone();
                                                    move || !visible().is_empty()
                                                }
                                                fallback=|| view! { <EmptyState title="No employees found" /> }
                                            >
                                                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                                                    <For
                                                        each=visible.clone()
                                                        key=|employee| employee.id
                                                        children=move |employee| view! {
                                                            <EmployeeTile employee=employee on_select=on_select />
                                                        }
                                                    />
                                                </div>
                                            </Show>
                                        }
                                            .into_view()
                                    }
                                    Err(err) => {
                                        log::warn!("failed to load employees: {}", err);
                                        view! {
                                            <p class="text-center text-status-error-text">
                                                "Unable to load employees. Please try again later."
                                            </p>
                                        }
                                            .into_view()
                                    }
                                })
                        }}
                    </Suspense>
                </div>
            </div>
        </div>
    }
}

use super::{employee_links::EmployeeLinksManager, DraftInput, FormActions, DANGER_LINK, EDIT_LINK};
use crate::{
    api::Employee,
    components::{
        confirm_dialog::{ConfirmDialog, PendingConfirm},
        messages::EmptyState,
    },
    pages::admin::{
        repository::AdminRepository,
        utils::{delete_employee_prompt, EmployeeDraft},
        view_model::{log_load_failure, run_and_report},
    },
    state::crud::CrudController,
    utils::lifetime::ComponentLifetime,
};
use leptos::{ev, *};

fn saved_message(editing: bool) -> String {
    if editing {
        "Employee updated successfully!".into()
    } else {
        "Employee added successfully!".into()
    }
}

#[component]
pub fn EmployeeRow(
    employee: Employee,
    on_edit: Callback<Employee>,
    on_delete: Callback<Employee>,
) -> impl IntoView {
    let edit_target = employee.clone();
    let delete_target = employee.clone();
    view! {
        <tr class="border-b border-border">
            <td class="px-3 py-2 text-sm text-fg">{employee.id}</td>
            <td class="px-3 py-2 text-sm text-fg">{employee.name}</td>
            <td class="px-3 py-2 text-sm text-fg-muted">{employee.email}</td>
            <td class="px-3 py-2 text-sm">
                <div class="flex gap-3">
                    <button type="button" class=EDIT_LINK on:click=move |_| on_edit.call(edit_target.clone())>
                        "Edit"
                    </button>
                    <button type="button" class=DANGER_LINK on:click=move |_| on_delete.call(delete_target.clone())>
                        "Delete"
                    </button>
                </div>
            </td>
        </tr>
    }
}

#[component]
pub fn EmployeesTab(repository: AdminRepository) -> impl IntoView {
    let controller = store_value(CrudController::new(repository.employees()));
    let CrudController {
        items,
        draft,
        editing,
        pending,
        ..
    } = controller.get_value();
    let lifetime = ComponentLifetime::bind();
    let pending_delete = PendingConfirm::<Employee>::new();
    let links_selection = create_rw_signal(None::<u32>);

    {
        let lifetime = lifetime.clone();
        create_effect(move |_| {
            let controller = controller.get_value();
            lifetime.spawn(async move { log_load_failure("employees", controller.reload().await) });
        });
    }

    let on_submit = {
        let lifetime = lifetime.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let controller = controller.get_value();
            let success = saved_message(editing.with_untracked(Option::is_some));
            run_and_report(&lifetime, async move { controller.submit().await }, "save employee", success);
        }
    };

    let on_confirm_delete = {
        let lifetime = lifetime.clone();
        Callback::new(move |_| {
            if let Some(employee) = pending_delete.take() {
                let controller = controller.get_value();
                let work = async move {
                    controller.delete(&employee.id).await?;
                    if links_selection.get_untracked() == Some(employee.id) {
                        links_selection.set(None);
                    }
                    Ok(())
                };
                run_and_report(&lifetime, work, "delete employee", "Employee deleted successfully!".into());
            }
        })
    };

    let is_editing = Signal::derive(move || editing.with(Option::is_some));
    let field = move |get: fn(&EmployeeDraft) -> String| Signal::derive(move || draft.with(get));
    let delete_message = Signal::derive(move || {
        pending_delete
            .target()
            .map(|employee| delete_employee_prompt(&employee.name))
            .unwrap_or_default()
    });

    view! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 gap-6 lg:grid-cols-3">
                <form class="rounded-lg bg-surface-elevated p-6 shadow-sm space-y-4" on:submit=on_submit>
                    <h3 class="text-lg font-semibold text-fg">
                        {move || if is_editing.get() { "✏️ Edit Employee" } else { "➕ Add Employee" }}
                    </h3>
                    <label class="block text-sm font-medium text-fg">
                        "Employee ID"
                        <input
                            type="number"
                            min="1"
                            class=super::FIELD_CLASS
                            placeholder="Employee ID"
                            readonly=move || is_editing.get()
                            prop:value=field(|d| d.id.clone())
                            on:input=move |ev| draft.update(|d| d.id = event_target_value(&ev))
                        />
                    </label>
                    <DraftInput
                        label="Name"
                        placeholder="Full name"
                        value=field(|d| d.name.clone())
                        on_input=Callback::new(move |v| draft.update(|d| d.name = v))
                    />
                    <DraftInput
                        label="Email"
                        input_type="email"
                        placeholder="name@magmarine.in"
                        value=field(|d| d.email.clone())
                        on_input=Callback::new(move |v| draft.update(|d| d.email = v))
                    />
                    <DraftInput
                        label="Password"
                        input_type="password"
                        placeholder="Password"
                        value=field(|d| d.password.clone())
                        on_input=Callback::new(move |v| draft.update(|d| d.password = v))
                    />
                    <Show when=move || is_editing.get()>
                        <p class="text-xs text-fg-muted">"Leave the password blank to keep the current one."</p>
                    </Show>
                    <FormActions
                        editing=is_editing
                        pending=pending
                        add_label="➕ Add Employee"
                        update_label="💾 Update Employee"
                        on_cancel=Callback::new(move |_| controller.with_value(|c| c.cancel_edit()))
                    />
                </form>
                <div class="lg:col-span-2 rounded-lg bg-surface-elevated p-6 shadow-sm">
                    <Show
                        when=move || items.with(|employees| !employees.is_empty())
                        fallback=|| view! {
                            <EmptyState title="No employees found. Add your first employee above." />
                        }
                    >
                        <div class="overflow-x-auto">
                            <table class="min-w-full">
                                <thead>
                                    <tr class="text-left text-xs uppercase text-fg-muted">
                                        <th class="px-3 py-2">"ID"</th>
                                        <th class="px-3 py-2">"Name"</th>
                                        <th class="px-3 py-2">"Email"</th>
                                        <th class="px-3 py-2">"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || items.get()
                                        key=|employee| employee.id
                                        children=move |employee| view! {
                                            <EmployeeRow
                                                employee=employee
                                                on_edit=Callback::new(move |employee: Employee| {
                                                    controller.with_value(|c| c.begin_edit(&employee))
                                                })
                                                on_delete=Callback::new(move |employee| pending_delete.ask(employee))
                                            />
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    </Show>
                </div>
            </div>
            <EmployeeLinksManager
                repository=repository
                employees=Signal::derive(move || items.get())
                selected=links_selection
            />
            <ConfirmDialog
                is_open=pending_delete.is_open()
                title="Delete employee"
                message=delete_message
                confirm_label="Delete"
                on_confirm=on_confirm_delete
                on_cancel=Callback::new(move |_| pending_delete.dismiss())
                destructive=true
            />
        </div>
    }
}

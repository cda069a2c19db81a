use super::{DraftInput, DraftTextArea, FormActions, DANGER_LINK, EDIT_LINK};
use crate::{
    api::Job,
    components::{
        confirm_dialog::{ConfirmDialog, PendingConfirm},
        messages::EmptyState,
    },
    pages::admin::{
        repository::AdminRepository,
        utils::JobDraft,
        view_model::{log_load_failure, run_and_report},
    },
    state::crud::CrudController,
    utils::lifetime::ComponentLifetime,
};
use leptos::{ev, *};

fn saved_message(editing: bool) -> String {
    if editing {
        "Career updated successfully!".into()
    } else {
        "Career added successfully!".into()
    }
}

#[component]
pub fn JobRow(job: Job, on_edit: Callback<Job>, on_delete: Callback<String>) -> impl IntoView {
    let edit_target = job.clone();
    let id = job.id.clone();
    view! {
        <li class="rounded-lg border border-border bg-surface p-4">
            <div class="flex items-start justify-between gap-4">
                <div>
                    <h4 class="font-semibold text-fg">{job.title}</h4>
                    <p class="text-xs text-fg-muted">{format!("📍 {}", job.location)}</p>
                    <p class="mt-2 text-sm text-fg-muted">{job.description}</p>
                </div>
                <div class="flex shrink-0 gap-3">
                    <button type="button" class=EDIT_LINK on:click=move |_| on_edit.call(edit_target.clone())>
                        "Edit"
                    </button>
                    <button type="button" class=DANGER_LINK on:click=move |_| on_delete.call(id.clone())>
                        "Delete"
                    </button>
                </div>
            </div>
        </li>
    }
}

#[component]
pub fn CareersTab(repository: AdminRepository) -> impl IntoView {
    let controller = store_value(CrudController::new(repository.jobs()));
    let CrudController {
        items,
        draft,
        editing,
        pending,
        ..
    } = controller.get_value();
    let lifetime = ComponentLifetime::bind();
    let pending_delete = PendingConfirm::<String>::new();

    {
        let lifetime = lifetime.clone();
        create_effect(move |_| {
            let controller = controller.get_value();
            lifetime.spawn(async move { log_load_failure("careers", controller.reload().await) });
        });
    }

    let on_submit = {
        let lifetime = lifetime.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let controller = controller.get_value();
            let success = saved_message(editing.with_untracked(Option::is_some));
            run_and_report(&lifetime, async move { controller.submit().await }, "save career", success);
        }
    };

    let on_confirm_delete = {
        let lifetime = lifetime.clone();
        Callback::new(move |_| {
            if let Some(id) = pending_delete.take() {
                let controller = controller.get_value();
                run_and_report(
                    &lifetime,
                    async move { controller.delete(&id).await },
                    "delete job",
                    "Job deleted successfully!".into(),
                );
            }
        })
    };

    let is_editing = Signal::derive(move || editing.with(Option::is_some));
    let field = move |get: fn(&JobDraft) -> String| Signal::derive(move || draft.with(get));

    view! {
        <div class="grid grid-cols-1 gap-6 lg:grid-cols-2">
            <form class="rounded-lg bg-surface-elevated p-6 shadow-sm space-y-4" on:submit=on_submit>
                <h3 class="text-lg font-semibold text-fg">
                    {move || if is_editing.get() { "✏️ Edit Career" } else { "➕ Add Career" }}
                </h3>
                <DraftInput
                    label="Job Title"
                    placeholder="Title"
                    value=field(|d| d.title.clone())
                    on_input=Callback::new(move |v| draft.update(|d| d.title = v))
                />
                <DraftInput
                    label="Location"
                    placeholder="Location"
                    value=field(|d| d.location.clone())
                    on_input=Callback::new(move |v| draft.update(|d| d.location = v))
                />
                <DraftTextArea
                    label="Description"
                    placeholder="Description"
                    value=field(|d| d.description.clone())
                    on_input=Callback::new(move |v| draft.update(|d| d.description = v))
                />
                <FormActions
                    editing=is_editing
                    pending=pending
                    add_label="➕ Add Career"
                    update_label="💾 Update Career"
                    on_cancel=Callback::new(move |_| controller.with_value(|c| c.cancel_edit()))
                />
            </form>
            <div class="rounded-lg bg-surface-elevated p-6 shadow-sm space-y-4">
                <h3 class="text-lg font-semibold text-fg">"Job Postings"</h3>
                <Show
                    when=move || items.with(|jobs| !jobs.is_empty())
                    fallback=|| view! { <EmptyState title="No job postings yet" /> }
                >
                    <ul class="space-y-3">
                        <For
                            each=move || items.get()
                            key=|job| job.id.clone()
                            children=move |job| view! {
                                <JobRow
                                    job=job
                                    on_edit=Callback::new(move |job: Job| controller.with_value(|c| c.begin_edit(&job)))
                                    on_delete=Callback::new(move |id| pending_delete.ask(id))
                                />
                            }
                        />
                    </ul>
                </Show>
            </div>
            <ConfirmDialog
                is_open=pending_delete.is_open()
                title="Delete job posting"
                message="Delete this job posting?"
                confirm_label="Delete"
                on_confirm=on_confirm_delete
                on_cancel=Callback::new(move |_| pending_delete.dismiss())
                destructive=true
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::test_support::ssr::render_page;
    use std::rc::Rc;

    #[test]
    fn careers_tab_starts_in_add_mode() {
        let html = render_page(|| {
            let repository =
                AdminRepository::new_with_client(Rc::new(ApiClient::new_with_base_url("http://api")));
            view! { <CareersTab repository=repository /> }
        });
        assert!(html.contains("➕ Add Career"));
        assert!(html.contains("No job postings yet"));
        assert!(!html.contains("role=\"dialog\""));
    }

    #[test]
    fn row_shows_location_and_actions() {
        let html = render_page(|| {
            let job = Job {
                id: "j1".into(),
                title: "Marine Fitter".into(),
                description: "Engine room overhauls".into(),
                location: "Kochi".into(),
            };
            view! {
                <JobRow job=job on_edit=Callback::new(|_| {}) on_delete=Callback::new(|_| {}) />
            }
        });
        assert!(html.contains("Marine Fitter"));
        assert!(html.contains("📍 Kochi"));
        assert!(html.contains("Delete"));
    }

    #[test]
    fn success_text_depends_on_mode() {
        assert_eq!(saved_message(false), "Career added successfully!");
        assert_eq!(saved_message(true), "Career updated successfully!");
    }
}

use super::{DraftInput, DraftTextArea, FormActions, DANGER_LINK, EDIT_LINK, FIELD_CLASS};
use crate::{
    api::{ApiError, ImageUpload, NewsEvent},
    components::{
        confirm_dialog::{ConfirmDialog, PendingConfirm},
        messages::EmptyState,
    },
    config,
    pages::admin::{
        repository::AdminRepository,
        utils::NewsDraft,
        view_model::{log_load_failure, run_and_report},
    },
    state::crud::{CrudController, Submission},
    utils::{lifetime::ComponentLifetime, time::display_stored_date},
};
use leptos::{ev, *};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement, Url};

fn saved_message(editing: bool) -> String {
    if editing {
        "News/Event updated successfully!".into()
    } else {
        "News/Event added successfully!".into()
    }
}

fn chosen_file(ev: &ev::Event) -> Option<File> {
    ev.target()?
        .dyn_into::<HtmlInputElement>()
        .ok()?
        .files()?
        .get(0)
}

async fn read_upload(file: &File) -> Result<ImageUpload, ApiError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| ApiError::validation("Could not read the selected image."))?;
    Ok(ImageUpload {
        file_name: file.name(),
        mime_type: file.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}

fn release_preview(url: Option<&str>) {
    if let Some(url) = url.filter(|url| url.starts_with("blob:")) {
        if Url::revoke_object_url(url).is_err() {
            log::warn!("failed to revoke preview url");
        }
    }
}

#[component]
pub fn NewsRow(
    event: NewsEvent,
    asset_base: String,
    on_edit: Callback<NewsEvent>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let image_url = (!event.image_path.trim().is_empty())
        .then(|| config::asset_url(&asset_base, &event.image_path));
    let edit_target = event.clone();
    let id = event.id.clone();
    view! {
        <li class="flex gap-4 rounded-lg border border-border bg-surface p-4">
            {image_url.map(|src| view! {
                <img src=src alt="" class="h-20 w-28 shrink-0 rounded object-cover" />
            })}
            <div class="flex-1 min-w-0">
                <h4 class="font-semibold text-fg">{event.title}</h4>
                <p class="text-xs text-fg-muted">{display_stored_date(&event.date)}</p>
                <p class="mt-1 text-sm text-fg-muted line-clamp-2">{event.description}</p>
                <div class="mt-2 flex gap-3">
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
pub fn NewsTab(repository: AdminRepository) -> impl IntoView {
    let controller = store_value(CrudController::new(repository.news()));
    let CrudController {
        items,
        draft,
        editing,
        pending,
        ..
    } = controller.get_value();
    let lifetime = ComponentLifetime::bind();
    let pending_delete = PendingConfirm::<String>::new();
    let asset_base = config::current().asset_base_url();

    {
        let lifetime = lifetime.clone();
        create_effect(move |_| {
            let controller = controller.get_value();
            lifetime.spawn(async move { log_load_failure("news", controller.reload().await) });
        });
    }
    on_cleanup(move || {
        let _ = draft.try_with_untracked(|d| release_preview(d.preview_url.as_deref()));
    });

    let on_image = {
        let lifetime = lifetime.clone();
        move |ev: ev::Event| {
            let Some(file) = chosen_file(&ev) else {
                return;
            };
            let preview = Url::create_object_url_with_blob(&file).ok();
            lifetime.spawn(async move {
                match read_upload(&file).await {
                    Ok(upload) => draft.update(|d| {
                        release_preview(d.preview_url.as_deref());
                        d.image = Some(upload);
                        d.preview_url = preview;
                    }),
                    Err(err) => {
                        release_preview(preview.as_deref());
                        crate::utils::notify::alert(&err.error);
                    }
                }
            });
        }
    };

    let on_submit = {
        let lifetime = lifetime.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let controller = controller.get_value();
            let success = saved_message(editing.with_untracked(Option::is_some));
            let preview = draft.with_untracked(|d| d.preview_url.clone());
            let work = async move {
                let submitted = controller.submit().await?;
                if submitted == Submission::Saved {
                    release_preview(preview.as_deref());
                }
                Ok(submitted)
            };
            run_and_report(&lifetime, work, "save news", success);
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
                    "delete news",
                    "News/Event deleted successfully!".into(),
                );
            }
        })
    };

    let edit_base = asset_base.clone();
    let on_edit = Callback::new(move |event: NewsEvent| {
        draft.with_untracked(|d| release_preview(d.preview_url.as_deref()));
        controller.with_value(|c| c.begin_edit(&event));
        draft.set(NewsDraft::from_event(&event, Some(&edit_base)));
    });
    let on_cancel = Callback::new(move |_| {
        draft.with_untracked(|d| release_preview(d.preview_url.as_deref()));
        controller.with_value(|c| c.cancel_edit());
    });

    let is_editing = Signal::derive(move || editing.with(Option::is_some));
    let field = move |get: fn(&NewsDraft) -> String| Signal::derive(move || draft.with(get));
    let row_base = store_value(asset_base);

    view! {
        <div class="grid grid-cols-1 gap-6 lg:grid-cols-2">
            <form class="rounded-lg bg-surface-elevated p-6 shadow-sm space-y-4" on:submit=on_submit>
                <h3 class="text-lg font-semibold text-fg">
                    {move || if is_editing.get() { "✏️ Edit News/Event" } else { "➕ Add News/Event" }}
                </h3>
                <DraftInput
                    label="Title"
                    placeholder="Title"
                    value=field(|d| d.title.clone())
                    on_input=Callback::new(move |v| draft.update(|d| d.title = v))
                />
                <DraftTextArea
                    label="Description"
                    placeholder="Description"
                    value=field(|d| d.description.clone())
                    on_input=Callback::new(move |v| draft.update(|d| d.description = v))
                />
                <DraftInput
                    label="Date"
                    input_type="date"
                    value=field(|d| d.date.clone())
                    on_input=Callback::new(move |v| draft.update(|d| d.date = v))
                />
                <label class="block text-sm font-medium text-fg">
                    "Upload Image"
                    <input type="file" accept="image/*" class=FIELD_CLASS on:change=on_image />
                </label>
                {move || draft.with(|d| d.preview_url.clone()).map(|src| view! {
                    <img src=src alt="Preview" class="h-40 w-full rounded-md object-cover" />
                })}
                <FormActions
                    editing=is_editing
                    pending=pending
                    add_label="➕ Add News/Event"
                    update_label="💾 Update News/Event"
                    on_cancel=on_cancel
                />
            </form>
            <div class="rounded-lg bg-surface-elevated p-6 shadow-sm space-y-4">
                <h3 class="text-lg font-semibold text-fg">"Published"</h3>
                <Show
                    when=move || items.with(|events| !events.is_empty())
                    fallback=|| view! { <EmptyState title="No news or events yet" /> }
                >
                    <ul class="space-y-3">
                        <For
                            each=move || items.get()
                            key=|event| event.id.clone()
                            children=move |event| view! {
                                <NewsRow
                                    event=event
                                    asset_base=row_base.get_value()
                                    on_edit=on_edit
                                    on_delete=Callback::new(move |id| pending_delete.ask(id))
                                />
                            }
                        />
                    </ul>
                </Show>
            </div>
            <ConfirmDialog
                is_open=pending_delete.is_open()
                title="Delete news/event"
                message="Delete this news/event?"
                confirm_label="Delete"
                on_confirm=on_confirm_delete
                on_cancel=Callback::new(move |_| pending_delete.dismiss())
                destructive=true
            />
        </div>
    }
}

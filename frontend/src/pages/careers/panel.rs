use super::view_model::use_careers_view_model;
use crate::components::{layout::LoadingSpinner, messages::EmptyState};
use crate::api::Job;
use leptos::*;

#[component]
fn JobCard(job: Job, on_apply: Callback<String>, #[prop(into)] applying: Signal<bool>) -> impl IntoView {
    let title = job.title.clone();
    view! {
        <article class="rounded-lg border border-border bg-surface-elevated p-6 shadow-sm">
            <div class="flex flex-col lg:flex-row lg:items-start lg:justify-between gap-4">
                <div class="flex-1">
                    <h2 class="text-2xl font-bold text-fg">{job.title.clone()}</h2>
                    <p class="mt-1 text-sm text-fg-muted">{job.location.clone()}</p>
                </div>
                <button
                    type="button"
                    class="rounded-md px-6 py-2 text-sm font-semibold text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                    disabled=move || applying.get()
                    on:click=move |_| on_apply.call(title.clone())
                >
                    "Apply Now"
                </button>
            </div>
            <p class="mt-4 text-sm text-fg-muted whitespace-pre-line">{job.description.clone()}</p>
        </article>
    }
}

#[component]
pub fn CareersPanel() -> impl IntoView {
    let vm = use_careers_view_model();
    let jobs = vm.jobs;
    let apply_action = vm.apply_action;
    let applying = apply_action.pending();
    let on_apply = Callback::new(move |job_title: String| apply_action.dispatch(job_title));

    view! {
        <div class="bg-surface pt-16 pb-20">
            <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8">
                <h1 class="text-4xl font-bold text-fg text-center">"Join Our Team"</h1>
                <p class="mt-3 text-center text-fg-muted">
                    "Build your career with India's leading marine services provider."
                </p>
                <div class="mt-10 rounded-lg border border-status-info-border bg-status-info-bg p-6">
                    <h3 class="text-lg font-bold text-status-info-text">"How to Apply"</h3>
                    <p class="mt-2 text-sm text-status-info-text">
                        "Click Apply Now on any job posting below, then send us your resume and a brief introduction about yourself."
                    </p>
                </div>
                <div class="mt-10 space-y-6">
                    <Suspense fallback=move || view! { <LoadingSpinner /> }>
                        {move || {
                            jobs.get()
                                .map(|result| match result {
                                    Ok(list) if list.is_empty() => {
                                        view! {
                                            <EmptyState
                                                title="No open positions"
                                                description="There are no openings right now. Please check back later."
                                            />
                                        }
                                            .into_view()
                                    }
                                    Ok(list) => {
                                        view! {
                                            <For
                                                each=move || list.clone()
                                                key=|job| job.id.clone()
                                                children=move |job| view! {
                                                    <JobCard job=job on_apply=on_apply applying=applying />
                                                }
                                            />
                                        }
                                            .into_view()
                                    }
                                    Err(err) => {
                                        log::warn!("failed to load jobs: {}", err);
                                        view! {
                                            <p class="text-center text-status-error-text">
                                                "Unable to load open positions right now."
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

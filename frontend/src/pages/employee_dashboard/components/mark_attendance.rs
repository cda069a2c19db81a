use super::SECTION_CLASS;
use crate::{
    api::AttendanceRecord,
    components::messages::{InlineInfo, InlineSuccess},
    pages::employee_dashboard::{repository::MarkDirection, view_model::MarkFeedback},
    state::attendance::TodayStatus,
    utils::time::format_time_12h,
};
use chrono::NaiveDateTime;
use leptos::*;

const MARK_BUTTON: &str = "flex items-center justify-center gap-2 rounded-lg px-6 py-4 text-lg font-bold shadow-lg transition-all active:scale-95 disabled:cursor-not-allowed disabled:border-state-disabled-border disabled:bg-state-disabled-bg disabled:text-state-disabled-text disabled:shadow-none";

fn marked_at(time: Option<NaiveDateTime>) -> String {
    match time {
        Some(_) => format_time_12h(time),
        None => "Not marked".into(),
    }
}

#[component]
fn MarkButton(
    direction: MarkDirection,
    #[prop(into)] enabled: Signal<bool>,
    #[prop(into)] done: Signal<bool>,
    on_mark: Callback<MarkDirection>,
) -> impl IntoView {
    let colors = match direction {
        MarkDirection::In => "bg-status-attendance-clock_in text-text-inverse hover:bg-action-primary-bg-hover",
        MarkDirection::Out => "bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover",
    };
    view! {
        <button
            type="button"
            class=format!("{} {}", MARK_BUTTON, colors)
            disabled=move || !enabled.get()
            on:click=move |_| on_mark.call(direction)
        >
            {format!("Mark {}", direction.label())}
            <Show when=move || done.get()>
                <span class="text-sm font-normal">"(Done)"</span>
            </Show>
        </button>
    }
}

#[component]
pub fn MarkAttendanceSection(
    feedback: MarkFeedback,
    #[prop(into)] status: Signal<TodayStatus>,
    #[prop(into)] today: Signal<Option<AttendanceRecord>>,
    on_mark: Callback<MarkDirection>,
) -> impl IntoView {
    let loading = feedback.loading;
    let in_time = move || today.with(|r| r.as_ref().and_then(|r| r.in_time));
    let out_time = move || today.with(|r| r.as_ref().and_then(|r| r.out_time));

    view! {
        <section class=SECTION_CLASS>
            <h2 class="text-xl font-bold text-fg">"Mark Attendance"</h2>
            <InlineInfo message=feedback.location_status />
            <InlineSuccess message=feedback.message />
            <Show when=move || feedback.error.with(Option::is_some)>
                <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded" role="alert">
                    {move || feedback.error.get().unwrap_or_default()}
                </div>
            </Show>
            <div class="rounded-lg bg-surface-muted p-4">
                <div class="flex items-center justify-between">
                    <h3 class="font-semibold text-fg">"Today's Status"</h3>
                    <span class="text-sm text-fg-muted">{move || status.get().label()}</span>
                </div>
                <div class="mt-3 grid grid-cols-2 gap-4">
                    <div>
                        <p class="text-xs text-fg-muted">"IN Time"</p>
                        <p class="text-lg font-bold text-fg">{move || marked_at(in_time())}</p>
                    </div>
                    <div>
                        <p class="text-xs text-fg-muted">"OUT Time"</p>
                        <p class="text-lg font-bold text-fg">{move || marked_at(out_time())}</p>
                    </div>
                </div>
            </div>
            <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                <MarkButton
                    direction=MarkDirection::In
                    enabled=Signal::derive(move || status.get().can_mark_in(loading.get()))
                    done=Signal::derive(move || in_time().is_some())
                    on_mark=on_mark
                />
                <MarkButton
                    direction=MarkDirection::Out
                    enabled=Signal::derive(move || status.get().can_mark_out(loading.get()))
                    done=Signal::derive(move || out_time().is_some())
                    on_mark=on_mark
                />
            </div>
            <p class="rounded-lg bg-status-warning-bg px-4 py-2 text-center text-sm text-status-warning-text">
                "⚠️ You must be at the office location to mark attendance"
            </p>
        </section>
    }
}

use leptos::*;

#[component]
pub fn EmployeeDashboardFrame(
    #[prop(into)] name: String,
    employee_id: u32,
    on_logout: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface py-8">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 space-y-6">
                <div class="flex flex-col gap-4 sm:flex-row sm:items-center sm:justify-between">
                    <div>
                        <h1 class="text-3xl font-bold text-fg">{format!("Welcome, {}!", name)}</h1>
                        <p class="text-fg-muted">{format!("Employee ID: {}", employee_id)}</p>
                    </div>
                    <button
                        type="button"
                        class="rounded-md px-6 py-2 font-semibold bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover"
                        on:click=move |_| on_logout.call(())
                    >
                        "Logout"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}

use leptos::*;

use crate::state::session::{provide_session, Session};
use crate::test_support::helpers::provide_test_navigator;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Renders once with resource loading suppressed. Effects never run here, so
/// nothing touches browser APIs.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// `render_to_string` with a memory navigator and, unless the view provides
/// its own, a signed-out session.
pub fn render_page<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    render_to_string(move || {
        provide_test_navigator();
        if use_context::<Session>().is_none() {
            provide_session(Session::in_memory());
        }
        view()
    })
}

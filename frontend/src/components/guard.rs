use crate::{
    state::session::{use_session, Role, Session},
    utils::storage as storage_utils,
};
use leptos::*;

const SITE_ROOT: &str = "/";

fn redirect_to_root() {
    match storage_utils::window() {
        Ok(window) => {
            if window.location().set_href(SITE_ROOT).is_err() {
                log::warn!("redirect to {} failed", SITE_ROOT);
            }
        }
        Err(err) => log::warn!("cannot redirect: {}", err),
    }
}

/// Renders `children` only while a token for `role` is stored; otherwise
/// sends the browser back to the site root.
#[component]
pub fn RequireSession(role: Role, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let active = session.is_active(role);
    if !active {
        log::info!("no {} session, redirecting", role.label());
        create_effect(move |_| redirect_to_root());
    }
    view! {
        <Show when=move || active fallback=|| ()>
            {children()}
        </Show>
    }
}

/// Clears the role's token and leaves for the site root.
pub fn end_session(session: &Session, role: Role) {
    session.end(role);
    log::info!("{} logged out", role.label());
    redirect_to_root();
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::RequireSession;
    use crate::state::session::{provide_session, Role, Session};
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    fn render_with(role: Role, stored: Option<Role>) -> String {
        render_to_string(move || {
            let session = Session::in_memory();
            if let Some(stored) = stored {
                session.begin(stored, "token").unwrap();
            }
            provide_session(session);
            view! {
                <RequireSession role=role>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireSession>
            }
        })
    }

    #[test]
    fn renders_children_with_matching_token() {
        assert!(render_with(Role::Admin, Some(Role::Admin)).contains("protected-content"));
    }

    #[test]
    fn hides_children_without_token() {
        assert!(!render_with(Role::Admin, None).contains("protected-content"));
    }

    #[test]
    fn employee_token_does_not_open_admin_pages() {
        assert!(!render_with(Role::Admin, Some(Role::Employee)).contains("protected-content"));
    }
}

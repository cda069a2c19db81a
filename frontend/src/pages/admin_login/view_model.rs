use super::repository::{AdminLoginRepository, Credentials};
use crate::api::{ApiClient, ApiError, LoginResponse};
use crate::state::navigation::{use_navigator, Page};
use leptos::*;
use std::rc::Rc;

#[derive(Clone)]
pub struct AdminLoginViewModel {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<(String, String), Result<LoginResponse, ApiError>>,
}

pub fn use_admin_login_view_model() -> AdminLoginViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AdminLoginRepository::new_with_client(Rc::new(api));
    let navigator = use_navigator();

    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);

    let login_action = create_action(move |(email, password): &(String, String)| {
        let repo = repository.clone();
        let credentials = Credentials::validated(email, password);
        async move { repo.login(credentials?).await }
    });

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    password.set(String::new());
                    navigator.navigate(Page::AdminDashboard);
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    AdminLoginViewModel {
        email,
        password,
        error,
        login_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::provide_test_navigator, ssr::with_runtime};

    #[test]
    fn starts_empty() {
        with_runtime(|| {
            provide_test_navigator();
            let vm = use_admin_login_view_model();
            assert!(vm.email.get().is_empty());
            assert!(vm.error.get().is_none());
        });
    }
}

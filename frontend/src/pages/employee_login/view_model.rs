use super::repository::{EmployeeCredentials, EmployeeLoginRepository};
use crate::api::{ApiClient, ApiError, LoginResponse};
use crate::state::navigation::{use_navigator, Page};
use leptos::*;
use std::rc::Rc;

type LoginInput = (Option<u32>, String, String);

#[derive(Clone)]
pub struct EmployeeLoginViewModel {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginInput, (u32, Result<LoginResponse, ApiError>)>,
}

pub fn use_employee_login_view_model() -> EmployeeLoginViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = EmployeeLoginRepository::new_with_client(Rc::new(api));
    let navigator = use_navigator();

    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);

    let login_action = create_action(move |(employee_id, email, password): &LoginInput| {
        let repo = repository.clone();
        let checked = EmployeeCredentials::validated(*employee_id, email, password);
        let employee_id = employee_id.unwrap_or_default();
        async move {
            let result = match checked {
                Ok(credentials) => repo.login(credentials).await,
                Err(err) => Err(err),
            };
            (employee_id, result)
        }
    });

    create_effect(move |_| {
        if let Some((employee_id, result)) = login_action.value().get() {
            match result {
                Ok(resp) => {
                    error.set(None);
                    password.set(String::new());
                    let id = resp.employee.map(|e| e.id).unwrap_or(employee_id);
                    navigator.navigate(Page::EmployeeDashboard(id));
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    EmployeeLoginViewModel {
        email,
        password,
        error,
        login_action,
    }
}

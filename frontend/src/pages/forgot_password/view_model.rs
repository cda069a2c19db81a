use super::repository::ForgotPasswordRepository;
use crate::api::{ApiClient, ApiError, MessageResponse};
use crate::state::session::Role;
use leptos::*;
use std::rc::Rc;

#[derive(Clone)]
pub struct ForgotPasswordViewModel {
    pub error: RwSignal<Option<ApiError>>,
    pub success: RwSignal<Option<String>>,
    pub submit_action: Action<Option<u32>, Result<MessageResponse, ApiError>>,
}

pub fn use_forgot_password_view_model(role: Role) -> ForgotPasswordViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = ForgotPasswordRepository::new_with_client(Rc::new(api));

    let error = create_rw_signal(None);
    let success = create_rw_signal(None);

    let submit_action = create_action(move |employee_id: &Option<u32>| {
        let repo = repository.clone();
        let employee_id = *employee_id;
        async move { repo.request_reset(role, employee_id).await }
    });

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(resp) => {
                    success.set(Some(resp.message));
                    error.set(None);
                }
                Err(err) => {
                    error.set(Some(err));
                    success.set(None);
                }
            }
        }
    });

    ForgotPasswordViewModel {
        error,
        success,
        submit_action,
    }
}

use super::repository::ResetPasswordRepository;
use crate::api::{ApiClient, ApiError, MessageResponse};
use crate::state::{navigation::use_navigator, session::Role};
use leptos::*;
use std::rc::Rc;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone)]
pub struct ResetPasswordViewModel {
    pub password: RwSignal<String>,
    pub confirm: RwSignal<String>,
    pub has_token: bool,
    pub error: RwSignal<Option<String>>,
    pub success: RwSignal<Option<String>>,
    pub submit_action: Action<(String, String), Result<MessageResponse, ApiError>>,
}

pub fn use_reset_password_view_model(role: Role) -> ResetPasswordViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = ResetPasswordRepository::new_with_client(Rc::new(api));
    let token = use_navigator().reset_token().unwrap_or_default();
    let has_token = !token.trim().is_empty();

    let password = create_rw_signal(String::new());
    let confirm = create_rw_signal(String::new());
    let error = create_rw_signal(None);
    let success = create_rw_signal(None);

    let submit_action = create_action(move |(value, confirmation): &(String, String)| {
        let repo = repository.clone();
        let checked = validate_reset_input(&token, value, confirmation);
        async move {
            let (token, new_password) = checked?;
            repo.reset_password(role, token, new_password).await
        }
    });

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(resp) => {
                    success.set(Some(resp.message));
                    error.set(None);
                    password.set(String::new());
                    confirm.set(String::new());
                }
                Err(err) => {
                    error.set(Some(err.to_string()));
                    success.set(None);
                }
            }
        }
    });

    ResetPasswordViewModel {
        password,
        confirm,
        has_token,
        error,
        success,
        submit_action,
    }
}

fn validate_reset_input(
    token: &str,
    new_password: &str,
    confirmation: &str,
) -> Result<(String, String), ApiError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(ApiError::validation("Invalid or missing reset token."));
    }
    let new_password = new_password.trim();
    if new_password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::validation(format!(
            "Password must be at least {} characters long.",
            MIN_PASSWORD_LEN
        )));
    }
    if new_password != confirmation.trim() {
        return Err(ApiError::validation("Passwords do not match."));
    }
    Ok((token.to_string(), new_password.to_string()))
}

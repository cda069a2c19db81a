use super::{repository::ContactRepository, CONTACT_EMAIL};
use crate::api::{ApiClient, ApiError, ContactRequest, MessageResponse};
use crate::utils::notify;
use leptos::*;
use std::rc::Rc;

pub const SENT_MESSAGE: &str = "Message sent successfully! We will get back to you soon.";

#[derive(Clone, Copy)]
pub struct ContactForm {
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub subject: RwSignal<String>,
    pub message: RwSignal<String>,
}

impl ContactForm {
    fn new() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            phone: create_rw_signal(String::new()),
            subject: create_rw_signal(String::new()),
            message: create_rw_signal(String::new()),
        }
    }

    pub fn to_request(&self) -> ContactRequest {
        let phone = self.phone.get_untracked();
        ContactRequest {
            name: self.name.get_untracked().trim().to_string(),
            email: self.email.get_untracked().trim().to_string(),
            phone: (!phone.trim().is_empty()).then(|| phone.trim().to_string()),
            subject: self.subject.get_untracked().trim().to_string(),
            message: self.message.get_untracked().trim().to_string(),
        }
    }

    fn clear(&self) {
        for field in [self.name, self.email, self.phone, self.subject, self.message] {
            field.set(String::new());
        }
    }
}

#[derive(Clone)]
pub struct ContactViewModel {
    pub form: ContactForm,
    pub error: RwSignal<Option<ApiError>>,
    pub success: RwSignal<Option<String>>,
    pub submit_action: Action<ContactRequest, Result<MessageResponse, ApiError>>,
}

pub fn use_contact_view_model() -> ContactViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = ContactRepository::new_with_client(Rc::new(api));

    let form = ContactForm::new();
    let error = create_rw_signal(None::<ApiError>);
    let success = create_rw_signal(None::<String>);

    let submit_action = create_action(move |request: &ContactRequest| {
        let repo = repository.clone();
        let request = request.clone();
        async move {
            validate_contact(&request)?;
            repo.send(request).await
        }
    });

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    success.set(Some(SENT_MESSAGE.to_string()));
                    form.clear();
                }
                Err(err) => {
                    success.set(None);
                    if err.code != "VALIDATION_ERROR" {
                        log::warn!("contact form failed: {}", err);
                        notify::alert(&format!(
                            "Failed to send message. Please email us directly at {}",
                            CONTACT_EMAIL
                        ));
                    }
                    error.set(Some(err));
                }
            }
        }
    });

    ContactViewModel {
        form,
        error,
        success,
        submit_action,
    }
}

pub fn validate_contact(request: &ContactRequest) -> Result<(), ApiError> {
    let required = [
        &request.name,
        &request.email,
        &request.subject,
        &request.message,
    ];
    if required.iter().any(|value| value.trim().is_empty()) {
        return Err(ApiError::validation("Please fill in all required fields."));
    }
    if !request.email.contains('@') {
        return Err(ApiError::validation("Please enter a valid email address."));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactRequest {
        ContactRequest {
            name: "Ravi".into(),
            email: "ravi@example.com".into(),
            phone: None,
            subject: "Hull inspection".into(),
            message: "Need a diver team next week.".into(),
        }
    }

    #[test]
    fn complete_request_passes() {
        assert!(validate_contact(&filled()).is_ok());
    }

    #[test]
    fn phone_is_optional_but_subject_is_not() {
        let mut request = filled();
        request.subject = "  ".into();
        let err = validate_contact(&request).unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
    }

    #[test]
    fn email_needs_an_at_sign() {
        let mut request = filled();
        request.email = "ravi.example.com".into();
        assert_eq!(
            validate_contact(&request).unwrap_err().error,
            "Please enter a valid email address."
        );
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn blank_phone_is_left_out_of_the_request() {
        with_runtime(|| {
            let vm = use_contact_view_model();
            vm.form.name.set(" Ravi ".into());
            vm.form.phone.set("   ".into());
            let request = vm.form.to_request();
            assert_eq!(request.name, "Ravi");
            assert_eq!(request.phone, None);
        });
    }
}

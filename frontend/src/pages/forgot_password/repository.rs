use crate::api::{ApiClient, ApiError, MessageResponse};
use crate::state::session::Role;
use std::rc::Rc;

pub const NO_EMPLOYEE_SELECTED: &str = "Please select your profile on the employee portal first.";

#[derive(Clone)]
pub struct ForgotPasswordRepository {
    client: Rc<ApiClient>,
}

impl ForgotPasswordRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn request_reset(
        &self,
        role: Role,
        employee_id: Option<u32>,
    ) -> Result<MessageResponse, ApiError> {
        match role {
            Role::Admin => self.client.admin_forgot_password().await,
            Role::Employee => {
                let id = employee_id.ok_or_else(|| ApiError::validation(NO_EMPLOYEE_SELECTED))?;
                self.client.employee_forgot_password(id).await
            }
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn employee_reset_needs_a_selected_employee() {
        let server = MockServer::start_async().await;
        let repo = ForgotPasswordRepository::new_with_client(Rc::new(
            ApiClient::new_with_base_url(server.base_url()),
        ));
        let err = repo.request_reset(Role::Employee, None).await.unwrap_err();
        assert_eq!(err.error, NO_EMPLOYEE_SELECTED);
    }

    #[tokio::test]
    async fn employee_reset_posts_the_selected_id() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/employee/forgot-password")
                    .body("employee_id=12");
                then.status(200)
                    .json_body(serde_json::json!({ "message": "Reset link sent" }));
            })
            .await;
        let repo = ForgotPasswordRepository::new_with_client(Rc::new(
            ApiClient::new_with_base_url(server.base_url()),
        ));
        let resp = repo.request_reset(Role::Employee, Some(12)).await.unwrap();
        mock.assert_async().await;
        assert_eq!(resp.message, "Reset link sent");
    }
}

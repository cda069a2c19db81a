use crate::api::{ApiClient, ApiError, MessageResponse};
use crate::state::session::Role;
use std::rc::Rc;

#[derive(Clone)]
pub struct ResetPasswordRepository {
    client: Rc<ApiClient>,
}

impl ResetPasswordRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn reset_password(
        &self,
        role: Role,
        token: String,
        new_password: String,
    ) -> Result<MessageResponse, ApiError> {
        match role {
            Role::Admin => self.client.admin_reset_password(&token, &new_password).await,
            Role::Employee => {
                self.client
                    .employee_reset_password(&token, &new_password)
                    .await
            }
        }
    }
}

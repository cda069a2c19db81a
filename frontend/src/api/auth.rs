use super::{
    client::ApiClient,
    types::{ApiError, LoginResponse, MessageResponse},
};
use crate::state::session::{Role, LOCAL_SESSION_MARKER};

impl ApiClient {
    pub async fn admin_login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<LoginResponse, ApiError> {
        let url = self.endpoint("/auth/login").await;
        let response: LoginResponse = self
            .send_json(
                self.http_client()
                    .post(url)
                    .form(&[("email", email), ("password", password)]),
            )
            .await?;
        self.persist_login(Role::Admin, &response)?;
        Ok(response)
    }

    pub async fn admin_forgot_password(&self) -> Result<MessageResponse, ApiError> {
        let url = self.endpoint("/auth/forgot-password").await;
        self.send_json(self.http_client().post(url)).await
    }

    pub async fn admin_reset_password(
        &self,
        token: &str,
        new_password: &str,
    ) -> Result<MessageResponse, ApiError> {
        let url = self.endpoint("/auth/reset-password").await;
        self.send_json(
            self.http_client()
                .post(url)
                .form(&[("token", token), ("new_password", new_password)]),
        )
        .await
    }

    pub async fn employee_login(
        &self,
        employee_id: u32,
        email: &str,
        password: &str,
    ) -> Result<LoginResponse, ApiError> {
        let url = self.endpoint("/employee/login").await;
        let employee_id = employee_id.to_string();
        let response: LoginResponse = self
            .send_json(self.http_client().post(url).form(&[
                ("email", email),
                ("password", password),
                ("employee_id", employee_id.as_str()),
            ]))
            .await?;
        self.persist_login(Role::Employee, &response)?;
        if let Some(employee) = &response.employee {
            self.session()
                .remember_employee(employee)
                .map_err(ApiError::unknown)?;
        }
        Ok(response)
    }

    pub async fn employee_forgot_password(
        &self,
        employee_id: u32,
    ) -> Result<MessageResponse, ApiError> {
        let url = self.endpoint("/employee/forgot-password").await;
        let employee_id = employee_id.to_string();
        self.send_json(
            self.http_client()
                .post(url)
                .form(&[("employee_id", employee_id.as_str())]),
        )
        .await
    }

    pub async fn employee_reset_password(
        &self,
        token: &str,
        new_password: &str,
    ) -> Result<MessageResponse, ApiError> {
        let url = self.endpoint("/employee/reset-password").await;
        self.send_json(
            self.http_client()
                .post(url)
                .form(&[("token", token), ("new_password", new_password)]),
        )
        .await
    }

    fn persist_login(&self, role: Role, response: &LoginResponse) -> Result<(), ApiError> {
        // Backends that only confirm credentials get a local marker instead of a bearer token.
        let token = response
            .access_token
            .as_deref()
            .filter(|token| !token.trim().is_empty())
            .unwrap_or(LOCAL_SESSION_MARKER);
        self.session()
            .begin(role, token)
            .map_err(ApiError::unknown)?;
        log::info!("{} session started", role.label());
        Ok(())
    }
}

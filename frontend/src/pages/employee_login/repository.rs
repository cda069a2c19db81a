use crate::api::{ApiClient, ApiError, LoginResponse};
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeCredentials {
    pub employee_id: u32,
    pub email: String,
    pub password: String,
}

impl EmployeeCredentials {
    pub fn validated(employee_id: Option<u32>, email: &str, password: &str) -> Result<Self, ApiError> {
        let employee_id = employee_id
            .ok_or_else(|| ApiError::validation("Please select your profile on the employee portal."))?;
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(ApiError::validation("Please enter your email and password."));
        }
        Ok(Self {
            employee_id,
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

#[derive(Clone)]
pub struct EmployeeLoginRepository {
    client: Rc<ApiClient>,
}

impl EmployeeLoginRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn login(&self, credentials: EmployeeCredentials) -> Result<LoginResponse, ApiError> {
        self.client
            .employee_login(credentials.employee_id, &credentials.email, &credentials.password)
            .await
    }
}

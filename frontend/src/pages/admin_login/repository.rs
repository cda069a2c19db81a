use crate::api::{ApiClient, ApiError, LoginResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct AdminLoginRepository {
    client: Rc<ApiClient>,
}

impl AdminLoginRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn login(&self, credentials: Credentials) -> Result<LoginResponse, ApiError> {
        self.client
            .admin_login(&credentials.email, &credentials.password)
            .await
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn validated(email: &str, password: &str) -> Result<Self, ApiError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(ApiError::validation("Please enter your email and password."));
        }
        Ok(Self {
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Credentials;

    #[test]
    fn credentials_require_both_fields() {
        assert!(Credentials::validated(" ", "secret").is_err());
        assert!(Credentials::validated("admin@magmarine.in", "").is_err());
        let ok = Credentials::validated(" admin@magmarine.in ", "secret").unwrap();
        assert_eq!(ok.email, "admin@magmarine.in");
    }
}

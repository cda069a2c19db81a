use crate::api::{ApiClient, ApiError, ContactRequest, MessageResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct ContactRepository {
    client: Rc<ApiClient>,
}

impl ContactRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn send(&self, request: ContactRequest) -> Result<MessageResponse, ApiError> {
        self.client.send_contact(&request).await
    }
}

use crate::api::{ApiClient, ApiError, Job, JobApplication, MessageResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct CareersRepository {
    client: Rc<ApiClient>,
}

impl CareersRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list_jobs(&self) -> Result<Vec<Job>, ApiError> {
        self.client.list_jobs().await
    }

    pub async fn apply(&self, job_title: String) -> Result<MessageResponse, ApiError> {
        let application = JobApplication {
            job_title,
            ..Default::default()
        };
        self.client.send_application(&application).await
    }
}

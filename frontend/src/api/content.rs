use reqwest::multipart::{Form, Part};

use super::{
    client::ApiClient,
    types::{ApiError, ContactRequest, ImageUpload, Job, JobApplication, JobPayload, MessageResponse,
        NewsEvent, NewsPayload},
};

fn news_form(payload: &NewsPayload) -> Result<Form, ApiError> {
    let form = Form::new()
        .text("title", payload.title.clone())
        .text("description", payload.description.clone())
        .text("date", payload.date.clone());
    match &payload.image {
        Some(image) => Ok(form.part("image", image_part(image)?)),
        None => Ok(form),
    }
}

fn image_part(image: &ImageUpload) -> Result<Part, ApiError> {
    let part = Part::bytes(image.bytes.clone()).file_name(image.file_name.clone());
    if image.mime_type.is_empty() {
        return Ok(part);
    }
    part.mime_str(&image.mime_type)
        .map_err(|e| ApiError::validation(format!("Unsupported image type: {}", e)))
}

impl ApiClient {
    pub async fn list_news(&self) -> Result<Vec<NewsEvent>, ApiError> {
        let url = self.endpoint("/news").await;
        self.send_json(self.http_client().get(url)).await
    }

    pub async fn create_news(&self, payload: &NewsPayload) -> Result<NewsEvent, ApiError> {
        if payload.image.is_none() {
            return Err(ApiError::validation("An image is required for new items"));
        }
        let url = self.endpoint("/news").await;
        let form = news_form(payload)?;
        self.send_json(self.http_client().post(url).multipart(form))
            .await
    }

    /// Keeps the stored image when `payload.image` is `None`.
    pub async fn update_news(&self, id: &str, payload: &NewsPayload) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("/news/{}", id)).await;
        let form = news_form(payload)?;
        self.send_discard(self.http_client().put(url).multipart(form))
            .await
    }

    pub async fn delete_news(&self, id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("/news/{}", id)).await;
        self.send_discard(self.http_client().delete(url)).await
    }

    pub async fn list_jobs(&self) -> Result<Vec<Job>, ApiError> {
        let url = self.endpoint("/jobs").await;
        self.send_json(self.http_client().get(url)).await
    }

    pub async fn create_job(&self, payload: &JobPayload) -> Result<Job, ApiError> {
        let url = self.endpoint("/jobs").await;
        self.send_json(self.http_client().post(url).json(payload))
            .await
    }

    pub async fn update_job(&self, id: &str, payload: &JobPayload) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("/jobs/{}", id)).await;
        self.send_discard(self.http_client().put(url).json(payload))
            .await
    }

    pub async fn delete_job(&self, id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("/jobs/{}", id)).await;
        self.send_discard(self.http_client().delete(url)).await
    }

    pub async fn send_contact(&self, request: &ContactRequest) -> Result<MessageResponse, ApiError> {
        let url = self.endpoint("/api/send-contact").await;
        let mut fields = vec![
            ("name", request.name.as_str()),
            ("email", request.email.as_str()),
            ("subject", request.subject.as_str()),
            ("message", request.message.as_str()),
        ];
        if let Some(phone) = request.phone.as_deref().filter(|p| !p.trim().is_empty()) {
            fields.push(("phone", phone));
        }
        self.send_json(self.http_client().post(url).form(&fields))
            .await
    }

    pub async fn send_application(
        &self,
        application: &JobApplication,
    ) -> Result<MessageResponse, ApiError> {
        let url = self.endpoint("/api/send-application").await;
        let mut fields = vec![("job_title", application.job_title.as_str())];
        if let Some(name) = application.name.as_deref() {
            fields.push(("name", name));
        }
        if let Some(email) = application.email.as_deref() {
            fields.push(("email", email));
        }
        self.send_json(self.http_client().post(url).form(&fields))
            .await
    }
}

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::{
    api::types::ApiError,
    config,
    state::session::{Role, Session},
};

/// Thin HTTP client over the REST backend. Cloning is cheap; a clone shares
/// the connection pool and the session store.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session: Session,
    role: Option<Role>,
    timeout: Option<Duration>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            session: Session::default(),
            role: None,
            timeout: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            ..Self::new()
        }
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns a client that attaches the bearer token of `role`.
    pub fn scoped(&self, role: Role) -> Self {
        let mut scoped = self.clone();
        scoped.role = Some(role);
        scoped
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub(super) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(super) async fn resolved_base_url(&self) -> String {
        match &self.base_url {
            Some(base) => base.clone(),
            None => config::await_api_base_url().await,
        }
    }

    pub(super) async fn endpoint(&self, path: &str) -> String {
        let base = self.resolved_base_url().await;
        format!("{}{}", base.trim_end_matches('/'), path)
    }

    fn request_timeout(&self) -> Duration {
        self.timeout
            .unwrap_or_else(|| config::current().request_timeout())
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.role.and_then(|role| self.session.bearer_token(role)) {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub(super) async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = dispatch(self.authorize(builder), self.request_timeout()).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let error = ApiError::from_status(status.as_u16(), &body);
        log::warn!("request failed with {}: {}", status, error);
        Err(error)
    }

    pub(super) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        self.send(builder)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
    }

    pub(super) async fn send_discard(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        self.send(builder).await.map(|_| ())
    }
}

fn transport_error(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::timeout()
    } else {
        ApiError::request_failed(format!("Request failed: {}", error))
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn dispatch(builder: RequestBuilder, timeout: Duration) -> Result<Response, ApiError> {
    builder.timeout(timeout).send().await.map_err(transport_error)
}

// fetch-backed requests have no native timeout; race the request against a timer.
// Dropping the losing request future aborts the underlying fetch.
#[cfg(target_arch = "wasm32")]
async fn dispatch(builder: RequestBuilder, timeout: Duration) -> Result<Response, ApiError> {
    use futures::future::{select, Either};
    use gloo_timers::future::TimeoutFuture;

    let millis = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);
    let request = Box::pin(builder.send());
    let timer = Box::pin(TimeoutFuture::new(millis));
    match select(request, timer).await {
        Either::Left((result, _)) => result.map_err(transport_error),
        Either::Right(_) => Err(ApiError::timeout()),
    }
}

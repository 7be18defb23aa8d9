//! HTTP helpers for the backend's JSON API with a consistent timeout and error
//! policy. Feature clients call these instead of building requests by hand so
//! every route gets the same user agent, bearer handling and error mapping.
//! The client never logs the bearer token.

use super::{config::ApiConfig, errors::ApiError};
use crate::APP_USER_AGENT;
use reqwest::{Client, Method, RequestBuilder, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, instrument};
use url::Url;

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
    token: Option<SecretString>,
}

impl ApiClient {
    /// # Errors
    /// Returns `ApiError::Config` if the underlying HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|err| ApiError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            config,
            token: None,
        })
    }

    /// Attaches a bearer token to every subsequent request.
    #[must_use]
    pub fn with_token(mut self, token: SecretString) -> Self {
        self.token = Some(token);
        self
    }

    #[must_use]
    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Fetches JSON from `path`.
    ///
    /// # Errors
    /// Returns an `ApiError` for transport failures, non-2xx responses or bad JSON.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.request(Method::GET, path)?;
        send_json(request).await
    }

    /// Fetches JSON from `path` followed by `segment`, which is sent as a
    /// single percent-encoded path segment.
    ///
    /// # Errors
    /// Returns an `ApiError` for transport failures, non-2xx responses or bad JSON.
    pub async fn get_json_segment<T: DeserializeOwned>(
        &self,
        path: &str,
        segment: &str,
    ) -> Result<T, ApiError> {
        let url = self.config.endpoint_with_segment(path, segment)?;
        send_json(self.request_url(Method::GET, url)).await
    }

    /// Fetches JSON from `path` with query parameters.
    ///
    /// # Errors
    /// Returns an `ApiError` for transport failures, non-2xx responses or bad JSON.
    pub async fn get_json_query<Q, T>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::GET, path)?.query(query);
        send_json(request).await
    }

    /// Posts a JSON body and parses a JSON response.
    ///
    /// # Errors
    /// Returns an `ApiError` for transport failures, non-2xx responses or bad JSON.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::POST, path)?.json(body);
        send_json(request).await
    }

    /// Posts with query parameters and no body.
    ///
    /// # Errors
    /// Returns an `ApiError` for transport failures, non-2xx responses or bad JSON.
    pub async fn post_query<Q, T>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::POST, path)?.query(query);
        send_json(request).await
    }

    /// Posts a JSON body alongside query parameters.
    ///
    /// # Errors
    /// Returns an `ApiError` for transport failures, non-2xx responses or bad JSON.
    pub async fn post_json_query<Q, B, T>(
        &self,
        path: &str,
        query: &Q,
        body: &B,
    ) -> Result<T, ApiError>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::POST, path)?.query(query).json(body);
        send_json(request).await
    }

    /// Posts without a body.
    ///
    /// # Errors
    /// Returns an `ApiError` for transport failures, non-2xx responses or bad JSON.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.request(Method::POST, path)?;
        send_json(request).await
    }

    /// Replaces a resource with a JSON body.
    ///
    /// # Errors
    /// Returns an `ApiError` for transport failures, non-2xx responses or bad JSON.
    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::PUT, path)?.json(body);
        send_json(request).await
    }

    /// Deletes a resource and parses the backend's confirmation payload.
    ///
    /// # Errors
    /// Returns an `ApiError` for transport failures, non-2xx responses or bad JSON.
    pub async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.request(Method::DELETE, path)?;
        send_json(request).await
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let url = self.config.endpoint(path)?;
        Ok(self.request_url(method, url))
    }

    fn request_url(&self, method: Method, url: Url) -> RequestBuilder {
        debug!(%method, %url, "api request");

        let builder = self.http.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token.expose_secret()),
            None => builder,
        }
    }
}

/// Maps transport errors into user-facing variants with timeout detection.
fn map_request_error(err: &reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout("Request timed out. Please try again.".to_string())
    } else if err.is_builder() {
        ApiError::Serialization(format!("Failed to build request: {err}"))
    } else {
        ApiError::Network(format!("Unable to reach the server: {err}"))
    }
}

#[instrument(skip(request), level = "debug")]
async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|err| map_request_error(&err))?;

    handle_json_response(response).await
}

/// Parses JSON responses and turns HTTP errors into `ApiError`s.
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    debug!(status = status.as_u16(), "api response");

    if status.is_success() {
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_response(status.as_u16(), &body))
    }
}

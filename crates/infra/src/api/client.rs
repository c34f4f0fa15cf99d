//! JSON API client for the collaborator endpoints
//!
//! Every endpoint is configured as an absolute URL, so the client has no base
//! URL of its own. A bearer token is attached when one is configured.

use reqwest::{Method, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tappal_domain::ApiConfig;
use tracing::{debug, info, instrument};

use super::errors::ApiError;
use crate::http::HttpClient;

/// API client over the shared [`HttpClient`]
#[derive(Clone)]
pub struct ApiClient {
    http: HttpClient,
    auth_token: Option<String>,
}

impl ApiClient {
    /// Build a client from the `api` config section.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the underlying HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = HttpClient::from_config(config)
            .map_err(|e| ApiError::Config(format!("Failed to build HttpClient: {e}")))?;
        Ok(Self::with_http(http, config.auth_token.clone()))
    }

    pub fn with_http(http: HttpClient, auth_token: Option<String>) -> Self {
        let auth_token = auth_token.filter(|token| !token.trim().is_empty());
        Self { http, auth_token }
    }

    /// GET `url` and return the raw JSON document.
    ///
    /// An empty 2xx body reads as `null`.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn get_json(&self, url: &str) -> Result<Value, ApiError> {
        let response = self.execute(Method::GET, url, None).await?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to read response: {e}")))?;

        if text.trim().is_empty() || status == StatusCode::NO_CONTENT {
            return Ok(Value::Null);
        }

        let value = serde_json::from_str(&text)
            .map_err(|e| ApiError::Decode(format!("Failed to parse response: {e}")))?;
        info!("GET request successful");
        Ok(value)
    }

    /// POST a JSON body; any response body is ignored.
    #[instrument(skip(self, body), fields(url = %url))]
    pub async fn post_json<T: Serialize + ?Sized>(&self, url: &str, body: &T) -> Result<(), ApiError> {
        let body = Self::encode(body)?;
        self.execute(Method::POST, url, Some(body)).await?;
        info!("POST request successful");
        Ok(())
    }

    /// PUT a JSON body; any response body is ignored.
    #[instrument(skip(self, body), fields(url = %url))]
    pub async fn put_json<T: Serialize + ?Sized>(&self, url: &str, body: &T) -> Result<(), ApiError> {
        let body = Self::encode(body)?;
        self.execute(Method::PUT, url, Some(body)).await?;
        info!("PUT request successful");
        Ok(())
    }

    async fn execute(&self, method: Method, url: &str, body: Option<Value>) -> Result<Response, ApiError> {
        debug!(%method, url, "API request");

        let mut request = self.http.request(method, url).header("Accept", "application/json");
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = self.http.send(request).await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::map_status_error(status, body));
        }
        Ok(response)
    }

    fn encode<T: Serialize + ?Sized>(body: &T) -> Result<Value, ApiError> {
        serde_json::to_value(body).map_err(|e| ApiError::Config(format!("Failed to serialize body: {e}")))
    }

    fn map_status_error(status: StatusCode, body: String) -> ApiError {
        let body = if body.trim().is_empty() {
            status.canonical_reason().unwrap_or("no response body").to_string()
        } else {
            body
        };
        ApiError::from_status(status.as_u16(), body)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client(token: Option<&str>) -> ApiClient {
        let http = HttpClient::builder()
            .base_backoff(Duration::from_millis(1))
            .max_attempts(1)
            .build()
            .expect("http client");
        ApiClient::with_http(http, token.map(str::to_string))
    }

    #[tokio::test]
    async fn get_returns_json_document_with_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/officers"))
            .and(header("Authorization", "Bearer secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "O1"}])))
            .expect(1)
            .mount(&server)
            .await;

        let value = client(Some("secret")).get_json(&format!("{}/officers", server.uri())).await.unwrap();
        assert_eq!(value, json!([{"id": "O1"}]));
    }

    #[tokio::test]
    async fn empty_body_reads_as_null() {
        let server = MockServer::start().await;
        Mock::given(method("GET")).respond_with(ResponseTemplate::new(204)).mount(&server).await;

        let value = client(None).get_json(&server.uri()).await.unwrap();
        assert_eq!(value, Value::Null);
    }

    #[tokio::test]
    async fn non_json_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = client(None).get_json(&server.uri()).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn put_failure_keeps_response_body() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(body_json(json!({"x": 1})))
            .respond_with(ResponseTemplate::new(500).set_body_string("assignee column locked"))
            .mount(&server)
            .await;

        let err = client(None).put_json(&server.uri(), &json!({"x": 1})).await.unwrap_err();
        match err {
            ApiError::Server { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "assignee column locked");
            }
            other => panic!("expected server error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_error_body_falls_back_to_reason_phrase() {
        let server = MockServer::start().await;
        Mock::given(method("POST")).respond_with(ResponseTemplate::new(404)).mount(&server).await;

        let err = client(None).post_json(&server.uri(), &json!({})).await.unwrap_err();
        match err {
            ApiError::Client { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, "Not Found");
            }
            other => panic!("expected client error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn blank_token_sends_no_authorization_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        client(Some("  ")).get_json(&server.uri()).await.unwrap();
        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].headers.get("authorization").is_none());
    }
}

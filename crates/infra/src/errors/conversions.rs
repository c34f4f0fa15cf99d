//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use tappal_domain::TappalError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub TappalError);

impl From<InfraError> for TappalError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<TappalError> for InfraError {
    fn from(value: TappalError) -> Self {
        InfraError(value)
    }
}

trait IntoTappalError {
    fn into_tappal(self) -> TappalError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → TappalError */
/* -------------------------------------------------------------------------- */

impl IntoTappalError for HttpError {
    fn into_tappal(self) -> TappalError {
        if self.is_timeout() {
            return TappalError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return TappalError::Network(format!("HTTP connection failure: {self}"));
        }

        if self.is_builder() {
            return TappalError::Config(format!("invalid HTTP request: {self}"));
        }

        if self.is_decode() {
            return TappalError::InvalidInput(format!("malformed response body: {self}"));
        }

        if let Some(status) = self.status() {
            return TappalError::Http {
                status: status.as_u16(),
                body: status.canonical_reason().unwrap_or("unknown status").to_string(),
            };
        }

        TappalError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_tappal())
    }
}

#[cfg(test)]
mod tests {
    use reqwest::{Client, StatusCode};
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn http_status_maps_to_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(StatusCode::UNAUTHORIZED))
            .mount(&server)
            .await;

        let client = Client::builder().no_proxy().build().unwrap();
        let error = client.get(server.uri()).send().await.unwrap().error_for_status().unwrap_err();

        let mapped: TappalError = InfraError::from(error).into();
        assert_eq!(mapped, TappalError::Http { status: 401, body: "Unauthorized".into() });
    }

    #[tokio::test]
    async fn malformed_url_is_a_config_error() {
        let client = Client::builder().no_proxy().build().unwrap();
        let error = client.get("not a url").send().await.unwrap_err();

        let mapped: TappalError = InfraError::from(error).into();
        assert!(matches!(mapped, TappalError::Config(_)), "got {mapped:?}");
    }
}

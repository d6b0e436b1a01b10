//! REST HTTP client implementation.

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, trace};
use url::Url;

use crate::error::{Error, InvalidInputError, ProtocolError};

use super::endpoints::GatewayErrorResponse;

/// HTTP transport used by a session.
///
/// Each call to [`RestClient::send`] issues exactly one request and waits
/// for its single response. No retries and no timeout beyond the
/// transport's defaults.
#[derive(Debug, Clone)]
pub struct RestClient {
    client: reqwest::Client,
}

/// Status, headers and raw body of a completed exchange.
#[derive(Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RestClient {
    /// Create a new REST client.
    pub fn new() -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("ig-session/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }

    /// Send one request and collect the full response.
    #[instrument(skip_all, fields(%method, %url))]
    pub async fn send(
        &self,
        method: Method,
        url: Url,
        headers: HeaderMap,
        body: Option<Vec<u8>>,
    ) -> Result<RawResponse, Error> {
        debug!(has_body = body.is_some(), "REST request");

        let mut request = self.client.request(method, url).headers(headers);
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        trace!(status = %status, len = body.len(), "REST response");

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

impl RawResponse {
    /// Fail unless the status is exactly 200.
    pub fn ensure_ok(&self) -> Result<(), Error> {
        if self.status == StatusCode::OK {
            return Ok(());
        }

        let error_code = serde_json::from_slice::<GatewayErrorResponse>(&self.body)
            .ok()
            .and_then(|e| e.error_code);

        Err(ProtocolError::new(self.status.as_u16(), error_code).into())
    }

    /// Returns a response header as a string, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Parse the body as JSON.
    pub fn json<R: DeserializeOwned>(&self) -> Result<R, Error> {
        serde_json::from_slice(&self.body).map_err(Error::MalformedBody)
    }
}

/// Base headers for every gateway call: JSON in both directions.
pub fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

/// Insert a header whose value comes from credentials or tokens.
pub fn insert_header(headers: &mut HeaderMap, name: &'static str, value: &str) -> Result<(), Error> {
    let invalid = || InvalidInputError::HeaderValue { header: name };
    let header = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
    let value = HeaderValue::from_str(value).map_err(|_| invalid())?;
    headers.insert(header, value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status: StatusCode::from_u16(status).unwrap(),
            headers: HeaderMap::new(),
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn client_creation() {
        assert!(RestClient::new().is_ok());
    }

    #[test]
    fn only_200_is_ok() {
        assert!(response(200, "{}").ensure_ok().is_ok());

        let err = response(201, "{}").ensure_ok().unwrap_err();
        assert_eq!(err.status(), Some(201));
    }

    #[test]
    fn error_code_extracted_from_body() {
        let err = response(401, r#"{"errorCode":"error.security.invalid-details"}"#)
            .ensure_ok()
            .unwrap_err();
        match err {
            Error::Protocol(p) => {
                assert_eq!(p.status, 401);
                assert_eq!(p.error_code.as_deref(), Some("error.security.invalid-details"));
            }
            other => panic!("expected protocol error, got {other:?}"),
        }
    }

    #[test]
    fn non_json_error_body_has_no_code() {
        let err = response(500, "Internal Server Error").ensure_ok().unwrap_err();
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn malformed_body() {
        let err = response(200, "<html>").json::<serde_json::Value>().unwrap_err();
        assert!(matches!(err, Error::MalformedBody(_)));
    }

    #[test]
    fn json_headers_set_both_directions() {
        let headers = json_headers();
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[ACCEPT], "application/json");
    }

    #[test]
    fn header_value_rejects_newlines() {
        let mut headers = HeaderMap::new();
        assert!(insert_header(&mut headers, "X-IG-API-KEY", "bad\nkey").is_err());
        insert_header(&mut headers, "X-IG-API-KEY", "good-key").unwrap();
        assert_eq!(headers["x-ig-api-key"], "good-key");
    }
}

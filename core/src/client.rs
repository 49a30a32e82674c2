//! HTTP façade for the Books/Authors API.
//!
//! # Design
//! Requests are built as plain `HttpRequest` values and executed by a ureq
//! agent configured from `Settings`. Every verb takes an optional expected
//! status: with `Some(code)` a mismatch becomes an `ApiError`, which is how
//! a suite fails a test case; with `None` the raw response is returned for
//! the caller to inspect. The `*_as` variants additionally deserialize the
//! body.

use std::fmt::{self, Display};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Settings;
use crate::endpoint::ApiEndpoint;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

const JSON: &str = "application/json";

/// Blocking client bound to one base URL.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    agent: ureq::Agent,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient").field("base_url", &self.base_url).finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(settings: &Settings) -> Self {
        // 4xx/5xx are data here; status interpretation happens in `expect_status`.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(settings.request_timeout()))
            .build()
            .new_agent();

        Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            agent,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a request without a body.
    pub fn request(&self, method: HttpMethod, endpoint: ApiEndpoint, id: Option<&dyn Display>) -> HttpRequest {
        HttpRequest {
            method,
            url: format!("{}{}", self.base_url, endpoint.resolve(id)),
            headers: vec![("content-type".to_string(), JSON.to_string())],
            body: None,
        }
    }

    /// Build a request carrying `body` as JSON.
    pub fn request_with_body<B: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        endpoint: ApiEndpoint,
        id: Option<&dyn Display>,
        body: &B,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Serialization(e.to_string()))?;
        let mut request = self.request(method, endpoint, id);
        request.body = Some(body);
        Ok(request)
    }

    /// Perform the round trip. Only transport failures are errors.
    pub fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let url = request.url.as_str();
        let mut response = match (request.method, request.body.as_deref()) {
            (HttpMethod::Get, _) => with_headers(self.agent.get(url), &request.headers).call()?,
            (HttpMethod::Delete, _) => with_headers(self.agent.delete(url), &request.headers).call()?,
            (HttpMethod::Post, body) => send_with_body(self.agent.post(url), &request.headers, body)?,
            (HttpMethod::Put, body) => send_with_body(self.agent.put(url), &request.headers, body)?,
        };

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| (name.as_str().to_string(), value.to_str().unwrap_or_default().to_string()))
            .collect();
        let body = response.body_mut().read_to_string()?;

        tracing::debug!(method = %request.method, url = %request.url, status, "http exchange");
        Ok(HttpResponse { status, headers, body })
    }

    /// Execute and, when `expected` is given, assert the status code.
    pub fn send(&self, request: &HttpRequest, expected: Option<u16>) -> Result<HttpResponse, ApiError> {
        let response = self.execute(request)?;
        match expected {
            Some(code) => expect_status(response, code),
            None => Ok(response),
        }
    }

    pub fn get(&self, endpoint: ApiEndpoint, expected: Option<u16>) -> Result<HttpResponse, ApiError> {
        self.send(&self.request(HttpMethod::Get, endpoint, None), expected)
    }

    pub fn get_by_id(
        &self,
        endpoint: ApiEndpoint,
        id: impl Display,
        expected: Option<u16>,
    ) -> Result<HttpResponse, ApiError> {
        self.send(&self.request(HttpMethod::Get, endpoint, Some(&id)), expected)
    }

    pub fn post<B: Serialize + ?Sized>(
        &self,
        endpoint: ApiEndpoint,
        body: &B,
        expected: Option<u16>,
    ) -> Result<HttpResponse, ApiError> {
        let request = self.request_with_body(HttpMethod::Post, endpoint, None, body)?;
        self.send(&request, expected)
    }

    pub fn put<B: Serialize + ?Sized>(
        &self,
        endpoint: ApiEndpoint,
        id: impl Display,
        body: &B,
        expected: Option<u16>,
    ) -> Result<HttpResponse, ApiError> {
        let request = self.request_with_body(HttpMethod::Put, endpoint, Some(&id), body)?;
        self.send(&request, expected)
    }

    pub fn delete(
        &self,
        endpoint: ApiEndpoint,
        id: impl Display,
        expected: Option<u16>,
    ) -> Result<HttpResponse, ApiError> {
        self.send(&self.request(HttpMethod::Delete, endpoint, Some(&id)), expected)
    }

    pub fn get_as<T: DeserializeOwned>(&self, endpoint: ApiEndpoint, expected: Option<u16>) -> Result<T, ApiError> {
        parse_json(&self.get(endpoint, expected)?)
    }

    pub fn get_by_id_as<T: DeserializeOwned>(
        &self,
        endpoint: ApiEndpoint,
        id: impl Display,
        expected: Option<u16>,
    ) -> Result<T, ApiError> {
        parse_json(&self.get_by_id(endpoint, id, expected)?)
    }

    pub fn post_as<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: ApiEndpoint,
        body: &B,
        expected: Option<u16>,
    ) -> Result<T, ApiError> {
        parse_json(&self.post(endpoint, body, expected)?)
    }

    pub fn put_as<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: ApiEndpoint,
        id: impl Display,
        body: &B,
        expected: Option<u16>,
    ) -> Result<T, ApiError> {
        parse_json(&self.put(endpoint, id, body, expected)?)
    }
}

fn with_headers(
    mut builder: ureq::RequestBuilder<ureq::typestate::WithoutBody>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<ureq::typestate::WithoutBody> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

fn send_with_body(
    mut builder: ureq::RequestBuilder<ureq::typestate::WithBody>,
    headers: &[(String, String)],
    body: Option<&str>,
) -> Result<ureq::http::Response<ureq::Body>, ureq::Error> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    match body {
        Some(body) => builder.send(body.as_bytes()),
        None => builder.send_empty(),
    }
}

/// Pass the response through when its status is `expected`.
pub fn expect_status(response: HttpResponse, expected: u16) -> Result<HttpResponse, ApiError> {
    if response.status == expected {
        return Ok(response);
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::UnexpectedStatus {
        expected,
        status: response.status,
        body: response.body,
    })
}

/// Deserialize a response body.
pub fn parse_json<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

//! HTTP client for the habits backend.
//!
//! Every endpoint function funnels through [`ApiClient::send`], which performs
//! exactly one network call and folds every failure into [`ClientError`].

mod habits;
pub mod query;
mod scores;
mod whoop;

#[cfg(test)]
mod tests;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

pub use query::{DateWindow, QueryParams, DEFAULT_DAYS};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Decoded body of a successful response.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Text(String),
}

impl Payload {
    pub fn into_json(self) -> Option<Value> {
        match self {
            Payload::Json(v) => Some(v),
            Payload::Text(_) => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            Payload::Text(s) => Some(s),
            Payload::Json(_) => None,
        }
    }
}

/// Per-call request descriptor.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    path: String,
    method: Method,
    query: QueryParams,
    body: Option<String>,
    headers: HeaderMap,
}

impl ApiRequest {
    /// `path` is relative to the API root and must begin with `/`.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        let path = path.into();
        debug_assert!(path.starts_with('/'), "request path must start with '/'");
        Self {
            path,
            method,
            query: QueryParams::new(),
            body: None,
            headers: HeaderMap::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Attach an already-serialized JSON body.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize `value` as the JSON body.
    pub fn json<T: Serialize + ?Sized>(self, value: &T) -> Result<Self> {
        let body = serde_json::to_string(value).map_err(ClientError::encode)?;
        Ok(self.body(body))
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn query_params(&self) -> &QueryParams {
        &self.query
    }

    /// Path plus encoded query string.
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query.to_query_string())
        }
    }
}

/// Client bound to one API root. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    api_base: String,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(ClientError::transport)?;
        Ok(Self::with_http_client(http, config))
    }

    pub fn with_http_client(http: reqwest::Client, config: ClientConfig) -> Self {
        Self {
            http,
            api_base: config.api_base,
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn url_for(&self, request: &ApiRequest) -> String {
        format!("{}{}", self.api_base, request.path_and_query())
    }

    /// Issue the request and normalize the outcome.
    pub async fn send(&self, request: ApiRequest) -> Result<Payload> {
        let url = self.url_for(&request);
        debug!(method = %request.method, url = %url, "api request");

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        // caller headers override the defaults
        headers.extend(request.headers);

        let mut builder = self.http.request(request.method, &url).headers(headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let resp = builder.send().await.map_err(|e| {
            warn!(url = %url, error = %e, "api request failed before a response");
            ClientError::transport(e)
        })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = error_message(status, &body);
            warn!(url = %url, status = status.as_u16(), message = %message, "api request rejected");
            return Err(ClientError::Api {
                message,
                status: status.as_u16(),
            });
        }

        let is_json = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|ct| ct.contains(JSON_CONTENT_TYPE))
            .unwrap_or(false);
        let text = resp.text().await.map_err(ClientError::transport)?;
        if is_json {
            let value = serde_json::from_str(&text).map_err(ClientError::decode)?;
            Ok(Payload::Json(value))
        } else {
            Ok(Payload::Text(text))
        }
    }

    /// Send and decode a JSON response into `T`.
    pub async fn send_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        match self.send(request).await? {
            Payload::Json(value) => serde_json::from_value(value).map_err(ClientError::decode),
            Payload::Text(text) => Err(ClientError::decode(format!(
                "expected a JSON response, got text: {}",
                truncate(&text, 120)
            ))),
        }
    }
}

/// Message for a rejected request: the body's `detail` when usable, else `HTTP {status}`.
fn error_message(status: StatusCode, body: &str) -> String {
    let detail = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("detail").cloned());
    match detail {
        Some(Value::String(s)) if !s.is_empty() => s,
        Some(Value::Null) | Some(Value::Bool(false)) | Some(Value::String(_)) | None => {
            format!("HTTP {}", status.as_u16())
        }
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => format!("HTTP {}", status.as_u16()),
        Some(other) => other.to_string(),
    }
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

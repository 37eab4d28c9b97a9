//! Transport abstraction for the planner API
//!
//! The dispatcher builds an [`ApiRequest`] and hands it to an
//! [`ApiTransport`]. Production uses [`super::HttpTransport`]; tests swap in
//! a recording fake.

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

use super::error::ApiResult;

/// HTTP methods the planner API uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Path relative to the API base URL, kept as individual segments
///
/// Each segment is sent as exactly one URL path segment, so an ID holding
/// `/`, `?` or `#` cannot reach a different route. Fixed routes convert
/// from `&str` by splitting on `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiPath(Vec<String>);

impl ApiPath {
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl From<&str> for ApiPath {
    fn from(route: &str) -> Self {
        Self::from_segments(route.trim_start_matches('/').split('/'))
    }
}

impl fmt::Display for ApiPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.0.join("/"))
    }
}

/// One outbound call: method, path relative to the API base URL, and an
/// optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: ApiPath,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<ApiPath>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
        }
    }

    pub fn post(path: impl Into<ApiPath>, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: Some(body),
        }
    }

    pub fn put(path: impl Into<ApiPath>, body: Option<Value>) -> Self {
        Self {
            method: Method::Put,
            path: path.into(),
            body,
        }
    }

    pub fn delete(path: impl Into<ApiPath>) -> Self {
        Self {
            method: Method::Delete,
            path: path.into(),
            body: None,
        }
    }
}

impl fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// Sends requests to the planner API
///
/// A 2xx answer yields its JSON body (`Value::Null` when the body is empty);
/// anything else is an error. Implementations make exactly one attempt.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Base URL requests are resolved against
    fn base_url(&self) -> &str;

    /// Send one request and return the decoded response body
    async fn send(&self, request: ApiRequest) -> ApiResult<Value>;
}

//! reqwest-backed planner API transport
//!
//! No retries and no explicit timeout; the client's defaults apply.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument, warn};
use url::Url;

use super::error::{ApiError, ApiResult};
use super::transport::{ApiPath, ApiRequest, ApiTransport};
use crate::config::ApiConfig;

/// Planner API transport over HTTP/JSON
pub struct HttpTransport {
    client: Client,
    base: Url,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let client = Client::builder().user_agent(config.user_agent.as_str()).build()?;
        let base_url = config.base_url.trim_end_matches('/').to_string();
        let base = Url::parse(&base_url).map_err(|_| ApiError::BaseUrl(base_url.clone()))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::BaseUrl(base_url));
        }

        Ok(Self {
            client,
            base,
            base_url,
        })
    }

    /// Resolve `path` under the base URL, one URL segment per path segment.
    ///
    /// Segments are pushed rather than concatenated, so `/`, `?` and `#`
    /// inside an ID are percent-encoded instead of changing the route.
    fn url_for(&self, path: &ApiPath) -> ApiResult<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::BaseUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(path.segments());
        Ok(url)
    }
}

#[async_trait]
impl ApiTransport for HttpTransport {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    async fn send(&self, request: ApiRequest) -> ApiResult<Value> {
        let url = self.url_for(&request.path)?;
        debug!("sending: {} {}", request.method, url);

        let mut builder = self.client.request(request.method.into(), url);
        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&bytes).trim().to_string();
            warn!(status = status.as_u16(), body = %body, "planner API request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(base_url: &str) -> HttpTransport {
        HttpTransport::new(&ApiConfig::new(base_url)).unwrap()
    }

    #[test]
    fn test_fixed_routes_resolve_under_base() {
        let api = transport("http://planner.test:8000/");
        assert_eq!(
            api.url_for(&"/plans/current".into()).unwrap().as_str(),
            "http://planner.test:8000/plans/current"
        );
        assert_eq!(
            api.url_for(&"/plans/".into()).unwrap().as_str(),
            "http://planner.test:8000/plans/"
        );

        let prefixed = transport("http://planner.test/api/v1");
        assert_eq!(
            prefixed.url_for(&"/plans/next-tasks".into()).unwrap().path(),
            "/api/v1/plans/next-tasks"
        );
    }

    #[test]
    fn test_reserved_characters_in_ids_are_encoded() {
        let api = transport("http://planner.test");
        let path = ApiPath::from_segments([
            "plans", "p1", "tasks", "../../p2", "comments", "c?x=1#f",
        ]);
        let url = api.url_for(&path).unwrap();

        assert_eq!(url.path(), "/plans/p1/tasks/..%2F..%2Fp2/comments/c%3Fx=1%23f");
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
    }
}

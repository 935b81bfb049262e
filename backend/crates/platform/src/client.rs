//! Upstream HTTP client
//!
//! Thin wrapper over `reqwest` for the third-party APIs this service proxies.
//! Every upstream is described by one [`UpstreamConfig`] (base URL and the
//! static headers the upstream expects); nothing else in the workspace
//! hard-codes URLs or header blobs.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Base URL and static headers for one upstream service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub headers: Vec<(String, String)>,
}

impl UpstreamConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            headers: Vec::new(),
        }
    }

    /// Add (or replace) a static header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.headers
            .retain(|(existing, _)| !existing.eq_ignore_ascii_case(&name));
        self.headers.push((name, value.into()));
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Join the base URL with a path (which may carry a query string)
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn header_map(&self) -> Result<HeaderMap, UpstreamError> {
        let mut map = HeaderMap::with_capacity(self.headers.len());
        for (name, value) in &self.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| UpstreamError::InvalidHeader(name.clone()))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|_| UpstreamError::InvalidHeader(name.clone()))?;
            map.insert(header_name, header_value);
        }
        Ok(map)
    }
}

/// Errors raised while talking to an upstream
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("Invalid static header: {0}")]
    InvalidHeader(String),

    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("Upstream request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Upstream returned {status}")]
    Status { status: reqwest::StatusCode },

    #[error("Failed to decode upstream response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl UpstreamError {
    /// Non-2xx answer (as opposed to a transport or decode failure)
    pub fn is_status(&self) -> bool {
        matches!(self, UpstreamError::Status { .. })
    }
}

/// HTTP client bound to one upstream
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    config: UpstreamConfig,
}

impl UpstreamClient {
    /// Build a client that sends the configured static headers on every request
    pub fn new(config: UpstreamConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .default_headers(config.header_map()?)
            .build()
            .map_err(UpstreamError::Build)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &UpstreamConfig {
        &self.config
    }

    /// `GET {base}/{path}` and decode a JSON body
    pub async fn get_json<T>(&self, path: &str) -> Result<T, UpstreamError>
    where
        T: DeserializeOwned,
    {
        let url = self.config.url(path);
        tracing::debug!(url = %url, "Upstream GET");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(UpstreamError::Transport)?;
        read_json(response).await
    }

    /// `POST {base}/{path}` with a JSON body and decode a JSON body
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, UpstreamError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.config.url(path);
        tracing::debug!(url = %url, "Upstream POST");

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(UpstreamError::Transport)?;
        read_json(response).await
    }
}

async fn read_json<T>(response: reqwest::Response) -> Result<T, UpstreamError>
where
    T: DeserializeOwned,
{
    let status = response.status();
    if !status.is_success() {
        return Err(UpstreamError::Status { status });
    }
    response.json::<T>().await.map_err(UpstreamError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap as AxumHeaders, StatusCode};
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{Value, json};

    async fn spawn(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[test]
    fn test_url_join() {
        let config = UpstreamConfig::new("https://gw.example.com/api/");
        assert_eq!(
            config.url("/v1/items/3?x=1"),
            "https://gw.example.com/api/v1/items/3?x=1"
        );
        assert_eq!(config.url("send-code"), "https://gw.example.com/api/send-code");
    }

    #[test]
    fn test_with_header_replaces_case_insensitively() {
        let config = UpstreamConfig::new("http://x")
            .with_header("User-Agent", "a")
            .with_header("user-agent", "b");
        assert_eq!(config.headers, vec![("user-agent".to_string(), "b".to_string())]);
    }

    #[test]
    fn test_invalid_header_is_rejected() {
        let config = UpstreamConfig::new("http://x").with_header("bad header", "v");
        assert!(matches!(
            UpstreamClient::new(config),
            Err(UpstreamError::InvalidHeader(_))
        ));
    }

    #[tokio::test]
    async fn test_static_headers_are_sent() {
        let app = Router::new().route(
            "/echo",
            get(|headers: AxumHeaders| async move {
                let flag = headers
                    .get("x-web")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                Json(json!({ "xWeb": flag }))
            }),
        );
        let base = spawn(app).await;

        let client =
            UpstreamClient::new(UpstreamConfig::new(base).with_header("X-Web", "true")).unwrap();
        let body: Value = client.get_json("/echo").await.unwrap();
        assert_eq!(body["xWeb"], "true");
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let app = Router::new().route(
            "/fail",
            post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
        );
        let base = spawn(app).await;

        let client = UpstreamClient::new(UpstreamConfig::new(base)).unwrap();
        let err = client
            .post_json::<_, Value>("/fail", &json!({}))
            .await
            .unwrap_err();
        assert!(err.is_status());
    }

    #[tokio::test]
    async fn test_undecodable_body_is_a_decode_error() {
        let app = Router::new().route("/text", get(|| async { "not json" }));
        let base = spawn(app).await;

        let client = UpstreamClient::new(UpstreamConfig::new(base)).unwrap();
        let err = client.get_json::<Value>("/text").await.unwrap_err();
        assert!(matches!(err, UpstreamError::Decode(_)));
    }
}

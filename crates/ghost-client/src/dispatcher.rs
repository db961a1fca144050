//! Authenticated request dispatcher for the Ghost Admin API.
//!
//! [`GhostClient`] turns a [`GhostRequest`] (relative endpoint, verb and
//! optional JSON payload) into one signed HTTP call and normalizes the result:
//!
//! - **2xx**: the decoded JSON body, unchanged. An empty body is `null`.
//! - **non-2xx**: [`GhostError::Upstream`] with the status and Ghost's error
//!   messages.
//! - **no response**: [`GhostError::Transport`].
//! - **2xx with a non-JSON body**: [`GhostError::Decode`].
//!
//! Every call signs a fresh token. The client holds no per-call state and can
//! be cloned and shared between concurrent tasks.
//!
//! # Example
//!
//! ```no_run
//! use ghost_client::{GhostClient, GhostClientConfig, GhostRequest};
//!
//! # async fn example() -> Result<(), ghost_client::GhostError> {
//! let config = GhostClientConfig::new(
//!     "https://blog.example.com",
//!     "6489fa7b2a4e3c0001d0e1a2:a1b2c3d4e5f60718293a4b5c6d7e8f90",
//! );
//! let client = GhostClient::new(&config)?;
//!
//! let posts = client.make_request(&GhostRequest::get("posts?limit=5")).await?;
//! println!("{posts}");
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, error};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use url::Url;

use crate::error::GhostError;
use crate::signer::{AdminApiKey, TokenSigner};

/// Path prefix of every Admin API endpoint.
pub const ADMIN_API_PREFIX: &str = "ghost/api/admin";

/// Default `Accept-Version` header sent to Ghost.
pub const DEFAULT_ACCEPT_VERSION: &str = "v5.0";

/// HTTP verbs supported by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GhostMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl GhostMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Whether requests with this verb send the payload as a JSON body.
    #[must_use]
    pub const fn carries_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for GhostMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<GhostMethod> for reqwest::Method {
    fn from(method: GhostMethod) -> Self {
        match method {
            GhostMethod::Get => Self::GET,
            GhostMethod::Post => Self::POST,
            GhostMethod::Put => Self::PUT,
            GhostMethod::Delete => Self::DELETE,
        }
    }
}

/// A single Admin API call.
#[derive(Debug, Clone, PartialEq)]
pub struct GhostRequest {
    /// Path relative to `/ghost/api/admin/`, e.g. `posts` or `posts/{id}`.
    pub endpoint: String,
    pub method: GhostMethod,
    /// JSON payload. Only sent for POST and PUT.
    pub data: Option<Value>,
}

impl GhostRequest {
    #[must_use]
    pub fn new(endpoint: impl Into<String>, method: GhostMethod, data: Option<Value>) -> Self {
        Self {
            endpoint: endpoint.into(),
            method,
            data,
        }
    }

    #[must_use]
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(endpoint, GhostMethod::Get, None)
    }

    #[must_use]
    pub fn post(endpoint: impl Into<String>, data: Value) -> Self {
        Self::new(endpoint, GhostMethod::Post, Some(data))
    }

    #[must_use]
    pub fn put(endpoint: impl Into<String>, data: Value) -> Self {
        Self::new(endpoint, GhostMethod::Put, Some(data))
    }

    #[must_use]
    pub fn delete(endpoint: impl Into<String>) -> Self {
        Self::new(endpoint, GhostMethod::Delete, None)
    }
}

/// Settings for a [`GhostClient`].
#[derive(Clone)]
pub struct GhostClientConfig {
    /// Site URL, e.g. `https://blog.example.com`.
    pub base_url: String,
    /// Admin API key in `{id}:{secret}` form.
    pub admin_api_key: String,
    /// Value of the `Accept-Version` header.
    pub accept_version: String,
    /// Request timeout. `None` leaves the transport default.
    pub timeout: Option<Duration>,
}

impl GhostClientConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>, admin_api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            admin_api_key: admin_api_key.into(),
            accept_version: DEFAULT_ACCEPT_VERSION.to_string(),
            timeout: None,
        }
    }

    #[must_use]
    pub fn with_accept_version(mut self, accept_version: impl Into<String>) -> Self {
        self.accept_version = accept_version.into();
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

// Custom Debug implementation to avoid exposing the admin key
impl fmt::Debug for GhostClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GhostClientConfig")
            .field("base_url", &self.base_url)
            .field("admin_api_key", &"[REDACTED]")
            .field("accept_version", &self.accept_version)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Client for the Ghost Admin API.
#[derive(Debug, Clone)]
pub struct GhostClient {
    http: reqwest::Client,
    signer: Arc<TokenSigner>,
    /// `{base}/ghost/api/admin/`, always ending in a slash.
    api_root: Arc<str>,
    accept_version: Arc<str>,
}

impl GhostClient {
    /// Creates a client from configuration.
    ///
    /// The admin key and base URL are validated here, once; requests never
    /// re-check them.
    ///
    /// # Errors
    ///
    /// Returns [`GhostError::Configuration`] if the base URL is not an
    /// absolute `http`/`https` URL, the admin key is malformed, or the HTTP
    /// client cannot be built.
    pub fn new(config: &GhostClientConfig) -> Result<Self, GhostError> {
        let api_root = admin_api_root(&config.base_url)?;
        let key = AdminApiKey::parse(&config.admin_api_key)?;
        let signer = TokenSigner::new(&key)?;

        if config.accept_version.trim().is_empty() {
            return Err(GhostError::Configuration(
                "Accept-Version must not be empty".to_string(),
            ));
        }

        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("ghost-client/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| {
            GhostError::Configuration(format!("failed to build HTTP client: {e}"))
        })?;

        debug!("Ghost client targeting {api_root} with key id {}", key.id());

        Ok(Self {
            http,
            signer: Arc::new(signer),
            api_root: api_root.into(),
            accept_version: config.accept_version.trim().into(),
        })
    }

    /// The Admin API root every endpoint is resolved against.
    #[must_use]
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// Resolves a relative endpoint to its full Admin API URL.
    ///
    /// `posts`, `/posts` and `posts/` all resolve to
    /// `{base}/ghost/api/admin/posts/`. A query string is kept after the
    /// trailing slash.
    ///
    /// # Errors
    ///
    /// Returns [`GhostError::InvalidEndpoint`] for empty endpoints and for
    /// endpoints that would leave the Admin API prefix.
    pub fn endpoint_url(&self, endpoint: &str) -> Result<Url, GhostError> {
        let relative = normalize_endpoint(endpoint)?;
        let full = format!("{}{relative}", self.api_root);
        let url = Url::parse(&full).map_err(|e| GhostError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })?;

        // The parser resolves dot segments; the result must stay under the root.
        if !url.as_str().starts_with(&*self.api_root) {
            return Err(GhostError::InvalidEndpoint {
                endpoint: endpoint.to_string(),
                reason: "endpoint leaves the Admin API prefix".to_string(),
            });
        }
        Ok(url)
    }

    /// Executes one authenticated request.
    ///
    /// # Errors
    ///
    /// See the module documentation for the error mapping.
    pub async fn make_request(&self, request: &GhostRequest) -> Result<Value, GhostError> {
        let url = self.endpoint_url(&request.endpoint)?;
        let token = self.signer.sign()?;

        debug!("{} {url}", request.method);

        let mut builder = self
            .http
            .request(request.method.into(), url)
            .header(AUTHORIZATION, token.authorization())
            .header(ACCEPT, "application/json")
            .header("Accept-Version", &*self.accept_version);

        if request.method.carries_body() {
            builder = builder.header(CONTENT_TYPE, "application/json");
            if let Some(data) = &request.data {
                let body = serde_json::to_vec(data).map_err(GhostError::Serialization)?;
                builder = builder.body(body);
            }
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let err = GhostError::upstream(status, &text);
            error!(
                "Ghost {} {} failed: {err}",
                request.method, request.endpoint
            );
            return Err(err);
        }

        if text.trim().is_empty() {
            debug!("Ghost returned {status} with an empty body");
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(|e| {
            error!("Failed to decode Ghost response for {}: {e}", request.endpoint);
            GhostError::Decode(e)
        })
    }

    /// `GET {endpoint}`.
    ///
    /// # Errors
    ///
    /// See [`GhostClient::make_request`].
    pub async fn get(&self, endpoint: &str) -> Result<Value, GhostError> {
        self.make_request(&GhostRequest::get(endpoint)).await
    }

    /// `POST {endpoint}` with `data` as the JSON body.
    ///
    /// # Errors
    ///
    /// See [`GhostClient::make_request`].
    pub async fn post(&self, endpoint: &str, data: Value) -> Result<Value, GhostError> {
        self.make_request(&GhostRequest::post(endpoint, data)).await
    }

    /// `PUT {endpoint}` with `data` as the JSON body.
    ///
    /// # Errors
    ///
    /// See [`GhostClient::make_request`].
    pub async fn put(&self, endpoint: &str, data: Value) -> Result<Value, GhostError> {
        self.make_request(&GhostRequest::put(endpoint, data)).await
    }

    /// `DELETE {endpoint}`.
    ///
    /// # Errors
    ///
    /// See [`GhostClient::make_request`].
    pub async fn delete(&self, endpoint: &str) -> Result<Value, GhostError> {
        self.make_request(&GhostRequest::delete(endpoint)).await
    }
}

fn admin_api_root(base_url: &str) -> Result<String, GhostError> {
    let trimmed = base_url.trim();
    if trimmed.is_empty() {
        return Err(GhostError::Configuration(
            "Ghost base URL is required".to_string(),
        ));
    }

    let parsed = Url::parse(trimmed).map_err(|e| {
        GhostError::Configuration(format!("invalid Ghost base URL '{trimmed}': {e}"))
    })?;

    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(GhostError::Configuration(format!(
            "Ghost base URL must be an http(s) URL with a host: {trimmed}"
        )));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(GhostError::Configuration(format!(
            "Ghost base URL must not carry a query or fragment: {trimmed}"
        )));
    }

    Ok(format!(
        "{}/{ADMIN_API_PREFIX}/",
        parsed.as_str().trim_end_matches('/')
    ))
}

/// Normalizes an endpoint to `{path}/` or `{path}/?{query}`.
fn normalize_endpoint(endpoint: &str) -> Result<String, GhostError> {
    let invalid = |reason: &str| GhostError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason: reason.to_string(),
    };

    let trimmed = endpoint.trim();
    if trimmed.chars().any(char::is_control) {
        return Err(invalid("endpoint must not contain control characters"));
    }

    let (path, query) = match trimmed.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (trimmed, None),
    };

    if path.contains('\\') || path.contains('#') {
        return Err(invalid("endpoint must be a plain relative path"));
    }

    let path = path.trim_matches('/');
    if path.is_empty() {
        return Err(invalid("endpoint is empty"));
    }
    if path.split('/').any(is_parent_segment) {
        return Err(invalid("endpoint must not contain '..' segments"));
    }

    let mut relative = format!("{path}/");
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        // A literal '#' would start a fragment and cut the query short.
        relative.push('?');
        relative.push_str(&query.replace('#', "%23"));
    }
    Ok(relative)
}

fn is_parent_segment(segment: &str) -> bool {
    let lowered = segment.to_ascii_lowercase();
    matches!(lowered.as_str(), ".." | ".%2e" | "%2e." | "%2e%2e")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::panic)]

    use super::*;
    use proptest::prelude::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, header_regex, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const ADMIN_KEY: &str =
        "6489fa7b2a4e3c0001d0e1a2:a1b2c3d4e5f60718293a4b5c6d7e8f90a1b2c3d4e5f60718293a4b5c6d7e8f90";
    const JWT_PATTERN: &str = r"^Ghost [A-Za-z0-9_-]+\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+$";

    fn create_test_client(base_url: &str) -> GhostClient {
        GhostClient::new(&GhostClientConfig::new(base_url, ADMIN_KEY)).unwrap()
    }

    // ==================== Construction ====================

    #[test]
    fn test_rejects_malformed_admin_key() {
        for key in ["", "missing-colon", ":secret", "id:", "id:zz"] {
            let result = GhostClient::new(&GhostClientConfig::new("https://blog.example.com", key));
            assert!(
                matches!(result, Err(GhostError::Configuration(_))),
                "expected configuration error for {key:?}"
            );
        }
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        for url in ["", "   ", "not a url", "ftp://blog.example.com", "https://blog.example.com?x=1"] {
            let result = GhostClient::new(&GhostClientConfig::new(url, ADMIN_KEY));
            assert!(
                matches!(result, Err(GhostError::Configuration(_))),
                "expected configuration error for {url:?}"
            );
        }
    }

    #[test]
    fn test_config_debug_redacts_key() {
        let config = GhostClientConfig::new("https://blog.example.com", ADMIN_KEY);
        assert!(!format!("{config:?}").contains("a1b2c3d4"));
    }

    // ==================== URL normalization ====================

    #[test]
    fn test_api_root_handles_trailing_slash_and_subpath() {
        assert_eq!(
            create_test_client("https://blog.example.com/").api_root(),
            "https://blog.example.com/ghost/api/admin/"
        );
        assert_eq!(
            create_test_client("https://example.com/blog").api_root(),
            "https://example.com/blog/ghost/api/admin/"
        );
    }

    #[test]
    fn test_leading_slash_targets_same_url() {
        let client = create_test_client("https://blog.example.com");
        let expected = "https://blog.example.com/ghost/api/admin/posts/123/";

        for endpoint in ["posts/123", "/posts/123", "posts/123/", "//posts/123//"] {
            assert_eq!(client.endpoint_url(endpoint).unwrap().as_str(), expected);
        }
    }

    #[test]
    fn test_query_string_kept_after_trailing_slash() {
        let client = create_test_client("https://blog.example.com");
        let url = client
            .endpoint_url("/posts?limit=5&filter=status:draft")
            .unwrap();

        assert_eq!(url.path(), "/ghost/api/admin/posts/");
        assert_eq!(url.query(), Some("limit=5&filter=status:draft"));
    }

    #[test]
    fn test_rejects_escaping_endpoints() {
        let client = create_test_client("https://blog.example.com");

        for endpoint in [
            "",
            "/",
            "../content/posts",
            "posts/../../x",
            "posts/%2E%2E/x",
            "posts\\..\\x",
            "posts/.\t./.\t./.\t./x",
            "posts/.\n./x",
            "po\rsts/x",
        ] {
            assert!(
                matches!(
                    client.endpoint_url(endpoint),
                    Err(GhostError::InvalidEndpoint { .. })
                ),
                "expected invalid endpoint for {endpoint:?}"
            );
        }
    }

    #[test]
    fn test_hash_in_query_is_encoded() {
        let client = create_test_client("https://blog.example.com");
        let url = client
            .endpoint_url("posts?filter=title:'C#'&limit=5")
            .unwrap();

        assert_eq!(url.path(), "/ghost/api/admin/posts/");
        assert_eq!(url.fragment(), None);
        let query = url.query().unwrap();
        assert!(query.contains("%23"));
        assert!(query.ends_with("&limit=5"));

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs[0], ("filter".to_string(), "title:'C#'".to_string()));
        assert_eq!(pairs[1], ("limit".to_string(), "5".to_string()));
    }

    proptest! {
        #[test]
        fn prop_slash_normalization_is_idempotent(
            endpoint in "[a-z0-9_-]{1,12}(/[a-z0-9_-]{1,12}){0,3}"
        ) {
            let client = create_test_client("https://blog.example.com");
            let plain = client.endpoint_url(&endpoint).unwrap();

            prop_assert_eq!(&plain, &client.endpoint_url(&format!("/{endpoint}")).unwrap());
            prop_assert_eq!(&plain, &client.endpoint_url(&format!("{endpoint}/")).unwrap());
            prop_assert!(plain.path().starts_with("/ghost/api/admin/"));
            prop_assert!(plain.path().ends_with('/'));
        }
    }

    // ==================== Requests ====================

    #[tokio::test]
    async fn test_get_returns_body_unchanged() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/ghost/api/admin/posts/"))
            .and(header_regex("Authorization", JWT_PATTERN))
            .and(header("Accept-Version", DEFAULT_ACCEPT_VERSION))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"posts": [], "meta": {}})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let result = client.get("posts").await.unwrap();

        assert_eq!(result, json!({"posts": [], "meta": {}}));
    }

    #[tokio::test]
    async fn test_query_parameters_reach_the_server() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/ghost/api/admin/tags/"))
            .and(query_param("limit", "all"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tags": []})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        assert_eq!(client.get("/tags?limit=all").await.unwrap(), json!({"tags": []}));
    }

    #[tokio::test]
    async fn test_post_sends_payload_as_is() {
        let mock_server = MockServer::start().await;
        let payload = json!({"posts": [{"title": "New Post", "status": "draft"}]});

        Mock::given(method("POST"))
            .and(path("/ghost/api/admin/posts/"))
            .and(header("Content-Type", "application/json"))
            .and(header_regex("Authorization", JWT_PATTERN))
            .and(body_json(payload.clone()))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(json!({"posts": [{"id": "abc", "title": "New Post"}]})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let result = client.post("posts", payload).await.unwrap();

        assert_eq!(result, json!({"posts": [{"id": "abc", "title": "New Post"}]}));
    }

    #[tokio::test]
    async fn test_put_forwards_unwrapped_resource() {
        let mock_server = MockServer::start().await;
        let payload = json!({"title": "Only a resource", "updated_at": "2024-01-01T00:00:00.000Z"});

        Mock::given(method("PUT"))
            .and(path("/ghost/api/admin/posts/abc/"))
            .and(body_json(payload.clone()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"posts": [{"id": "abc"}]})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let result = client.put("/posts/abc", payload).await.unwrap();

        assert_eq!(result["posts"][0]["id"], "abc");
    }

    #[tokio::test]
    async fn test_get_and_delete_ignore_data() {
        let mock_server = MockServer::start().await;

        Mock::given(path("/ghost/api/admin/posts/abc/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        for verb in [GhostMethod::Get, GhostMethod::Delete] {
            for data in [None, Some(json!({"posts": [{"title": "ignored"}]})), Some(json!(42))] {
                let request = GhostRequest::new("posts/abc", verb, data);
                client.make_request(&request).await.unwrap();
            }
        }

        let received = mock_server.received_requests().await.unwrap();
        assert_eq!(received.len(), 6);
        for request in &received {
            assert!(request.body.is_empty());
            assert!(request.headers.get("content-type").is_none());
            assert_eq!(request.url.path(), "/ghost/api/admin/posts/abc/");
        }
    }

    #[tokio::test]
    async fn test_each_request_signs_a_token() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(header_regex("Authorization", JWT_PATTERN))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(2)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        client.get("site").await.unwrap();
        client.get("site").await.unwrap();
    }

    #[tokio::test]
    async fn test_empty_success_body_is_null() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/ghost/api/admin/posts/abc/"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        assert_eq!(client.delete("posts/abc").await.unwrap(), Value::Null);
    }

    #[tokio::test]
    async fn test_not_found_is_upstream_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/ghost/api/admin/posts/unknown-id/"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "errors": [{"message": "Resource not found", "type": "NotFoundError"}]
            })))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let err = client.delete("posts/unknown-id").await.unwrap_err();

        assert!(err.is_not_found());
        assert!(err.to_string().contains("Resource not found"));
    }

    #[tokio::test]
    async fn test_status_classes_are_distinguishable() {
        let mock_server = MockServer::start().await;

        Mock::given(path("/ghost/api/admin/bad/"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "errors": [{"message": "Validation error"}]
            })))
            .mount(&mock_server)
            .await;
        Mock::given(path("/ghost/api/admin/broken/"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());

        let bad = client.get("bad").await.unwrap_err();
        assert_eq!(bad.status(), Some(reqwest::StatusCode::BAD_REQUEST));
        assert!(bad.is_client_error());

        let broken = client.get("broken").await.unwrap_err();
        assert!(broken.is_server_error());
        assert!(broken.to_string().contains("boom"));
    }

    #[tokio::test]
    async fn test_undecodable_success_body_is_decode_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let err = client.get("posts").await.unwrap_err();

        assert!(matches!(err, GhostError::Decode(_)));
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let client = create_test_client("http://127.0.0.1:1");
        let err = client.get("posts").await.unwrap_err();

        assert!(matches!(err, GhostError::Transport(_)));
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn test_invalid_endpoint_never_reaches_network() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let err = client.get("../../content/posts").await.unwrap_err();
        assert!(matches!(err, GhostError::InvalidEndpoint { .. }));
    }
}

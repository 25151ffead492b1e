//! HTTP client for the portal API. Every request goes through [`ApiClient`],
//! which plays the role of the request and response interceptors:
//!
//! - **Request:** the current bearer token is read from the [`TokenStore`] right
//!   before dispatch and attached as `Authorization: Bearer <token>`. No token
//!   means the request goes out unauthenticated.
//! - **Response:** a 401 is a global "credential invalid" signal. The store is
//!   cleared and the browser is sent to the login page unless it is already
//!   there. Callers that own their 401 handling (identity resolution, password
//!   login) opt out with [`Recovery::Local`].
//!
//! The actual network I/O sits behind [`Transport`] so the interceptor logic is
//! exercised natively in tests. Token values are never logged.

use super::{errors::AppError, navigation::Navigator, paths, storage::TokenStore};
use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use std::{cell::RefCell, rc::Rc};
use tracing::{debug, warn};

/// Default request timeout (milliseconds) applied by the browser transport.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        }
    }
}

/// Encoded request payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Body {
    Json(String),
    Form(String),
}

impl Body {
    pub fn json<B: Serialize>(value: &B) -> Result<Self, AppError> {
        serde_json::to_string(value)
            .map(Body::Json)
            .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))
    }

    /// Builds an `application/x-www-form-urlencoded` payload.
    pub fn form<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (name, value) in pairs {
            serializer.append_pair(name, value);
        }
        Body::Form(serializer.finish())
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Body::Json(_) => "application/json",
            Body::Form(_) => "application/x-www-form-urlencoded",
        }
    }

    pub fn payload(&self) -> &str {
        match self {
            Body::Json(payload) | Body::Form(payload) => payload,
        }
    }
}

/// A fully prepared request, as handed to the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Body>,
}

impl ApiRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        serde_json::from_str(&self.body)
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    }

    /// Converts non-2xx answers into [`AppError::Http`] with a sanitized message.
    fn into_result(self) -> Result<Self, AppError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(AppError::Http {
                status: self.status,
                message: error_message(&self.body),
            })
        }
    }
}

/// Network I/O. Implementations must not interpret status codes.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, AppError>;
}

/// How a 401 answer is handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Recovery {
    /// Clear the token and send the browser to the login page.
    #[default]
    Global,
    /// Hand the 401 back to the caller untouched.
    Local,
}

/// Shared API client. Cheap to clone; all clones share one token store,
/// navigator and set of rejection hooks.
#[derive(Clone)]
pub struct ApiClient {
    inner: Rc<ClientInner>,
}

struct ClientInner {
    base_url: String,
    transport: Rc<dyn Transport>,
    tokens: Rc<dyn TokenStore>,
    navigator: Rc<dyn Navigator>,
    rejection_hooks: RefCell<Vec<Rc<dyn Fn()>>>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        transport: Rc<dyn Transport>,
        tokens: Rc<dyn TokenStore>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self {
            inner: Rc::new(ClientInner {
                base_url: base_url.into(),
                transport,
                tokens,
                navigator,
                rejection_hooks: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn tokens(&self) -> Rc<dyn TokenStore> {
        Rc::clone(&self.inner.tokens)
    }

    pub fn navigator(&self) -> Rc<dyn Navigator> {
        Rc::clone(&self.inner.navigator)
    }

    /// Registers a callback fired after global recovery cleared a rejected token.
    pub fn on_credentials_rejected(&self, hook: impl Fn() + 'static) {
        self.inner.rejection_hooks.borrow_mut().push(Rc::new(hook));
    }

    /// Sends a request with global 401 recovery.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Body>,
    ) -> Result<ApiResponse, AppError> {
        self.request_with(method, path, body, Recovery::Global)
            .await
    }

    pub async fn request_with(
        &self,
        method: Method,
        path: &str,
        body: Option<Body>,
        recovery: Recovery,
    ) -> Result<ApiResponse, AppError> {
        let attached = self.inner.tokens.read();
        let request = self.prepare(method, path, body, attached.as_deref());
        debug!(
            method = method.as_str(),
            path,
            authenticated = attached.is_some(),
            "dispatching request"
        );

        let response = self.inner.transport.send(request).await?;
        if response.status == 401 && recovery == Recovery::Global {
            self.recover_from_rejection(attached.as_deref());
        }

        response.into_result()
    }

    /// Fetches and decodes JSON with global 401 recovery.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(Method::Get, path, None).await?.json()
    }

    /// Sends a JSON body and decodes a JSON answer.
    pub async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let body = Body::json(body)?;
        self.request(method, path, Some(body)).await?.json()
    }

    fn prepare(
        &self,
        method: Method,
        path: &str,
        body: Option<Body>,
        token: Option<&str>,
    ) -> ApiRequest {
        let mut headers = Vec::new();
        if let Some(token) = token {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }
        if let Some(body) = &body {
            headers.push(("Content-Type".to_string(), body.content_type().to_string()));
        }

        ApiRequest {
            method,
            url: build_url_with_base(&self.inner.base_url, path),
            headers,
            body,
        }
    }

    /// Global logout after a 401. Only the credential that was actually sent
    /// may be cleared: once the store holds something else (nothing, after an
    /// earlier 401, or a fresh login) this response is stale and ignored.
    fn recover_from_rejection(&self, attached: Option<&str>) {
        let current = self.inner.tokens.read();
        if current.as_deref() != attached {
            debug!("ignoring 401 for a credential that is no longer current");
            return;
        }

        if current.is_some() {
            warn!("credential rejected by the API; clearing session");
            self.inner.tokens.clear();
            let hooks = self.inner.rejection_hooks.borrow().clone();
            for hook in hooks {
                hook();
            }
        }

        if self.inner.navigator.current_path() != paths::LOGIN {
            self.inner.navigator.hard_navigate(paths::LOGIN);
        }
    }
}

/// Builds a URL from an explicit base URL and the provided path.
pub fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Extracts a user-facing message from an error body. The API answers with
/// `{"detail": "..."}`; anything else is trimmed and truncated.
fn error_message(body: &str) -> String {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("detail")?.as_str().map(str::to_string));

    sanitize_body(detail.as_deref().unwrap_or(body))
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::GlooTransport;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{ApiRequest, ApiResponse, Body, DEFAULT_TIMEOUT_MS, Method, Transport};
    use crate::app_lib::errors::AppError;
    use async_trait::async_trait;
    use gloo_net::http::{Request, RequestBuilder};
    use gloo_timers::callback::Timeout;
    use web_sys::{AbortController, AbortSignal};

    /// `fetch`-based transport with an abort timeout.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct GlooTransport;

    #[async_trait(?Send)]
    impl Transport for GlooTransport {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse, AppError> {
            let response = send_with_timeout(|signal| build_request(&request, signal)).await?;
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|err| AppError::Parse(format!("Failed to read response: {err}")))?;

            Ok(ApiResponse { status, body })
        }
    }

    fn build_request(request: &ApiRequest, signal: &AbortSignal) -> Result<Request, AppError> {
        let mut builder: RequestBuilder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
        };
        builder = builder.abort_signal(Some(signal));

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        match &request.body {
            Some(Body::Json(payload) | Body::Form(payload)) => builder.body(payload.clone()),
            None => builder.build(),
        }
        .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    }

    /// Maps network errors into user-facing `AppError` variants with timeout detection.
    fn map_request_error(err: gloo_net::Error) -> AppError {
        let message = err.to_string();
        let lowered = message.to_lowercase();

        if lowered.contains("timeout") || lowered.contains("abort") {
            AppError::Timeout("Request timed out. Please try again.".to_string())
        } else {
            AppError::Network(format!("Unable to reach the server: {message}"))
        }
    }

    /// Sends a request with an abort timeout to avoid hanging UI state.
    async fn send_with_timeout(
        build_request: impl FnOnce(&AbortSignal) -> Result<Request, AppError>,
    ) -> Result<gloo_net::http::Response, AppError> {
        let controller = AbortController::new()
            .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
        let signal = controller.signal();
        let timeout_controller = controller.clone();
        let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

        let request = build_request(&signal)?;
        request.send().await.map_err(map_request_error)
    }
}

#[cfg(test)]
mod tests {
    use super::{
        ApiClient, ApiResponse, Body, Method, Recovery, build_url_with_base, error_message,
        sanitize_body,
    };
    use crate::app_lib::{AppError, paths, storage::TokenStore};
    use crate::test_support::Fixture;
    use serde::Deserialize;
    use std::{cell::Cell, rc::Rc};

    fn harness(path: &str) -> Fixture {
        Fixture::at(path)
    }

    #[test]
    fn build_url_joins_with_a_single_slash() {
        assert_eq!(
            build_url_with_base("https://api.example.test/", "/users/me"),
            "https://api.example.test/users/me"
        );
        assert_eq!(
            build_url_with_base("https://api.example.test", "users/me"),
            "https://api.example.test/users/me"
        );
        assert_eq!(build_url_with_base("  ", "/users/me"), "/users/me");
    }

    #[test]
    fn sanitize_body_trims_truncates_and_defaults() {
        assert_eq!(sanitize_body("   "), "Request failed.");
        assert_eq!(sanitize_body("  boom \n"), "boom");
        assert_eq!(sanitize_body(&"x".repeat(500)).chars().count(), 200);
    }

    #[test]
    fn error_message_prefers_detail_field() {
        assert_eq!(
            error_message(r#"{"detail":"Incorrect password."}"#),
            "Incorrect password."
        );
        assert_eq!(error_message(r#"{"detail":[1,2]}"#), r#"{"detail":[1,2]}"#);
        assert_eq!(error_message("<html>bad gateway</html>"), "<html>bad gateway</html>");
    }

    #[test]
    fn form_body_is_url_encoded() {
        let body = Body::form([("username", "ada@example.test"), ("password", "p@ss word")]);
        assert_eq!(body.payload(), "username=ada%40example.test&password=p%40ss+word");
        assert_eq!(body.content_type(), "application/x-www-form-urlencoded");
    }

    #[tokio::test]
    async fn attaches_bearer_token_when_present() {
        let h = harness("/app/dashboard");
        h.tokens.write("tok-1");
        h.transport.push(Ok(ApiResponse::new(200, "{}")));

        h.client
            .request(Method::Get, "/events", None)
            .await
            .expect("request succeeds");

        let sent = h.transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].url, "https://api.example.test/events");
        assert_eq!(sent[0].header("authorization"), Some("Bearer tok-1"));
    }

    #[tokio::test]
    async fn proceeds_unauthenticated_without_token() {
        let h = harness("/");
        h.transport.push(Ok(ApiResponse::new(200, "[]")));

        h.client
            .request(Method::Get, "/events", None)
            .await
            .expect("request succeeds");

        assert_eq!(h.transport.requests()[0].header("Authorization"), None);
    }

    #[tokio::test]
    async fn json_body_sets_content_type() {
        #[derive(Deserialize)]
        struct Echo {
            ok: bool,
        }

        let h = harness("/");
        h.transport.push(Ok(ApiResponse::new(200, r#"{"ok":true}"#)));

        let echo: Echo = h
            .client
            .send_json(Method::Post, "/contact", &serde_json::json!({"name": "Ada"}))
            .await
            .expect("request succeeds");

        assert!(echo.ok);
        let sent = h.transport.requests();
        assert_eq!(sent[0].header("content-type"), Some("application/json"));
        assert_eq!(sent[0].body, Some(Body::Json(r#"{"name":"Ada"}"#.to_string())));
    }

    #[tokio::test]
    async fn unauthorized_clears_token_and_redirects_to_login() {
        let h = harness("/app/portfolio");
        h.tokens.write("expired");
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        h.client.on_credentials_rejected(move || counter.set(counter.get() + 1));
        h.transport
            .push(Ok(ApiResponse::new(401, r#"{"detail":"Could not validate credentials"}"#)));

        let err = h
            .client
            .request(Method::Get, "/portfolio", None)
            .await
            .expect_err("401 surfaces as an error");

        assert!(err.is_unauthorized());
        assert_eq!(h.tokens.read(), None);
        assert_eq!(h.navigator.hard_navigations(), vec![paths::LOGIN.to_string()]);
        assert_eq!(fired.get(), 1);
    }

    #[tokio::test]
    async fn unauthorized_on_login_page_does_not_redirect() {
        let h = harness(paths::LOGIN);
        h.tokens.write("expired");
        h.transport.push(Ok(ApiResponse::new(401, "")));

        let _ = h.client.request(Method::Get, "/events", None).await;

        assert_eq!(h.tokens.read(), None);
        assert!(h.navigator.hard_navigations().is_empty());
    }

    #[tokio::test]
    async fn concurrent_unauthorized_responses_recover_once() {
        let h = harness("/app/dashboard");
        h.tokens.write("expired");
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        h.client.on_credentials_rejected(move || counter.set(counter.get() + 1));
        let first = h.transport.push_pending();
        let second = h.transport.push_pending();
        let third = h.transport.push_pending();

        let (a, b, c, ()) = tokio::join!(
            h.client.request(Method::Get, "/events", None),
            h.client.request(Method::Get, "/blogs", None),
            h.client.request(Method::Get, "/alumni", None),
            async move {
                for sender in [first, second, third] {
                    let _ = sender.send(Ok(ApiResponse::new(401, "")));
                }
            },
        );

        assert!(a.is_err() && b.is_err() && c.is_err());
        assert_eq!(h.tokens.read(), None);
        assert_eq!(h.navigator.hard_navigations().len(), 1);
        assert_eq!(fired.get(), 1);
    }

    #[tokio::test]
    async fn late_unauthorized_for_old_token_keeps_new_token() {
        let h = harness("/app/dashboard");
        h.tokens.write("old");
        let pending = h.transport.push_pending();

        let (result, ()) = tokio::join!(
            h.client.request(Method::Get, "/events", None),
            async {
                // A fresh login lands while the old request is still in flight.
                h.tokens.write("new");
                let _ = pending.send(Ok(ApiResponse::new(401, "")));
            },
        );

        assert!(result.is_err());
        assert_eq!(h.tokens.read(), Some("new".to_string()));
        assert!(h.navigator.hard_navigations().is_empty());
    }

    #[tokio::test]
    async fn local_recovery_leaves_state_alone() {
        let h = harness("/auth/login");
        h.tokens.write("still-good");
        h.transport.push(Ok(ApiResponse::new(401, r#"{"detail":"Incorrect password."}"#)));

        let err = h
            .client
            .request_with(Method::Post, "/auth/token", None, Recovery::Local)
            .await
            .expect_err("401 surfaces");

        assert_eq!(
            err,
            AppError::Http {
                status: 401,
                message: "Incorrect password.".to_string()
            }
        );
        assert_eq!(h.tokens.read(), Some("still-good".to_string()));
    }

    #[tokio::test]
    async fn other_failures_propagate_without_side_effects() {
        let h = harness("/app/dashboard");
        h.tokens.write("tok");
        h.transport.push(Ok(ApiResponse::new(500, "  internal error ")));
        h.transport
            .push(Err(AppError::Network("Unable to reach the server".to_string())));

        let server = h.client.request(Method::Get, "/events", None).await;
        let network = h.client.request(Method::Get, "/events", None).await;

        assert_eq!(
            server,
            Err(AppError::Http {
                status: 500,
                message: "internal error".to_string()
            })
        );
        assert!(matches!(network, Err(AppError::Network(_))));
        assert_eq!(h.tokens.read(), Some("tok".to_string()));
        assert!(h.navigator.hard_navigations().is_empty());
    }

    #[tokio::test]
    async fn malformed_json_is_a_parse_error() {
        let h = harness("/");
        h.transport.push(Ok(ApiResponse::new(200, "not json")));

        let result: Result<serde_json::Value, AppError> = h.client.get_json("/events").await;

        assert!(matches!(result, Err(AppError::Parse(_))));
    }
}

//! Authenticated request gateway.
//!
//! The sole component issuing HTTP calls to the backend. It attaches the
//! bearer token, fails fast when a protected call has no session, and
//! normalizes every outcome into `Result<Value, ApiError>`. Calls are
//! single-shot; callers decide whether to re-issue.

pub use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiErrorKind};
use crate::session::SessionStore;

/// Endpoints reachable without a session.
const PUBLIC_PATHS: [&str; 3] = [
    "/api/auth/login",
    "/api/auth/register",
    "/api/auth/register-merchant",
];

/// HTTP gateway bound to a session store.
#[derive(Debug, Clone)]
pub struct Gateway {
    http: reqwest::Client,
    config: ClientConfig,
    session: SessionStore,
}

impl Gateway {
    pub fn new(config: ClientConfig, session: SessionStore) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            http,
            config,
            session,
        })
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issue one request against the backend.
    ///
    /// Public endpoints proceed without a token; everything else fails
    /// fast with `Unauthenticated` before any network IO when the session
    /// is empty. Non-success statuses surface the body's `message` field
    /// when the backend sent one.
    pub async fn call(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let token = self.session.get().token;
        if token.is_none() && !is_public(path) {
            tracing::debug!(%method, path, "refusing protected call without a session token");
            return Err(ApiError::unauthenticated("no session token"));
        }

        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);
        let mut request = self.http.request(method.clone(), &url);
        if let Some(token) = &token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|err| {
            tracing::warn!(%method, path, error = %err, "transport failure");
            ApiError::from(err)
        })?;

        let status = response.status();
        // Bodies may legitimately be empty (e.g. DELETE); treat anything
        // unparseable as null rather than failing the call shape-first.
        let text = response.text().await.map_err(ApiError::from)?;
        let value: Value = serde_json::from_str(&text).unwrap_or(Value::Null);

        if status.is_success() {
            tracing::debug!(%method, path, status = status.as_u16(), "request ok");
            Ok(value)
        } else {
            let message = value
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_owned);
            let err = ApiError::from_status(status, message);
            tracing::warn!(%method, path, status = status.as_u16(), kind = %err.kind, "request failed");
            Err(err)
        }
    }

    /// `call` + decode into a typed response.
    pub(crate) async fn call_decoded<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<T, ApiError> {
        let value = self.call(method, path, body).await?;
        decode(value)
    }

    /// Serialize a request body; the caller-provided type controls the
    /// wire shape exactly.
    pub(crate) fn encode<B: Serialize>(body: &B) -> Result<Value, ApiError> {
        serde_json::to_value(body).map_err(|err| {
            ApiError::new(ApiErrorKind::Validation, format!("unencodable request body: {err}"))
        })
    }
}

pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|err| {
        ApiError::new(
            ApiErrorKind::ServerError,
            format!("unexpected response shape: {err}"),
        )
    })
}

fn is_public(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path)
}

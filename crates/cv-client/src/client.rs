//! Verification client trait and HTTP implementation.
//!
//! The decision engine depends only on [`VerifyClient`]; the
//! orchestrator wires in [`HttpVerifyClient`] at node construction.
//!
//! ## Security
//!
//! - The password is NEVER logged.
//! - The app secret is sent in the request body only, never logged.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{VerifyError, VerifyResult};
use crate::types::UserIdType;

/// Remote credential-reputation lookup.
///
/// Both operations answer the single question "is this known-leaked?".
/// The password-only shape ignores the identifier entirely; the
/// credential-pair shape also considers how the username should be
/// interpreted.
#[async_trait]
pub trait VerifyClient: Send + Sync {
    /// Checks whether the password value alone is known-leaked.
    async fn verify_password(&self, password: &str) -> VerifyResult<bool>;

    /// Checks whether the username/password pair is known-leaked,
    /// interpreting the username according to `user_id_type`.
    async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
        user_id_type: UserIdType,
    ) -> VerifyResult<bool>;
}

// ============================================================================
// Wire types
// ============================================================================

/// Request body for a verification call.
#[derive(Debug, Serialize)]
struct VerifyRequest<'a> {
    api_key: &'a str,
    api_secret: &'a str,
    action: &'a str,
    password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id_type: Option<&'a str>,
}

/// Response body from the reputation service.
#[derive(Debug, Deserialize)]
struct VerifyResponse {
    #[serde(default)]
    leaked: bool,
    #[serde(default)]
    error: Option<String>,
}

// ============================================================================
// HTTP client
// ============================================================================

/// Reqwest-backed verification client.
///
/// Holds only immutable configuration after construction and performs
/// no I/O until invoked, so a single instance can serve concurrent
/// login attempts.
pub struct HttpVerifyClient {
    api_url: Url,
    app_key: String,
    app_secret: String,
    http: Client,
}

impl HttpVerifyClient {
    /// Creates a new client bound to the given endpoint and key pair.
    ///
    /// ## Errors
    ///
    /// Returns [`VerifyError::InvalidUrl`] if `api_url` is not a valid
    /// absolute URL, [`VerifyError::Configuration`] if it is not an
    /// http(s) URL, or a transport error if the underlying HTTP client
    /// cannot be built.
    pub fn new(
        api_url: &str,
        app_key: impl Into<String>,
        app_secret: impl Into<String>,
    ) -> VerifyResult<Self> {
        let api_url = Url::parse(api_url)?;
        if !matches!(api_url.scheme(), "http" | "https") {
            return Err(VerifyError::config(format!(
                "unsupported API URL scheme '{}', expected http or https",
                api_url.scheme()
            )));
        }

        let http = Client::builder().build()?;

        Ok(Self {
            api_url,
            app_key: app_key.into(),
            app_secret: app_secret.into(),
            http,
        })
    }

    /// Returns the resolved API endpoint.
    #[must_use]
    pub const fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Returns the configured app key.
    #[must_use]
    pub fn app_key(&self) -> &str {
        &self.app_key
    }

    /// Performs one verification call and decodes the boolean answer.
    async fn call(&self, request: &VerifyRequest<'_>) -> VerifyResult<bool> {
        tracing::debug!(action = request.action, "calling reputation service");

        let response = self
            .http
            .post(self.api_url.clone())
            .json(request)
            .send()
            .await?
            .error_for_status()?;

        let body: VerifyResponse = response
            .json()
            .await
            .map_err(|e| VerifyError::protocol(e.to_string()))?;

        if let Some(error) = body.error {
            return Err(VerifyError::Service(error));
        }

        Ok(body.leaked)
    }
}

#[async_trait]
impl VerifyClient for HttpVerifyClient {
    async fn verify_password(&self, password: &str) -> VerifyResult<bool> {
        let request = VerifyRequest {
            api_key: &self.app_key,
            api_secret: &self.app_secret,
            action: "verify-password",
            password,
            username: None,
            user_id_type: None,
        };
        self.call(&request).await
    }

    async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
        user_id_type: UserIdType,
    ) -> VerifyResult<bool> {
        let request = VerifyRequest {
            api_key: &self.app_key,
            api_secret: &self.app_secret,
            action: "verify-credential",
            password,
            username: Some(username),
            user_id_type: Some(user_id_type.as_str()),
        };
        self.call(&request).await
    }
}

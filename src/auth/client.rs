//! Client for the authentication endpoints of the API.
//!
//! `AuthClient` exchanges credentials for a bearer token, persists the
//! token through the injected `TokenStore`, and fetches the current user.
//! Every request it sends passes through the `RequestInterceptor`, which
//! attaches the stored token and forces a logout when the server answers
//! with a 403.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::debug;

use crate::intercept::{Navigator, NoopNavigator, RequestInterceptor};
use crate::models::{Credentials, UserPayload};
use crate::store::TokenStore;

use super::AuthError;

// ============================================================================
// Constants
// ============================================================================

/// Credential-exchange endpoint
const AUTHENTICATE_PATH: &str = "/api/authenticate";

/// Current-user endpoint
const ME_PATH: &str = "/api/me";

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Authentication client.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct AuthClient {
    client: Client,
    base_url: String,
    store: Arc<dyn TokenStore>,
    interceptor: RequestInterceptor,
}

impl AuthClient {
    /// Create a client against the given API host.
    ///
    /// 403 responses clear the stored token but navigation is a no-op;
    /// use `with_navigator` to wire in the host's router.
    pub fn new(base_url: impl Into<String>, store: Arc<dyn TokenStore>) -> Result<Self> {
        Self::with_navigator(base_url, store, Arc::new(NoopNavigator))
    }

    /// Create a client whose forced-logout path navigates via the given
    /// navigator
    pub fn with_navigator(
        base_url: impl Into<String>,
        store: Arc<dyn TokenStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to build HTTP client")?;

        let base_url: String = base_url.into();
        let interceptor = RequestInterceptor::new(Arc::clone(&store), navigator);

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            store,
            interceptor,
        })
    }

    /// Exchange credentials for a token.
    ///
    /// On success the token from the response is persisted before the full
    /// payload is returned, so a subsequent `is_logged_in` already sees the
    /// new session. No retry, no local validation of inputs.
    pub async fn login(&self, username: &str, password: &str) -> Result<UserPayload> {
        let url = format!("{}{}", self.base_url, AUTHENTICATE_PATH);
        let body = Credentials {
            username: username.to_string(),
            password: password.to_string(),
        };

        let request = self
            .client
            .post(&url)
            .json(&body)
            .build()
            .context("Failed to build authentication request")?;
        let request = self.interceptor.on_request(request);

        let response = self
            .client
            .execute(request)
            .await
            .context("Failed to send authentication request")?;
        let response = self.check_response(response).await?;

        let payload: UserPayload = response
            .json()
            .await
            .context("Failed to parse auth response")?;

        // A success response without a token clears the slot rather than
        // leaving a stale token behind
        self.store.set(payload.token.as_deref())?;
        debug!("Login succeeded, token stored");

        Ok(payload)
    }

    /// Log out by clearing the stored token. No network call is made.
    pub fn logout(&self) -> Result<()> {
        self.store.set(None)
    }

    /// Whether a session is currently present.
    ///
    /// Logged-in is derived, never cached: true iff a non-empty token is
    /// stored right now.
    pub fn is_logged_in(&self) -> bool {
        self.store
            .get()
            .map(|token| !token.is_empty())
            .unwrap_or(false)
    }

    /// Fetch the currently logged-in user.
    ///
    /// Fails immediately, without touching the network, when no token is
    /// stored. Otherwise the server authorizes the call via the header the
    /// interceptor attaches.
    pub async fn get_user(&self) -> Result<UserPayload> {
        if !self.is_logged_in() {
            return Err(AuthError::NoToken.into());
        }

        let url = format!("{}{}", self.base_url, ME_PATH);
        let request = self
            .client
            .get(&url)
            .build()
            .context("Failed to build current-user request")?;
        let request = self.interceptor.on_request(request);

        let response = self
            .client
            .execute(request)
            .await
            .context("Failed to send current-user request")?;
        let response = self.check_response(response).await?;

        response
            .json()
            .await
            .context("Failed to parse user response")
    }

    /// Check if a response is successful, routing error responses through
    /// the interceptor so a 403 forces a logout before the error surfaces.
    async fn check_response(&self, response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(self.interceptor.on_response_error(status, &body).into())
        }
    }
}

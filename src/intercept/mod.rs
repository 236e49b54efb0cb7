//! Request/response interception: token injection and forced logout.
//!
//! The interceptor is an explicit pipeline stage the client runs every
//! outgoing request and every error response through. `on_request` is a
//! pure transform over the request; `on_response_error` maps the failure
//! to an `AuthError` and, on a 403, clears the token slot and asks the
//! host to navigate to the login view.

pub mod navigator;

pub use navigator::{Navigator, NoopNavigator};

use std::sync::Arc;

use reqwest::header::{HeaderName, HeaderValue};
use reqwest::{Request, StatusCode};
use tracing::{debug, warn};

use crate::auth::AuthError;
use crate::store::TokenStore;

/// Header carrying the token on outgoing requests
pub const TOKEN_HEADER: &str = "x-access-token";

/// Path navigated to when the server forces a logout
const LOGIN_PATH: &str = "/login";

/// Hook pair applied around every request the client sends.
#[derive(Clone)]
pub struct RequestInterceptor {
    store: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
}

impl RequestInterceptor {
    pub fn new(store: Arc<dyn TokenStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self { store, navigator }
    }

    /// Stamp the stored token onto an outgoing request.
    ///
    /// Requests pass through unchanged when no token is stored. Never
    /// fails: a token that cannot be encoded as a header value is skipped.
    pub fn on_request(&self, mut request: Request) -> Request {
        let token = match self.store.get() {
            Some(token) if !token.is_empty() => token,
            _ => return request,
        };

        match HeaderValue::from_str(&token) {
            Ok(value) => {
                request
                    .headers_mut()
                    .insert(HeaderName::from_static(TOKEN_HEADER), value);
            }
            Err(e) => {
                warn!(error = %e, "Stored token is not a valid header value, skipping");
            }
        }
        request
    }

    /// Map an error response to an `AuthError`.
    ///
    /// A 403 means the server no longer accepts the token: the slot is
    /// cleared and the navigator is pointed at the login view. Every
    /// status, 403 or not, still produces the mapped error so per-call
    /// handlers observe the failure. All other statuses pass through
    /// without side effects.
    pub fn on_response_error(&self, status: StatusCode, body: &str) -> AuthError {
        if status == StatusCode::FORBIDDEN {
            debug!("Server returned 403, clearing token");
            if let Err(e) = self.store.set(None) {
                warn!(error = %e, "Failed to clear token after 403");
            }
            self.navigator.navigate(LOGIN_PATH);
        }
        AuthError::from_status(status, body)
    }
}

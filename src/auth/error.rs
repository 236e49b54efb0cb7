use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Local precondition failure - never sent over the network.
    /// The message text is part of the contract with callers.
    #[error("User has no token.")]
    NoToken,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Access denied: {0}")]
    Forbidden(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl AuthError {
    /// Truncate a response body to avoid carrying excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            let mut end = MAX_ERROR_BODY_LENGTH;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            format!(
                "{}... (truncated, {} total bytes)",
                &body[..end],
                body.len()
            )
        }
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let truncated = Self::truncate_body(body);
        match status.as_u16() {
            401 => AuthError::Unauthorized(truncated),
            403 => AuthError::Forbidden(truncated),
            404 => AuthError::NotFound(truncated),
            500..=599 => AuthError::ServerError(truncated),
            _ => AuthError::InvalidResponse(format!("Status {}: {}", status, truncated)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn no_token_message_is_fixed() {
        assert_eq!(AuthError::NoToken.to_string(), "User has no token.");
    }

    #[test]
    fn from_status_maps_auth_statuses() {
        assert!(matches!(
            AuthError::from_status(StatusCode::UNAUTHORIZED, "nope"),
            AuthError::Unauthorized(_)
        ));
        assert!(matches!(
            AuthError::from_status(StatusCode::FORBIDDEN, "denied"),
            AuthError::Forbidden(_)
        ));
        assert!(matches!(
            AuthError::from_status(StatusCode::NOT_FOUND, ""),
            AuthError::NotFound(_)
        ));
        assert!(matches!(
            AuthError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "boom"),
            AuthError::ServerError(_)
        ));
        assert!(matches!(
            AuthError::from_status(StatusCode::IM_A_TEAPOT, ""),
            AuthError::InvalidResponse(_)
        ));
    }

    #[test]
    fn long_bodies_are_truncated() {
        let body = "x".repeat(2000);
        let err = AuthError::from_status(StatusCode::INTERNAL_SERVER_ERROR, &body);
        let message = err.to_string();
        assert!(message.contains("truncated, 2000 total bytes"));
        assert!(message.len() < body.len());
    }
}

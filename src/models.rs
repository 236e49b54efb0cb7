//! Wire types for the authentication endpoints.

use serde::{Deserialize, Serialize};

/// Login request body.
///
/// Credentials are transient - they exist only to be serialized onto the
/// wire and are never persisted anywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// User payload returned by the login and current-user endpoints.
///
/// Only `token` is interpreted by this crate; every other field the server
/// sends rides along in `extra` untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct UserPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(flatten)]
    #[cfg_attr(feature = "ts", ts(type = "Record<string, unknown>"))]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

//! Bearer token acquisition from the backend login endpoint

use serde::Deserialize;
use serde_json::{json, Value};
use std::fmt;
use thiserror::Error;
use tracing::{debug, info};

use crate::probe::{join_url, HttpTransport, ProbeError, ProbeRequest, SuccessPolicy};

/// Login endpoint, relative to the backend base URL
pub const LOGIN_PATH: &str = "/api/v1/auth/login";

/// Fixed test identity used to log in
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new("user@example.com", "password123")
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Opaque bearer token, held for one run and never persisted
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn token(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("login request failed: {0}")]
    Transport(#[from] ProbeError),
    #[error("login returned HTTP {0}")]
    Status(u16),
    #[error("login response is not valid JSON: {0}")]
    MalformedBody(String),
    #[error("login response has no access_token")]
    MissingToken,
}

/// Log in once and return the bearer credential.
///
/// Anything other than a 200 carrying a non-empty `access_token` string is
/// an error. There is no retry.
pub fn authenticate<T: HttpTransport + ?Sized>(
    transport: &T,
    backend_url: &str,
    credentials: &Credentials,
) -> Result<Credential, AuthError> {
    let url = join_url(backend_url, LOGIN_PATH);
    let body = json!({
        "email": credentials.email,
        "password": credentials.password,
    });
    let request = ProbeRequest::post(&url, body, SuccessPolicy::Exact(200));

    debug!(url = %url, email = %credentials.email, "authenticating");
    let response = transport.send(&request)?;
    if response.status != 200 {
        return Err(AuthError::Status(response.status));
    }

    let payload: Value = serde_json::from_str(&response.body)
        .map_err(|e| AuthError::MalformedBody(e.to_string()))?;
    let token = payload
        .get("access_token")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .ok_or(AuthError::MissingToken)?;

    info!(email = %credentials.email, "authenticated");
    Ok(Credential::new(token))
}

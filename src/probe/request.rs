//! Request description handed to a transport

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// HTTP method used by a probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

/// Decides whether a received status code counts as a successful probe.
///
/// Pages must answer exactly 200, API calls anything below 300.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessPolicy {
    Page,
    Api,
    Exact(u16),
}

impl SuccessPolicy {
    pub fn is_success(self, status: u16) -> bool {
        match self {
            SuccessPolicy::Page => status == 200,
            SuccessPolicy::Api => status < 300,
            SuccessPolicy::Exact(expected) => status == expected,
        }
    }
}

/// A single request to perform against the target application
#[derive(Clone)]
pub struct ProbeRequest {
    pub url: String,
    pub method: Method,
    pub bearer: Option<String>,
    pub json_body: Option<Value>,
    pub policy: SuccessPolicy,
}

impl ProbeRequest {
    pub fn new(method: Method, url: impl Into<String>, policy: SuccessPolicy) -> Self {
        Self {
            url: url.into(),
            method,
            bearer: None,
            json_body: None,
            policy,
        }
    }

    pub fn get(url: impl Into<String>, policy: SuccessPolicy) -> Self {
        Self::new(Method::Get, url, policy)
    }

    pub fn post(url: impl Into<String>, body: Value, policy: SuccessPolicy) -> Self {
        Self::new(Method::Post, url, policy).with_json(body)
    }

    /// Attach an `Authorization: Bearer` header
    pub fn with_bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    pub fn with_json(mut self, body: Value) -> Self {
        self.json_body = Some(body);
        self
    }
}

// Hand-written so tokens and login bodies never end up in logs.
impl fmt::Debug for ProbeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProbeRequest")
            .field("url", &self.url)
            .field("method", &self.method)
            .field("bearer", &self.bearer.as_ref().map(|_| "<redacted>"))
            .field("json_body", &self.json_body.as_ref().map(|_| "<redacted>"))
            .field("policy", &self.policy)
            .finish()
    }
}

/// Join a base URL and an absolute path without doubling the slash
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

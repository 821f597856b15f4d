//! Outcome types for a single probe

use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

use super::request::SuccessPolicy;

/// Transport-level failure of a probe.
///
/// These never escape [`super::probe`]; they are folded into a failed
/// [`ProbeResult`] instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProbeError {
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("request failed: {0}")]
    Request(String),
    #[error("failed to read response body: {0}")]
    Body(String),
}

impl From<reqwest::Error> for ProbeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProbeError::Timeout(err.to_string())
        } else if err.is_connect() {
            ProbeError::Connect(err.to_string())
        } else if err.is_body() || err.is_decode() {
            ProbeError::Body(err.to_string())
        } else {
            ProbeError::Request(err.to_string())
        }
    }
}

/// Raw response as seen by a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
    pub elapsed: Duration,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            elapsed: Duration::ZERO,
        }
    }
}

/// Result of a single probe. Created once, never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeResult {
    pub success: bool,
    pub status_code: Option<u16>,
    pub elapsed_seconds: f64,
    pub size_bytes: usize,
    pub error_message: Option<String>,
    /// Response body, kept for content scanning only
    #[serde(skip)]
    pub body: String,
}

impl ProbeResult {
    pub fn from_response(response: HttpResponse, policy: SuccessPolicy) -> Self {
        Self {
            success: policy.is_success(response.status),
            status_code: Some(response.status),
            elapsed_seconds: response.elapsed.as_secs_f64(),
            size_bytes: response.body.len(),
            error_message: None,
            body: response.body,
        }
    }

    pub fn from_error(err: &ProbeError, elapsed: Duration) -> Self {
        Self {
            success: false,
            status_code: None,
            elapsed_seconds: elapsed.as_secs_f64(),
            size_bytes: 0,
            error_message: Some(err.to_string()),
            body: String::new(),
        }
    }

    /// Status code for display, `ERROR` when the transport failed
    pub fn status_label(&self) -> String {
        match self.status_code {
            Some(code) => code.to_string(),
            None => "ERROR".to_string(),
        }
    }
}

//! Blocking reqwest transport used by every probe.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use std::time::{Duration, Instant};
use tracing::debug;

use super::request::{Method, ProbeRequest};
use super::result::{HttpResponse, ProbeError};
use super::HttpTransport;

const USER_AGENT: &str = concat!("shuttle/", env!("CARGO_PKG_VERSION"));

/// HTTP transport over `reqwest::blocking`.
///
/// One request per call with no retry. Without an explicit timeout the
/// client's own default applies.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;
        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn send(&self, request: &ProbeRequest) -> Result<HttpResponse, ProbeError> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.json_body {
            builder = builder.json(body);
        }

        let start = Instant::now();
        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        let elapsed = start.elapsed();

        debug!(
            method = %request.method,
            url = %request.url,
            status,
            bytes = body.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "probe completed"
        );

        Ok(HttpResponse {
            status,
            body,
            elapsed,
        })
    }
}

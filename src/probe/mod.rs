//! HTTP probing of frontend pages and backend endpoints
//!
//! A probe performs exactly one request and never fails: transport errors
//! (DNS, refused connections, timeouts) come back as a [`ProbeResult`] with
//! `success == false` and an error message.

mod client;
mod request;
mod result;

use std::time::Instant;
use tracing::debug;

pub use client::ReqwestTransport;
pub use request::{join_url, Method, ProbeRequest, SuccessPolicy};
pub use result::{HttpResponse, ProbeError, ProbeResult};

/// Something that can carry a [`ProbeRequest`] to a server
pub trait HttpTransport {
    fn send(&self, request: &ProbeRequest) -> Result<HttpResponse, ProbeError>;
}

impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    fn send(&self, request: &ProbeRequest) -> Result<HttpResponse, ProbeError> {
        (**self).send(request)
    }
}

/// Perform a request and fold the outcome into a [`ProbeResult`]
pub fn probe<T: HttpTransport + ?Sized>(transport: &T, request: &ProbeRequest) -> ProbeResult {
    let start = Instant::now();
    match transport.send(request) {
        Ok(response) => ProbeResult::from_response(response, request.policy),
        Err(err) => {
            debug!(method = %request.method, url = %request.url, error = %err, "probe failed");
            ProbeResult::from_error(&err, start.elapsed())
        }
    }
}

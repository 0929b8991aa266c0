//! Pluggable executor for `HttpRequest` values.
//!
//! # Design
//! The controller never talks to the network directly; it hands built
//! requests to a [`Transport`] and interprets the responses it gets back.
//! Production code uses [`UreqTransport`]; tests inject scripted
//! transports that replay canned responses.

use tracing::debug;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes an HTTP round-trip for a request described as plain data.
///
/// Implementations must return non-2xx responses as `Ok(HttpResponse)` —
/// status interpretation belongs to the client layer. Only failures that
/// prevented a response from being obtained at all (connect, DNS, I/O) are
/// `Err`.
pub trait Transport {
    fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(req)
    }
}

/// Blocking transport backed by [`ureq`].
///
/// Configured with status-as-error disabled so 4xx/5xx responses come back
/// as data rather than `Err`. Timeouts are whatever ureq defaults to.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = ?req.method, path = %req.path, "executing request");
        let result = match (req.method, req.body) {
            (HttpMethod::Get, _) => self.agent.get(&req.path).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&req.path).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&req.path).send_empty(),
            (HttpMethod::Put, Some(body)) => self
                .agent
                .put(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Put, None) => self.agent.put(&req.path).send_empty(),
        };

        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}

//! HTTP request and response values exchanged with a transport.
//!
//! # Design
//! These types describe HTTP traffic as plain data. The client builds
//! `HttpRequest` values and parses `HttpResponse` values without ever
//! touching the network — a [`Transport`](crate::transport::Transport)
//! implementation is responsible for the actual round-trip. This separation
//! keeps request building and response interpretation deterministic and
//! testable without a server.
//!
//! All fields use owned types (`String`, `Vec`) so values can move freely
//! across the transport boundary.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `TodoClient::build_*` methods and handed to a transport for
/// execution.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by a transport after executing an `HttpRequest`, then passed to
/// `TodoClient::parse_*` methods for status interpretation and
/// deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Whether the status code is in the 2xx range. Every non-2xx status is
    /// failure; the client makes no finer distinction.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

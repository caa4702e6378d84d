//! Raw response wrapper returned by the transport.
//!
//! [`RawResponse`] captures everything the server sent back — status code,
//! headers, and the raw body text — regardless of whether the status was a
//! success. The casting functions in [`cast`](crate::cast) decide what the
//! body means; the transport never interprets it.

use http::{HeaderMap, StatusCode};

/// A raw HTTP response from the provider.
///
/// The transport returns one of these for *every* response the server
/// produced, including 4xx/5xx — a provider error body is data, not an
/// exception. Only connection-level failures (no response at all) surface as
/// [`Error::Network`](crate::Error::Network).
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// The HTTP status code of the response.
    pub status: StatusCode,

    /// The response headers.
    pub headers: HeaderMap,

    /// The raw response body as a string.
    pub body: String,
}

impl RawResponse {
    /// Creates a new `RawResponse`.
    ///
    /// Typically called internally by the transport; public so tests can
    /// exercise the casting functions without a live server.
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<String>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns a reference to a header value by name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }
}

//! Error types for API calls.
//!
//! Only failures of the machinery itself surface as [`Error`]: connection
//! failures, bodies that cannot be decoded, bad configuration, and local
//! precondition violations. Errors *reported by the provider* (a response
//! body carrying an `errors` array) are not errors in this sense — they are
//! returned as [`Outcome::Errors`](crate::Outcome::Errors) so callers can
//! branch on the value rather than catch.

use http::StatusCode;

/// The main error type for API calls.
///
/// # Examples
///
/// ```no_run
/// use sendgrid_marketing::{Client, Error};
///
/// # async fn example() -> Result<(), Error> {
/// let client = Client::builder().api_key("SG.key").build()?;
///
/// match client.contacts().list().await {
///     Ok(outcome) => println!("{:?}", outcome),
///     Err(Error::Network(e)) => eprintln!("could not reach the API: {}", e),
///     Err(e) => eprintln!("other error: {}", e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A network-level error occurred (connection failed, DNS lookup failed,
    /// TLS handshake failed, etc.).
    ///
    /// This is the one case where no response body exists to inspect, so it
    /// propagates as an error rather than an [`Outcome`](crate::Outcome).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body could not be decoded into the expected record type.
    ///
    /// Preserves the raw response text alongside the serde error message,
    /// making it easy to debug shape mismatches in production.
    #[error("Failed to deserialize response (status {status}): {serde_error}")]
    DeserializationFailed {
        /// The raw response body that failed to deserialize
        raw_response: String,
        /// The serde error message
        serde_error: String,
        /// The HTTP status code
        status: StatusCode,
    },

    /// The request body could not be serialized to JSON.
    #[error("Failed to serialize request: {0}")]
    SerializationFailed(String),

    /// Invalid configuration was provided, such as a missing API key or an
    /// invalid header value.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// A local precondition on the call's arguments failed, before any
    /// network activity: an empty required collection, an oversized
    /// collection, an unsupported import format, or an out-of-range numeric
    /// argument.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An invalid URL was provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Returns the HTTP status code if this error has one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::DeserializationFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the raw response body if this error has one.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Error::DeserializationFailed { raw_response, .. } => Some(raw_response),
            _ => None,
        }
    }

    /// Returns `true` for errors raised locally, before any network
    /// round-trip was attempted.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Error::Validation(_) | Error::ConfigurationError(_) | Error::SerializationFailed(_)
        )
    }
}

/// A specialized `Result` type for API calls.
pub type Result<T> = std::result::Result<T, Error>;

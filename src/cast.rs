//! Casting raw HTTP responses into typed records or provider error values.
//!
//! Every resource method funnels its [`RawResponse`] through exactly one of
//! the functions here. Each one decodes the JSON body and discriminates
//! first: a body whose `errors` array is non-empty becomes
//! [`Outcome::Errors`] carrying the HTTP status, no matter which cast was
//! requested; otherwise the body is deserialized into the expected shape.
//!
//! A body that cannot be decoded at all is an
//! [`Error::DeserializationFailed`] — that is a failure of the machinery, not
//! a provider-reported error, and it preserves the raw body for debugging.

use http::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::{Error, RawResponse, Result};

/// The discriminated result of an API call: either the expected record, or
/// the provider's structured error report.
///
/// Callers branch on the returned shape rather than catching exceptions:
///
/// ```no_run
/// use sendgrid_marketing::{Client, Outcome};
///
/// # async fn example() -> Result<(), sendgrid_marketing::Error> {
/// # let client = Client::builder().api_key("SG.key").build()?;
/// match client.lists().create("VIP customers").await? {
///     Outcome::Record(list) => println!("created {:?}", list.id),
///     Outcome::Errors(errors) => {
///         for e in &errors.errors {
///             eprintln!("{} ({:?})", e.message, e.field);
///         }
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The call succeeded; here is the typed record.
    Record(T),
    /// The provider reported one or more errors.
    Errors(ApiErrors),
}

impl<T> Outcome<T> {
    /// Returns the record, discarding any error report.
    pub fn record(self) -> Option<T> {
        match self {
            Outcome::Record(record) => Some(record),
            Outcome::Errors(_) => None,
        }
    }

    /// Returns the provider error report, if any.
    pub fn errors(self) -> Option<ApiErrors> {
        match self {
            Outcome::Record(_) => None,
            Outcome::Errors(errors) => Some(errors),
        }
    }

    /// Returns `true` if the provider reported errors.
    pub fn is_errors(&self) -> bool {
        matches!(self, Outcome::Errors(_))
    }

    /// Converts into a `Result`, treating the provider error report as the
    /// error arm.
    pub fn into_result(self) -> std::result::Result<T, ApiErrors> {
        match self {
            Outcome::Record(record) => Ok(record),
            Outcome::Errors(errors) => Err(errors),
        }
    }

    /// Maps the record to a different type, preserving an error report.
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Record(record) => Outcome::Record(f(record)),
            Outcome::Errors(errors) => Outcome::Errors(errors),
        }
    }
}

/// A provider-reported failure: the HTTP status plus one or more entries.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiErrors {
    /// The HTTP status code of the response that carried the errors.
    pub status: StatusCode,
    /// The individual error entries, in the order the provider sent them.
    pub errors: Vec<ApiError>,
}

/// One entry in a provider error report.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiError {
    /// Human-readable description of what went wrong.
    #[serde(default)]
    pub message: String,
    /// The request field the error refers to, when the provider names one.
    #[serde(default)]
    pub field: Option<String>,
    /// The provider-assigned error identifier.
    #[serde(default)]
    pub error_id: Option<String>,
}

/// Pagination metadata attached to list responses.
///
/// When the provider omits `_metadata` entirely, list casting still yields
/// one of these with every field `None` — callers never have to null-check
/// the metadata object itself.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PageMetadata {
    /// Link to the previous page.
    pub prev: Option<String>,
    /// Link to the current page.
    #[serde(rename = "self")]
    pub self_: Option<String>,
    /// Link to the next page.
    pub next: Option<String>,
    /// Total item count reported by the provider.
    pub count: Option<u64>,
}

/// A single page of records plus pagination metadata.
///
/// Items keep the provider's response order. Bodies key their items as
/// `result` or `results`; the first non-null of the two wins, `result`
/// taking precedence, and a body carrying neither (or only nulls) is an
/// empty page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "PageWire<T>")]
pub struct Page<T> {
    /// The records on this page, in provider order.
    pub result: Vec<T>,
    /// Pagination metadata; all-`None` when the body omitted `_metadata`.
    pub metadata: PageMetadata,
}

/// Wire shape for [`Page`]: both item keys deserialized side by side, so a
/// body carrying both never trips a duplicate-field error.
#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct PageWire<T> {
    #[serde(default)]
    result: Option<Vec<T>>,
    #[serde(default)]
    results: Option<Vec<T>>,
    #[serde(rename = "_metadata", default)]
    metadata: PageMetadata,
}

impl<T> From<PageWire<T>> for Page<T> {
    fn from(wire: PageWire<T>) -> Self {
        Page {
            result: wire.result.or(wire.results).unwrap_or_default(),
            metadata: wire.metadata,
        }
    }
}

fn deserialization_failed(raw: &RawResponse, serde_error: impl ToString) -> Error {
    Error::DeserializationFailed {
        raw_response: raw.body.clone(),
        serde_error: serde_error.to_string(),
        status: raw.status,
    }
}

/// Decodes the response body and discriminates success from provider error.
///
/// Returns the decoded JSON value on success, or [`ApiErrors`] (carrying the
/// response's HTTP status) when the body is an object with a non-empty
/// `errors` array. Downstream casts propagate the error report unchanged.
pub fn decode(raw: &RawResponse) -> Result<std::result::Result<Value, ApiErrors>> {
    let value: Value =
        serde_json::from_str(&raw.body).map_err(|e| deserialization_failed(raw, e))?;

    if let Some(entries) = value.get("errors").and_then(Value::as_array) {
        if !entries.is_empty() {
            let errors = entries
                .iter()
                .map(|entry| {
                    serde_json::from_value(entry.clone()).unwrap_or_else(|_| ApiError {
                        message: entry.to_string(),
                        field: None,
                        error_id: None,
                    })
                })
                .collect();
            return Ok(Err(ApiErrors {
                status: raw.status,
                errors,
            }));
        }
    }

    Ok(Ok(value))
}

/// Casts the whole decoded body into a single record of type `T`.
pub fn single<T: DeserializeOwned>(raw: RawResponse) -> Result<Outcome<T>> {
    match decode(&raw)? {
        Err(errors) => Ok(Outcome::Errors(errors)),
        Ok(value) => {
            let record =
                serde_json::from_value(value).map_err(|e| deserialization_failed(&raw, e))?;
            Ok(Outcome::Record(record))
        }
    }
}

/// Casts a paginated list body (`result`/`results` + `_metadata`) into a
/// [`Page<T>`].
///
/// Wrappers with additional top-level fields (for example
/// `contact_count` on the contacts list) have dedicated record types and go
/// through [`single`] instead.
pub fn list<T: DeserializeOwned>(raw: RawResponse) -> Result<Outcome<Page<T>>> {
    single(raw)
}

/// Casts a body whose entire content is a JSON array of records, with no
/// wrapper object. Used by the senders and suppression-group listings.
pub fn raw_list<T: DeserializeOwned>(raw: RawResponse) -> Result<Outcome<Vec<T>>> {
    single(raw)
}

/// Casts the email-keyed response shape into a flat sequence of records.
///
/// The body (or its `result` sub-object) maps each email address to an
/// object holding a `contact` sub-object; records come out in the order the
/// provider returned the keys. Entries without a `contact` object are
/// skipped.
pub fn by_email<T: DeserializeOwned>(raw: RawResponse) -> Result<Outcome<Vec<T>>> {
    let value = match decode(&raw)? {
        Err(errors) => return Ok(Outcome::Errors(errors)),
        Ok(value) => value,
    };

    let entries = match value {
        Value::Object(map) => match map.get("result") {
            Some(Value::Object(inner)) => inner.clone(),
            _ => map,
        },
        other => {
            return Err(deserialization_failed(
                &raw,
                format!("expected an object keyed by email address, got {other}"),
            ))
        }
    };

    let mut records = Vec::with_capacity(entries.len());
    for (_, entry) in entries {
        if let Some(contact) = entry.get("contact") {
            let record = serde_json::from_value(contact.clone())
                .map_err(|e| deserialization_failed(&raw, e))?;
            records.push(record);
        }
    }
    Ok(Outcome::Record(records))
}

/// Casts an endpoint that responds with no meaningful body (204-style).
///
/// An empty body is a success; a body carrying a non-empty `errors` array is
/// still discriminated into [`Outcome::Errors`]. Other decodable content is
/// discarded, and an undecodable body (say, an HTML error page from an
/// intermediary) is tolerated and discarded as long as the status is a
/// success. A non-success status with an undecodable body is an
/// [`Error::DeserializationFailed`].
pub fn empty(raw: RawResponse) -> Result<Outcome<()>> {
    if raw.body.trim().is_empty() {
        return Ok(Outcome::Record(()));
    }
    match decode(&raw) {
        Ok(Err(errors)) => Ok(Outcome::Errors(errors)),
        Ok(Ok(_)) => Ok(Outcome::Record(())),
        Err(_) if raw.status.is_success() => Ok(Outcome::Record(())),
        Err(e) => Err(e),
    }
}

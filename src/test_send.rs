//! Test sends of templated email.

use http::Method;
use serde::Serialize;

use crate::{cast, Client, Error, Outcome, Result};

/// The provider caps recipients per test send.
pub const MAX_TEST_RECIPIENTS: usize = 10;

/// Body for a test send.
#[derive(Debug, Clone, Serialize)]
pub struct TestSendRequest {
    pub template_id: String,
    /// Up to [`MAX_TEST_RECIPIENTS`] addresses.
    pub emails: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_id_override: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppression_group_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_unsubscribe_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_address: Option<String>,
}

impl TestSendRequest {
    /// A request with only the required fields set.
    pub fn new(template_id: impl Into<String>, emails: Vec<String>) -> Self {
        Self {
            template_id: template_id.into(),
            emails,
            version_id_override: None,
            sender_id: None,
            suppression_group_id: None,
            custom_unsubscribe_url: None,
            from_address: None,
        }
    }
}

/// The test sends resource.
pub struct TestSends<'a> {
    client: &'a Client,
}

impl<'a> TestSends<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Sends a test message to the given recipients.
    ///
    /// Fails with a validation error, before any network call, when no
    /// recipients are given, more than [`MAX_TEST_RECIPIENTS`] are given, or
    /// `template_id` is empty. A successful send responds with no body.
    pub async fn send(&self, request: &TestSendRequest) -> Result<Outcome<()>> {
        if request.template_id.is_empty() {
            return Err(Error::Validation("a template id is required".to_string()));
        }
        if request.emails.is_empty() {
            return Err(Error::Validation(
                "at least one recipient email is required".to_string(),
            ));
        }
        if request.emails.len() > MAX_TEST_RECIPIENTS {
            return Err(Error::Validation(format!(
                "a test send accepts at most {} recipients, got {}",
                MAX_TEST_RECIPIENTS,
                request.emails.len()
            )));
        }
        let raw = self
            .client
            .request(
                Method::POST,
                "/v3/marketing/test/send_email",
                &[],
                Some(request),
            )
            .await?;
        cast::empty(raw)
    }
}

//! Single sends (one-time campaigns).

use http::Method;
use serde::{Deserialize, Serialize};

use crate::client::{Query, NO_BODY};
use crate::designs::Editor;
use crate::{cast, Client, Error, Outcome, Page, Result};

/// The provider caps categories per campaign.
pub const MAX_CATEGORIES: usize = 10;

/// Lifecycle state of a single send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SingleSendStatus {
    Draft,
    Scheduled,
    Triggered,
}

/// Audience selection for a single send.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SendTo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_ids: Option<Vec<String>>,
    /// Send to every contact in the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all: Option<bool>,
}

/// Message content and sending configuration for a single send.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmailConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plain_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generate_plain_content: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub design_id: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::json::soft_enum",
        skip_serializing_if = "Option::is_none"
    )]
    pub editor: Option<Editor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppression_group_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_unsubscribe_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_pool: Option<String>,
}

/// A single send as the provider returns it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SingleSend {
    pub id: Option<String>,
    pub name: Option<String>,
    /// `None` when the provider reports a status this client does not know.
    #[serde(default, deserialize_with = "crate::json::soft_enum")]
    pub status: Option<SingleSendStatus>,
    pub categories: Option<Vec<String>>,
    pub send_at: Option<String>,
    pub send_to: Option<SendTo>,
    pub email_config: Option<EmailConfig>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Body for creating or updating a single send.
#[derive(Debug, Clone, Serialize)]
pub struct SingleSendInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    /// RFC 3339 timestamp, or the literal `"now"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_to: Option<SendTo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_config: Option<EmailConfig>,
}

/// Search filter for single sends. Empty filters match everything.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SingleSendSearch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Vec<SingleSendStatus>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
}

/// The provider's acknowledgement of a schedule change.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Schedule {
    pub send_at: Option<String>,
    #[serde(default, deserialize_with = "crate::json::soft_enum")]
    pub status: Option<SingleSendStatus>,
}

#[derive(Debug, Clone, Serialize)]
struct ScheduleRequest<'a> {
    send_at: &'a str,
}

#[derive(Debug, Clone, Serialize)]
struct DuplicateRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

fn check_categories(categories: &Option<Vec<String>>) -> Result<()> {
    if let Some(categories) = categories {
        if categories.len() > MAX_CATEGORIES {
            return Err(Error::Validation(format!(
                "a single send accepts at most {} categories, got {}",
                MAX_CATEGORIES,
                categories.len()
            )));
        }
    }
    Ok(())
}

/// The single sends resource.
pub struct SingleSends<'a> {
    client: &'a Client,
}

impl<'a> SingleSends<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists single sends (one page).
    pub async fn list(&self, page_size: Option<u32>) -> Result<Outcome<Page<SingleSend>>> {
        let mut query = Query::new();
        query.push_opt("page_size", page_size);
        let raw = self
            .client
            .request(
                Method::GET,
                "/v3/marketing/singlesends",
                query.pairs(),
                NO_BODY,
            )
            .await?;
        cast::list(raw)
    }

    /// Fetches one single send.
    pub async fn get(&self, id: &str) -> Result<Outcome<SingleSend>> {
        let path = format!("/v3/marketing/singlesends/{}", id);
        let raw = self.client.request(Method::GET, &path, &[], NO_BODY).await?;
        cast::single(raw)
    }

    /// Creates a single send in draft state.
    pub async fn create(&self, input: &SingleSendInput) -> Result<Outcome<SingleSend>> {
        check_categories(&input.categories)?;
        let raw = self
            .client
            .request(Method::POST, "/v3/marketing/singlesends", &[], Some(input))
            .await?;
        cast::single(raw)
    }

    /// Updates a single send.
    pub async fn update(&self, id: &str, input: &SingleSendInput) -> Result<Outcome<SingleSend>> {
        check_categories(&input.categories)?;
        let path = format!("/v3/marketing/singlesends/{}", id);
        let raw = self
            .client
            .request(Method::PATCH, &path, &[], Some(input))
            .await?;
        cast::single(raw)
    }

    /// Deletes one single send.
    pub async fn delete(&self, id: &str) -> Result<Outcome<()>> {
        let path = format!("/v3/marketing/singlesends/{}", id);
        let raw = self
            .client
            .request(Method::DELETE, &path, &[], NO_BODY)
            .await?;
        cast::empty(raw)
    }

    /// Deletes several single sends in one call.
    ///
    /// Fails with a validation error, before any network call, when `ids` is
    /// empty.
    pub async fn delete_bulk(&self, ids: &[&str]) -> Result<Outcome<()>> {
        if ids.is_empty() {
            return Err(Error::Validation(
                "at least one single send id is required".to_string(),
            ));
        }
        let mut query = Query::new();
        query.push("ids", ids.join(","));
        let raw = self
            .client
            .request(
                Method::DELETE,
                "/v3/marketing/singlesends",
                query.pairs(),
                NO_BODY,
            )
            .await?;
        cast::empty(raw)
    }

    /// Searches single sends by name, status, and categories.
    pub async fn search(&self, filter: &SingleSendSearch) -> Result<Outcome<Page<SingleSend>>> {
        let raw = self
            .client
            .request(
                Method::POST,
                "/v3/marketing/singlesends/search",
                &[],
                Some(filter),
            )
            .await?;
        cast::list(raw)
    }

    /// Schedules a single send.
    ///
    /// `send_at` is an RFC 3339 timestamp, or the literal `"now"` to send
    /// immediately.
    pub async fn schedule(&self, id: &str, send_at: &str) -> Result<Outcome<Schedule>> {
        let path = format!("/v3/marketing/singlesends/{}/schedule", id);
        let body = ScheduleRequest { send_at };
        let raw = self
            .client
            .request(Method::PUT, &path, &[], Some(&body))
            .await?;
        cast::single(raw)
    }

    /// Cancels a scheduled single send, returning it to draft.
    pub async fn unschedule(&self, id: &str) -> Result<Outcome<Schedule>> {
        let path = format!("/v3/marketing/singlesends/{}/schedule", id);
        let raw = self
            .client
            .request(Method::DELETE, &path, &[], NO_BODY)
            .await?;
        if raw.body.trim().is_empty() {
            return Ok(Outcome::Record(Schedule::default()));
        }
        cast::single(raw)
    }

    /// Duplicates a single send, optionally under a new name.
    pub async fn duplicate(&self, id: &str, name: Option<&str>) -> Result<Outcome<SingleSend>> {
        let path = format!("/v3/marketing/singlesends/{}", id);
        let body = DuplicateRequest { name };
        let raw = self
            .client
            .request(Method::POST, &path, &[], Some(&body))
            .await?;
        cast::single(raw)
    }
}

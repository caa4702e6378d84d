//! Verified sender identities.

use http::Method;
use serde::{Deserialize, Serialize};

use crate::client::NO_BODY;
use crate::{cast, Client, Outcome, Result};

/// An email address with an optional display name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SenderAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Verification state, which the provider sends either as a bare flag or as
/// an object carrying a reason.
///
/// Candidate order is the match order: a JSON boolean becomes `Flag`,
/// an object falls through to `Detail`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Verified {
    Flag(bool),
    Detail(VerifiedDetail),
}

/// Verification status plus the provider's reason when unverified.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerifiedDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// A sender identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sender {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<SenderAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<SenderAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<Verified>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Body for creating or updating a sender identity.
#[derive(Debug, Clone, Serialize)]
pub struct SenderInput {
    pub nickname: String,
    pub from: SenderAddress,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<SenderAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// The sender identities resource.
pub struct Senders<'a> {
    client: &'a Client,
}

impl<'a> Senders<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists every sender identity.
    ///
    /// The provider responds with a bare JSON array, no wrapper object.
    pub async fn list(&self) -> Result<Outcome<Vec<Sender>>> {
        let raw = self
            .client
            .request(Method::GET, "/v3/marketing/senders", &[], NO_BODY)
            .await?;
        cast::raw_list(raw)
    }

    /// Fetches one sender identity.
    pub async fn get(&self, id: i64) -> Result<Outcome<Sender>> {
        let path = format!("/v3/marketing/senders/{}", id);
        let raw = self.client.request(Method::GET, &path, &[], NO_BODY).await?;
        cast::single(raw)
    }

    /// Creates a sender identity. Verification email goes out immediately.
    pub async fn create(&self, input: &SenderInput) -> Result<Outcome<Sender>> {
        let raw = self
            .client
            .request(Method::POST, "/v3/marketing/senders", &[], Some(input))
            .await?;
        cast::single(raw)
    }

    /// Updates a sender identity.
    pub async fn update(&self, id: i64, input: &SenderInput) -> Result<Outcome<Sender>> {
        let path = format!("/v3/marketing/senders/{}", id);
        let raw = self
            .client
            .request(Method::PATCH, &path, &[], Some(input))
            .await?;
        cast::single(raw)
    }

    /// Deletes a sender identity.
    pub async fn delete(&self, id: i64) -> Result<Outcome<()>> {
        let path = format!("/v3/marketing/senders/{}", id);
        let raw = self
            .client
            .request(Method::DELETE, &path, &[], NO_BODY)
            .await?;
        cast::empty(raw)
    }

    /// Resends the verification email for an unverified sender.
    pub async fn resend_verification(&self, id: i64) -> Result<Outcome<()>> {
        let path = format!("/v3/marketing/senders/{}/resend_verification", id);
        let raw = self
            .client
            .request(Method::POST, &path, &[], NO_BODY)
            .await?;
        cast::empty(raw)
    }
}

//! Unsubscribe (suppression) groups.

use http::Method;
use serde::{Deserialize, Serialize};

use crate::client::NO_BODY;
use crate::{cast, Client, Outcome, Result};

/// An unsubscribe group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuppressionGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    /// How many recipients have unsubscribed through this group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsubscribes: Option<u64>,
}

/// Body for creating or updating an unsubscribe group.
#[derive(Debug, Clone, Serialize)]
pub struct SuppressionGroupInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}

/// The unsubscribe groups resource.
pub struct SuppressionGroups<'a> {
    client: &'a Client,
}

impl<'a> SuppressionGroups<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists every unsubscribe group.
    ///
    /// The provider responds with a bare JSON array, no wrapper object.
    pub async fn list(&self) -> Result<Outcome<Vec<SuppressionGroup>>> {
        let raw = self
            .client
            .request(Method::GET, "/v3/asm/groups", &[], NO_BODY)
            .await?;
        cast::raw_list(raw)
    }

    /// Fetches one unsubscribe group.
    pub async fn get(&self, id: i64) -> Result<Outcome<SuppressionGroup>> {
        let path = format!("/v3/asm/groups/{}", id);
        let raw = self.client.request(Method::GET, &path, &[], NO_BODY).await?;
        cast::single(raw)
    }

    /// Creates an unsubscribe group.
    pub async fn create(&self, input: &SuppressionGroupInput) -> Result<Outcome<SuppressionGroup>> {
        let raw = self
            .client
            .request(Method::POST, "/v3/asm/groups", &[], Some(input))
            .await?;
        cast::single(raw)
    }

    /// Updates an unsubscribe group.
    pub async fn update(
        &self,
        id: i64,
        input: &SuppressionGroupInput,
    ) -> Result<Outcome<SuppressionGroup>> {
        let path = format!("/v3/asm/groups/{}", id);
        let raw = self
            .client
            .request(Method::PATCH, &path, &[], Some(input))
            .await?;
        cast::single(raw)
    }

    /// Deletes an unsubscribe group.
    pub async fn delete(&self, id: i64) -> Result<Outcome<()>> {
        let path = format!("/v3/asm/groups/{}", id);
        let raw = self
            .client
            .request(Method::DELETE, &path, &[], NO_BODY)
            .await?;
        cast::empty(raw)
    }
}

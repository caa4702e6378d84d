//! Reusable email designs.

use http::Method;
use serde::{Deserialize, Serialize};

use crate::client::{Query, NO_BODY};
use crate::{cast, Client, Outcome, Page, Result};

/// Which editor a design was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Editor {
    Code,
    Design,
}

/// An email design.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Design {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `None` when the provider reports an editor this client does not know.
    #[serde(
        default,
        deserialize_with = "crate::json::soft_enum",
        skip_serializing_if = "Option::is_none"
    )]
    pub editor: Option<Editor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plain_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generate_plain_content: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Body for creating or updating a design.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DesignInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor: Option<Editor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plain_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generate_plain_content: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
struct DuplicateRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

/// The designs resource.
pub struct Designs<'a> {
    client: &'a Client,
}

impl<'a> Designs<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists designs (one page; summaries omit the content fields).
    pub async fn list(
        &self,
        page_size: Option<u32>,
        page_token: Option<&str>,
    ) -> Result<Outcome<Page<Design>>> {
        let mut query = Query::new();
        query.push_opt("page_size", page_size);
        query.push_opt("page_token", page_token);
        let raw = self
            .client
            .request(Method::GET, "/v3/designs", query.pairs(), NO_BODY)
            .await?;
        cast::list(raw)
    }

    /// Fetches one design with its full content.
    pub async fn get(&self, id: &str) -> Result<Outcome<Design>> {
        let path = format!("/v3/designs/{}", id);
        let raw = self.client.request(Method::GET, &path, &[], NO_BODY).await?;
        cast::single(raw)
    }

    /// Creates a design.
    pub async fn create(&self, input: &DesignInput) -> Result<Outcome<Design>> {
        let raw = self
            .client
            .request(Method::POST, "/v3/designs", &[], Some(input))
            .await?;
        cast::single(raw)
    }

    /// Updates a design. Only the fields set on `input` are written.
    pub async fn update(&self, id: &str, input: &DesignInput) -> Result<Outcome<Design>> {
        let path = format!("/v3/designs/{}", id);
        let raw = self
            .client
            .request(Method::PATCH, &path, &[], Some(input))
            .await?;
        cast::single(raw)
    }

    /// Deletes a design.
    pub async fn delete(&self, id: &str) -> Result<Outcome<()>> {
        let path = format!("/v3/designs/{}", id);
        let raw = self
            .client
            .request(Method::DELETE, &path, &[], NO_BODY)
            .await?;
        cast::empty(raw)
    }

    /// Duplicates a design, optionally under a new name.
    pub async fn duplicate(&self, id: &str, name: Option<&str>) -> Result<Outcome<Design>> {
        let path = format!("/v3/designs/{}", id);
        let body = DuplicateRequest { name };
        let raw = self
            .client
            .request(Method::POST, &path, &[], Some(&body))
            .await?;
        cast::single(raw)
    }
}

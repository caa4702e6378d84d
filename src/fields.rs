//! Custom field definitions.

use http::Method;
use serde::{Deserialize, Serialize};

use crate::client::NO_BODY;
use crate::{cast, Client, Outcome, PageMetadata, Result};

/// Data type of a custom field. The wire values are capitalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    Text,
    Number,
    Date,
}

/// A field definition, either custom or provider-reserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `None` when the provider reports a type this client does not know.
    #[serde(
        default,
        deserialize_with = "crate::json::soft_enum",
        skip_serializing_if = "Option::is_none"
    )]
    pub field_type: Option<FieldType>,
    /// Set on reserved fields, which cannot be modified or deleted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
}

/// The full field catalogue: custom definitions plus the reserved ones.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldDefinitions {
    #[serde(default)]
    pub custom_fields: Vec<FieldDefinition>,
    #[serde(default)]
    pub reserved_fields: Vec<FieldDefinition>,
    #[serde(rename = "_metadata", default)]
    pub metadata: PageMetadata,
}

#[derive(Debug, Clone, Serialize)]
struct CreateFieldRequest<'a> {
    name: &'a str,
    field_type: FieldType,
}

#[derive(Debug, Clone, Serialize)]
struct RenameFieldRequest<'a> {
    name: &'a str,
}

/// The custom field definitions resource.
pub struct CustomFields<'a> {
    client: &'a Client,
}

impl<'a> CustomFields<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists every field definition, custom and reserved.
    pub async fn list(&self) -> Result<Outcome<FieldDefinitions>> {
        let raw = self
            .client
            .request(
                Method::GET,
                "/v3/marketing/field_definitions",
                &[],
                NO_BODY,
            )
            .await?;
        cast::single(raw)
    }

    /// Creates a custom field.
    pub async fn create(
        &self,
        name: &str,
        field_type: FieldType,
    ) -> Result<Outcome<FieldDefinition>> {
        let body = CreateFieldRequest { name, field_type };
        let raw = self
            .client
            .request(
                Method::POST,
                "/v3/marketing/field_definitions",
                &[],
                Some(&body),
            )
            .await?;
        cast::single(raw)
    }

    /// Renames a custom field. The data type cannot be changed.
    pub async fn update(&self, id: &str, name: &str) -> Result<Outcome<FieldDefinition>> {
        let path = format!("/v3/marketing/field_definitions/{}", id);
        let body = RenameFieldRequest { name };
        let raw = self
            .client
            .request(Method::PATCH, &path, &[], Some(&body))
            .await?;
        cast::single(raw)
    }

    /// Deletes a custom field.
    pub async fn delete(&self, id: &str) -> Result<Outcome<()>> {
        let path = format!("/v3/marketing/field_definitions/{}", id);
        let raw = self
            .client
            .request(Method::DELETE, &path, &[], NO_BODY)
            .await?;
        cast::empty(raw)
    }
}

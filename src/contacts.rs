//! Contacts: upsert, search, delete, and bulk import.

use http::Method;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::client::{Query, NO_BODY};
use crate::{cast, Client, Error, Outcome, PageMetadata, Result};

/// A marketing contact.
///
/// Every field is optional: the same shape serves as the upsert payload
/// (where only the fields being written are set) and as the record the
/// provider returns. `None` fields are omitted from request bodies entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_emails: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line_1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line_2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_province_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_name: Option<String>,
    /// Lists this contact belongs to. Read-only on the wire; list membership
    /// is written through [`UpsertRequest::list_ids`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_ids: Option<Vec<String>>,
    /// Custom field values keyed by field id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<HashMap<String, FieldValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// A custom field value, which the provider sends as either a number or a
/// string depending on the field's declared type.
///
/// Candidate order is the match order: a JSON number becomes `Number`,
/// anything string-shaped falls through to `Text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

/// One page of contacts plus the total count the provider reports alongside.
///
/// Items arrive under `result` or `results`; the first non-null of the two
/// wins, `result` taking precedence.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "ContactPageWire")]
pub struct ContactPage {
    pub result: Vec<Contact>,
    /// Total contacts in the account, not just on this page.
    pub contact_count: Option<u64>,
    pub metadata: PageMetadata,
}

#[derive(Deserialize)]
struct ContactPageWire {
    #[serde(default)]
    result: Option<Vec<Contact>>,
    #[serde(default)]
    results: Option<Vec<Contact>>,
    #[serde(default)]
    contact_count: Option<u64>,
    #[serde(rename = "_metadata", default)]
    metadata: PageMetadata,
}

impl From<ContactPageWire> for ContactPage {
    fn from(wire: ContactPageWire) -> Self {
        ContactPage {
            result: wire.result.or(wire.results).unwrap_or_default(),
            contact_count: wire.contact_count,
            metadata: wire.metadata,
        }
    }
}

/// Account-level contact counts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactCount {
    pub contact_count: Option<u64>,
    pub billable_count: Option<u64>,
}

/// Body for the contact upsert call.
#[derive(Debug, Clone, Serialize)]
pub struct UpsertRequest {
    /// Lists to add the upserted contacts to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_ids: Option<Vec<String>>,
    pub contacts: Vec<Contact>,
}

/// Asynchronous job handle returned by mutating contact calls.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactJob {
    pub job_id: String,
}

/// Format of an import payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Csv,
    Json,
}

impl FileType {
    /// Sniffs the format from a file path's extension. Returns `None` for
    /// anything other than `.csv` or `.json`; reading the file content is
    /// the caller's job.
    pub fn from_path(path: &str) -> Option<Self> {
        let extension = path.rsplit('.').next()?;
        match extension.to_ascii_lowercase().as_str() {
            "csv" => Some(FileType::Csv),
            "json" => Some(FileType::Json),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Csv => "csv",
            FileType::Json => "json",
        }
    }
}

/// Body for starting a bulk import.
#[derive(Debug, Clone, Serialize)]
pub struct ImportRequest {
    pub file_type: FileType,
    /// Column-to-field mapping for CSV payloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_mappings: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_ids: Option<Vec<String>>,
}

/// The pre-signed upload target returned when an import starts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImportJob {
    pub id: String,
    /// Pre-signed URL the raw file content is PUT to. Carries its own
    /// authorization; the client's API key is not sent there.
    pub upload_uri: String,
    /// Headers the upload request must carry.
    #[serde(default)]
    pub upload_headers: Vec<UploadHeader>,
}

/// A header name/value pair required by the pre-signed upload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UploadHeader {
    pub header: String,
    pub value: String,
}

/// Lifecycle state of an import job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobState {
    Pending,
    Completed,
    Errored,
    Failed,
}

/// Progress report for an import job.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImportStatus {
    pub id: String,
    /// `None` when the provider reports a state this client does not know.
    #[serde(default, deserialize_with = "crate::json::soft_enum")]
    pub status: Option<JobState>,
    pub job_type: Option<String>,
    #[serde(default)]
    pub results: Option<ImportResults>,
    pub started_at: Option<String>,
    pub finished_at: Option<String>,
}

/// Per-outcome counts for a finished import.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ImportResults {
    pub requested_count: Option<u64>,
    pub created_count: Option<u64>,
    pub updated_count: Option<u64>,
    pub deleted_count: Option<u64>,
    pub errored_count: Option<u64>,
    pub errors_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Clone, Serialize)]
struct EmailsRequest<'a> {
    emails: &'a [&'a str],
}

/// The contacts resource.
pub struct Contacts<'a> {
    client: &'a Client,
}

impl<'a> Contacts<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists contacts (single page, up to the provider's page size).
    pub async fn list(&self) -> Result<Outcome<ContactPage>> {
        let raw = self
            .client
            .request(Method::GET, "/v3/marketing/contacts", &[], NO_BODY)
            .await?;
        cast::single(raw)
    }

    /// Fetches one contact by id.
    pub async fn get(&self, id: &str) -> Result<Outcome<Contact>> {
        let path = format!("/v3/marketing/contacts/{}", id);
        let raw = self.client.request(Method::GET, &path, &[], NO_BODY).await?;
        cast::single(raw)
    }

    /// Adds or updates contacts, optionally assigning them to lists.
    ///
    /// The provider processes upserts asynchronously; the returned job id can
    /// be polled with [`import_status`](Self::import_status).
    pub async fn upsert(&self, request: &UpsertRequest) -> Result<Outcome<ContactJob>> {
        if request.contacts.is_empty() {
            return Err(Error::Validation(
                "at least one contact is required".to_string(),
            ));
        }
        let raw = self
            .client
            .request(Method::PUT, "/v3/marketing/contacts", &[], Some(request))
            .await?;
        cast::single(raw)
    }

    /// Deletes contacts by id, or every contact when `delete_all` is set.
    ///
    /// Fails with a validation error — before any network call — when `ids`
    /// is empty and `delete_all` is not set.
    pub async fn delete(&self, ids: &[&str], delete_all: bool) -> Result<Outcome<ContactJob>> {
        if ids.is_empty() && !delete_all {
            return Err(Error::Validation(
                "contact ids are required unless delete_all is set".to_string(),
            ));
        }
        let mut query = Query::new();
        if delete_all {
            query.push("delete_all_contacts", "true");
        } else {
            query.push("ids", ids.join(","));
        }
        let raw = self
            .client
            .request(
                Method::DELETE,
                "/v3/marketing/contacts",
                query.pairs(),
                NO_BODY,
            )
            .await?;
        cast::single(raw)
    }

    /// Returns account-level contact counts without fetching any contacts.
    pub async fn count(&self) -> Result<Outcome<ContactCount>> {
        let raw = self
            .client
            .request(Method::GET, "/v3/marketing/contacts/count", &[], NO_BODY)
            .await?;
        cast::single(raw)
    }

    /// Searches contacts with a provider query expression (SGQL).
    pub async fn search(&self, query: &str) -> Result<Outcome<ContactPage>> {
        let body = SearchRequest { query };
        let raw = self
            .client
            .request(
                Method::POST,
                "/v3/marketing/contacts/search",
                &[],
                Some(&body),
            )
            .await?;
        cast::single(raw)
    }

    /// Looks up contacts by exact email address.
    ///
    /// The provider responds with an object keyed by email; this flattens it
    /// into a plain sequence in the provider's key order.
    pub async fn by_emails(&self, emails: &[&str]) -> Result<Outcome<Vec<Contact>>> {
        if emails.is_empty() {
            return Err(Error::Validation(
                "at least one email address is required".to_string(),
            ));
        }
        let body = EmailsRequest { emails };
        let raw = self
            .client
            .request(
                Method::POST,
                "/v3/marketing/contacts/search/emails",
                &[],
                Some(&body),
            )
            .await?;
        cast::by_email(raw)
    }

    /// Starts a bulk import and returns the pre-signed upload target.
    pub async fn start_import(&self, request: &ImportRequest) -> Result<Outcome<ImportJob>> {
        let raw = self
            .client
            .request(
                Method::PUT,
                "/v3/marketing/contacts/imports",
                &[],
                Some(request),
            )
            .await?;
        cast::single(raw)
    }

    /// Uploads raw import data to a job's pre-signed target.
    ///
    /// This is the second, unsigned request of the import flow: the upload
    /// URI carries its own authorization. The upload response body is not
    /// cast; only transport-level failures surface.
    pub async fn upload_import_data(&self, job: &ImportJob, data: Vec<u8>) -> Result<()> {
        let headers: Vec<(String, String)> = job
            .upload_headers
            .iter()
            .map(|h| (h.header.clone(), h.value.clone()))
            .collect();
        let raw = self.client.raw_put(&job.upload_uri, &headers, data).await?;
        if !raw.is_success() {
            tracing::warn!(
                status = raw.status.as_u16(),
                job_id = %job.id,
                "Import upload returned a non-success status"
            );
        }
        Ok(())
    }

    /// Convenience wrapper running both steps of the import flow.
    ///
    /// Only the first response is cast; when the provider rejects the import
    /// request the upload is never attempted.
    pub async fn import(
        &self,
        request: &ImportRequest,
        data: Vec<u8>,
    ) -> Result<Outcome<ImportJob>> {
        let outcome = self.start_import(request).await?;
        if let Outcome::Record(job) = &outcome {
            self.upload_import_data(job, data).await?;
        }
        Ok(outcome)
    }

    /// Fetches the status of an import or upsert job.
    pub async fn import_status(&self, id: &str) -> Result<Outcome<ImportStatus>> {
        let path = format!("/v3/marketing/contacts/imports/{}", id);
        let raw = self.client.request(Method::GET, &path, &[], NO_BODY).await?;
        cast::single(raw)
    }
}

//! Contact lists.

use http::Method;
use serde::{Deserialize, Serialize};

use crate::client::{Query, NO_BODY};
use crate::contacts::Contact;
use crate::{cast, Client, Error, Outcome, Page, Result};

/// A contact list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct List {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_count: Option<u64>,
    /// Present only when the detail fetch asked for a contact sample.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_sample: Option<Vec<Contact>>,
}

/// Result of deleting a list.
///
/// `job_id` is set only when contact deletion was requested along with the
/// list; a plain list delete responds with no body.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeletedList {
    pub job_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
struct NameRequest<'a> {
    name: &'a str,
}

/// The contact lists resource.
pub struct Lists<'a> {
    client: &'a Client,
}

impl<'a> Lists<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists lists (one page).
    pub async fn list(&self, page_size: Option<u32>) -> Result<Outcome<Page<List>>> {
        let mut query = Query::new();
        query.push_opt("page_size", page_size);
        let raw = self
            .client
            .request(Method::GET, "/v3/marketing/lists", query.pairs(), NO_BODY)
            .await?;
        cast::list(raw)
    }

    /// Fetches one list, optionally with a sample of its contacts.
    pub async fn get(&self, id: &str, contact_sample: bool) -> Result<Outcome<List>> {
        let path = format!("/v3/marketing/lists/{}", id);
        let mut query = Query::new();
        if contact_sample {
            query.push("contact_sample", "true");
        }
        let raw = self
            .client
            .request(Method::GET, &path, query.pairs(), NO_BODY)
            .await?;
        cast::single(raw)
    }

    /// Creates a list.
    pub async fn create(&self, name: &str) -> Result<Outcome<List>> {
        let body = NameRequest { name };
        let raw = self
            .client
            .request(Method::POST, "/v3/marketing/lists", &[], Some(&body))
            .await?;
        cast::single(raw)
    }

    /// Renames a list.
    pub async fn update(&self, id: &str, name: &str) -> Result<Outcome<List>> {
        let path = format!("/v3/marketing/lists/{}", id);
        let body = NameRequest { name };
        let raw = self
            .client
            .request(Method::PATCH, &path, &[], Some(&body))
            .await?;
        cast::single(raw)
    }

    /// Deletes a list, optionally deleting its contacts too.
    ///
    /// With `delete_contacts` the provider runs an asynchronous job and
    /// reports its id; otherwise the response carries no body and
    /// [`DeletedList::job_id`] is `None`.
    pub async fn delete(&self, id: &str, delete_contacts: bool) -> Result<Outcome<DeletedList>> {
        let path = format!("/v3/marketing/lists/{}", id);
        let mut query = Query::new();
        if delete_contacts {
            query.push("delete_contacts", "true");
        }
        let raw = self
            .client
            .request(Method::DELETE, &path, query.pairs(), NO_BODY)
            .await?;
        if raw.body.trim().is_empty() {
            return Ok(Outcome::Record(DeletedList::default()));
        }
        cast::single(raw)
    }

    /// Removes contacts from a list without deleting them.
    ///
    /// Fails with a validation error, before any network call, when
    /// `contact_ids` is empty.
    pub async fn remove_contacts(&self, id: &str, contact_ids: &[&str]) -> Result<Outcome<()>> {
        if contact_ids.is_empty() {
            return Err(Error::Validation(
                "at least one contact id is required".to_string(),
            ));
        }
        let path = format!("/v3/marketing/lists/{}/contacts", id);
        let mut query = Query::new();
        query.push("contact_ids", contact_ids.join(","));
        let raw = self
            .client
            .request(Method::DELETE, &path, query.pairs(), NO_BODY)
            .await?;
        cast::empty(raw)
    }
}

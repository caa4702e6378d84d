//! HTTP transport and client configuration.
//!
//! The [`Client`] type holds the credentials and base URL and issues the
//! signed requests the resource handles build. Use [`ClientBuilder`] to
//! configure and create clients.

use crate::contacts::Contacts;
use crate::designs::Designs;
use crate::fields::CustomFields;
use crate::lists::Lists;
use crate::senders::Senders;
use crate::singlesends::SingleSends;
use crate::stats::Stats;
use crate::suppressions::SuppressionGroups;
use crate::test_send::TestSends;
use crate::{Error, RawResponse, Result};
use http::{HeaderName, HeaderValue, Method};
use serde::Serialize;
use std::sync::Arc;
use url::Url;

/// The production API host.
pub const DEFAULT_BASE_URL: &str = "https://api.sendgrid.com";

/// Header used to act on behalf of a subuser.
const ON_BEHALF_OF: &str = "on-behalf-of";

/// Placeholder body for requests that carry none.
pub(crate) const NO_BODY: Option<&'static ()> = None;

/// A client for the Marketing Campaigns API.
///
/// The client is designed to be reused across multiple requests; it holds a
/// connection pool and the configured credentials, both read-only after
/// construction. Cloning is cheap and shares the pool.
///
/// # Examples
///
/// ```no_run
/// use sendgrid_marketing::{Client, Outcome};
///
/// # async fn example() -> Result<(), sendgrid_marketing::Error> {
/// let client = Client::builder()
///     .api_key(std::env::var("SENDGRID_API_KEY").unwrap())
///     .build()?;
///
/// match client.lists().list(None).await? {
///     Outcome::Record(page) => {
///         for list in &page.result {
///             println!("{:?}: {:?}", list.id, list.name);
///         }
///     }
///     Outcome::Errors(errors) => eprintln!("provider rejected the call: {:?}", errors),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http_client: reqwest::Client,
    base_url: Url,
    api_key: String,
    on_behalf_of: Option<String>,
}

impl Client {
    /// Creates a new `ClientBuilder` for configuring a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Creates a client with the given API key and default settings.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// The contacts resource.
    pub fn contacts(&self) -> Contacts<'_> {
        Contacts::new(self)
    }

    /// The contact lists resource.
    pub fn lists(&self) -> Lists<'_> {
        Lists::new(self)
    }

    /// The custom field definitions resource.
    pub fn custom_fields(&self) -> CustomFields<'_> {
        CustomFields::new(self)
    }

    /// The designs resource.
    pub fn designs(&self) -> Designs<'_> {
        Designs::new(self)
    }

    /// The single sends (one-time campaigns) resource.
    pub fn single_sends(&self) -> SingleSends<'_> {
        SingleSends::new(self)
    }

    /// The verified senders resource.
    pub fn senders(&self) -> Senders<'_> {
        Senders::new(self)
    }

    /// The unsubscribe (suppression) groups resource.
    pub fn suppression_groups(&self) -> SuppressionGroups<'_> {
        SuppressionGroups::new(self)
    }

    /// The campaign statistics resource.
    pub fn stats(&self) -> Stats<'_> {
        Stats::new(self)
    }

    /// The test sends resource.
    pub fn test_sends(&self) -> TestSends<'_> {
        TestSends::new(self)
    }

    /// Issues one signed request and returns whatever the server sent back.
    ///
    /// Exactly one network round-trip per call; no retries. Any response the
    /// server produced — including 4xx/5xx — comes back as `Ok(RawResponse)`
    /// so the caster can inspect the body uniformly; only failures with no
    /// response at all (DNS, connect, TLS) become [`Error::Network`].
    pub(crate) async fn request<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<&B>,
    ) -> Result<RawResponse>
    where
        B: Serialize + ?Sized,
    {
        let mut url = self.inner.base_url.clone();
        url.set_path(path);
        for (key, value) in query {
            url.query_pairs_mut().append_pair(key, value);
        }

        tracing::debug!(
            method = %method,
            url = %url,
            "Executing HTTP request"
        );

        let mut request = self
            .inner
            .http_client
            .request(method, url)
            .bearer_auth(&self.inner.api_key);

        if let Some(subuser) = &self.inner.on_behalf_of {
            request = request.header(ON_BEHALF_OF, subuser);
        }

        if let Some(body) = body {
            let json = serde_json::to_value(body)
                .map_err(|e| Error::SerializationFailed(e.to_string()))?;
            request = request.json(&json);
        }

        let response = request.send().await?;
        self.capture(response).await
    }

    /// Issues an unsigned PUT to an absolute, pre-signed URL.
    ///
    /// Used by the contact import flow: the upload target carries its own
    /// authorization, so the API key and on-behalf-of headers are not sent.
    pub(crate) async fn raw_put(
        &self,
        uri: &str,
        headers: &[(String, String)],
        body: Vec<u8>,
    ) -> Result<RawResponse> {
        let url = Url::parse(uri)?;

        tracing::debug!(url = %url, "Uploading to pre-signed URL");

        let mut request = self.inner.http_client.put(url).body(body);
        for (name, value) in headers {
            let name = HeaderName::try_from(name.as_str())
                .map_err(|e| Error::ConfigurationError(format!("Invalid header name: {}", e)))?;
            let value = HeaderValue::try_from(value.as_str())
                .map_err(|e| Error::ConfigurationError(format!("Invalid header value: {}", e)))?;
            request = request.header(name, value);
        }

        let response = request.send().await?;
        self.capture(response).await
    }

    /// Drains a reqwest response into a [`RawResponse`], logging by severity.
    async fn capture(&self, response: reqwest::Response) -> Result<RawResponse> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;

        if status.is_server_error() {
            tracing::warn!(status = status.as_u16(), response = %body, "Server error (5xx)");
        } else if status.is_client_error() {
            tracing::debug!(status = status.as_u16(), response = %body, "Client error (4xx)");
        } else {
            tracing::info!(status = status.as_u16(), "Received HTTP response");
        }

        Ok(RawResponse::new(status, headers, body))
    }
}

/// Builder for configuring and creating a [`Client`].
///
/// # Examples
///
/// ```no_run
/// use sendgrid_marketing::ClientBuilder;
///
/// # fn example() -> Result<(), sendgrid_marketing::Error> {
/// let client = ClientBuilder::new()
///     .api_key("SG.key")
///     .on_behalf_of("subuser-username")
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    api_key: Option<String>,
    base_url: Option<Url>,
    on_behalf_of: Option<String>,
}

impl ClientBuilder {
    /// Creates a new `ClientBuilder` with default settings.
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: None,
            on_behalf_of: None,
        }
    }

    /// Sets the API key. Required.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Overrides the base URL (defaults to [`DEFAULT_BASE_URL`]).
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn base_url(mut self, url: impl AsRef<str>) -> Result<Self> {
        self.base_url = Some(Url::parse(url.as_ref())?);
        Ok(self)
    }

    /// Sets the subuser to act on behalf of. Every request will carry the
    /// impersonation header alongside the bearer token.
    pub fn on_behalf_of(mut self, subuser: impl Into<String>) -> Self {
        self.on_behalf_of = Some(subuser.into());
        self
    }

    /// Builds the configured `Client`.
    ///
    /// # Errors
    ///
    /// Returns an error if no API key was provided or the underlying HTTP
    /// client cannot be constructed. No credential means no client: every
    /// call made through a built client is guaranteed to be signed.
    pub fn build(self) -> Result<Client> {
        let api_key = self
            .api_key
            .ok_or_else(|| Error::ConfigurationError("An API key is required".to_string()))?;

        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let http_client = reqwest::Client::builder().build().map_err(|e| {
            Error::ConfigurationError(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(Client {
            inner: Arc::new(ClientInner {
                http_client,
                base_url,
                api_key,
                on_behalf_of: self.on_behalf_of,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Accumulates query parameters, omitting absent optional values entirely
/// rather than serializing them as literal nulls.
#[derive(Debug, Default)]
pub(crate) struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, key: &'static str, value: impl Into<String>) {
        self.pairs.push((key, value.into()));
    }

    pub(crate) fn push_opt(&mut self, key: &'static str, value: Option<impl ToString>) {
        if let Some(value) = value {
            self.pairs.push((key, value.to_string()));
        }
    }

    pub(crate) fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }
}

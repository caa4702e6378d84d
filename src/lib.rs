//! # sendgrid-marketing - a typed Marketing Campaigns API client
//!
//! A type-safe client for the SendGrid Marketing Campaigns REST API, built
//! on top of `reqwest`. It covers contacts, lists, custom fields, designs,
//! single sends, senders, suppression groups, statistics, and test sends,
//! and it surfaces provider error payloads as structured values instead of
//! raising on non-2xx.
//!
//! ## Quick Start
//!
//! ```no_run
//! use sendgrid_marketing::{Client, Outcome};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sendgrid_marketing::Error> {
//!     let client = Client::builder()
//!         .api_key(std::env::var("SENDGRID_API_KEY").unwrap())
//!         .build()?;
//!
//!     // Create a list
//!     match client.lists().create("Newsletter").await? {
//!         Outcome::Record(list) => println!("created list {:?}", list.id),
//!         Outcome::Errors(errors) => {
//!             for e in &errors.errors {
//!                 eprintln!("{} (field {:?})", e.message, e.field);
//!             }
//!         }
//!     }
//!
//!     // Page through contacts (single page)
//!     if let Outcome::Record(page) = client.contacts().list().await? {
//!         println!("{} contacts total", page.contact_count.unwrap_or(0));
//!         for contact in &page.result {
//!             println!("{:?}", contact.email);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error model
//!
//! Every method that talks to the network returns
//! `Result<Outcome<T>, Error>`, and the two layers mean different things:
//!
//! - [`Outcome`] discriminates *what the provider said*: either the expected
//!   record, or a structured error report ([`ApiErrors`]) carrying the HTTP
//!   status and one entry per problem. A 400 with an error body is an
//!   `Outcome::Errors`, not an `Err` — branch on the shape, don't catch.
//! - [`Error`] is reserved for the machinery: connection failures
//!   ([`Error::Network`]), bodies that would not decode, bad configuration,
//!   and local argument validation that fails before any network call.
//!
//! The client performs no retries, no rate limiting, and exactly one network
//! round-trip per call (two for the bulk contact import, which uploads to a
//! pre-signed URL after the API call). Timeouts are whatever the underlying
//! transport defaults to.
//!
//! ## Acting on behalf of a subuser
//!
//! ```no_run
//! use sendgrid_marketing::Client;
//!
//! # fn example() -> Result<(), sendgrid_marketing::Error> {
//! let client = Client::builder()
//!     .api_key("SG.key")
//!     .on_behalf_of("subuser-username")
//!     .build()?;
//! # Ok(())
//! # }
//! ```

pub mod cast;
mod client;
pub mod contacts;
pub mod designs;
mod error;
pub mod fields;
mod json;
pub mod lists;
mod response;
pub mod senders;
pub mod singlesends;
pub mod stats;
pub mod suppressions;
pub mod test_send;

pub use cast::{ApiError, ApiErrors, Outcome, Page, PageMetadata};
pub use client::{Client, ClientBuilder, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use response::RawResponse;

#![deny(clippy::all, clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]
//! # sankaku
//!
//! sankaku is a convenient wrapper library around the Sankaku Complex
//! beta API.
//!
//! This library can:
//! - authenticate with a login and password, silently renewing the
//!   access token whenever it expires
//! - search [`Submission`]s and [`Book`]s with structured filters
//! - fetch users, comments and private messages
//! - favorite and vote on submissions, books and comments
//!
//! ## Example: printing the newest original submissions.
//!
//! ```no_run
//! use sankaku::search::SubmissionQuery;
//! use sankaku::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sankaku::error::Error> {
//!     let mut client = Client::new();
//!
//!     let query = SubmissionQuery {
//!         tags: vec!["original".to_string()],
//!         ..SubmissionQuery::default()
//!     };
//!     let page = client.search_submissions(&query).await?;
//!
//!     for post in page.iter() {
//!         println!("#{} [{}]", post.id(), post.rating().unwrap_or("?"));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Logging in unlocks the account-bound calls and enriches search
//! results with per-viewer fields:
//!
//! ```no_run
//! # use sankaku::{search::LikeQuery, Client};
//! # async fn run(client: &mut Client) -> Result<(), sankaku::error::Error> {
//! client.login("user", "hunter2").await?;
//! client.like(&LikeQuery::new(24_838_772)).await?;
//! # Ok(())
//! # }
//! ```
//!
//! [`Submission`]: crate::post::Submission
//! [`Book`]:       crate::book::Book

/// Client module contains the [`Client`] holding the session and
/// dispatching every request.
pub mod client;

/// Contains the [`Error`] type returned by the library.
///
/// [`Error`]: crate::error::Error
pub mod error;

/// Request configuration for searches and interactions.
pub mod search;

pub(crate) mod auth;

pub(crate) mod models;

pub(crate) mod result;

pub use client::{Client, UserQuery};
pub use models::*;

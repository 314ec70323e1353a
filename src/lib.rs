/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # AppNexus Client
//!
//! A client for the AppNexus REST API.
//!
//! The crate is organised in layers:
//! - [`model`] holds the wire types, the envelope codec, the rate snapshot and
//!   the HTTP transport ([`model::http::HttpClient`]).
//! - [`presentation`] holds the resource entities (members, segments, users,
//!   member data sharing).
//! - [`application`] holds configuration, the service traits and their
//!   implementations, and the [`application::client::Client`] facade.
//!
//! ## Example
//! ```ignore
//! use appnexus_client::prelude::*;
//!
//! let client = Client::connect(Config::new()).await?;
//! let member = client.members().get_default().await?;
//! let page = client
//!     .segments()
//!     .list(member.id, Some(&ListOptions::new(0, 20)))
//!     .await?;
//! ```

/// Application layer: configuration, authentication, services
pub mod application;
/// Library wide constants
pub mod constants;
/// Error type shared by every operation
pub mod error;
/// Wire models, envelope codec, rate tracking and HTTP transport
pub mod model;
/// Convenience re-exports
pub mod prelude;
/// Resource entities returned by the API
pub mod presentation;
/// Logging and environment helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Session handling for the AppNexus API
//!
//! The auth service answers a successful login with a session cookie. Its
//! value is sent back verbatim in the `Authorization` header of every later
//! call. Sessions are not refreshed; a new login replaces the old token.

use chrono::{DateTime, Utc};

/// Session information for authenticated requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Token sent as `Authorization` header
    pub token: String,
    /// Login the session belongs to
    pub username: String,
    /// When the login happened
    pub logged_in_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session stamped with the current time
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            username: username.into(),
            logged_in_at: Utc::now(),
        }
    }

    /// Seconds since login
    #[must_use]
    pub fn age_seconds(&self) -> i64 {
        (Utc::now() - self.logged_in_at).num_seconds()
    }
}

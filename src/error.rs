/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Error type for the AppNexus client
//!
//! Every fallible operation returns [`AppError`]. Transport failures, protocol
//! failures and caller mistakes each get their own variant so callers can
//! decide what is worth retrying.

use crate::constants::API_ERROR_SOURCE;
use reqwest::StatusCode;
use std::fmt;

/// Errors returned by the AppNexus client
#[derive(Debug)]
pub enum AppError {
    /// The server could not be reached or the request did not complete
    Connection(String),
    /// The response body could not be read in full
    BodyRead(String),
    /// The server answered with a status outside 200-299
    HttpStatus(StatusCode),
    /// The server answered with an error envelope
    Api {
        /// Machine readable error identifier, e.g. `SYNTAX`
        error_id: String,
        /// Human readable error message
        error: String,
        /// Longer description, when the server provides one
        description: Option<String>,
        /// Numeric or symbolic error code, when the server provides one
        code: Option<String>,
    },
    /// A payload did not match the expected shape
    Deserialization(String),
    /// A request body could not be encoded
    Serialization(String),
    /// The request could not be built (bad path, bad base URL, bad header)
    InvalidRequest(String),
    /// A caller side precondition was violated
    InvalidInput(String),
    /// Login failed or produced no session token
    Authentication(String),
    /// The response did not contain the requested resource
    NotFound,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Connection(msg) => write!(f, "connection error: {msg}"),
            AppError::BodyRead(msg) => write!(f, "body read error: {msg}"),
            AppError::HttpStatus(status) => write!(f, "http status error: {status}"),
            AppError::Api {
                error_id, error, ..
            } => write!(f, "{API_ERROR_SOURCE}:checkResponse [{error_id}]: {error}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
            AppError::Serialization(msg) => write!(f, "serialization error: {msg}"),
            AppError::InvalidRequest(msg) => write!(f, "invalid request: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Authentication(msg) => write!(f, "authentication error: {msg}"),
            AppError::NotFound => write!(f, "not found"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            AppError::InvalidRequest(err.to_string())
        } else if err.is_body() || err.is_decode() {
            AppError::BodyRead(err.to_string())
        } else {
            AppError::Connection(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Deserialization(err.to_string())
    }
}

impl AppError {
    /// Returns true for failures that happened before a response was received
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::Connection(_) | AppError::BodyRead(_))
    }
}

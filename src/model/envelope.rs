/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Response envelope codec
//!
//! Every AppNexus response is wrapped as `{"response": {...}}`. Errors come
//! back in the same wrapper, sometimes with a 200 status, so each body goes
//! through [`check_response`] before the typed payload is decoded.

use crate::error::AppError;
use crate::model::rate::Rate;
use crate::model::responses::{ApiResponse, Envelope};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Error variant of the response envelope
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Wrapped error fields
    #[serde(default)]
    pub response: ErrorBody,
}

/// Fields the server sends when a call fails
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Call status, `error` on failures
    #[serde(default)]
    pub status: Option<String>,
    /// Error identifier, e.g. `SYNTAX` or `NOAUTH`
    #[serde(default)]
    pub error_id: Option<String>,
    /// Error message
    #[serde(default)]
    pub error: Option<String>,
    /// Longer description
    #[serde(default)]
    pub error_description: Option<String>,
    /// Error code
    #[serde(default)]
    pub error_code: Option<String>,
    /// Service that produced the error
    #[serde(default)]
    pub service: Option<String>,
    /// Rate limit snapshot
    #[serde(rename = "dbg_info", default)]
    pub rate: Rate,
}

impl ErrorBody {
    /// Converts the body into an [`AppError::Api`] when it carries an error
    #[must_use]
    pub fn into_error(self) -> Option<AppError> {
        let error_id = self.error_id.unwrap_or_default();
        let error = self.error.unwrap_or_default();
        if error_id.is_empty() && error.is_empty() {
            return None;
        }
        Some(AppError::Api {
            error_id,
            error,
            description: self.error_description.filter(|d| !d.is_empty()),
            code: self.error_code.filter(|c| !c.is_empty()),
        })
    }
}

/// Classifies a response as success or failure
///
/// A status outside 200-299 fails with [`AppError::HttpStatus`] whatever the
/// body holds. Otherwise a non empty body must decode as an envelope, and a
/// non empty `error_id` or `error` turns it into [`AppError::Api`].
pub fn check_response(status: StatusCode, body: &[u8]) -> Result<(), AppError> {
    if !status.is_success() {
        return Err(AppError::HttpStatus(status));
    }

    if body.trim_ascii().is_empty() {
        return Ok(());
    }

    let envelope: ErrorEnvelope = decode(body)?;
    match envelope.response.into_error() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Decodes a JSON body into `T`
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    Ok(serde_json::from_slice(body)?)
}

/// Decodes a success envelope and returns its inner response
pub fn decode_envelope<P: DeserializeOwned>(body: &[u8]) -> Result<ApiResponse<P>, AppError> {
    let envelope: Envelope<P> = decode(body)?;
    Ok(envelope.response)
}

#[derive(Deserialize)]
struct RateProbe {
    #[serde(default)]
    response: Option<RateProbeBody>,
}

#[derive(Deserialize)]
struct RateProbeBody {
    #[serde(default)]
    dbg_info: Option<Rate>,
}

/// Extracts the rate snapshot from a body
///
/// Bodies without a `dbg_info` block, or that are not JSON at all, give an
/// empty snapshot, meaning no limit is known.
#[must_use]
pub fn rate_from_body(body: &[u8]) -> Rate {
    serde_json::from_slice::<RateProbe>(body)
        .ok()
        .and_then(|probe| probe.response)
        .and_then(|response| response.dbg_info)
        .unwrap_or_default()
}

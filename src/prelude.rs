/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Prelude
//!
//! Commonly used types and traits, importable with a single line:
//!
//! ```ignore
//! use appnexus_client::prelude::*;
//! ```

// ============================================================================
// CORE CLIENT
// ============================================================================

/// Client facade
pub use crate::application::client::Client;

/// Session handling
pub use crate::application::auth::Session;

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Configuration types
pub use crate::application::config::{Config, Credentials, RestApiConfig};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type
pub use crate::error::AppError;

// ============================================================================
// SERVICES
// ============================================================================

/// Service traits
pub use crate::application::interfaces::member::MemberService;
pub use crate::application::interfaces::member_sharing::MemberSharingService;
pub use crate::application::interfaces::segment::SegmentService;

/// Service implementations
pub use crate::application::services::{
    MemberServiceImpl, MemberSharingServiceImpl, SegmentServiceImpl,
};

// ============================================================================
// TRANSPORT
// ============================================================================

/// HTTP transport
pub use crate::model::http::{HttpClient, HttpResponse};

/// Envelope codec
pub use crate::model::envelope::{ErrorBody, ErrorEnvelope, check_response};

/// Rate tracking
pub use crate::application::rate_limiter::RateLimiter;
pub use crate::model::rate::{Rate, RateClass};

// ============================================================================
// MODELS
// ============================================================================

/// Requests and responses
pub use crate::model::requests::{ListOptions, add_options};
pub use crate::model::responses::{
    ApiResponse, Envelope, MemberPayload, MemberSharingPayload, NoPayload, Page, SegmentPayload,
};

/// Resource entities
pub use crate::presentation::{Member, MemberSharing, Segment, SharedSegment, User};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use chrono::{DateTime, Utc};
pub use reqwest::{Method, StatusCode};
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};

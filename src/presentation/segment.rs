/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Audience segment owned by a member
#[derive(Debug, Clone, Default, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct Segment {
    /// Segment identifier, assigned by the server on creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Whether the segment is active
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Caller defined code used to reference the segment in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Lifecycle state, e.g. `active` or `inactive`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Display name
    #[serde(default)]
    pub short_name: String,
    /// Free text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Owning member
    #[serde(default)]
    pub member_id: u64,
    /// Category label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Minutes a user stays in the segment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expire_minutes: Option<u32>,
    /// Advertiser the segment is scoped to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advertiser_id: Option<u64>,
    /// Last modification timestamp as reported by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Data provider name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Parent segment, for hierarchical segments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_segment_id: Option<u64>,
}

impl Segment {
    /// Creates a segment with the fields required for creation
    #[must_use]
    pub fn new(member_id: u64, short_name: impl Into<String>) -> Self {
        Self {
            member_id,
            short_name: short_name.into(),
            ..Self::default()
        }
    }

    /// Returns the identifier when it has been assigned
    #[must_use]
    pub fn assigned_id(&self) -> Option<u64> {
        self.id.filter(|id| *id > 0)
    }

    /// Returns the identifier or fails if the segment was never created
    pub fn require_id(&self, operation: &str) -> Result<u64, AppError> {
        self.assigned_id().ok_or_else(|| {
            AppError::InvalidInput(format!(
                "{operation} segment requires a segment to have an ID already"
            ))
        })
    }
}

use crate::error::AppError;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Segment exposed to a buyer through a data sharing record
#[derive(Debug, Clone, Default, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct SharedSegment {
    /// Segment identifier
    pub id: u64,
    /// Segment name, filled in by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Data sharing agreement between the member and a buyer member
#[derive(Debug, Clone, Default, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct MemberSharing {
    /// Sharing record identifier, assigned by the server on creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Member receiving the data
    #[serde(default)]
    pub buyer_member_id: u64,
    /// `all` to share every segment, `list` to share only `segments`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment_exposure: Option<String>,
    /// Shared segments when the exposure is `list`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segments: Option<Vec<SharedSegment>>,
}

impl MemberSharing {
    /// Returns the identifier or fails if the record was never created
    pub fn require_id(&self, operation: &str) -> Result<u64, AppError> {
        self.id.filter(|id| *id > 0).ok_or_else(|| {
            AppError::InvalidInput(format!(
                "{operation} member data sharing requires a record to have an ID already"
            ))
        })
    }
}

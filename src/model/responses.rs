/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::model::rate::Rate;
use crate::presentation::member::Member;
use crate::presentation::member_sharing::MemberSharing;
use crate::presentation::segment::Segment;
use serde::{Deserialize, Serialize};

/// Outer wrapper of every success response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<P = NoPayload> {
    /// Wrapped response
    pub response: ApiResponse<P>,
}

/// Common fields of a success response plus a resource specific payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<P = NoPayload> {
    /// Call status, `OK` on success
    #[serde(default)]
    pub status: String,
    /// Identifier of the created or updated object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Session token, returned by the auth service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Service that handled the call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    /// Service method that handled the call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Total number of objects matching a list call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    /// Offset of the first returned object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_element: Option<u64>,
    /// Number of objects returned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_elements: Option<u64>,
    /// Rate limit snapshot
    #[serde(rename = "dbg_info", default)]
    pub rate: Rate,
    /// Resource specific keys
    #[serde(flatten)]
    pub payload: P,
}

impl<P> ApiResponse<P> {
    /// True when the server reported status `OK`
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("OK")
    }

    /// Wraps list items with the paging fields of this response
    #[must_use]
    pub fn page<T>(&self, items: Vec<T>) -> Page<T> {
        Page {
            items,
            count: self.count,
            start_element: self.start_element,
            num_elements: self.num_elements,
        }
    }
}

/// Payload for calls that return no resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoPayload {}

/// Payload of the member service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberPayload {
    /// Requested member
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member: Option<Member>,
}

/// Payload of the segment service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentPayload {
    /// Single segment, for get, add and update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment: Option<Segment>,
    /// Segment list, for list calls
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segments: Option<Vec<Segment>>,
}

/// Payload of the member data sharing service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberSharingPayload {
    /// Single sharing record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_data_sharing: Option<MemberSharing>,
    /// Sharing record list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_data_sharings: Option<Vec<MemberSharing>>,
}

/// One page of a list call
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Returned objects
    pub items: Vec<T>,
    /// Total number of matching objects
    pub count: Option<u64>,
    /// Offset of the first returned object
    pub start_element: Option<u64>,
    /// Number of objects returned
    pub num_elements: Option<u64>,
}

impl<T> Page<T> {
    /// True when the page holds no objects
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of objects on this page
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

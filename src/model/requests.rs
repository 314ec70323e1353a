/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::presentation::member_sharing::MemberSharing;
use crate::presentation::segment::Segment;
use serde::Serialize;

/// Paging and filtering options for list calls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Offset of the first object to return
    pub start_element: u32,
    /// Maximum number of objects to return
    pub num_elements: u32,
    /// Only return active objects
    pub active: bool,
}

impl ListOptions {
    /// Creates options for one page
    #[must_use]
    pub fn new(start_element: u32, num_elements: u32) -> Self {
        Self {
            start_element,
            num_elements,
            active: false,
        }
    }

    /// Restricts the listing to active objects
    #[must_use]
    pub fn active_only(mut self) -> Self {
        self.active = true;
        self
    }

    /// Query parameters for these options; zero and false values are left out
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if self.start_element > 0 {
            pairs.push(("start_element", self.start_element.to_string()));
        }
        if self.num_elements > 0 {
            pairs.push(("num_elements", self.num_elements.to_string()));
        }
        if self.active {
            pairs.push(("active", "true".to_string()));
        }
        pairs
    }

    /// Encoded query string, empty when no option is set
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.query_pairs()
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Appends list options to a relative path
#[must_use]
pub fn add_options(path: &str, options: Option<&ListOptions>) -> String {
    let query = options.map(ListOptions::to_query_string).unwrap_or_default();
    if query.is_empty() {
        return path.to_string();
    }
    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{path}{separator}{query}")
}

/// Login credentials as sent to the auth service
#[derive(Debug, Serialize)]
pub struct AuthCredentials<'a> {
    /// Login name
    pub username: &'a str,
    /// Password
    pub password: &'a str,
}

/// Body of `POST auth`
#[derive(Debug, Serialize)]
pub struct AuthRequest<'a> {
    /// Wrapped credentials
    pub auth: AuthCredentials<'a>,
}

impl<'a> AuthRequest<'a> {
    /// Creates a login body
    #[must_use]
    pub fn new(username: &'a str, password: &'a str) -> Self {
        Self {
            auth: AuthCredentials { username, password },
        }
    }
}

/// Body of segment add, update and delete calls
#[derive(Debug, Serialize)]
pub struct SegmentRequest<'a> {
    /// Wrapped segment
    pub segment: &'a Segment,
}

/// Body of member data sharing add and update calls
#[derive(Debug, Serialize)]
pub struct MemberSharingRequest<'a> {
    /// Wrapped sharing record
    pub member_data_sharing: &'a MemberSharing,
}

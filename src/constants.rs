/// Default AppNexus REST endpoint (sandbox)
pub const DEFAULT_END_POINT: &str = "http://sand.api.appnexus.com/";
/// User agent string sent with every request
pub const USER_AGENT: &str = "github.com/adwww/appnexus go-appnexus-client";
/// Source tag used when formatting API error envelopes
pub const API_ERROR_SOURCE: &str = "AppNexus";
/// Default timeout in seconds for REST requests
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
/// Path of the authentication service
pub const AUTH_PATH: &str = "auth";
/// Path of the member service
pub const MEMBER_PATH: &str = "member";
/// Path of the segment service
pub const SEGMENT_PATH: &str = "segment";
/// Path of the member data sharing service
pub const MEMBER_SHARING_PATH: &str = "member-data-sharing";

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// Response envelope codec and error detection
pub mod envelope;
/// HTTP transport with authentication and rate tracking
pub mod http;
/// Server declared rate limit snapshot
pub mod rate;
/// Request bodies and list options
pub mod requests;
/// Response envelopes and payloads
pub mod responses;

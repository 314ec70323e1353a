/// Module containing the member service
pub mod member_service;
/// Module containing the member data sharing service
pub mod member_sharing_service;
/// Module containing the segment service
pub mod segment_service;

pub use crate::application::interfaces::member::*;
pub use crate::application::interfaces::member_sharing::*;
pub use crate::application::interfaces::segment::*;
pub use member_service::*;
pub use member_sharing_service::*;
pub use segment_service::*;

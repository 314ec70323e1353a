/// Member service interface
pub mod member;
/// Member data sharing service interface
pub mod member_sharing;
/// Segment service interface
pub mod segment;

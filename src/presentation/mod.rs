/// Member (top level account) models
pub mod member;
/// Member data sharing models
pub mod member_sharing;
/// Audience segment models
pub mod segment;
/// Console user models
pub mod user;

pub use member::*;
pub use member_sharing::*;
pub use segment::*;
pub use user::*;

use crate::error::AppError;
use crate::presentation::member::Member;
use async_trait::async_trait;

/// Interface for the member service
#[async_trait]
pub trait MemberService: Send + Sync {
    /// Gets a member by id
    ///
    /// An id of `0` asks for the member of the logged in user.
    async fn get(&self, member_id: u64) -> Result<Member, AppError>;

    /// Gets the member of the logged in user and makes it the working member
    async fn get_default(&self) -> Result<Member, AppError>;
}

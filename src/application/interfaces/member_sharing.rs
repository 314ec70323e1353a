use crate::error::AppError;
use crate::model::requests::ListOptions;
use crate::model::responses::{ApiResponse, MemberSharingPayload, Page};
use crate::presentation::member_sharing::MemberSharing;
use async_trait::async_trait;

/// Interface for the member data sharing service
#[async_trait]
pub trait MemberSharingService: Send + Sync {
    /// Gets one sharing record
    async fn get(&self, sharing_id: u64) -> Result<MemberSharing, AppError>;

    /// Lists the sharing records of the logged in member
    async fn list(&self, options: Option<&ListOptions>) -> Result<Page<MemberSharing>, AppError>;

    /// Creates a sharing record and writes the assigned id back
    async fn add(
        &self,
        sharing: &mut MemberSharing,
    ) -> Result<ApiResponse<MemberSharingPayload>, AppError>;

    /// Updates an existing sharing record
    async fn update(
        &self,
        sharing: &MemberSharing,
    ) -> Result<ApiResponse<MemberSharingPayload>, AppError>;

    /// Deletes an existing sharing record
    async fn delete(&self, sharing: &MemberSharing) -> Result<(), AppError>;
}

use crate::error::AppError;
use crate::model::requests::ListOptions;
use crate::model::responses::{ApiResponse, Page, SegmentPayload};
use crate::presentation::segment::Segment;
use async_trait::async_trait;

/// Interface for the segment service
#[async_trait]
pub trait SegmentService: Send + Sync {
    /// Gets one segment of a member
    async fn get(&self, member_id: u64, segment_id: u64) -> Result<Segment, AppError>;

    /// Lists the segments of a member
    ///
    /// # Arguments
    /// * `member_id` - Owning member
    /// * `options` - Paging and filtering, `None` for the server defaults
    async fn list(
        &self,
        member_id: u64,
        options: Option<&ListOptions>,
    ) -> Result<Page<Segment>, AppError>;

    /// Creates a segment
    ///
    /// On success the id assigned by the server is written back into `segment`.
    async fn add(
        &self,
        member_id: u64,
        segment: &mut Segment,
    ) -> Result<ApiResponse<SegmentPayload>, AppError>;

    /// Updates an existing segment; fails without a request if it has no id
    async fn update(
        &self,
        member_id: u64,
        segment: &Segment,
    ) -> Result<ApiResponse<SegmentPayload>, AppError>;

    /// Deletes an existing segment; fails without a request if it has no id
    async fn delete(&self, member_id: u64, segment: &Segment) -> Result<(), AppError>;
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::interfaces::segment::SegmentService;
use crate::constants::SEGMENT_PATH;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{ListOptions, SegmentRequest, add_options};
use crate::model::responses::{ApiResponse, Page, SegmentPayload};
use crate::presentation::segment::Segment;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the segment service
pub struct SegmentServiceImpl {
    client: Arc<HttpClient>,
}

impl SegmentServiceImpl {
    /// Creates a new instance of the segment service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SegmentService for SegmentServiceImpl {
    async fn get(&self, member_id: u64, segment_id: u64) -> Result<Segment, AppError> {
        let path = format!("{SEGMENT_PATH}/{member_id}?id={segment_id}");
        info!("Getting segment {} of member {}", segment_id, member_id);

        let response: ApiResponse<SegmentPayload> = self.client.get(&path).await?;
        response.payload.segment.ok_or(AppError::NotFound)
    }

    async fn list(
        &self,
        member_id: u64,
        options: Option<&ListOptions>,
    ) -> Result<Page<Segment>, AppError> {
        let path = add_options(&format!("{SEGMENT_PATH}/{member_id}"), options);
        info!("Listing segments of member {}", member_id);

        let response: ApiResponse<SegmentPayload> = self.client.get(&path).await?;
        let segments = response.payload.segments.clone().unwrap_or_default();

        debug!("Segments obtained: {} segments", segments.len());
        Ok(response.page(segments))
    }

    async fn add(
        &self,
        member_id: u64,
        segment: &mut Segment,
    ) -> Result<ApiResponse<SegmentPayload>, AppError> {
        let path = format!("{SEGMENT_PATH}/{member_id}");
        info!("Adding segment {} to member {}", segment.short_name, member_id);

        let body = SegmentRequest { segment: &*segment };
        let response: ApiResponse<SegmentPayload> = self.client.post(&path, &body).await?;

        if let Some(id) = response.id {
            segment.id = Some(id);
            debug!("Segment created with id {}", id);
        }
        Ok(response)
    }

    async fn update(
        &self,
        member_id: u64,
        segment: &Segment,
    ) -> Result<ApiResponse<SegmentPayload>, AppError> {
        let id = segment.require_id("Update")?;
        let path = format!("{SEGMENT_PATH}/{member_id}?id={id}");
        info!("Updating segment {} of member {}", id, member_id);

        self.client.put(&path, &SegmentRequest { segment }).await
    }

    async fn delete(&self, member_id: u64, segment: &Segment) -> Result<(), AppError> {
        let id = segment.require_id("Delete")?;
        let path = format!("{SEGMENT_PATH}/{member_id}");
        info!("Deleting segment {} of member {}", id, member_id);

        self.client
            .delete_with_body(&path, &SegmentRequest { segment })
            .await?;
        Ok(())
    }
}

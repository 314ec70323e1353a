use crate::application::interfaces::member_sharing::MemberSharingService;
use crate::constants::MEMBER_SHARING_PATH;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{ListOptions, MemberSharingRequest, add_options};
use crate::model::responses::{ApiResponse, MemberSharingPayload, Page};
use crate::presentation::member_sharing::MemberSharing;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the member data sharing service
pub struct MemberSharingServiceImpl {
    client: Arc<HttpClient>,
}

impl MemberSharingServiceImpl {
    /// Creates a new instance of the member data sharing service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MemberSharingService for MemberSharingServiceImpl {
    async fn get(&self, sharing_id: u64) -> Result<MemberSharing, AppError> {
        let path = format!("{MEMBER_SHARING_PATH}?id={sharing_id}");
        info!("Getting member data sharing {}", sharing_id);

        let response: ApiResponse<MemberSharingPayload> = self.client.get(&path).await?;
        let payload = response.payload;
        payload
            .member_data_sharing
            .or_else(|| payload.member_data_sharings.and_then(|list| list.into_iter().next()))
            .ok_or(AppError::NotFound)
    }

    async fn list(&self, options: Option<&ListOptions>) -> Result<Page<MemberSharing>, AppError> {
        let path = add_options(MEMBER_SHARING_PATH, options);
        info!("Listing member data sharings");

        let response: ApiResponse<MemberSharingPayload> = self.client.get(&path).await?;
        let sharings = response
            .payload
            .member_data_sharings
            .clone()
            .unwrap_or_default();

        debug!("Member data sharings obtained: {}", sharings.len());
        Ok(response.page(sharings))
    }

    async fn add(
        &self,
        sharing: &mut MemberSharing,
    ) -> Result<ApiResponse<MemberSharingPayload>, AppError> {
        info!(
            "Adding member data sharing for buyer {}",
            sharing.buyer_member_id
        );

        let body = MemberSharingRequest {
            member_data_sharing: &*sharing,
        };
        let response: ApiResponse<MemberSharingPayload> =
            self.client.post(MEMBER_SHARING_PATH, &body).await?;

        if let Some(id) = response.id {
            sharing.id = Some(id);
        }
        Ok(response)
    }

    async fn update(
        &self,
        sharing: &MemberSharing,
    ) -> Result<ApiResponse<MemberSharingPayload>, AppError> {
        let id = sharing.require_id("Update")?;
        let path = format!("{MEMBER_SHARING_PATH}?id={id}");
        info!("Updating member data sharing {}", id);

        let body = MemberSharingRequest {
            member_data_sharing: sharing,
        };
        self.client.put(&path, &body).await
    }

    async fn delete(&self, sharing: &MemberSharing) -> Result<(), AppError> {
        let id = sharing.require_id("Delete")?;
        let path = format!("{MEMBER_SHARING_PATH}?id={id}");
        info!("Deleting member data sharing {}", id);

        self.client.delete(&path).await?;
        Ok(())
    }
}

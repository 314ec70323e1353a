use crate::application::interfaces::member::MemberService;
use crate::constants::MEMBER_PATH;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::responses::{ApiResponse, MemberPayload};
use crate::presentation::member::Member;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the member service
pub struct MemberServiceImpl {
    client: Arc<HttpClient>,
}

impl MemberServiceImpl {
    /// Creates a new instance of the member service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

/// Path of a member, or of the default member when `member_id` is 0
fn member_path(member_id: u64) -> String {
    if member_id > 0 {
        format!("{MEMBER_PATH}/{member_id}")
    } else {
        MEMBER_PATH.to_string()
    }
}

#[async_trait]
impl MemberService for MemberServiceImpl {
    async fn get(&self, member_id: u64) -> Result<Member, AppError> {
        info!("Getting member {}", member_id);

        let response: ApiResponse<MemberPayload> = self.client.get(&member_path(member_id)).await?;
        let member = response.payload.member.ok_or(AppError::NotFound)?;

        debug!("Member obtained: {} ({})", member.name, member.id);
        Ok(member)
    }

    async fn get_default(&self) -> Result<Member, AppError> {
        let member = self.get(0).await?;
        self.client.set_member_id(member.id).await;
        Ok(member)
    }
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Simplified client for the AppNexus API
//!
//! [`Client`] bundles the configuration, the shared [`HttpClient`] and one
//! instance of each resource service.
//!
//! # Example
//! ```ignore
//! use appnexus_client::prelude::*;
//!
//! let client = Client::connect(Config::new()).await?;
//! let member = client.members().get_default().await?;
//! ```

use crate::application::auth::Session;
use crate::application::config::Config;
use crate::application::services::{
    MemberServiceImpl, MemberSharingServiceImpl, SegmentServiceImpl,
};
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::rate::Rate;
use std::sync::Arc;
use tracing::info;

/// Entry point to the AppNexus API
pub struct Client {
    config: Arc<Config>,
    http_client: Arc<HttpClient>,
    members: MemberServiceImpl,
    segments: SegmentServiceImpl,
    member_sharing: MemberSharingServiceImpl,
}

impl Client {
    /// Creates a client without logging in
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(&config)?);
        Ok(Self::with_http_client(config, http_client))
    }

    /// Creates a client around an existing transport
    pub fn with_http_client(config: Config, http_client: Arc<HttpClient>) -> Self {
        Self {
            config: Arc::new(config),
            members: MemberServiceImpl::new(http_client.clone()),
            segments: SegmentServiceImpl::new(http_client.clone()),
            member_sharing: MemberSharingServiceImpl::new(http_client.clone()),
            http_client,
        }
    }

    /// Creates a client and logs in with the configured credentials
    pub async fn connect(config: Config) -> Result<Self, AppError> {
        let client = Self::new(config)?;
        client.login().await?;
        Ok(client)
    }

    /// Logs in with the configured credentials
    pub async fn login(&self) -> Result<Session, AppError> {
        let credentials = &self.config.credentials;
        self.login_with(&credentials.username, &credentials.password)
            .await
    }

    /// Logs in with explicit credentials
    pub async fn login_with(&self, username: &str, password: &str) -> Result<Session, AppError> {
        let session = self.http_client.login(username, password).await?;
        info!("Connected to {}", self.http_client.base_url());
        Ok(session)
    }

    /// Drops the local session
    pub async fn logout(&self) {
        self.http_client.logout().await;
    }

    /// Member service
    #[must_use]
    pub fn members(&self) -> &MemberServiceImpl {
        &self.members
    }

    /// Segment service
    #[must_use]
    pub fn segments(&self) -> &SegmentServiceImpl {
        &self.segments
    }

    /// Member data sharing service
    #[must_use]
    pub fn member_sharing(&self) -> &MemberSharingServiceImpl {
        &self.member_sharing
    }

    /// Shared transport
    #[must_use]
    pub fn http_client(&self) -> Arc<HttpClient> {
        self.http_client.clone()
    }

    /// Configuration the client was built from
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Working member recorded by [`MemberService::get_default`]
    ///
    /// [`MemberService::get_default`]: crate::application::interfaces::member::MemberService::get_default
    pub async fn member_id(&self) -> Option<u64> {
        self.http_client.member_id().await
    }

    /// Latest rate limit snapshot
    pub async fn rate(&self) -> Rate {
        self.http_client.rate().await
    }
}

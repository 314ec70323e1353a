/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! HTTP transport for the AppNexus API
//!
//! [`HttpClient`] owns the base endpoint, the session token and the latest
//! rate limit snapshot. Every call goes through the same path:
//! - wait if the server declared the verb class exhausted
//! - send the request and read the whole body
//! - run the envelope check and refresh the rate snapshot
//! - decode the payload when the caller asked for one

use crate::application::auth::Session;
use crate::application::config::Config;
use crate::application::rate_limiter::RateLimiter;
use crate::constants::{AUTH_PATH, USER_AGENT};
use crate::error::AppError;
use crate::model::envelope::{check_response, decode, decode_envelope, rate_from_body};
use crate::model::rate::Rate;
use crate::model::requests::AuthRequest;
use crate::model::responses::ApiResponse;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, USER_AGENT as USER_AGENT_HEADER};
use reqwest::{Client, Method, Request, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Response of a call that passed the envelope check
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// `(name, value)` of every cookie set by the response, in header order
    pub cookies: Vec<(String, String)>,
    /// Raw body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Decodes the body into `T`
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        decode(&self.body)
    }

    /// Decodes the body as a success envelope with payload `P`
    pub fn envelope<P: DeserializeOwned>(&self) -> Result<ApiResponse<P>, AppError> {
        decode_envelope(&self.body)
    }

    /// Value of the first cookie set by the response, if it is not empty
    #[must_use]
    pub fn first_cookie_value(&self) -> Option<&str> {
        self.cookies
            .first()
            .map(|(_, value)| value.as_str())
            .filter(|value| !value.is_empty())
    }

    /// Body as text, lossy
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Client for the AppNexus REST API
///
/// Session and rate state live behind [`RwLock`]s so the client can be shared
/// as `Arc<HttpClient>` between services. Calls are expected to be sequential:
/// the rate wait is a check followed by a sleep, not a reservation.
pub struct HttpClient {
    http_client: Client,
    base_url: Url,
    user_agent: String,
    timeout: Option<Duration>,
    session: RwLock<Option<Session>>,
    member_id: RwLock<Option<u64>>,
    rate_limiter: RateLimiter,
}

impl HttpClient {
    /// Creates a client from configuration, without logging in
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let mut client = Self::with_base_url(&config.rest_api.base_url)?;
        client.user_agent = config.rest_api.user_agent.clone();
        client.timeout = config.rest_api.timeout_duration();
        Ok(client)
    }

    /// Creates a client for `base_url` with default settings
    pub fn with_base_url(base_url: &str) -> Result<Self, AppError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| AppError::InvalidRequest(format!("invalid base url {base_url}: {e}")))?;
        let http_client = Client::builder().build()?;

        Ok(Self {
            http_client,
            base_url,
            user_agent: USER_AGENT.to_string(),
            timeout: None,
            session: RwLock::new(None),
            member_id: RwLock::new(None),
            rate_limiter: RateLimiter::new(),
        })
    }

    /// Base endpoint every path is resolved against
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// User agent sent with every request
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Logs in and stores the session token from the response cookie
    ///
    /// # Arguments
    /// * `username` - Console login
    /// * `password` - Console password, only used to build the request body
    ///
    /// # Returns
    /// * `Ok(Session)` - The new session
    /// * `Err(AppError::Authentication)` - If the call fails or no cookie came back
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, AppError> {
        info!("Logging in as {}", username);

        let body = AuthRequest::new(username, password);
        let request = self
            .build_request(Method::POST, AUTH_PATH, Some(&body))
            .await
            .map_err(|e| AppError::Authentication(e.to_string()))?;
        let response = self
            .execute(request)
            .await
            .map_err(|e| AppError::Authentication(e.to_string()))?;

        let token = response.first_cookie_value().ok_or_else(|| {
            AppError::Authentication("no session cookie in login response".to_string())
        })?;

        let session = Session::new(username, token);
        *self.session.write().await = Some(session.clone());

        info!("✓ Login successful as {}", username);
        Ok(session)
    }

    /// Drops the local session
    pub async fn logout(&self) {
        info!("Logging out");
        *self.session.write().await = None;
    }

    /// Current session, if logged in
    pub async fn session(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    /// Current session token, if logged in
    pub async fn token(&self) -> Option<String> {
        self.session
            .read()
            .await
            .as_ref()
            .map(|session| session.token.clone())
    }

    /// True once a login succeeded
    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_some()
    }

    /// Working member, set once the default member has been loaded
    pub async fn member_id(&self) -> Option<u64> {
        *self.member_id.read().await
    }

    /// Sets the working member
    pub async fn set_member_id(&self, member_id: u64) {
        *self.member_id.write().await = Some(member_id);
    }

    /// Latest rate limit snapshot
    pub async fn rate(&self) -> Rate {
        self.rate_limiter.snapshot().await
    }

    /// Rate tracker used by this client
    #[must_use]
    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.rate_limiter
    }

    /// Resolves a path against the base endpoint
    ///
    /// Relative paths are appended to the base path, absolute paths replace it.
    pub fn resolve(&self, path: &str) -> Result<Url, AppError> {
        self.base_url
            .join(path)
            .map_err(|e| AppError::InvalidRequest(format!("invalid path {path}: {e}")))
    }

    /// Builds a request with user agent, authorization and JSON body
    pub async fn build_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Request, AppError> {
        let url = self.resolve(path)?;

        let mut request = self
            .http_client
            .request(method, url)
            .header(USER_AGENT_HEADER, self.user_agent.as_str());

        if let Some(token) = self.token().await {
            request = request.header(AUTHORIZATION, token);
        }

        if let Some(b) = body {
            let bytes = serde_json::to_vec(b).map_err(|e| AppError::Serialization(e.to_string()))?;
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(bytes);
        }

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        request
            .build()
            .map_err(|e| AppError::InvalidRequest(e.to_string()))
    }

    /// Sends a request and runs the envelope check
    ///
    /// Waits first when the latest snapshot says the verb class is exhausted.
    /// On success the rate snapshot is replaced by the one in the body.
    pub async fn execute(&self, request: Request) -> Result<HttpResponse, AppError> {
        self.rate_limiter.wait(request.method()).await;

        debug!("{} {}", request.method(), request.url());

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|e| AppError::Connection(e.to_string()))?;

        let status = response.status();
        debug!("Response status: {}", status);

        let headers = response.headers().clone();
        let cookies = response
            .cookies()
            .map(|cookie| (cookie.name().to_string(), cookie.value().to_string()))
            .collect();
        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::BodyRead(e.to_string()))?
            .to_vec();

        check_response(status, &body)?;
        self.rate_limiter.update(rate_from_body(&body)).await;

        Ok(HttpResponse {
            status,
            headers,
            cookies,
            body,
        })
    }

    /// Sends a request and decodes the body into `T`
    pub async fn execute_json<T: DeserializeOwned>(&self, request: Request) -> Result<T, AppError> {
        self.execute(request).await?.json()
    }

    /// Builds and sends a request without decoding the body
    pub async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<HttpResponse, AppError> {
        let request = self.build_request(method, path, body).await?;
        self.execute(request).await
    }

    /// Builds, sends and decodes a request
    pub async fn request<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, AppError> {
        let request = self.build_request(method, path, body).await?;
        self.execute_json(request).await
    }

    /// Builds, sends and decodes a success envelope with payload `P`
    pub async fn call<B: Serialize + ?Sized, P: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiResponse<P>, AppError> {
        self.send(method, path, body).await?.envelope()
    }

    /// Makes a GET request and decodes the envelope
    pub async fn get<P: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<P>, AppError> {
        self.call(Method::GET, path, None::<&()>).await
    }

    /// Makes a POST request and decodes the envelope
    pub async fn post<B: Serialize + ?Sized, P: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse<P>, AppError> {
        self.call(Method::POST, path, Some(body)).await
    }

    /// Makes a PUT request and decodes the envelope
    pub async fn put<B: Serialize + ?Sized, P: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse<P>, AppError> {
        self.call(Method::PUT, path, Some(body)).await
    }

    /// Makes a DELETE request
    pub async fn delete(&self, path: &str) -> Result<HttpResponse, AppError> {
        self.send(Method::DELETE, path, None::<&()>).await
    }

    /// Makes a DELETE request carrying a JSON body
    pub async fn delete_with_body<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<HttpResponse, AppError> {
        self.send(Method::DELETE, path, Some(body)).await
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url.as_str())
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .finish()
    }
}

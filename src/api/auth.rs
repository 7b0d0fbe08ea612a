use async_trait::async_trait;
use reqwest::Method;
use tracing::info;

use super::ApiClient;
use crate::error::AppResult;
use crate::model::{LoginRequest, RegisterRequest, SessionInformation};

#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST api/auth/login`
    async fn login(&self, req: &LoginRequest) -> AppResult<SessionInformation>;
    /// `POST api/auth/register`
    async fn register(&self, req: &RegisterRequest) -> AppResult<()>;
}

pub struct AuthClient {
    http: ApiClient,
}

impl AuthClient {
    pub fn new(http: ApiClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl AuthApi for AuthClient {
    async fn login(&self, req: &LoginRequest) -> AppResult<SessionInformation> {
        let info: SessionInformation = self.http.post_json("api/auth/login", req).await?;
        info!(target: "api", email = %req.email, id = info.id, "login accepted");
        Ok(info)
    }

    async fn register(&self, req: &RegisterRequest) -> AppResult<()> {
        self.http.send_ack(Method::POST, "api/auth/register", Some(req)).await?;
        info!(target: "api", email = %req.email, "registered");
        Ok(())
    }
}

use async_trait::async_trait;
use reqwest::Method;

use super::ApiClient;
use crate::error::AppResult;
use crate::model::User;

#[async_trait]
pub trait UserApi: Send + Sync {
    async fn get_by_id(&self, id: u64) -> AppResult<User>;
    async fn delete(&self, id: u64) -> AppResult<()>;
}

pub struct UserClient {
    http: ApiClient,
}

impl UserClient {
    pub fn new(http: ApiClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl UserApi for UserClient {
    async fn get_by_id(&self, id: u64) -> AppResult<User> {
        self.http.get_json(&format!("api/user/{}", id)).await
    }

    async fn delete(&self, id: u64) -> AppResult<()> {
        self.http.send_ack(Method::DELETE, &format!("api/user/{}", id), None::<&()>).await
    }
}

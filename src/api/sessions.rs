use async_trait::async_trait;
use reqwest::Method;

use super::ApiClient;
use crate::error::AppResult;
use crate::model::Session;

const PATH: &str = "api/session";

#[async_trait]
pub trait SessionApi: Send + Sync {
    async fn all(&self) -> AppResult<Vec<Session>>;
    async fn detail(&self, id: u64) -> AppResult<Session>;
    async fn create(&self, session: &Session) -> AppResult<Session>;
    async fn update(&self, id: u64, session: &Session) -> AppResult<Session>;
    async fn delete(&self, id: u64) -> AppResult<()>;
    async fn participate(&self, id: u64, user_id: u64) -> AppResult<()>;
    async fn un_participate(&self, id: u64, user_id: u64) -> AppResult<()>;
}

pub struct SessionClient {
    http: ApiClient,
}

impl SessionClient {
    pub fn new(http: ApiClient) -> Self {
        Self { http }
    }
}

fn participation_path(id: u64, user_id: u64) -> String {
    format!("{}/{}/participate/{}", PATH, id, user_id)
}

#[async_trait]
impl SessionApi for SessionClient {
    async fn all(&self) -> AppResult<Vec<Session>> {
        self.http.get_json(PATH).await
    }

    async fn detail(&self, id: u64) -> AppResult<Session> {
        self.http.get_json(&format!("{}/{}", PATH, id)).await
    }

    async fn create(&self, session: &Session) -> AppResult<Session> {
        self.http.post_json(PATH, session).await
    }

    async fn update(&self, id: u64, session: &Session) -> AppResult<Session> {
        self.http.put_json(&format!("{}/{}", PATH, id), session).await
    }

    async fn delete(&self, id: u64) -> AppResult<()> {
        self.http.send_ack(Method::DELETE, &format!("{}/{}", PATH, id), None::<&()>).await
    }

    async fn participate(&self, id: u64, user_id: u64) -> AppResult<()> {
        self.http.send_ack(Method::POST, &participation_path(id, user_id), None::<&()>).await
    }

    async fn un_participate(&self, id: u64, user_id: u64) -> AppResult<()> {
        self.http.send_ack(Method::DELETE, &participation_path(id, user_id), None::<&()>).await
    }
}

use async_trait::async_trait;

use super::ApiClient;
use crate::error::AppResult;
use crate::model::Teacher;

#[async_trait]
pub trait TeacherApi: Send + Sync {
    async fn all(&self) -> AppResult<Vec<Teacher>>;
    async fn detail(&self, id: u64) -> AppResult<Teacher>;
}

pub struct TeacherClient {
    http: ApiClient,
}

impl TeacherClient {
    pub fn new(http: ApiClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl TeacherApi for TeacherClient {
    async fn all(&self) -> AppResult<Vec<Teacher>> {
        self.http.get_json("api/teacher").await
    }

    async fn detail(&self, id: u64) -> AppResult<Teacher> {
        self.http.get_json(&format!("api/teacher/{}", id)).await
    }
}

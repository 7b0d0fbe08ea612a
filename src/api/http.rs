use std::sync::Arc;
use std::time::Instant;

use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{AppError, AppResult};
use crate::identity::SessionStore;

/// Shared HTTP plumbing: base URL, the reqwest client and the session store whose token
/// is attached to every request while an identity is held.
#[derive(Clone)]
pub struct ApiClient {
    base: Url,
    client: reqwest::Client,
    session: Arc<SessionStore>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, session: Arc<SessionStore>) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()?;
        Ok(Self { base: config.api_url.clone(), client, session })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    fn url(&self, path: &str) -> AppResult<Url> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| AppError::internal("invalid_path".to_string(), format!("{}: {}", path, e)))
    }

    fn request(&self, method: Method, path: &str) -> AppResult<RequestBuilder> {
        let url = self.url(path)?;
        let mut req = self.client.request(method, url);
        if let Some(auth) = self.session.authorization() {
            let value = HeaderValue::from_str(&auth)
                .map_err(|_| AppError::auth("invalid_token", "token is not a valid header value"))?;
            req = req.header(AUTHORIZATION, value);
        }
        Ok(req)
    }

    /// Send once; non-2xx statuses become errors carrying the backend message.
    async fn send(&self, req: RequestBuilder) -> AppResult<Response> {
        let req = req.build()?;
        let method = req.method().clone();
        let url = req.url().clone();
        let t0 = Instant::now();
        let resp = match self.client.execute(req).await {
            Ok(r) => r,
            Err(e) => {
                debug!(target: "api", %method, %url, "request failed: {}", e);
                return Err(e.into());
            }
        };
        let status = resp.status();
        debug!(target: "api", %method, %url, status = status.as_u16(), elapsed_ms = t0.elapsed().as_millis() as u64, "response");
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        Err(AppError::from_status(status.as_u16(), &body))
    }

    async fn read_json<T: DeserializeOwned>(resp: Response) -> AppResult<T> {
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let resp = self.send(self.request(Method::GET, path)?).await?;
        Self::read_json(resp).await
    }

    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> AppResult<T> {
        let resp = self.send(self.request(Method::POST, path)?.json(body)).await?;
        Self::read_json(resp).await
    }

    pub async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> AppResult<T> {
        let resp = self.send(self.request(Method::PUT, path)?.json(body)).await?;
        Self::read_json(resp).await
    }

    /// For acknowledgement endpoints: whatever body comes back (empty, `{}`, `null`) is
    /// discarded.
    pub async fn send_ack<B: Serialize + ?Sized>(&self, method: Method, path: &str, body: Option<&B>) -> AppResult<()> {
        let mut req = self.request(method, path)?;
        if let Some(b) = body {
            req = req.json(b);
        }
        let resp = self.send(req).await?;
        let _ = resp.bytes().await?;
        Ok(())
    }
}

//! Mock studio backend: canned (method, path) -> (status, body) intercepts served by axum
//! on an ephemeral port, with a log of every request received.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::Response;
use axum::Router;
use parking_lot::Mutex;
use serde_json::{json, Value};
use tokio::task::JoinHandle;

use yoga_studio::api::{ApiClient, Services};
use yoga_studio::config::ClientConfig;
use yoga_studio::identity::SessionStore;
use yoga_studio::ui::ViewContext;

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub body: String,
}

#[derive(Default)]
struct MockState {
    intercepts: Mutex<HashMap<(String, String), (u16, String)>>,
    log: Mutex<Vec<Recorded>>,
}

pub struct MockBackend {
    pub base: String,
    state: Arc<MockState>,
    handle: JoinHandle<()>,
}

async fn respond(State(state): State<Arc<MockState>>, method: Method, uri: Uri, headers: HeaderMap, body: String) -> Response {
    let path = uri.path().to_string();
    state.log.lock().push(Recorded {
        method: method.to_string(),
        path: path.clone(),
        authorization: headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()).map(str::to_string),
        body,
    });
    let hit = state.intercepts.lock().get(&(method.to_string(), path.clone())).cloned();
    let (status, body) = hit.unwrap_or_else(|| (404, json!({ "message": format!("no intercept for {} {}", method, path) }).to_string()));
    Response::builder()
        .status(StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

impl MockBackend {
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        let app = Router::new().fallback(respond).with_state(Arc::clone(&state));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind 127.0.0.1:0");
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("mock backend error: {e:?}");
            }
        });
        Self { base: format!("http://{}/", addr), state, handle }
    }

    /// `Value::Null` answers with an empty body.
    pub fn intercept(&self, method: &str, path: &str, status: u16, body: Value) {
        let text = if body.is_null() { String::new() } else { body.to_string() };
        self.state.intercepts.lock().insert((method.to_string(), path.to_string()), (status, text));
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.log.lock().clone()
    }

    pub fn count(&self, method: &str, path: &str) -> usize {
        self.state.log.lock().iter().filter(|r| r.method == method && r.path == path).count()
    }

    pub fn last(&self, method: &str, path: &str) -> Option<Recorded> {
        self.state.log.lock().iter().rev().find(|r| r.method == method && r.path == path).cloned()
    }

    /// Resource clients and a fresh view context pointed at this backend.
    pub fn client(&self) -> (Services, ViewContext) {
        let config = ClientConfig::default().with_api_url(&self.base).unwrap();
        let store = Arc::new(SessionStore::new());
        let http = ApiClient::new(&config, Arc::clone(&store)).unwrap();
        (Services::http(http), ViewContext::new(store))
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub fn admin_identity() -> Value {
    json!({
        "id": 1,
        "username": "yoga@studio.com",
        "firstName": "Admin",
        "lastName": "Admin",
        "admin": true,
        "token": "fake-jwt-token",
        "type": "Bearer"
    })
}

pub fn user_identity() -> Value {
    json!({
        "id": 2,
        "username": "john@doe.com",
        "firstName": "John",
        "lastName": "Doe",
        "admin": false,
        "token": "user-jwt-token"
    })
}

pub fn session_json(id: u64, name: &str, users: &[u64]) -> Value {
    json!({
        "id": id,
        "name": name,
        "date": "2026-10-16T00:00:00.000+00:00",
        "teacher_id": 1,
        "description": format!("{} description", name),
        "users": users,
        "createdAt": "2026-10-01T09:30:00",
        "updatedAt": "2026-10-02T09:30:00"
    })
}

pub fn teachers_json() -> Value {
    json!([
        { "id": 1, "firstName": "Margot", "lastName": "DELAHAYE", "createdAt": "2026-01-01T00:00:00", "updatedAt": "2026-01-01T00:00:00" },
        { "id": 2, "firstName": "Hélène", "lastName": "THIERCELIN", "createdAt": "2026-01-01T00:00:00", "updatedAt": "2026-01-01T00:00:00" }
    ])
}

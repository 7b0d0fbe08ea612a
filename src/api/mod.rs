//! REST clients for the studio API.
//!
//! Each resource has a trait (what the view controllers depend on) and an HTTP
//! implementation built on the shared [`ApiClient`]. Every operation issues exactly one
//! request and propagates failures as [`AppError`](crate::error::AppError); nothing is
//! retried.

mod auth;
mod http;
mod sessions;
mod teachers;
mod users;

use std::sync::Arc;

pub use auth::{AuthApi, AuthClient};
pub use http::ApiClient;
pub use sessions::{SessionApi, SessionClient};
pub use teachers::{TeacherApi, TeacherClient};
pub use users::{UserApi, UserClient};

/// One handle per resource, as the view controllers receive them.
#[derive(Clone)]
pub struct Services {
    pub auth: Arc<dyn AuthApi>,
    pub sessions: Arc<dyn SessionApi>,
    pub teachers: Arc<dyn TeacherApi>,
    pub users: Arc<dyn UserApi>,
}

impl Services {
    pub fn http(client: ApiClient) -> Self {
        Self {
            auth: Arc::new(AuthClient::new(client.clone())),
            sessions: Arc::new(SessionClient::new(client.clone())),
            teachers: Arc::new(TeacherClient::new(client.clone())),
            users: Arc::new(UserClient::new(client)),
        }
    }
}

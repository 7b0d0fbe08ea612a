use std::sync::Arc;

use super::{Notifier, Router};
use crate::error::{AppError, AppResult};
use crate::identity::SessionStore;
use crate::model::SessionInformation;

/// State handles passed explicitly to every view controller.
#[derive(Clone)]
pub struct ViewContext {
    pub session: Arc<SessionStore>,
    pub router: Arc<Router>,
    pub notifier: Arc<Notifier>,
}

impl ViewContext {
    pub fn new(session: Arc<SessionStore>) -> Self {
        let router = Arc::new(Router::new(Arc::clone(&session)));
        Self { session, router, notifier: Arc::new(Notifier::new()) }
    }

    /// Identity of the logged-in user, or an auth error for views that need one.
    pub fn require_identity(&self) -> AppResult<SessionInformation> {
        self.session.information().ok_or_else(AppError::not_logged_in)
    }
}

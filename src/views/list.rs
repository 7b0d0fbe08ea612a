use std::sync::Arc;

use crate::api::SessionApi;
use crate::error::AppResult;
use crate::model::{Session, SessionInformation};
use crate::ui::ViewContext;

pub struct ListController {
    sessions_api: Arc<dyn SessionApi>,
    ctx: ViewContext,
    pub sessions: Vec<Session>,
    pub on_error: bool,
}

impl ListController {
    pub fn new(sessions_api: Arc<dyn SessionApi>, ctx: ViewContext) -> Self {
        Self { sessions_api, ctx, sessions: Vec::new(), on_error: false }
    }

    pub async fn load(&mut self) -> AppResult<&[Session]> {
        self.sessions = super::track("list", &mut self.on_error, self.sessions_api.all().await)?;
        self.on_error = false;
        Ok(&self.sessions)
    }

    pub fn user(&self) -> Option<SessionInformation> {
        self.ctx.session.information()
    }

    /// Create button visibility.
    pub fn can_create(&self) -> bool {
        self.ctx.session.is_admin()
    }

    /// Per-session edit button visibility.
    pub fn can_edit(&self) -> bool {
        self.ctx.session.is_admin()
    }

    pub fn error_message(&self) -> Option<&'static str> {
        super::error_text(self.on_error)
    }
}

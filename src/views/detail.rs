use std::sync::Arc;

use crate::api::{SessionApi, TeacherApi};
use crate::error::AppResult;
use crate::model::{Session, Teacher};
use crate::ui::{Notice, Route, ViewContext};

/// Which actions the detail screen offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailButtons {
    pub delete: bool,
    pub participate: bool,
    pub unparticipate: bool,
}

pub struct DetailController {
    sessions_api: Arc<dyn SessionApi>,
    teachers_api: Arc<dyn TeacherApi>,
    ctx: ViewContext,
    pub session_id: u64,
    user_id: u64,
    pub is_admin: bool,
    pub session: Option<Session>,
    pub teacher: Option<Teacher>,
    pub is_participate: bool,
    pub on_error: bool,
}

impl DetailController {
    /// Fails when nobody is logged in.
    pub fn new(
        sessions_api: Arc<dyn SessionApi>,
        teachers_api: Arc<dyn TeacherApi>,
        ctx: ViewContext,
        session_id: u64,
    ) -> AppResult<Self> {
        let me = ctx.require_identity()?;
        Ok(Self {
            sessions_api,
            teachers_api,
            ctx,
            session_id,
            user_id: me.id,
            is_admin: me.admin,
            session: None,
            teacher: None,
            is_participate: false,
            on_error: false,
        })
    }

    pub async fn init(&mut self) -> AppResult<()> {
        self.fetch_session().await
    }

    /// Reload the session, the participation flag and the session's teacher.
    pub async fn fetch_session(&mut self) -> AppResult<()> {
        let session = super::track("detail", &mut self.on_error, self.sessions_api.detail(self.session_id).await)?;
        let teacher =
            super::track("detail", &mut self.on_error, self.teachers_api.detail(session.teacher_id).await)?;
        // only replace the screen state once both reads succeeded
        self.is_participate = session.is_participant(self.user_id);
        self.session = Some(session);
        self.teacher = Some(teacher);
        self.on_error = false;
        Ok(())
    }

    pub async fn delete(&mut self) -> AppResult<Route> {
        super::track("detail", &mut self.on_error, self.sessions_api.delete(self.session_id).await)?;
        self.ctx.notifier.open(Notice::closable("Session deleted !"));
        Ok(self.ctx.router.navigate(Route::Sessions))
    }

    pub async fn participate(&mut self) -> AppResult<()> {
        super::track(
            "detail",
            &mut self.on_error,
            self.sessions_api.participate(self.session_id, self.user_id).await,
        )?;
        self.fetch_session().await
    }

    pub async fn un_participate(&mut self) -> AppResult<()> {
        super::track(
            "detail",
            &mut self.on_error,
            self.sessions_api.un_participate(self.session_id, self.user_id).await,
        )?;
        self.fetch_session().await
    }

    pub fn back(&self) -> Option<Route> {
        self.ctx.router.back()
    }

    /// Admins may only delete; users toggle their participation.
    pub fn buttons(&self) -> DetailButtons {
        DetailButtons {
            delete: self.is_admin,
            participate: !self.is_admin && !self.is_participate,
            unparticipate: !self.is_admin && self.is_participate,
        }
    }

    pub fn error_message(&self) -> Option<&'static str> {
        super::error_text(self.on_error)
    }
}

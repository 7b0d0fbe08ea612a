use std::sync::Arc;

use chrono::{NaiveTime, TimeZone, Utc};

use crate::api::{SessionApi, TeacherApi};
use crate::error::{AppError, AppResult};
use crate::model::{dates, Session, Teacher};
use crate::ui::{Notice, Route, ViewContext};
use crate::validation::{Rule, Validation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update(u64),
}

impl FormMode {
    pub fn from_route(route: Route) -> Option<FormMode> {
        match route {
            Route::SessionCreate => Some(FormMode::Create),
            Route::SessionUpdate(id) => Some(FormMode::Update(id)),
            _ => None,
        }
    }
}

/// Editable fields of a session. `date` is `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionForm {
    pub name: String,
    pub date: String,
    pub teacher_id: Option<u64>,
    pub description: String,
}

impl SessionForm {
    pub fn from_session(session: &Session) -> Self {
        Self {
            name: session.name.clone(),
            date: session.date.format("%Y-%m-%d").to_string(),
            teacher_id: Some(session.teacher_id),
            description: session.description.clone(),
        }
    }

    pub fn validate(&self) -> Validation {
        let teacher = self.teacher_id.map(|t| t.to_string()).unwrap_or_default();
        let mut v = Validation::new();
        v.check("name", &self.name, &[Rule::Required])
            .check("date", &self.date, &[Rule::Required, Rule::Date])
            .check("teacher_id", &teacher, &[Rule::Required])
            .check("description", &self.description, &[Rule::Required, Rule::MaxLength(2000)]);
        v
    }

    /// Build the payload; the date is midnight UTC of the chosen day.
    pub fn to_session(&self, id: Option<u64>, users: Vec<u64>) -> AppResult<Session> {
        self.validate().into_result()?;
        let day = dates::parse_day(&self.date)
            .ok_or_else(|| AppError::validation("invalid_form".to_string(), format!("date {}", Rule::Date)))?;
        let teacher_id = self
            .teacher_id
            .ok_or_else(|| AppError::validation("invalid_form".to_string(), format!("teacher_id {}", Rule::Required)))?;
        Ok(Session {
            id,
            name: self.name.clone(),
            date: Utc.from_utc_datetime(&day.and_time(NaiveTime::MIN)),
            description: self.description.clone(),
            teacher_id,
            users,
            created_at: None,
            updated_at: None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormInit {
    Ready,
    /// Not an admin: sent back to the list without loading anything.
    Redirected(Route),
}

pub struct FormController {
    sessions_api: Arc<dyn SessionApi>,
    teachers_api: Arc<dyn TeacherApi>,
    ctx: ViewContext,
    pub mode: FormMode,
    pub form: SessionForm,
    pub teachers: Vec<Teacher>,
    loaded: Option<Session>,
    pub on_error: bool,
}

impl FormController {
    pub fn new(
        sessions_api: Arc<dyn SessionApi>,
        teachers_api: Arc<dyn TeacherApi>,
        ctx: ViewContext,
        mode: FormMode,
    ) -> Self {
        Self {
            sessions_api,
            teachers_api,
            ctx,
            mode,
            form: SessionForm::default(),
            teachers: Vec::new(),
            loaded: None,
            on_error: false,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Create session",
            FormMode::Update(_) => "Update session",
        }
    }

    pub async fn init(&mut self) -> AppResult<FormInit> {
        if !self.ctx.session.is_admin() {
            return Ok(FormInit::Redirected(self.ctx.router.navigate(Route::Sessions)));
        }
        self.teachers = super::track("form", &mut self.on_error, self.teachers_api.all().await)?;
        if let FormMode::Update(id) = self.mode {
            let session = super::track("form", &mut self.on_error, self.sessions_api.detail(id).await)?;
            self.form = SessionForm::from_session(&session);
            self.loaded = Some(session);
        }
        self.on_error = false;
        Ok(FormInit::Ready)
    }

    pub fn can_submit(&self) -> bool {
        self.form.validate().is_valid()
    }

    pub async fn submit(&mut self) -> AppResult<Route> {
        let users = self.loaded.as_ref().map(|s| s.users.clone()).unwrap_or_default();
        match self.mode {
            FormMode::Create => {
                let session = self.form.to_session(None, users)?;
                super::track("form", &mut self.on_error, self.sessions_api.create(&session).await)?;
                Ok(self.exit_page("Session created !"))
            }
            FormMode::Update(id) => {
                let session = self.form.to_session(Some(id), users)?;
                super::track("form", &mut self.on_error, self.sessions_api.update(id, &session).await)?;
                Ok(self.exit_page("Session updated !"))
            }
        }
    }

    fn exit_page(&self, message: &str) -> Route {
        self.ctx.notifier.open(Notice::closable(message));
        self.ctx.router.navigate(Route::Sessions)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        super::error_text(self.on_error)
    }
}

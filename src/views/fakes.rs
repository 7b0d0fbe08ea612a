//! In-memory stand-ins for the resource clients, recording every call.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use parking_lot::Mutex;

use crate::api::{AuthApi, SessionApi, Services, TeacherApi, UserApi};
use crate::error::{AppError, AppResult};
use crate::identity::SessionStore;
use crate::model::{LoginRequest, RegisterRequest, Session, SessionInformation, Teacher, User};
use crate::ui::ViewContext;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Login(LoginRequest),
    Register(RegisterRequest),
    AllSessions,
    SessionDetail(u64),
    Create(Session),
    Update(u64, Session),
    Delete(u64),
    Participate(u64, u64),
    UnParticipate(u64, u64),
    AllTeachers,
    TeacherDetail(u64),
    UserById(u64),
    DeleteUser(u64),
}

#[derive(Default)]
pub struct FakeBackend {
    calls: Mutex<Vec<Call>>,
    pub identity: Mutex<Option<SessionInformation>>,
    pub sessions: Mutex<Vec<Session>>,
    pub teachers: Mutex<Vec<Teacher>>,
    pub users: Mutex<Vec<User>>,
    /// When set, every call fails with this error.
    pub failure: Mutex<Option<AppError>>,
}

impl FakeBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn fail_with(&self, err: AppError) {
        *self.failure.lock() = Some(err);
    }

    fn record(&self, call: Call) -> AppResult<()> {
        self.calls.lock().push(call);
        match self.failure.lock().clone() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    pub fn services(self: &Arc<Self>) -> Services {
        Services {
            auth: self.clone(),
            sessions: self.clone(),
            teachers: self.clone(),
            users: self.clone(),
        }
    }
}

pub fn identity(id: u64, admin: bool) -> SessionInformation {
    SessionInformation {
        token: "token".into(),
        token_type: "Bearer".into(),
        id,
        username: "test".into(),
        first_name: "Test".into(),
        last_name: "User".into(),
        admin,
    }
}

pub fn session(id: u64, name: &str, teacher_id: u64, users: Vec<u64>) -> Session {
    Session {
        id: Some(id),
        name: name.into(),
        date: Utc.with_ymd_and_hms(2026, 10, 16, 0, 0, 0).unwrap(),
        description: format!("{} description", name),
        teacher_id,
        users,
        created_at: None,
        updated_at: None,
    }
}

pub fn teacher(id: u64, first: &str, last: &str) -> Teacher {
    Teacher { id, first_name: first.into(), last_name: last.into(), created_at: None, updated_at: None }
}

pub fn user(id: u64, admin: bool) -> User {
    User {
        id,
        email: "test@test.com".into(),
        first_name: "Test".into(),
        last_name: "User".into(),
        admin,
        password: None,
        created_at: None,
        updated_at: None,
    }
}

/// Context whose store already holds `info` (or nothing).
pub fn context(info: Option<SessionInformation>) -> ViewContext {
    let store = Arc::new(SessionStore::new());
    if let Some(i) = info {
        store.log_in(i);
    }
    ViewContext::new(store)
}

fn not_found(what: &str, id: u64) -> AppError {
    AppError::not_found("not_found".to_string(), format!("{} {} not found", what, id))
}

#[async_trait]
impl AuthApi for FakeBackend {
    async fn login(&self, req: &LoginRequest) -> AppResult<SessionInformation> {
        self.record(Call::Login(req.clone()))?;
        self.identity.lock().clone().ok_or_else(|| AppError::auth("unauthorized", "Invalid credentials"))
    }

    async fn register(&self, req: &RegisterRequest) -> AppResult<()> {
        self.record(Call::Register(req.clone()))
    }
}

#[async_trait]
impl SessionApi for FakeBackend {
    async fn all(&self) -> AppResult<Vec<Session>> {
        self.record(Call::AllSessions)?;
        Ok(self.sessions.lock().clone())
    }

    async fn detail(&self, id: u64) -> AppResult<Session> {
        self.record(Call::SessionDetail(id))?;
        self.sessions.lock().iter().find(|s| s.id == Some(id)).cloned().ok_or_else(|| not_found("session", id))
    }

    async fn create(&self, session: &Session) -> AppResult<Session> {
        self.record(Call::Create(session.clone()))?;
        let mut sessions = self.sessions.lock();
        let next = sessions.iter().filter_map(|s| s.id).max().unwrap_or(0) + 1;
        let mut created = session.clone();
        created.id = Some(next);
        sessions.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: u64, session: &Session) -> AppResult<Session> {
        self.record(Call::Update(id, session.clone()))?;
        let mut sessions = self.sessions.lock();
        let slot = sessions.iter_mut().find(|s| s.id == Some(id)).ok_or_else(|| not_found("session", id))?;
        *slot = Session { id: Some(id), ..session.clone() };
        Ok(slot.clone())
    }

    async fn delete(&self, id: u64) -> AppResult<()> {
        self.record(Call::Delete(id))?;
        self.sessions.lock().retain(|s| s.id != Some(id));
        Ok(())
    }

    async fn participate(&self, id: u64, user_id: u64) -> AppResult<()> {
        self.record(Call::Participate(id, user_id))?;
        let mut sessions = self.sessions.lock();
        let s = sessions.iter_mut().find(|s| s.id == Some(id)).ok_or_else(|| not_found("session", id))?;
        if !s.users.contains(&user_id) {
            s.users.push(user_id);
        }
        Ok(())
    }

    async fn un_participate(&self, id: u64, user_id: u64) -> AppResult<()> {
        self.record(Call::UnParticipate(id, user_id))?;
        let mut sessions = self.sessions.lock();
        let s = sessions.iter_mut().find(|s| s.id == Some(id)).ok_or_else(|| not_found("session", id))?;
        s.users.retain(|u| *u != user_id);
        Ok(())
    }
}

#[async_trait]
impl TeacherApi for FakeBackend {
    async fn all(&self) -> AppResult<Vec<Teacher>> {
        self.record(Call::AllTeachers)?;
        Ok(self.teachers.lock().clone())
    }

    async fn detail(&self, id: u64) -> AppResult<Teacher> {
        self.record(Call::TeacherDetail(id))?;
        self.teachers.lock().iter().find(|t| t.id == id).cloned().ok_or_else(|| not_found("teacher", id))
    }
}

#[async_trait]
impl UserApi for FakeBackend {
    async fn get_by_id(&self, id: u64) -> AppResult<User> {
        self.record(Call::UserById(id))?;
        self.users.lock().iter().find(|u| u.id == id).cloned().ok_or_else(|| not_found("user", id))
    }

    async fn delete(&self, id: u64) -> AppResult<()> {
        self.record(Call::DeleteUser(id))?;
        self.users.lock().retain(|u| u.id != id);
        Ok(())
    }
}

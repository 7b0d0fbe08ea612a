//! Terminal front end: each command enters the route its screen lives on (so the
//! route guards apply) and then drives that screen's controller.

mod command;
mod outputformatter;

pub use command::{parse, Command, USAGE};
pub use outputformatter::{get_terminal_width, render_table, sessions_table, teachers_table, visible_len};

use tracing::debug;

use crate::api::Services;
use crate::error::{AppError, AppResult};
use crate::model::{dates, display_name};
use crate::ui::{Route, ViewContext};
use crate::views::{
    AppController, DetailController, FormController, FormInit, FormMode, ListController, LoginController,
    MeController, RegisterController, SessionForm,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Lines(Vec<String>),
    Quit,
}

pub struct Shell {
    services: Services,
    ctx: ViewContext,
    api_url: String,
    termw: usize,
}

impl Shell {
    pub fn new(services: Services, ctx: ViewContext, api_url: impl Into<String>) -> Self {
        Self { services, ctx, api_url: api_url.into(), termw: get_terminal_width() }
    }

    pub fn with_width(mut self, termw: usize) -> Self {
        self.termw = termw;
        self
    }

    pub fn context(&self) -> &ViewContext {
        &self.ctx
    }

    /// Run one line. Pending notices are appended to the output; after a failed
    /// command they stay pending until the next successful one.
    pub async fn execute(&self, line: &str) -> AppResult<Reply> {
        let cmd = parse(line)?;
        debug!(target: "cli", command = line.split_whitespace().next().unwrap_or_default(), "execute");
        if cmd == Command::Quit {
            return Ok(Reply::Quit);
        }
        let mut lines = self.run(cmd).await?;
        lines.extend(self.ctx.notifier.drain().into_iter().map(|n| format!("{} [{}]", n.message, n.action)));
        Ok(Reply::Lines(lines))
    }

    /// Message printed for a failed command.
    pub fn error_line(err: &AppError) -> String {
        if err.is_client_side() {
            format!("error: {}", err.message())
        } else {
            format!("error: {} ({})", AppError::USER_MESSAGE, err)
        }
    }

    fn enter(&self, route: Route) -> AppResult<()> {
        let reached = self.ctx.router.navigate(route);
        if reached == route {
            return Ok(());
        }
        Err(AppError::forbidden("redirected".to_string(), format!("{} is not available, now at {}", route, reached)))
    }

    fn at(&self) -> String {
        match self.ctx.router.current() {
            Some(r) => format!("at {}", r),
            None => "at /".to_string(),
        }
    }

    async fn run(&self, cmd: Command) -> AppResult<Vec<String>> {
        match cmd {
            Command::Help => Ok(USAGE.iter().map(|s| s.to_string()).collect()),
            Command::Status => Ok(self.status()),
            Command::Login { email, password } => {
                self.enter(Route::Login)?;
                let mut c = LoginController::new(self.services.auth.clone(), self.ctx.clone());
                c.form.email = email;
                c.form.password = password;
                c.submit().await?;
                let who = self.ctx.require_identity()?;
                Ok(vec![format!("logged in as {}", display_name(&who.first_name, &who.last_name)), self.at()])
            }
            Command::Register { email, first_name, last_name, password } => {
                self.enter(Route::Register)?;
                let mut c = RegisterController::new(self.services.auth.clone(), self.ctx.clone());
                c.form.email = email;
                c.form.first_name = first_name;
                c.form.last_name = last_name;
                c.form.password = password;
                c.submit().await?;
                Ok(vec!["account created, you can now log in".to_string(), self.at()])
            }
            Command::Logout => {
                let route = AppController::new(self.ctx.clone()).logout();
                Ok(vec!["logged out".to_string(), format!("at {}", route)])
            }
            Command::Sessions => {
                self.enter(Route::Sessions)?;
                let mut c = ListController::new(self.services.sessions.clone(), self.ctx.clone());
                let mut lines = sessions_table(c.load().await?, self.termw);
                if c.can_create() {
                    lines.push("admin: create <date> <teacher_id> <name> -- <description>, update <id> ...".to_string());
                }
                Ok(lines)
            }
            Command::Session(id) => {
                let c = self.open_detail(id).await?;
                Ok(detail_lines(&c))
            }
            Command::Participate(id) => {
                let mut c = self.open_detail(id).await?;
                if !c.buttons().participate {
                    return Err(not_offered("participate"));
                }
                c.participate().await?;
                Ok(detail_lines(&c))
            }
            Command::Unparticipate(id) => {
                let mut c = self.open_detail(id).await?;
                if !c.buttons().unparticipate {
                    return Err(not_offered("unparticipate"));
                }
                c.un_participate().await?;
                Ok(detail_lines(&c))
            }
            Command::Create(form) => self.save(FormMode::Create, form).await,
            Command::Update(id, form) => self.save(FormMode::Update(id), form).await,
            Command::Delete(id) => {
                let mut c = self.open_detail(id).await?;
                if !c.buttons().delete {
                    return Err(not_offered("delete"));
                }
                let route = c.delete().await?;
                Ok(vec![format!("at {}", route)])
            }
            Command::Teachers => {
                self.ctx.require_identity()?;
                let teachers = self.services.teachers.all().await?;
                Ok(teachers_table(&teachers, self.termw))
            }
            Command::Me => {
                self.enter(Route::Me)?;
                let mut c = MeController::new(self.services.users.clone(), self.ctx.clone());
                c.init().await?;
                Ok(me_lines(&c))
            }
            Command::DeleteAccount => {
                self.enter(Route::Me)?;
                let mut c = MeController::new(self.services.users.clone(), self.ctx.clone());
                c.init().await?;
                if !c.can_delete() {
                    return Err(not_offered("delete-account"));
                }
                let route = c.delete().await?;
                Ok(vec!["logged out".to_string(), format!("at {}", route)])
            }
            Command::Back => Ok(vec![self.ctx.router.back().map(|r| format!("at {}", r)).unwrap_or_else(|| self.at())]),
            Command::Quit => Ok(Vec::new()),
        }
    }

    fn status(&self) -> Vec<String> {
        let who = match self.ctx.session.information() {
            Some(i) if i.admin => format!("logged in as {} (admin)", i.username),
            Some(i) => format!("logged in as {}", i.username),
            None => "not logged in".to_string(),
        };
        vec![format!("api: {}", self.api_url), who, self.at()]
    }

    async fn open_detail(&self, id: u64) -> AppResult<DetailController> {
        self.enter(Route::SessionDetail(id))?;
        let mut c = DetailController::new(
            self.services.sessions.clone(),
            self.services.teachers.clone(),
            self.ctx.clone(),
            id,
        )?;
        c.init().await?;
        Ok(c)
    }

    /// Fields given on the command line replace the loaded ones; an empty name keeps
    /// the current name in update mode.
    async fn save(&self, mode: FormMode, form: SessionForm) -> AppResult<Vec<String>> {
        let route = match mode {
            FormMode::Create => Route::SessionCreate,
            FormMode::Update(id) => Route::SessionUpdate(id),
        };
        self.enter(route)?;
        let mut c = FormController::new(self.services.sessions.clone(), self.services.teachers.clone(), self.ctx.clone(), mode);
        if let FormInit::Redirected(to) = c.init().await? {
            return Err(AppError::forbidden("redirected".to_string(), format!("admin only, now at {}", to)));
        }
        if form.name.is_empty() {
            c.form = SessionForm { name: c.form.name.clone(), ..form };
        } else {
            c.form = form;
        }
        if let Some(teacher_id) = c.form.teacher_id {
            if !c.teachers.iter().any(|t| t.id == teacher_id) {
                return Err(AppError::validation("invalid_form".to_string(), format!("unknown teacher {}", teacher_id)));
            }
        }
        let reached = c.submit().await?;
        Ok(vec![format!("{} done", c.title()), format!("at {}", reached)])
    }
}

fn not_offered(action: &str) -> AppError {
    AppError::forbidden("not_offered".to_string(), format!("'{}' is not offered on this screen", action))
}

fn detail_lines(c: &DetailController) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(s) = &c.session {
        lines.push(s.name.to_uppercase());
        lines.push(format!("date: {}", s.long_date()));
        if let Some(t) = &c.teacher {
            lines.push(format!("teacher: {}", t.display_name()));
        }
        lines.push(format!("attendees: {}", s.users.len()));
        lines.push(format!("description: {}", s.description));
        if let Some(created) = &s.created_at {
            lines.push(format!("created: {}", dates::long_date(created)));
        }
        if let Some(updated) = &s.updated_at {
            lines.push(format!("last update: {}", dates::long_date(updated)));
        }
    }
    let b = c.buttons();
    let actions: Vec<&str> = [(b.delete, "delete"), (b.participate, "participate"), (b.unparticipate, "unparticipate")]
        .into_iter()
        .filter_map(|(shown, name)| shown.then_some(name))
        .collect();
    lines.push(format!("actions: {}", actions.join(", ")));
    lines
}

fn me_lines(c: &MeController) -> Vec<String> {
    let mut lines: Vec<String> = [c.name_line(), c.email_line()].into_iter().flatten().collect();
    if let Some(admin) = c.admin_line() {
        lines.push(admin.to_string());
    }
    if let Some(u) = &c.user {
        if let Some(created) = &u.created_at {
            lines.push(format!("Create at: {}", dates::long_date(created)));
        }
        if let Some(updated) = &u.updated_at {
            lines.push(format!("Last update: {}", dates::long_date(updated)));
        }
    }
    if c.can_delete() {
        lines.push("delete-account removes your account".to_string());
    }
    lines
}

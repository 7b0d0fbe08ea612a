use std::sync::Arc;

use crate::api::UserApi;
use crate::error::AppResult;
use crate::model::User;
use crate::ui::{Notice, Route, ViewContext};

/// Account screen of the logged-in user.
pub struct MeController {
    users_api: Arc<dyn UserApi>,
    ctx: ViewContext,
    pub user: Option<User>,
    pub on_error: bool,
}

impl MeController {
    pub fn new(users_api: Arc<dyn UserApi>, ctx: ViewContext) -> Self {
        Self { users_api, ctx, user: None, on_error: false }
    }

    pub async fn init(&mut self) -> AppResult<&User> {
        let id = self.ctx.require_identity()?.id;
        let user = super::track("me", &mut self.on_error, self.users_api.get_by_id(id).await)?;
        self.on_error = false;
        Ok(self.user.insert(user))
    }

    pub fn name_line(&self) -> Option<String> {
        self.user.as_ref().map(|u| format!("Name: {}", u.display_name()))
    }

    pub fn email_line(&self) -> Option<String> {
        self.user.as_ref().map(|u| format!("Email: {}", u.email))
    }

    pub fn admin_line(&self) -> Option<&'static str> {
        self.user.as_ref().filter(|u| u.admin).map(|_| "You are admin")
    }

    pub fn can_delete(&self) -> bool {
        self.user.as_ref().map(|u| !u.admin).unwrap_or(false)
    }

    /// Delete the account, log out and go back to the root screen.
    pub async fn delete(&mut self) -> AppResult<Route> {
        let id = self.ctx.require_identity()?.id;
        super::track("me", &mut self.on_error, self.users_api.delete(id).await)?;
        self.ctx.notifier.open(Notice::closable("Your account has been deleted !"));
        self.ctx.session.log_out();
        self.user = None;
        Ok(self.ctx.router.navigate(Route::Root))
    }

    pub fn back(&self) -> Option<Route> {
        self.ctx.router.back()
    }

    pub fn error_message(&self) -> Option<&'static str> {
        super::error_text(self.on_error)
    }
}

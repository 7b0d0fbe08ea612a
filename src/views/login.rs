use std::sync::Arc;

use crate::api::AuthApi;
use crate::error::AppResult;
use crate::model::LoginRequest;
use crate::ui::{Route, ViewContext};
use crate::validation::{Rule, Validation};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Validation {
        let mut v = Validation::new();
        v.check("email", &self.email, &[Rule::Required, Rule::Email])
            .check("password", &self.password, &[Rule::Required, Rule::MinLength(3)]);
        v
    }

    pub fn to_request(&self) -> LoginRequest {
        LoginRequest { email: self.email.clone(), password: self.password.clone() }
    }
}

pub struct LoginController {
    auth: Arc<dyn AuthApi>,
    ctx: ViewContext,
    pub form: LoginForm,
    /// Password shown masked.
    pub hide: bool,
    pub on_error: bool,
}

impl LoginController {
    pub fn new(auth: Arc<dyn AuthApi>, ctx: ViewContext) -> Self {
        Self { auth, ctx, form: LoginForm::default(), hide: true, on_error: false }
    }

    /// Submit button state.
    pub fn can_submit(&self) -> bool {
        self.form.validate().is_valid()
    }

    pub fn toggle_hide(&mut self) {
        self.hide = !self.hide;
    }

    pub fn error_message(&self) -> Option<&'static str> {
        super::error_text(self.on_error)
    }

    /// Log in, hand the identity to the session store and go to the session list.
    pub async fn submit(&mut self) -> AppResult<Route> {
        self.form.validate().into_result()?;
        let info = super::track("login", &mut self.on_error, self.auth.login(&self.form.to_request()).await)?;
        self.on_error = false;
        self.ctx.session.log_in(info);
        Ok(self.ctx.router.navigate(Route::Sessions))
    }
}

use std::sync::Arc;

use crate::api::AuthApi;
use crate::error::AppResult;
use crate::model::RegisterRequest;
use crate::ui::{Route, ViewContext};
use crate::validation::{Rule, Validation};

const NAME_RULES: [Rule; 3] = [Rule::Required, Rule::MinLength(3), Rule::MaxLength(20)];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Validation {
        let mut v = Validation::new();
        v.check("email", &self.email, &[Rule::Required, Rule::Email])
            .check("firstName", &self.first_name, &NAME_RULES)
            .check("lastName", &self.last_name, &NAME_RULES)
            .check("password", &self.password, &[Rule::Required, Rule::MinLength(3), Rule::MaxLength(40)]);
        v
    }

    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            password: self.password.clone(),
        }
    }
}

pub struct RegisterController {
    auth: Arc<dyn AuthApi>,
    ctx: ViewContext,
    pub form: RegisterForm,
    pub on_error: bool,
}

impl RegisterController {
    pub fn new(auth: Arc<dyn AuthApi>, ctx: ViewContext) -> Self {
        Self { auth, ctx, form: RegisterForm::default(), on_error: false }
    }

    pub fn can_submit(&self) -> bool {
        self.form.validate().is_valid()
    }

    pub fn error_message(&self) -> Option<&'static str> {
        super::error_text(self.on_error)
    }

    /// Register, then go to the login screen.
    pub async fn submit(&mut self) -> AppResult<Route> {
        self.form.validate().into_result()?;
        super::track("register", &mut self.on_error, self.auth.register(&self.form.to_request()).await)?;
        self.on_error = false;
        Ok(self.ctx.router.navigate(Route::Login))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::views::fakes::{context, Call, FakeBackend};

    fn valid() -> RegisterForm {
        RegisterForm {
            email: "test@test.com".into(),
            first_name: "firstName".into(),
            last_name: "lastName".into(),
            password: "password".into(),
        }
    }

    #[test]
    fn starts_empty() {
        let c = RegisterController::new(FakeBackend::new(), context(None));
        assert_eq!(c.form, RegisterForm::default());
        assert!(!c.can_submit());
    }

    #[test]
    fn each_field_is_checked() {
        assert!(valid().validate().is_valid());

        let mut f = valid();
        f.email = "not an email".into();
        assert!(!f.validate().is_valid());

        for bad in ["a".to_string(), "a".repeat(51)] {
            let mut f = valid();
            f.first_name = bad.clone();
            assert!(!f.validate().field_valid("firstName"));

            let mut f = valid();
            f.last_name = bad.clone();
            assert!(!f.validate().field_valid("lastName"));

            let mut f = valid();
            f.password = bad;
            assert!(!f.validate().field_valid("password"));
        }
    }

    #[tokio::test]
    async fn submit_registers_and_navigates_to_login() {
        let fake = FakeBackend::new();
        let ctx = context(None);
        let mut c = RegisterController::new(fake.clone(), ctx.clone());
        c.form = valid();

        assert_eq!(c.submit().await.unwrap(), Route::Login);
        assert_eq!(fake.calls(), vec![Call::Register(valid().to_request())]);
        assert_eq!(ctx.router.current(), Some(Route::Login));
    }

    #[tokio::test]
    async fn failure_shows_error_message() {
        let fake = FakeBackend::new();
        fake.fail_with(AppError::bad_request("bad_request", "Error: Email is already taken!"));
        let ctx = context(None);
        let mut c = RegisterController::new(fake, ctx.clone());
        c.form = valid();

        assert!(c.submit().await.is_err());
        assert!(c.on_error);
        assert_eq!(c.error_message(), Some("An error occurred"));
        assert_eq!(ctx.router.current(), None);
    }
}

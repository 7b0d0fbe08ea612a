//! View controllers: one per screen. Each binds user actions to the resource clients
//! and the session store, then navigates or refreshes its own state. A failed action
//! sets `on_error` (the screen shows [`AppError::USER_MESSAGE`]) and the error is also
//! returned to the caller.

pub mod app;
pub mod detail;
pub mod form;
pub mod list;
pub mod login;
pub mod me;
pub mod register;

#[cfg(test)]
pub(crate) mod fakes;

pub use app::AppController;
pub use detail::{DetailButtons, DetailController};
pub use form::{FormController, FormInit, FormMode, SessionForm};
pub use list::ListController;
pub use login::{LoginController, LoginForm};
pub use me::MeController;
pub use register::{RegisterController, RegisterForm};

use tracing::warn;

use crate::error::{AppError, AppResult};

/// Raise the error flag when `result` failed.
pub(crate) fn track<T>(view: &'static str, on_error: &mut bool, result: AppResult<T>) -> AppResult<T> {
    if let Err(e) = &result {
        warn!(target: "views", view, code = e.code_str(), "action failed: {}", e.message());
        *on_error = true;
    }
    result
}

pub(crate) fn error_text(on_error: bool) -> Option<&'static str> {
    on_error.then_some(AppError::USER_MESSAGE)
}

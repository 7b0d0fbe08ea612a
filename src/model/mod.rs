//! Wire shapes of the studio API.
//! Field names follow the backend JSON exactly (mixed `camelCase` and `teacher_id`).

pub mod dates;
mod identity;
mod session;
mod teacher;
mod user;

pub use identity::{LoginRequest, RegisterRequest, SessionInformation};
pub use session::Session;
pub use teacher::Teacher;
pub use user::User;

/// `"{first} {LAST}"`, the way names are printed across the views.
pub fn display_name(first_name: &str, last_name: &str) -> String {
    format!("{} {}", first_name, last_name.to_uppercase())
}

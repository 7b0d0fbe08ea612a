//! Client for the yoga studio booking API: login state, REST resource clients, route
//! guards and one controller per screen, plus the `studio` terminal front end.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod identity;
pub mod model;
pub mod ui;
pub mod validation;
pub mod views;

pub use error::{AppError, AppResult};

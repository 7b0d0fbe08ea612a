//! Unified client error model and mapping helpers.
//! Every failure a view can observe (form validation, HTTP status, transport, decoding)
//! ends up as one `AppError`, which keeps a short machine code next to the message.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppError {
    Validation { code: String, message: String },
    BadRequest { code: String, message: String },
    Auth { code: String, message: String },
    Forbidden { code: String, message: String },
    NotFound { code: String, message: String },
    Server { code: String, message: String },
    Transport { code: String, message: String },
    Decode { code: String, message: String },
    Internal { code: String, message: String },
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl AppError {
    /// Text shown by every view when an action fails.
    pub const USER_MESSAGE: &'static str = "An error occurred";

    pub fn code_str(&self) -> &str {
        match self {
            AppError::Validation { code, .. }
            | AppError::BadRequest { code, .. }
            | AppError::Auth { code, .. }
            | AppError::Forbidden { code, .. }
            | AppError::NotFound { code, .. }
            | AppError::Server { code, .. }
            | AppError::Transport { code, .. }
            | AppError::Decode { code, .. }
            | AppError::Internal { code, .. } => code.as_str(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Validation { message, .. }
            | AppError::BadRequest { message, .. }
            | AppError::Auth { message, .. }
            | AppError::Forbidden { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::Server { message, .. }
            | AppError::Transport { message, .. }
            | AppError::Decode { message, .. }
            | AppError::Internal { message, .. } => message.as_str(),
        }
    }

    pub fn validation<S: Into<String>>(code: S, msg: S) -> Self { AppError::Validation { code: code.into(), message: msg.into() } }
    pub fn bad_request<S: Into<String>>(code: S, msg: S) -> Self { AppError::BadRequest { code: code.into(), message: msg.into() } }
    pub fn auth<S: Into<String>>(code: S, msg: S) -> Self { AppError::Auth { code: code.into(), message: msg.into() } }
    pub fn forbidden<S: Into<String>>(code: S, msg: S) -> Self { AppError::Forbidden { code: code.into(), message: msg.into() } }
    pub fn not_found<S: Into<String>>(code: S, msg: S) -> Self { AppError::NotFound { code: code.into(), message: msg.into() } }
    pub fn server<S: Into<String>>(code: S, msg: S) -> Self { AppError::Server { code: code.into(), message: msg.into() } }
    pub fn transport<S: Into<String>>(code: S, msg: S) -> Self { AppError::Transport { code: code.into(), message: msg.into() } }
    pub fn decode<S: Into<String>>(code: S, msg: S) -> Self { AppError::Decode { code: code.into(), message: msg.into() } }
    pub fn internal<S: Into<String>>(code: S, msg: S) -> Self { AppError::Internal { code: code.into(), message: msg.into() } }

    /// Identity required but none is held.
    pub fn not_logged_in() -> Self {
        AppError::auth("not_logged_in", "no identity is held")
    }

    /// Build from a non-2xx response. A JSON `message` field in the body wins over the
    /// canonical reason phrase.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("HTTP {}", status));
        match status {
            400 => AppError::BadRequest { code: "bad_request".into(), message },
            401 => AppError::Auth { code: "unauthorized".into(), message },
            403 => AppError::Forbidden { code: "forbidden".into(), message },
            404 => AppError::NotFound { code: "not_found".into(), message },
            s if (400..500).contains(&s) => AppError::BadRequest { code: format!("http_{}", s), message },
            s if s >= 500 => AppError::Server { code: format!("http_{}", s), message },
            s => AppError::Internal { code: format!("unexpected_status_{}", s), message },
        }
    }

    /// Map to HTTP status code.
    pub fn http_status(&self) -> u16 {
        match self {
            AppError::Validation { .. } => 400,
            AppError::BadRequest { .. } => 400,
            AppError::Auth { .. } => 401,
            AppError::Forbidden { .. } => 403,
            AppError::NotFound { .. } => 404,
            AppError::Server { .. } => 500,
            AppError::Transport { .. } => 503,
            AppError::Decode { .. } => 502,
            AppError::Internal { .. } => 500,
        }
    }

    /// True when the failure happened before anything was sent.
    pub fn is_client_side(&self) -> bool {
        matches!(self, AppError::Validation { .. })
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code_str(), self.message())
    }
}

impl std::error::Error for AppError {}

pub type AppResult<T> = Result<T, AppError>;

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return AppError::Decode { code: "decode_error".into(), message: err.to_string() };
        }
        if let Some(status) = err.status() {
            return AppError::from_status(status.as_u16(), "");
        }
        if err.is_timeout() {
            return AppError::Transport { code: "timeout".into(), message: err.to_string() };
        }
        if err.is_builder() {
            return AppError::Internal { code: "request_builder".into(), message: err.to_string() };
        }
        AppError::Transport { code: "transport_error".into(), message: err.to_string() }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode { code: "decode_error".into(), message: err.to_string() }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal { code: "internal_error".into(), message: err.to_string() }
    }
}

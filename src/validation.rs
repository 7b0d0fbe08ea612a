//! Form validation run before any submit reaches the network.
//!
//! Each form lists its fields with the rules they must satisfy; `validate()` returns a
//! [`Validation`] that names every failing (field, rule) pair. Rules other than
//! `Required` accept an empty value, so an empty field reports only `Required`.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{AppError, AppResult};
use crate::model::dates;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    Email,
    MinLength(usize),
    MaxLength(usize),
    /// `YYYY-MM-DD`
    Date,
}

impl Rule {
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Rule::Required => !value.is_empty(),
            _ if value.is_empty() => true,
            Rule::Email => is_email(value),
            Rule::MinLength(n) => value.chars().count() >= *n,
            Rule::MaxLength(n) => value.chars().count() <= *n,
            Rule::Date => dates::parse_day(value).is_some(),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Required => write!(f, "is required"),
            Rule::Email => write!(f, "must be a valid email"),
            Rule::MinLength(n) => write!(f, "must be at least {} characters", n),
            Rule::MaxLength(n) => write!(f, "must be at most {} characters", n),
            Rule::Date => write!(f, "must be a date (YYYY-MM-DD)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub rule: Rule,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    errors: Vec<FieldError>,
}

impl Validation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every rule `value` breaks.
    pub fn check(&mut self, field: &'static str, value: &str, rules: &[Rule]) -> &mut Self {
        for rule in rules {
            if !rule.accepts(value) {
                self.errors.push(FieldError { field, rule: *rule });
            }
        }
        self
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn field_valid(&self, field: &str) -> bool {
        !self.errors.iter().any(|e| e.field == field)
    }

    pub fn field_errors(&self, field: &str) -> Vec<Rule> {
        self.errors.iter().filter(|e| e.field == field).map(|e| e.rule).collect()
    }

    pub fn into_result(self) -> AppResult<()> {
        if self.is_valid() {
            return Ok(());
        }
        let message = self
            .errors
            .iter()
            .map(|e| format!("{} {}", e.field, e.rule))
            .collect::<Vec<_>>()
            .join(", ");
        Err(AppError::validation("invalid_form".to_string(), message))
    }
}

// Local part and domain labels as browsers and common form libraries accept them.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern compiles")
});

pub fn is_email(value: &str) -> bool {
    if value.len() > 254 {
        return false;
    }
    match value.split_once('@') {
        Some((local, _)) if local.len() <= 64 => EMAIL_RE.is_match(value),
        _ => false,
    }
}

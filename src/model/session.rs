use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::dates;

/// A scheduled class. `id` and the timestamps are absent until the backend created it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    #[serde(with = "dates")]
    pub date: DateTime<Utc>,
    pub description: String,
    pub teacher_id: u64,
    /// Participant user ids, in the order the backend returns them.
    #[serde(default)]
    pub users: Vec<u64>,
    #[serde(rename = "createdAt", default, with = "dates::option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default, with = "dates::option", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn is_participant(&self, user_id: u64) -> bool {
        self.users.contains(&user_id)
    }

    pub fn long_date(&self) -> String {
        dates::long_date(&self.date)
    }
}

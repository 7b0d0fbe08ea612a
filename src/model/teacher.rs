use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::dates;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, with = "dates::option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "dates::option", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Teacher {
    pub fn display_name(&self) -> String {
        super::display_name(&self.first_name, &self.last_name)
    }
}

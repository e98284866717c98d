use serde::{Deserialize, Serialize};

use super::status::{Badge, StatusTag};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AlertCategory {
    Critical,
    Warning,
    Info,
}

impl AlertCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertCategory::Critical => "Critical",
            AlertCategory::Warning => "Warning",
            AlertCategory::Info => "Info",
        }
    }
}

impl From<AlertCategory> for StatusTag {
    fn from(category: AlertCategory) -> Self {
        match category {
            AlertCategory::Critical => StatusTag::Critical,
            AlertCategory::Warning => StatusTag::Warning,
            AlertCategory::Info => StatusTag::Info,
        }
    }
}

/// One entry of the live alert feed. Never mutated once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AlertRecord {
    pub id: i64,
    pub category: AlertCategory,
    pub message: String,
    /// Relative display time, e.g. "10 mins ago".
    pub created_at: String,
}

impl AlertRecord {
    pub fn new(id: i64, category: AlertCategory, message: &str, created_at: &str) -> Self {
        Self {
            id,
            category,
            message: message.to_string(),
            created_at: created_at.to_string(),
        }
    }

    pub fn badge(&self) -> Badge {
        Badge::from(StatusTag::from(self.category))
    }
}

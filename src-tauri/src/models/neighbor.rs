use serde::{Deserialize, Serialize};

/// A stored neighbor contact. Shape on disk: `{id, name, phone, address}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NeighborRecord {
    pub id: i64,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

impl NeighborRecord {
    pub fn address(&self) -> Option<&str> {
        let trimmed = self.address.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    pub fn dial_uri(&self) -> String {
        format!("tel:{}", self.phone.trim())
    }
}

/// Add-neighbor form as submitted by the web view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeighborInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

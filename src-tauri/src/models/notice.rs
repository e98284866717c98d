//! Outcome values returned by notification-style actions.
//!
//! Actions never pop UI themselves; they hand one of these back and the
//! web view decides how to show it.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum NoticeKind {
    Success,
    Emergency,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn emergency(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Emergency,
            message: message.into(),
        }
    }
}

/// Request for the platform to open its dialer.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DialRequest {
    pub neighbor_id: i64,
    pub phone: String,
    pub uri: String,
}

/// Question the user must answer before a broadcast goes out.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastPrompt {
    pub question: String,
    pub recipients: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastReceipt {
    pub recipient_ids: Vec<i64>,
    pub notice: Notice,
}

impl BroadcastReceipt {
    pub fn count(&self) -> usize {
        self.recipient_ids.len()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", tag = "outcome")]
pub enum BroadcastOutcome {
    Sent(BroadcastReceipt),
    Declined,
}

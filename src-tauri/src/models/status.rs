//! Closed set of status tags shared by the alert feed and the safe-zone list.
//!
//! Every presentation lookup is an exhaustive `match`, so a new tag does not
//! compile until each of them has an answer for it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum StatusTag {
    Critical,
    Warning,
    Info,
    Available,
    AlmostFull,
    Full,
}

/// Colour family the web view paints a tag with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Tone {
    Danger,
    Caution,
    Informational,
    Safe,
}

impl StatusTag {
    pub fn tone(self) -> Tone {
        match self {
            StatusTag::Critical | StatusTag::Full => Tone::Danger,
            StatusTag::Warning | StatusTag::AlmostFull => Tone::Caution,
            StatusTag::Info => Tone::Informational,
            StatusTag::Available => Tone::Safe,
        }
    }

    /// Icon name from the web view's icon set.
    pub fn icon(self) -> &'static str {
        match self {
            StatusTag::Critical | StatusTag::Warning | StatusTag::AlmostFull => "alert-triangle",
            StatusTag::Info => "info",
            StatusTag::Available => "check-circle",
            StatusTag::Full => "x-circle",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusTag::Critical => "Critical",
            StatusTag::Warning => "Warning",
            StatusTag::Info => "Info",
            StatusTag::Available => "Available",
            StatusTag::AlmostFull => "Almost Full",
            StatusTag::Full => "Full",
        }
    }
}

/// Everything the web view needs to draw a status pill.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub tag: StatusTag,
    pub tone: Tone,
    pub icon: &'static str,
    pub label: &'static str,
}

impl From<StatusTag> for Badge {
    fn from(tag: StatusTag) -> Self {
        Self {
            tag,
            tone: tag.tone(),
            icon: tag.icon(),
            label: tag.label(),
        }
    }
}

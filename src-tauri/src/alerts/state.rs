use serde::{Deserialize, Serialize};

use crate::models::{AlertCategory, AlertRecord};

pub const GENERATED_MESSAGE: &str = "New sudden alert generated! Stay tuned!";
pub const JUST_NOW: &str = "Just now";

fn seed_alerts() -> Vec<AlertRecord> {
    vec![
        AlertRecord::new(
            1,
            AlertCategory::Critical,
            "Heavy rainfall expected in Bhopal. Stay indoors!",
            "2 mins ago",
        ),
        AlertRecord::new(
            2,
            AlertCategory::Warning,
            "Flood alert issued near Upper Lake. Avoid low-lying areas.",
            "10 mins ago",
        ),
        AlertRecord::new(
            3,
            AlertCategory::Info,
            "Relief camp set up at TT Nagar Stadium, Bhopal.",
            "30 mins ago",
        ),
    ]
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AlertCounts {
    pub critical: usize,
    pub warning: usize,
    pub info: usize,
}

impl AlertCounts {
    pub fn total(&self) -> usize {
        self.critical + self.warning + self.info
    }
}

/// Alert list plus the current search query. Newest record first.
#[derive(Debug, Clone, Default)]
pub struct AlertFeed {
    alerts: Vec<AlertRecord>,
    filter: String,
}

impl AlertFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        let mut feed = Self::new();
        feed.initialize();
        feed
    }

    /// Resets the list to the three fixed seed alerts.
    pub fn initialize(&mut self) {
        self.alerts = seed_alerts();
    }

    pub fn alerts(&self) -> &[AlertRecord] {
        &self.alerts
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Prepends one synthetic critical alert and returns it.
    pub fn push_generated(&mut self, id: i64) -> &AlertRecord {
        self.alerts.insert(
            0,
            AlertRecord::new(id, AlertCategory::Critical, GENERATED_MESSAGE, JUST_NOW),
        );
        &self.alerts[0]
    }

    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter = text.into();
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Records whose category or message contains the filter, ignoring case.
    /// Recomputed from the current list on every call.
    pub fn visible_alerts(&self) -> impl Iterator<Item = &AlertRecord> + '_ {
        let needle = self.filter.to_lowercase();
        self.alerts
            .iter()
            .filter(move |record| matches_query(record, &needle))
    }

    pub fn counts(&self) -> AlertCounts {
        self.alerts
            .iter()
            .fold(AlertCounts::default(), |mut counts, record| {
                match record.category {
                    AlertCategory::Critical => counts.critical += 1,
                    AlertCategory::Warning => counts.warning += 1,
                    AlertCategory::Info => counts.info += 1,
                }
                counts
            })
    }
}

fn matches_query(record: &AlertRecord, needle: &str) -> bool {
    needle.is_empty()
        || record.category.as_str().to_lowercase().contains(needle)
        || record.message.to_lowercase().contains(needle)
}

use std::{path::PathBuf, time::Duration};

use log::warn;

pub const DEFAULT_ALERT_INTERVAL: Duration = Duration::from_millis(15_000);

pub const ALERT_INTERVAL_VAR: &str = "SAHARA_ALERT_INTERVAL_MS";
pub const DATA_DIR_VAR: &str = "SAHARA_DATA_DIR";
pub const DEBUG_VAR: &str = "SAHARA_DEBUG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    /// Gap between synthetic alerts on the alerts page.
    pub alert_interval: Duration,
    /// Overrides the platform app data dir for local storage.
    pub data_dir: Option<PathBuf>,
    pub debug: bool,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            alert_interval: DEFAULT_ALERT_INTERVAL,
            data_dir: None,
            debug: false,
        }
    }
}

impl PortalConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any variable source. Bad values are logged and
    /// fall back to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(ALERT_INTERVAL_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => config.alert_interval = Duration::from_millis(ms),
                _ => warn!("ignoring {ALERT_INTERVAL_VAR}={raw:?}: expected a positive integer"),
            }
        }

        if let Some(raw) = lookup(DATA_DIR_VAR) {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                warn!("ignoring empty {DATA_DIR_VAR}");
            } else {
                config.data_dir = Some(PathBuf::from(trimmed));
            }
        }

        config.debug = lookup(DEBUG_VAR)
            .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        config
    }
}

//! Navigation surface and per-view state lifecycle.
//!
//! Only one view is active at a time. Activating a view builds its state and
//! tears down whatever the previous view owned, so the alert generator never
//! outlives the alerts page.

use std::{fmt, sync::Arc, time::Duration};

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::{
    alerts::AlertFeedController,
    errors::{PortalError, Result},
    events::EventSink,
    neighbors::NeighborRegistry,
    storage::KeyValueStore,
};

const ENABLE_LOGS: bool = true;

use crate::log_info;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum View {
    Home,
    Alerts,
    SafeZones,
    Sahayak,
    Neighbors,
}

impl View {
    pub fn all() -> &'static [View] {
        &[
            View::Home,
            View::Alerts,
            View::SafeZones,
            View::Sahayak,
            View::Neighbors,
        ]
    }

    pub fn path(self) -> &'static str {
        match self {
            View::Home => "/",
            View::Alerts => "/alerts",
            View::SafeZones => "/safezones",
            View::Sahayak => "/sahayak",
            View::Neighbors => "/neighbors",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Alerts => "Alerts",
            View::SafeZones => "Safe Zones",
            View::Sahayak => "Sahayak",
            View::Neighbors => "Neighbors",
        }
    }

    /// Accepts paths with or without a trailing slash, ignoring case.
    pub fn from_path(path: &str) -> Result<View> {
        let trimmed = path.trim();
        let normalized = trimmed.trim_end_matches('/').to_ascii_lowercase();
        let normalized = if normalized.is_empty() { "/" } else { normalized.as_str() };
        View::all()
            .iter()
            .copied()
            .find(|view| view.path() == normalized)
            .ok_or_else(|| PortalError::UnknownView(trimmed.to_string()))
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewLink {
    pub view: View,
    pub path: &'static str,
    pub title: &'static str,
}

pub fn navigation() -> Vec<ViewLink> {
    View::all()
        .iter()
        .map(|&view| ViewLink {
            view,
            path: view.path(),
            title: view.title(),
        })
        .collect()
}

enum ActiveView {
    Stateless(View),
    Alerts(AlertFeedController),
    Neighbors(NeighborRegistry),
}

impl ActiveView {
    fn view(&self) -> View {
        match self {
            ActiveView::Stateless(view) => *view,
            ActiveView::Alerts(_) => View::Alerts,
            ActiveView::Neighbors(_) => View::Neighbors,
        }
    }
}

pub struct ViewSession {
    active: Mutex<ActiveView>,
    store: Arc<dyn KeyValueStore>,
    events: Arc<dyn EventSink>,
    alert_interval: Duration,
}

impl ViewSession {
    /// Starts on the home view, which owns no state.
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        events: Arc<dyn EventSink>,
        alert_interval: Duration,
    ) -> Self {
        Self {
            active: Mutex::new(ActiveView::Stateless(View::Home)),
            store,
            events,
            alert_interval,
        }
    }

    pub async fn current(&self) -> View {
        self.active.lock().await.view()
    }

    /// Switches to `view`. Re-activating the current view keeps its state.
    pub async fn activate(&self, view: View) -> View {
        let mut active = self.active.lock().await;
        if active.view() == view {
            return view;
        }

        teardown(&mut active).await;

        *active = match view {
            View::Alerts => {
                let controller =
                    AlertFeedController::new(self.events.clone(), self.alert_interval);
                controller.start_auto_generation().await;
                ActiveView::Alerts(controller)
            }
            View::Neighbors => ActiveView::Neighbors(NeighborRegistry::load(self.store.clone())),
            other => ActiveView::Stateless(other),
        };
        log_info!("activated {} view", view);
        view
    }

    pub async fn activate_path(&self, path: &str) -> Result<View> {
        let view = View::from_path(path)?;
        Ok(self.activate(view).await)
    }

    /// Drops all view state and returns to home, e.g. when the window closes.
    pub async fn shutdown(&self) {
        let mut active = self.active.lock().await;
        teardown(&mut active).await;
        *active = ActiveView::Stateless(View::Home);
    }

    pub async fn alerts(&self) -> Result<AlertFeedController> {
        match &*self.active.lock().await {
            ActiveView::Alerts(controller) => Ok(controller.clone()),
            _ => Err(PortalError::ViewInactive(View::Alerts)),
        }
    }

    /// Runs `f` against the neighbor registry while holding the session lock,
    /// so neighbor actions never interleave.
    pub async fn with_neighbors<T>(
        &self,
        f: impl FnOnce(&mut NeighborRegistry) -> Result<T>,
    ) -> Result<T> {
        match &mut *self.active.lock().await {
            ActiveView::Neighbors(registry) => f(registry),
            _ => Err(PortalError::ViewInactive(View::Neighbors)),
        }
    }
}

async fn teardown(active: &mut ActiveView) {
    if let ActiveView::Alerts(controller) = active {
        controller.stop_auto_generation().await;
    }
    log_info!("deactivated {} view", active.view());
}

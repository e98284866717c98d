use std::{sync::Arc, time::Duration};

use serde::Serialize;
use tokio::{
    sync::Mutex,
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};
use tokio_util::sync::CancellationToken;

use crate::{
    events::EventSink,
    models::{AlertRecord, Badge},
    utils::IdClock,
};

use super::{AlertCounts, AlertFeed};

const ENABLE_LOGS: bool = true;

use crate::{log_debug, log_info, log_warn};

/// One feed entry plus the pill the web view paints it with.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AlertCard {
    #[serde(flatten)]
    pub alert: AlertRecord,
    pub badge: Badge,
}

impl From<&AlertRecord> for AlertCard {
    fn from(alert: &AlertRecord) -> Self {
        Self {
            badge: alert.badge(),
            alert: alert.clone(),
        }
    }
}

/// What the alerts page renders: the filtered list plus whole-feed totals.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AlertFeedSnapshot {
    pub alerts: Vec<AlertCard>,
    pub filter: String,
    pub total: usize,
    pub counts: AlertCounts,
}

impl AlertFeedSnapshot {
    fn from_feed(feed: &AlertFeed) -> Self {
        Self {
            alerts: feed.visible_alerts().map(AlertCard::from).collect(),
            filter: feed.filter().to_string(),
            total: feed.len(),
            counts: feed.counts(),
        }
    }
}

struct Ticker {
    handle: JoinHandle<()>,
    cancel: CancellationToken,
}

/// Owns an [`AlertFeed`] and the task that keeps injecting synthetic alerts.
#[derive(Clone)]
pub struct AlertFeedController {
    feed: Arc<Mutex<AlertFeed>>,
    ids: Arc<IdClock>,
    events: Arc<dyn EventSink>,
    ticker: Arc<Mutex<Option<Ticker>>>,
    tick_interval: Duration,
}

impl AlertFeedController {
    pub fn new(events: Arc<dyn EventSink>, tick_interval: Duration) -> Self {
        Self {
            feed: Arc::new(Mutex::new(AlertFeed::seeded())),
            ids: Arc::new(IdClock::new()),
            events,
            ticker: Arc::new(Mutex::new(None)),
            tick_interval,
        }
    }

    pub async fn snapshot(&self) -> AlertFeedSnapshot {
        AlertFeedSnapshot::from_feed(&*self.feed.lock().await)
    }

    pub async fn counts(&self) -> AlertCounts {
        self.feed.lock().await.counts()
    }

    pub async fn set_filter(&self, text: String) -> AlertFeedSnapshot {
        let mut feed = self.feed.lock().await;
        feed.set_filter(text);
        AlertFeedSnapshot::from_feed(&feed)
    }

    pub async fn is_generating(&self) -> bool {
        self.ticker.lock().await.is_some()
    }

    /// Starts prepending a generated alert every `tick_interval`. The first
    /// one arrives a full interval after this call. Restarts any running
    /// generator.
    pub async fn start_auto_generation(&self) {
        let mut ticker_guard = self.ticker.lock().await;
        if let Some(previous) = ticker_guard.take() {
            log_warn!("alert generator already running; restarting");
            stop_ticker(previous).await;
        }

        let feed = self.feed.clone();
        let ids = self.ids.clone();
        let events = self.events.clone();
        let tick_interval = self.tick_interval;
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + tick_interval, tick_interval);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = interval.tick() => {}
                }

                let snapshot = {
                    let mut feed = feed.lock().await;
                    // Cancellation may land while we waited on the lock.
                    if token.is_cancelled() {
                        break;
                    }
                    let record = feed.push_generated(ids.next());
                    log_debug!("generated alert {}", record.id);
                    AlertFeedSnapshot::from_feed(&feed)
                };

                events.emit_alerts_changed(&snapshot);
            }
        });

        log_info!(
            "alert generator started ({} ms interval)",
            tick_interval.as_millis()
        );
        *ticker_guard = Some(Ticker { handle, cancel });
    }

    /// Stops the generator and waits for its task to finish, so no alert is
    /// added once this returns.
    pub async fn stop_auto_generation(&self) {
        let ticker = self.ticker.lock().await.take();
        if let Some(ticker) = ticker {
            stop_ticker(ticker).await;
            log_info!("alert generator stopped");
        }
    }
}

async fn stop_ticker(ticker: Ticker) {
    ticker.cancel.cancel();
    if let Err(err) = ticker.handle.await {
        log_warn!("alert generator task ended abnormally: {err}");
    }
}

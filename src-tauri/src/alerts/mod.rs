#[cfg(feature = "desktop")]
pub mod commands;
pub mod controller;
pub mod state;

pub use controller::{AlertCard, AlertFeedController, AlertFeedSnapshot};
pub use state::{AlertCounts, AlertFeed};

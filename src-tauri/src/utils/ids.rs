use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Hands out record ids derived from the wall clock in milliseconds.
///
/// Ids are strictly increasing: two records created within the same
/// millisecond, or after the clock steps backwards, still get distinct ids.
#[derive(Debug, Default)]
pub struct IdClock {
    last: AtomicI64,
}

impl IdClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let previous = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last.saturating_add(1)))
            })
            .unwrap_or_else(|last| last);
        now.max(previous.saturating_add(1))
    }

    /// Makes sure later ids are greater than an id that already exists.
    pub fn observe(&self, id: i64) {
        self.last.fetch_max(id, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_strictly_increase() {
        let clock = IdClock::new();
        let ids: Vec<i64> = (0..1000).map(|_| clock.next()).collect();
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn observed_ids_are_never_reissued() {
        let clock = IdClock::new();
        let far_future = Utc::now().timestamp_millis() + 1_000_000;
        clock.observe(far_future);
        assert_eq!(clock.next(), far_future + 1);
    }
}

use std::sync::Arc;

use crate::{
    errors::{PortalError, Result},
    models::{
        BroadcastOutcome, BroadcastPrompt, BroadcastReceipt, DialRequest, Notice, NeighborRecord,
    },
    storage::KeyValueStore,
    utils::IdClock,
};

const ENABLE_LOGS: bool = true;

use crate::{log_info, log_warn};

pub const STORAGE_KEY: &str = "neighbors";
pub const BROADCAST_QUESTION: &str = "Send emergency alert to ALL neighbors?";

pub fn encode_neighbors(neighbors: &[NeighborRecord]) -> Result<String> {
    serde_json::to_string(neighbors).map_err(|err| PortalError::storage(STORAGE_KEY, err))
}

/// Anything that is not a well-formed neighbor array decodes to `None`.
pub fn decode_neighbors(raw: &str) -> Option<Vec<NeighborRecord>> {
    serde_json::from_str(raw).ok()
}

/// Neighbor contacts mirrored to durable storage after every change.
pub struct NeighborRegistry {
    neighbors: Vec<NeighborRecord>,
    store: Arc<dyn KeyValueStore>,
    ids: IdClock,
}

impl NeighborRegistry {
    /// Rehydrates from storage. Missing, unreadable or malformed data all
    /// yield an empty registry.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let neighbors = match store.get(STORAGE_KEY) {
            Ok(Some(raw)) => decode_neighbors(&raw).unwrap_or_else(|| {
                log_warn!("stored neighbor list is malformed; starting empty");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(err) => {
                log_warn!("could not read neighbor list: {err}; starting empty");
                Vec::new()
            }
        };

        let ids = IdClock::new();
        for neighbor in &neighbors {
            ids.observe(neighbor.id);
        }
        log_info!("loaded {} neighbors", neighbors.len());

        Self {
            neighbors,
            store,
            ids,
        }
    }

    pub fn neighbors(&self) -> &[NeighborRecord] {
        &self.neighbors
    }

    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    pub fn get(&self, id: i64) -> Result<&NeighborRecord> {
        self.neighbors
            .iter()
            .find(|n| n.id == id)
            .ok_or(PortalError::NeighborNotFound(id))
    }

    /// Name and phone are required; blank counts as missing.
    pub fn add(&mut self, name: &str, phone: &str, address: &str) -> Result<NeighborRecord> {
        let mut missing = Vec::new();
        if name.trim().is_empty() {
            missing.push("Name");
        }
        if phone.trim().is_empty() {
            missing.push("Phone");
        }
        if !missing.is_empty() {
            return Err(PortalError::missing_fields(&missing));
        }

        let record = NeighborRecord {
            id: self.ids.next(),
            name: name.trim().to_string(),
            phone: phone.trim().to_string(),
            address: address.trim().to_string(),
        };
        self.neighbors.push(record.clone());

        if let Err(err) = self.persist() {
            self.neighbors.pop();
            return Err(err);
        }
        Ok(record)
    }

    /// Drops every record carrying `id` and returns whether any went.
    /// Unknown ids are not an error.
    pub fn remove(&mut self, id: i64) -> Result<bool> {
        if !self.neighbors.iter().any(|n| n.id == id) {
            return Ok(false);
        }
        let previous = self.neighbors.clone();
        self.neighbors.retain(|n| n.id != id);

        if let Err(err) = self.persist() {
            self.neighbors = previous;
            return Err(err);
        }
        Ok(true)
    }

    pub fn call_neighbor(&self, id: i64) -> Result<DialRequest> {
        let neighbor = self.get(id)?;
        Ok(DialRequest {
            neighbor_id: neighbor.id,
            phone: neighbor.phone.clone(),
            uri: neighbor.dial_uri(),
        })
    }

    /// Simulated; nothing leaves the device.
    pub fn alert_one(&self, id: i64) -> Result<Notice> {
        let neighbor = self.get(id)?;
        log_info!("alert sent to {} ({})", neighbor.name, neighbor.phone);
        Ok(Notice::emergency(format!(
            "Emergency Alert sent to {}!",
            neighbor.name
        )))
    }

    /// First half of a broadcast: the question to put to the user.
    pub fn request_alert_all(&self) -> Result<BroadcastPrompt> {
        if self.is_empty() {
            return Err(PortalError::NoRecipients);
        }
        Ok(BroadcastPrompt {
            question: BROADCAST_QUESTION.to_string(),
            recipients: self.len(),
        })
    }

    /// Second half of a broadcast, called once the user agreed. Recipients are
    /// whoever is in the list right now, not when the prompt was shown.
    pub fn confirm_alert_all(&self) -> Result<BroadcastReceipt> {
        if self.is_empty() {
            return Err(PortalError::NoRecipients);
        }
        for neighbor in &self.neighbors {
            log_info!("alert sent to {} ({})", neighbor.name, neighbor.phone);
        }
        let recipient_ids: Vec<i64> = self.neighbors.iter().map(|n| n.id).collect();
        let notice = Notice::success(format!(
            "Alert sent to all {} neighbors!",
            recipient_ids.len()
        ));
        Ok(BroadcastReceipt {
            recipient_ids,
            notice,
        })
    }

    pub fn alert_all(
        &self,
        confirm: impl FnOnce(&BroadcastPrompt) -> bool,
    ) -> Result<BroadcastOutcome> {
        let prompt = self.request_alert_all()?;
        if !confirm(&prompt) {
            return Ok(BroadcastOutcome::Declined);
        }
        self.confirm_alert_all().map(BroadcastOutcome::Sent)
    }

    fn persist(&self) -> Result<()> {
        let serialized = encode_neighbors(&self.neighbors)?;
        self.store.set(STORAGE_KEY, &serialized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStore, MemoryStore};
    use tempfile::tempdir;

    fn empty() -> (NeighborRegistry, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (NeighborRegistry::load(store.clone()), store)
    }

    #[test]
    fn add_requires_name_and_phone() {
        let (mut registry, store) = empty();

        let err = registry.add("", "9999999999", "").unwrap_err();
        assert!(matches!(err, PortalError::Validation(_)));
        assert_eq!(err.to_string(), "Please enter at least Name.");

        let err = registry.add("Asha", "   ", "").unwrap_err();
        assert!(matches!(err, PortalError::Validation(_)));

        assert!(registry.is_empty());
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn added_neighbors_survive_a_reload() {
        let (mut registry, store) = empty();
        registry.add("Asha", "9876543210", "").unwrap();
        registry.add("Ravi", "9123456780", "12 Arera Colony").unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(store.write_count(), 2);

        let reloaded = NeighborRegistry::load(store.clone());
        assert_eq!(reloaded.neighbors(), registry.neighbors());
        assert_eq!(reloaded.neighbors()[1].address(), Some("12 Arera Colony"));
        assert_eq!(reloaded.neighbors()[0].address(), None);
    }

    #[test]
    fn reload_through_the_file_store() {
        let dir = tempdir().unwrap();
        let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(dir.path()).unwrap());

        let mut registry = NeighborRegistry::load(store.clone());
        let asha = registry.add("Asha", "9876543210", "").unwrap();

        let reloaded = NeighborRegistry::load(store);
        assert_eq!(reloaded.neighbors(), &[asha]);
    }

    #[test]
    fn remove_unknown_id_is_a_no_op() {
        let (mut registry, _store) = empty();
        registry.add("Asha", "9876543210", "").unwrap();
        let before = registry.neighbors().to_vec();

        assert!(!registry.remove(42).unwrap());
        assert_eq!(registry.neighbors(), before.as_slice());
    }

    #[test]
    fn remove_rewrites_storage() {
        let (mut registry, store) = empty();
        let asha = registry.add("Asha", "9876543210", "").unwrap();
        registry.add("Ravi", "9123456780", "").unwrap();

        assert!(registry.remove(asha.id).unwrap());
        let stored = decode_neighbors(&store.raw(STORAGE_KEY).unwrap()).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].name, "Ravi");
    }

    #[test]
    fn malformed_storage_loads_empty() {
        let store = Arc::new(MemoryStore::with_value(STORAGE_KEY, r#"{"not":"a list"}"#));
        assert!(NeighborRegistry::load(store).is_empty());

        let store = Arc::new(MemoryStore::with_value(STORAGE_KEY, "[{\"id\":1}"));
        assert!(NeighborRegistry::load(store).is_empty());
    }

    #[test]
    fn unreadable_storage_loads_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        // A directory where the neighbors file should be cannot be read.
        std::fs::create_dir_all(dir.path().join("neighbors.json")).unwrap();
        assert!(matches!(
            store.get(STORAGE_KEY),
            Err(PortalError::StorageUnavailable { .. })
        ));

        let registry = NeighborRegistry::load(Arc::new(store));
        assert!(registry.is_empty());
    }

    #[test]
    fn remove_drops_every_duplicate_id() {
        let raw = r#"[
            {"id":7,"name":"Asha","phone":"1","address":""},
            {"id":8,"name":"Ravi","phone":"2","address":""},
            {"id":7,"name":"Asha (old)","phone":"3","address":""}
        ]"#;
        let store = Arc::new(MemoryStore::with_value(STORAGE_KEY, raw));
        let mut registry = NeighborRegistry::load(store.clone());
        assert_eq!(registry.len(), 3);

        assert!(registry.remove(7).unwrap());
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.neighbors()[0].name, "Ravi");
        let stored = decode_neighbors(&store.raw(STORAGE_KEY).unwrap()).unwrap();
        assert_eq!(stored.as_slice(), registry.neighbors());
    }

    #[test]
    fn failed_duplicate_remove_restores_every_record() {
        let raw = r#"[{"id":7,"name":"Asha","phone":"1","address":""},{"id":7,"name":"Asha (old)","phone":"3","address":""}]"#;
        let store = Arc::new(MemoryStore::with_value(STORAGE_KEY, raw));
        let mut registry = NeighborRegistry::load(store.clone());
        let before = registry.neighbors().to_vec();

        store.set_fail_writes(true);
        assert!(registry.remove(7).is_err());
        assert_eq!(registry.neighbors(), before.as_slice());
    }

    #[test]
    fn legacy_records_without_address_load() {
        let raw = r#"[{"name":"Asha","phone":"9876543210","id":1700000000000}]"#;
        let registry = NeighborRegistry::load(Arc::new(MemoryStore::with_value(STORAGE_KEY, raw)));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.neighbors()[0].address, "");
    }

    #[test]
    fn new_ids_exceed_stored_ones() {
        let far_future = chrono::Utc::now().timestamp_millis() + 10_000_000;
        let raw = format!(r#"[{{"id":{far_future},"name":"Asha","phone":"1","address":""}}]"#);
        let mut registry =
            NeighborRegistry::load(Arc::new(MemoryStore::with_value(STORAGE_KEY, &raw)));

        let ravi = registry.add("Ravi", "2", "").unwrap();
        assert!(ravi.id > far_future);
    }

    #[test]
    fn failed_write_leaves_list_untouched() {
        let (mut registry, store) = empty();
        let asha = registry.add("Asha", "9876543210", "").unwrap();
        store.set_fail_writes(true);

        let err = registry.add("Ravi", "9123456780", "").unwrap_err();
        assert!(matches!(err, PortalError::StorageUnavailable { .. }));
        assert_eq!(registry.len(), 1);

        assert!(registry.remove(asha.id).is_err());
        assert_eq!(registry.neighbors(), &[asha]);
    }

    #[test]
    fn call_and_single_alert() {
        let (mut registry, _store) = empty();
        let asha = registry.add("Asha", "98765 43210", "").unwrap();

        let dial = registry.call_neighbor(asha.id).unwrap();
        assert_eq!(dial.uri, "tel:98765 43210");
        assert_eq!(dial.neighbor_id, asha.id);

        let notice = registry.alert_one(asha.id).unwrap();
        assert_eq!(notice.message, "Emergency Alert sent to Asha!");

        assert!(matches!(
            registry.alert_one(asha.id + 1),
            Err(PortalError::NeighborNotFound(_))
        ));
    }

    #[test]
    fn broadcast_needs_recipients() {
        let (registry, _store) = empty();
        assert!(matches!(
            registry.request_alert_all(),
            Err(PortalError::NoRecipients)
        ));
        assert!(matches!(
            registry.alert_all(|_| true),
            Err(PortalError::NoRecipients)
        ));
    }

    #[test]
    fn broadcast_waits_for_confirmation() {
        let (mut registry, _store) = empty();
        registry.add("Asha", "9876543210", "").unwrap();
        registry.add("Ravi", "9123456780", "").unwrap();

        let declined = registry.alert_all(|_| false).unwrap();
        assert_eq!(declined, BroadcastOutcome::Declined);

        let mut asked = None;
        let outcome = registry
            .alert_all(|prompt| {
                asked = Some(prompt.clone());
                true
            })
            .unwrap();
        assert_eq!(asked.unwrap().question, BROADCAST_QUESTION);
        match outcome {
            BroadcastOutcome::Sent(receipt) => {
                assert_eq!(receipt.count(), 2);
                assert_eq!(receipt.notice.message, "Alert sent to all 2 neighbors!");
            }
            BroadcastOutcome::Declined => panic!("expected broadcast to be sent"),
        }
    }

    #[test]
    fn broadcast_counts_recipients_at_confirmation_time() {
        let (mut registry, _store) = empty();
        registry.add("Asha", "9876543210", "").unwrap();

        let prompt = registry.request_alert_all().unwrap();
        assert_eq!(prompt.recipients, 1);

        registry.add("Ravi", "9123456780", "").unwrap();
        registry.add("Meera", "9000000000", "").unwrap();

        let receipt = registry.confirm_alert_all().unwrap();
        assert_eq!(receipt.count(), 3);
        assert_eq!(receipt.notice.message, "Alert sent to all 3 neighbors!");
    }

    #[test]
    fn encode_decode_round_trip() {
        let list = vec![
            NeighborRecord {
                id: 1,
                name: "Asha".into(),
                phone: "9876543210".into(),
                address: String::new(),
            },
            NeighborRecord {
                id: 2,
                name: "Ravi \"R\" Kumar".into(),
                phone: "+91 91234 56780".into(),
                address: "Flat 3, Shyamla Hills".into(),
            },
        ];
        let raw = encode_neighbors(&list).unwrap();
        assert_eq!(decode_neighbors(&raw), Some(list));
        assert_eq!(decode_neighbors("[]"), Some(Vec::new()));
    }
}

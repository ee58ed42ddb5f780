use std::sync::Arc;

use chrono::Utc;

use crate::models::UserMeasurements;
use crate::services::storage::{StorageBackend, StorageKey};

/// Outcome of a save
#[derive(Debug, Clone)]
pub struct Saved {
    /// The profile as written, with `lastUpdated` stamped
    pub measurements: UserMeasurements,
    pub persisted: bool,
}

/// Best-effort store for measurement profiles
///
/// Storage and parse failures are logged and degrade to "no measurements";
/// nothing here returns an error to the caller. Writes are whole-object
/// overwrites with last-writer-wins semantics.
#[derive(Clone)]
pub struct MeasurementStore {
    backend: Arc<dyn StorageBackend>,
}

impl MeasurementStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Stamp and persist a profile, replacing any previous one
    pub async fn save(&self, profile_id: &str, mut measurements: UserMeasurements) -> Saved {
        measurements.mark_updated(Utc::now());
        let key = StorageKey::measurements(profile_id);

        let json = match serde_json::to_string(&measurements) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Failed to serialize measurements for {}: {}", profile_id, e);
                return Saved { measurements, persisted: false };
            }
        };

        let persisted = match self.backend.set(&key, &json).await {
            Ok(()) => {
                tracing::debug!("Saved measurements for {} ({})", profile_id, self.backend.name());
                true
            }
            Err(e) => {
                tracing::warn!("Failed to save measurements for {}: {}", profile_id, e);
                false
            }
        };

        Saved { measurements, persisted }
    }

    /// Stored profile, or `None` if absent, unreadable or corrupt
    pub async fn load(&self, profile_id: &str) -> Option<UserMeasurements> {
        let key = StorageKey::measurements(profile_id);

        let raw = match self.backend.get(&key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("Failed to read measurements for {}: {}", profile_id, e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(measurements) => Some(measurements),
            Err(e) => {
                tracing::warn!("Discarding unparseable measurements for {}: {}", profile_id, e);
                None
            }
        }
    }

    /// Delete the stored profile; clearing an empty slot is a no-op
    pub async fn clear(&self, profile_id: &str) {
        let key = StorageKey::measurements(profile_id);
        if let Err(e) = self.backend.remove(&key).await {
            tracing::warn!("Failed to clear measurements for {}: {}", profile_id, e);
        }
    }

    pub async fn exists(&self, profile_id: &str) -> bool {
        self.load(profile_id).await.is_some()
    }
}

//! # ProfileStore — the single source of truth for the student profile
//!
//! [`ProfileStore`] owns the persistence semantics of the one shared record
//! in the application: the JSON blob under the fixed [`PROFILE_KEY`]. All
//! reads and writes go through the [`KeyValueStore`] trait, so the same logic
//! works against the browser's localStorage ([`crate::LocalStore`], web) or an
//! in-memory map ([`crate::MemoryStore`], native and tests).
//!
//! Consumers read a fresh snapshot with [`load`](ProfileStore::load) at their
//! own mount point rather than sharing an in-memory singleton; the wizard is
//! the only writer. A blob that fails to deserialise degrades to "no profile"
//! with a logged warning — storage never errors outward.

use crate::models::UserProfile;

/// Fixed localStorage key for the single persisted profile record.
pub const PROFILE_KEY: &str = "edulynx_profile";

/// Async trait for raw string storage under string keys.
pub trait KeyValueStore {
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Option<String>>;
    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = ()>;
    fn remove(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = ()>;
}

/// Profile persistence backed by a KeyValueStore.
pub struct ProfileStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ProfileStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the persisted profile, if any.
    ///
    /// Returns `None` when no record exists or the stored blob no longer
    /// matches the expected shape.
    pub async fn load(&self) -> Option<UserProfile> {
        let raw = self.store.get(PROFILE_KEY).await?;
        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(e) => {
                tracing::warn!("discarding malformed profile record: {e}");
                None
            }
        }
    }

    /// Persist the profile, replacing any previous record.
    pub async fn save(&self, profile: &UserProfile) {
        match serde_json::to_string(profile) {
            Ok(raw) => self.store.set(PROFILE_KEY, &raw).await,
            Err(e) => tracing::warn!("failed to encode profile: {e}"),
        }
    }

    /// Remove the persisted profile.
    pub async fn clear(&self) {
        self.store.remove(PROFILE_KEY).await;
    }
}

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::profile::KeyValueStore;

/// In-memory KeyValueStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    async fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExamScores, UserProfile};
    use crate::profile::{ProfileStore, PROFILE_KEY};

    fn sample_profile() -> UserProfile {
        UserProfile {
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            gpa: "3.9".to_string(),
            field_of_study: "Computer Science".to_string(),
            target_country: "USA".to_string(),
            budget: "$30,000 - $50,000".to_string(),
            exam_scores: ExamScores {
                ielts: Some("7.5".to_string()),
                toefl: None,
                gre: Some("320".to_string()),
            },
        }
    }

    #[tokio::test]
    async fn test_load_without_record() {
        let profiles = ProfileStore::new(MemoryStore::new());
        assert!(profiles.load().await.is_none());
    }

    #[tokio::test]
    async fn test_save_and_load_roundtrip() {
        let profiles = ProfileStore::new(MemoryStore::new());
        let profile = sample_profile();

        profiles.save(&profile).await;

        // Field-for-field equality with what was submitted
        assert_eq!(profiles.load().await, Some(profile));
    }

    #[tokio::test]
    async fn test_save_replaces_previous_record() {
        let profiles = ProfileStore::new(MemoryStore::new());

        profiles.save(&sample_profile()).await;

        let mut updated = sample_profile();
        updated.target_country = "Canada".to_string();
        profiles.save(&updated).await;

        let loaded = profiles.load().await.unwrap();
        assert_eq!(loaded.target_country, "Canada");
    }

    #[tokio::test]
    async fn test_stored_blob_uses_camel_case_keys() {
        let store = MemoryStore::new();
        let profiles = ProfileStore::new(store.clone());

        profiles.save(&sample_profile()).await;

        let raw = store.get(PROFILE_KEY).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["fieldOfStudy"], "Computer Science");
        assert_eq!(value["targetCountry"], "USA");
        assert_eq!(value["examScores"]["ielts"], "7.5");
        // Unset scores are omitted, not null
        assert!(value["examScores"].get("toefl").is_none());
    }

    #[tokio::test]
    async fn test_malformed_record_degrades_to_none() {
        let store = MemoryStore::new();
        store.set(PROFILE_KEY, "{not json").await;

        let profiles = ProfileStore::new(store);
        assert!(profiles.load().await.is_none());
    }

    #[tokio::test]
    async fn test_clear_removes_record() {
        let profiles = ProfileStore::new(MemoryStore::new());
        profiles.save(&sample_profile()).await;
        profiles.clear().await;
        assert!(profiles.load().await.is_none());
    }

    #[tokio::test]
    async fn test_legacy_blob_without_scores_still_loads() {
        let store = MemoryStore::new();
        store
            .set(
                PROFILE_KEY,
                r#"{"name":"A","email":"a@b.c","gpa":"3.1","fieldOfStudy":"Economics","targetCountry":"UK","budget":"$10,000 - $30,000"}"#,
            )
            .await;

        let profiles = ProfileStore::new(store);
        let loaded = profiles.load().await.unwrap();
        assert_eq!(loaded.field_of_study, "Economics");
        assert_eq!(loaded.exam_scores, ExamScores::default());
    }
}

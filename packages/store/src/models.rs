//! # Domain model for the persisted student profile
//!
//! [`UserProfile`] is the single record the onboarding wizard produces and the
//! dashboard consumes. It is serialised to JSON with camelCase field names so
//! the stored blob keeps the historical shape (`fieldOfStudy`, `examScores`,
//! `targetCountry`, …) regardless of Rust naming conventions.
//!
//! There is no schema version field and no migration path: at most one
//! profile exists per browser storage origin, and a blob that no longer
//! deserialises is treated as absent (see [`crate::ProfileStore`]).

use serde::{Deserialize, Serialize};

/// The student profile collected by the onboarding wizard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    /// String-encoded numeric, e.g. `"3.85"`. Kept as entered.
    pub gpa: String,
    pub field_of_study: String,
    pub target_country: String,
    /// Display bucket, e.g. `"$30,000 - $50,000"`.
    pub budget: String,
    #[serde(default)]
    pub exam_scores: ExamScores,
}

/// Optional standardized test scores, all kept as entered.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExamScores {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ielts: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toefl: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gre: Option<String>,
}

impl Default for UserProfile {
    /// The wizard's initial draft: empty identity fields plus the
    /// pre-selected dropdown values.
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            gpa: String::new(),
            field_of_study: "Computer Science".to_string(),
            target_country: "USA".to_string(),
            budget: "$30,000 - $50,000".to_string(),
            exam_scores: ExamScores::default(),
        }
    }
}

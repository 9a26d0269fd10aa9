//! # Wire-facing domain models for the advisory service
//!
//! These types cross the AI-service boundary. [`University`] is deserialised
//! straight from the model's JSON output (camelCase keys, matching the
//! prompt's requested shape); [`Turn`]/[`Role`] carry conversation history to
//! the service. None of them are ever persisted — a recommendation list lives
//! for one dashboard session, a chat history for one page lifetime.

use serde::{Deserialize, Serialize};

/// A recommended institution, produced transiently by the service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct University {
    pub id: String,
    pub name: String,
    pub location: String,
    pub rank: u32,
    /// Ordered list of suggested programs.
    pub programs: Vec<String>,
    pub category: Category,
    pub fee: String,
    /// Profile fit in percent, 0–100.
    pub match_score: u8,
}

/// Qualitative admission-likelihood bucket for a recommendation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Safe,
    Moderate,
    Reach,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Safe => "Safe",
            Category::Moderate => "Moderate",
            Category::Reach => "Reach",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of application document submitted for review.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentKind {
    #[serde(rename = "SOP")]
    Sop,
    #[serde(rename = "LOR")]
    Lor,
    Transcript,
    #[serde(rename = "CV")]
    Cv,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Sop => "SOP",
            DocumentKind::Lor => "LOR",
            DocumentKind::Transcript => "Transcript",
            DocumentKind::Cv => "CV",
        }
    }

    /// Long-form name used in review prompts.
    pub fn full_name(&self) -> &'static str {
        match self {
            DocumentKind::Sop => "Statement of Purpose",
            DocumentKind::Lor => "Letter of Recommendation",
            DocumentKind::Transcript => "Academic Transcript",
            DocumentKind::Cv => "Curriculum Vitae",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who produced a conversation turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// One conversation turn as sent to the service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }
}

/// A successful chat exchange result.
#[derive(Clone, Debug, PartialEq)]
pub struct Reply {
    pub text: String,
}

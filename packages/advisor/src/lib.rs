//! # Advisor crate — the AI-service client boundary
//!
//! Everything the UI knows about the external advisory service lives here:
//! three logical operations, their request/response types, and the error
//! taxonomy. All operations are asynchronous, at-most-one-attempt, and may
//! fail — callers degrade to a static fallback message.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | The [`GenerateContent`] transport trait and [`GenerateRequest`] |
//! | [`gemini`] | Real transport: Gemini `generateContent` REST endpoint via `reqwest` |
//! | [`mock`] | Scripted transport for tests |
//! | [`session`] | [`ChatSession`] — the stateful conversation handle |
//! | [`models`] | [`University`], [`Category`], [`DocumentKind`], conversation turns |
//! | [`config`] | [`AdvisorConfig`] — model id and build-time API key |
//! | [`error`] | [`AdvisorError`] |
//!
//! ## Operations
//!
//! - [`Advisor::start_session`] — synchronous, establishes conversational
//!   context; performs no I/O.
//! - [`ChatSession::send`] — one message in, one reply out.
//! - [`Advisor::recommendations`] — ranked universities for a profile,
//!   parsed from the service's JSON output.
//! - [`Advisor::review_document`] — free-form feedback for a document.

use store::UserProfile;

pub mod client;
pub mod config;
pub mod error;
pub mod models;

mod gemini;
pub use gemini::GeminiClient;

mod mock;
pub use mock::MockClient;

mod session;
pub use session::ChatSession;

pub use client::{GenerateContent, GenerateRequest};
pub use config::AdvisorConfig;
pub use error::AdvisorError;
pub use models::{Category, DocumentKind, Reply, Role, Turn, University};

/// High-level advisory operations over any [`GenerateContent`] transport.
#[derive(Clone, Debug)]
pub struct Advisor<C: GenerateContent> {
    client: C,
}

impl Advisor<GeminiClient> {
    /// An advisor backed by the real service, configured from the build
    /// environment.
    pub fn from_env() -> Self {
        Self::new(GeminiClient::new(AdvisorConfig::from_env()))
    }
}

impl<C: GenerateContent + Clone> Advisor<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Open a conversation seeded with the given instruction context.
    ///
    /// Synchronous — the service is first contacted when the session sends.
    pub fn start_session(&self, system_prompt: impl Into<String>) -> ChatSession<C> {
        ChatSession::new(self.client.clone(), system_prompt)
    }

    /// Fetch ranked university recommendations for a profile.
    ///
    /// May fail or return an empty list; the caller treats both the same.
    pub async fn recommendations(
        &self,
        profile: &UserProfile,
    ) -> Result<Vec<University>, AdvisorError> {
        let request = GenerateRequest::single(recommendation_prompt(profile)).with_json_output();
        let text = self.client.generate(request).await?;
        parse_recommendations(&text)
    }

    /// Submit a document's full text for quality feedback.
    pub async fn review_document(
        &self,
        kind: DocumentKind,
        content: &str,
    ) -> Result<String, AdvisorError> {
        let request = GenerateRequest::single(review_prompt(kind, content));
        self.client.generate(request).await
    }
}

fn recommendation_prompt(profile: &UserProfile) -> String {
    let scores = &profile.exam_scores;
    let ielts = scores.ielts.as_deref().unwrap_or("not provided");
    let toefl = scores.toefl.as_deref().unwrap_or("not provided");
    let gre = scores.gre.as_deref().unwrap_or("not provided");
    format!(
        "You are a study-abroad consultant. Recommend 6 universities for this \
         student:\n\
         - GPA (out of 4.0): {gpa}\n\
         - Field of study: {field}\n\
         - Target country: {country}\n\
         - Annual budget: {budget}\n\
         - IELTS: {ielts}, TOEFL: {toefl}, GRE: {gre}\n\
         Respond with a JSON array only. Each element must have the keys: \
         id (string), name, location, rank (number), programs (array of \
         strings), category (one of \"Safe\", \"Moderate\", \"Reach\"), fee \
         (display string), matchScore (number 0-100). Include a mix of Safe, \
         Moderate and Reach options sorted by matchScore descending.",
        gpa = profile.gpa,
        field = profile.field_of_study,
        country = profile.target_country,
        budget = profile.budget,
    )
}

fn review_prompt(kind: DocumentKind, content: &str) -> String {
    format!(
        "You are an experienced university admissions reviewer. Review the \
         following {name} ({short}) for a study-abroad application. Give \
         specific, actionable feedback on structure, clarity, tone and \
         content, then finish with a short list of concrete improvements.\n\n\
         ---\n{content}",
        name = kind.full_name(),
        short = kind.as_str(),
    )
}

/// Parse the service's recommendation payload.
///
/// The model is asked for bare JSON but will occasionally wrap it in a
/// markdown code fence anyway; the fence is stripped before parsing.
pub fn parse_recommendations(text: &str) -> Result<Vec<University>, AdvisorError> {
    Ok(serde_json::from_str(strip_code_fence(text))?)
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{ExamScores, UserProfile};

    const PAYLOAD: &str = r#"[
        {"id":"u1","name":"Example State","location":"Springfield, USA",
         "rank":42,"programs":["MS in CS"],"category":"Safe",
         "fee":"$28,000/yr","matchScore":91},
        {"id":"u2","name":"Reach Tech","location":"Boston, USA",
         "rank":3,"programs":["MS in CS","MEng"],"category":"Reach",
         "fee":"$58,000/yr","matchScore":64}
    ]"#;

    fn profile() -> UserProfile {
        UserProfile {
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            gpa: "3.9".to_string(),
            exam_scores: ExamScores {
                ielts: Some("7.5".to_string()),
                ..ExamScores::default()
            },
            ..UserProfile::default()
        }
    }

    #[test]
    fn test_parse_recommendations_plain_json() {
        let parsed = parse_recommendations(PAYLOAD).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].category, Category::Safe);
        assert_eq!(parsed[1].match_score, 64);
    }

    #[test]
    fn test_parse_recommendations_strips_code_fence() {
        let fenced = format!("```json\n{PAYLOAD}\n```");
        let parsed = parse_recommendations(&fenced).unwrap();
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn test_parse_recommendations_rejects_prose() {
        let err = parse_recommendations("Here are some great schools!");
        assert!(matches!(err, Err(AdvisorError::MalformedPayload(_))));
    }

    #[tokio::test]
    async fn test_recommendations_sends_profile_as_json_request() {
        let client = MockClient::new();
        client.push_reply(PAYLOAD);

        let advisor = Advisor::new(client.clone());
        let recs = advisor.recommendations(&profile()).await.unwrap();
        assert_eq!(recs.len(), 2);

        let requests = client.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert!(request.json_output);
        let prompt = &request.turns[0].text;
        assert!(prompt.contains("3.9"));
        assert!(prompt.contains("Computer Science"));
        assert!(prompt.contains("USA"));
        assert!(prompt.contains("$30,000 - $50,000"));
    }

    #[tokio::test]
    async fn test_recommendations_propagates_rejection() {
        let client = MockClient::new();
        client.push_error(AdvisorError::Api {
            status: 503,
            message: "overloaded".to_string(),
        });

        let advisor = Advisor::new(client);
        assert!(advisor.recommendations(&profile()).await.is_err());
    }

    #[tokio::test]
    async fn test_review_document_sends_kind_and_content() {
        let client = MockClient::new();
        client.push_reply("Solid draft overall.");

        let advisor = Advisor::new(client.clone());
        let feedback = advisor
            .review_document(DocumentKind::Sop, "My statement text.")
            .await
            .unwrap();
        assert_eq!(feedback, "Solid draft overall.");

        let requests = client.requests();
        assert_eq!(requests.len(), 1);
        let prompt = &requests[0].turns[0].text;
        assert!(prompt.contains("SOP"));
        assert!(prompt.contains("Statement of Purpose"));
        assert!(prompt.contains("My statement text."));
        assert!(!requests[0].json_output);
    }

    #[tokio::test]
    async fn test_review_document_propagates_rejection() {
        let client = MockClient::new();
        client.push_error(AdvisorError::EmptyResponse);

        let advisor = Advisor::new(client);
        let result = advisor
            .review_document(DocumentKind::Cv, "resume text")
            .await;
        assert!(result.is_err());
    }
}

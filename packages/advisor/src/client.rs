//! The transport seam of the advisory client.
//!
//! [`GenerateContent`] is the single trait every high-level operation goes
//! through. Implementations live in sibling modules: [`crate::gemini`] talks
//! to the real service, [`crate::mock`] replays scripted responses for tests.

use crate::error::AdvisorError;
use crate::models::Turn;

/// One content-generation request, transport-agnostic.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerateRequest {
    /// Conversational context established once per session, if any.
    pub system_instruction: Option<String>,
    /// Ordered conversation turns, oldest first. The last turn is the one
    /// being answered.
    pub turns: Vec<Turn>,
    /// Ask the service to respond with a JSON document instead of prose.
    pub json_output: bool,
}

impl GenerateRequest {
    /// A single-turn request with no session context.
    pub fn single(prompt: impl Into<String>) -> Self {
        Self {
            system_instruction: None,
            turns: vec![Turn::user(prompt)],
            json_output: false,
        }
    }

    pub fn with_json_output(mut self) -> Self {
        self.json_output = true;
        self
    }
}

/// Async trait for sending a generation request and receiving plain text.
pub trait GenerateContent {
    fn generate(
        &self,
        request: GenerateRequest,
    ) -> impl std::future::Future<Output = Result<String, AdvisorError>>;
}

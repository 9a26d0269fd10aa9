//! # ChatSession — one ongoing conversational exchange
//!
//! A session handle is created synchronously by
//! [`Advisor::start_session`](crate::Advisor::start_session) — no I/O happens
//! until the first [`send`](ChatSession::send). The handle owns the
//! conversation history behind shared interior state, so it can be cloned
//! into event handlers while every clone sees the same context.
//!
//! History is only extended by a successful exchange: a rejected send leaves
//! it untouched, so the context never contains a user turn the model never
//! saw. Each send is one attempt against the transport — no retry.

use std::sync::{Arc, Mutex};

use crate::client::{GenerateContent, GenerateRequest};
use crate::error::AdvisorError;
use crate::models::{Reply, Turn};

/// Stateful handle for one conversation with the advisory service.
#[derive(Clone, Debug)]
pub struct ChatSession<C: GenerateContent> {
    client: C,
    system_prompt: String,
    history: Arc<Mutex<Vec<Turn>>>,
}

impl<C: GenerateContent> ChatSession<C> {
    pub(crate) fn new(client: C, system_prompt: impl Into<String>) -> Self {
        Self {
            client,
            system_prompt: system_prompt.into(),
            history: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Send one user message and return the model's reply.
    ///
    /// The full history plus the new message goes to the service; on success
    /// both the message and the reply are appended to the history.
    pub async fn send(&self, message: &str) -> Result<Reply, AdvisorError> {
        let mut turns = self.history.lock().unwrap().clone();
        turns.push(Turn::user(message));

        let request = GenerateRequest {
            system_instruction: Some(self.system_prompt.clone()),
            turns: turns.clone(),
            json_output: false,
        };
        let text = self.client.generate(request).await?;

        let mut history = self.history.lock().unwrap();
        *history = turns;
        history.push(Turn::model(&text));
        Ok(Reply { text })
    }

    /// Snapshot of the conversation so far.
    pub fn history(&self) -> Vec<Turn> {
        self.history.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockClient;
    use crate::models::Role;

    #[tokio::test]
    async fn test_send_appends_exchange_on_success() {
        let client = MockClient::new();
        client.push_reply("Hi! How can I help?");

        let session = ChatSession::new(client.clone(), "Be an advisor.");
        let reply = session.send("Hello").await.unwrap();

        assert_eq!(reply.text, "Hi! How can I help?");
        let history = session.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], Turn::user("Hello"));
        assert_eq!(history[1], Turn::model("Hi! How can I help?"));
        assert_eq!(client.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_send_carries_context_and_system_prompt() {
        let client = MockClient::new();
        client.push_reply("first");
        client.push_reply("second");

        let session = ChatSession::new(client.clone(), "Be an advisor.");
        session.send("one").await.unwrap();
        session.send("two").await.unwrap();

        let requests = client.requests();
        let last = &requests[1];
        assert_eq!(last.system_instruction.as_deref(), Some("Be an advisor."));
        // Prior exchange plus the new message, oldest first
        assert_eq!(last.turns.len(), 3);
        assert_eq!(last.turns[0].role, Role::User);
        assert_eq!(last.turns[1].role, Role::Model);
        assert_eq!(last.turns[2], Turn::user("two"));
        assert!(!last.json_output);
    }

    #[tokio::test]
    async fn test_failed_send_leaves_history_unchanged() {
        let client = MockClient::new();
        client.push_reply("ok");
        client.push_error(AdvisorError::EmptyResponse);

        let session = ChatSession::new(client.clone(), "Be an advisor.");
        session.send("one").await.unwrap();
        let err = session.send("two").await;

        assert!(err.is_err());
        // Only the successful exchange remains; exactly one attempt was made
        // for the failed send.
        assert_eq!(session.history().len(), 2);
        assert_eq!(client.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_clones_share_one_conversation() {
        let client = MockClient::new();
        client.push_reply("reply");

        let session = ChatSession::new(client, "Be an advisor.");
        let clone = session.clone();
        clone.send("hello").await.unwrap();

        assert_eq!(session.history().len(), 2);
    }
}

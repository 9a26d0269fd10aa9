use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::client::{GenerateContent, GenerateRequest};
use crate::error::AdvisorError;

/// Scripted GenerateContent implementation for testing.
///
/// Responses are queued with [`push_reply`](MockClient::push_reply) /
/// [`push_error`](MockClient::push_error) and consumed in order; every
/// request is recorded for assertions. An unscripted call fails with
/// [`AdvisorError::EmptyResponse`].
#[derive(Clone, Debug, Default)]
pub struct MockClient {
    replies: Arc<Mutex<VecDeque<Result<String, AdvisorError>>>>,
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_reply(&self, text: impl Into<String>) {
        self.replies.lock().unwrap().push_back(Ok(text.into()));
    }

    pub fn push_error(&self, error: AdvisorError) {
        self.replies.lock().unwrap().push_back(Err(error));
    }

    /// Requests seen so far, oldest first.
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl GenerateContent for MockClient {
    async fn generate(&self, request: GenerateRequest) -> Result<String, AdvisorError> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(AdvisorError::EmptyResponse))
    }
}

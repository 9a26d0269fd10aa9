//! # Request lifecycle shared by every page controller
//!
//! Each page drives at most one kind of request against the profile store or
//! the advisory service and renders the same four-phase machine:
//!
//! ```text
//! Idle -> Pending -> Succeeded(T) | Failed(message)
//! ```
//!
//! A new user action (re-submit, refresh) moves `Succeeded`/`Failed` back to
//! `Pending`. There is no automatic retry, no timeout, and no cancellation of
//! an in-flight request — instead, completions are tagged. [`RequestSeq`]
//! hands out monotonically increasing tags per controller; a completion whose
//! tag is no longer the latest issued discards itself, so overlapping
//! requests resolve last-issued-wins rather than last-resolved-wins, and a
//! response arriving after the view moved on never clobbers newer state.

/// View-facing phase of one request slot.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RequestState<T> {
    #[default]
    Idle,
    Pending,
    Succeeded(T),
    Failed(String),
}

impl<T> RequestState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending)
    }

    /// The successful value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            RequestState::Succeeded(value) => Some(value),
            _ => None,
        }
    }
}

/// Monotonic tag source guarding a controller's request slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestSeq {
    issued: u64,
}

impl RequestSeq {
    /// Start a new request, superseding any still in flight.
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Whether `tag` still identifies the latest issued request.
    pub fn is_current(&self, tag: u64) -> bool {
        self.issued == tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_increase_monotonically() {
        let mut seq = RequestSeq::default();
        let a = seq.begin();
        let b = seq.begin();
        assert!(b > a);
    }

    #[test]
    fn test_superseded_tag_is_stale() {
        let mut seq = RequestSeq::default();
        let first = seq.begin();
        assert!(seq.is_current(first));

        let second = seq.begin();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_state_accessors() {
        let idle: RequestState<u8> = RequestState::Idle;
        assert!(!idle.is_pending());
        assert!(idle.value().is_none());

        assert!(RequestState::<u8>::Pending.is_pending());
        assert_eq!(RequestState::Succeeded(7u8).value(), Some(&7));
        assert!(RequestState::<u8>::Failed("x".to_string()).value().is_none());
    }
}

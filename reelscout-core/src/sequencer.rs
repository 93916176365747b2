//! Monotonic request tokens for last-request-wins commits.
//!
//! Every outgoing request captures a token at issue time. When the response
//! arrives it may only mutate shared state if its token is still the latest
//! one issued by the same sequencer.

use serde::{Deserialize, Serialize};

/// Token captured when a request is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequestToken(u64);

impl RequestToken {
    /// Raw sequence number.
    pub fn value(self) -> u64 {
        self.0
    }

    /// Rebuilds a token from its raw value, e.g. from a URL segment.
    pub fn from_value(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for RequestToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issues tokens and answers whether a token is still current.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a token newer than every token issued before.
    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    /// Whether `token` is the most recently issued one.
    pub fn is_latest(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }

    /// Supersedes every outstanding token without issuing a new request.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}

/// Outcome of trying to commit a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Commit {
    /// The response was current and state was updated.
    Applied,
    /// A newer request was issued; the response was dropped.
    Superseded,
}

impl Commit {
    pub fn is_applied(self) -> bool {
        matches!(self, Commit::Applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_monotonic() {
        let mut sequencer = RequestSequencer::new();
        let first = sequencer.issue();
        let second = sequencer.issue();

        assert!(second > first);
        assert!(sequencer.is_latest(second));
        assert!(!sequencer.is_latest(first));
    }

    #[test]
    fn test_invalidate_supersedes_outstanding_token() {
        let mut sequencer = RequestSequencer::new();
        let token = sequencer.issue();
        sequencer.invalidate();

        assert!(!sequencer.is_latest(token));
        assert!(sequencer.issue() > token);
    }
}

//! Last-selection-wins ordering for overlapping fetches.
//!
//! Each fetch is tagged with a `RequestToken` when it starts. When it
//! completes, its result is applied only if no newer token has been issued
//! since; otherwise it is dropped.

use chrono::{DateTime, Utc};
use log::warn;

/// Sequence number of one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Monotonic source of request tokens.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token newer than every token issued before.
    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }

    /// Pass `value` through only when `token` is the latest issued.
    pub fn accept<T>(&self, token: RequestToken, value: T) -> Option<T> {
        self.is_current(token).then_some(value)
    }
}

/// What the view shows for the selected team.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Ready {
        value: T,
        fetched_at: DateTime<Utc>,
    },
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            LoadState::Ready { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// A load state guarded by a request sequence.
///
/// `begin` marks the slot as loading and hands out a token; `resolve`
/// applies a result only for the most recent token. Failures are guarded
/// the same way, so a stale error never hides newer data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchSlot<T> {
    sequence: RequestSequence,
    state: LoadState<T>,
}

impl<T> FetchSlot<T> {
    pub fn new() -> Self {
        Self {
            sequence: RequestSequence::new(),
            state: LoadState::Idle,
        }
    }

    pub fn begin(&mut self) -> RequestToken {
        self.state = LoadState::Loading;
        self.sequence.issue()
    }

    /// Apply a completed fetch. Returns false when the result was stale and dropped.
    pub fn resolve<E: ToString>(
        &mut self,
        token: RequestToken,
        result: Result<T, E>,
        fetched_at: DateTime<Utc>,
    ) -> bool {
        let Some(result) = self.sequence.accept(token, result) else {
            warn!("Discarding stale response for request #{}", token.value());
            return false;
        };
        self.state = match result {
            Ok(value) => LoadState::Ready { value, fetched_at },
            Err(e) => LoadState::Failed(e.to_string()),
        };
        true
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }
}

use std::time::Duration;

use thiserror::Error;

pub type RequestId = u64;

#[derive(Debug, Clone)]
pub struct EngineSettings {
    /// Artificial latency standing in for a future model round trip.
    pub simulated_latency: Duration,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            simulated_latency: Duration::from_millis(1500),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    RemixCompleted {
        request_id: RequestId,
        result: Result<String, RemixFailure>,
    },
}

/// The single failure kind the remix path can produce. The transforms
/// themselves are pure string functions; this boundary exists for the
/// real backend that will eventually replace them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("processing failure: {message}")]
pub struct RemixFailure {
    pub message: String,
}

impl RemixFailure {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// Copyright 2026 Gridmap Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types for the acquisition pipeline.

/// All failures an acquisition cycle can produce.
///
/// Every variant except [`AcquireError::Unauthorized`] ends up as the text of
/// the viewer's error screen, so the messages name what actually went wrong.
/// `Unauthorized` is resolved by sending the user to the login page instead.
#[derive(Debug, thiserror::Error)]
pub enum AcquireError {
    /// The service rejected the session. Handled by redirect, never shown
    /// as an error screen.
    #[error("Unauthorized")]
    Unauthorized,

    /// The requested network identifier does not exist on the service.
    #[error("Network \"{0}\" not found")]
    NotFound(String),

    /// The server-side extraction task reported failure. Carries the
    /// service-provided message when there is one.
    #[error("{0}")]
    TaskFailed(String),

    /// Polling attempts were exhausted without the task reaching a
    /// terminal state.
    #[error("Task timeout - data took too long to load")]
    TaskTimeout,

    /// Every resource came back empty, so there is nothing to draw.
    #[error("No buses or lines found in this network")]
    NoData,

    /// Generic transport problem: a non-2xx status, a connection failure,
    /// or a body that did not decode.
    #[error("Failed to fetch {resource}: {detail}")]
    Transport { resource: String, detail: String },
}

impl AcquireError {
    /// Build a [`AcquireError::Transport`] from anything displayable.
    pub fn transport(resource: impl Into<String>, detail: impl ToString) -> Self {
        Self::Transport {
            resource: resource.into(),
            detail: detail.to_string(),
        }
    }

    /// Build a [`AcquireError::TaskFailed`], substituting the generic
    /// message when the service supplied none.
    pub fn task_failed(message: Option<String>) -> Self {
        Self::TaskFailed(message.unwrap_or_else(|| "Task failed".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_identify_their_cause() {
        assert_eq!(
            AcquireError::NotFound("elec-2030".to_string()).to_string(),
            "Network \"elec-2030\" not found"
        );
        assert_eq!(
            AcquireError::transport("lines", "502 Bad Gateway").to_string(),
            "Failed to fetch lines: 502 Bad Gateway"
        );
        assert_eq!(
            AcquireError::TaskTimeout.to_string(),
            "Task timeout - data took too long to load"
        );
    }

    #[test]
    fn task_failure_passes_service_message_through() {
        assert_eq!(
            AcquireError::task_failed(Some("solver exploded".to_string())).to_string(),
            "solver exploded"
        );
        assert_eq!(AcquireError::task_failed(None).to_string(), "Task failed");
    }
}

//! Bounded fixed-interval polling of a background task.
//!
//! Deliberately simple: short-lived server-side extractions do not warrant
//! backoff, just a fixed interval and a hard attempt cap.

use crate::acquisition::http_client::HttpClient;
use crate::error::AcquireError;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Polling parameters for one acquisition cycle.
#[derive(Debug, Clone)]
pub struct PollConfig {
    pub max_attempts: u32,
    pub interval: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            max_attempts: 60,
            interval: Duration::from_secs(1),
        }
    }
}

/// Status body as the service reports it.
#[derive(Debug, Deserialize)]
struct StatusBody {
    state: String,
    #[serde(default)]
    result: Option<ResultEnvelope>,
    #[serde(default)]
    error: Option<String>,
}

/// The task's payload sits one level inside the result wrapper.
#[derive(Debug, Deserialize)]
struct ResultEnvelope {
    data: Value,
}

/// The three states a polled task can be in. Terminal states are final;
/// the service never reverts a task out of them.
#[derive(Debug)]
enum TaskState {
    Pending,
    Succeeded(Value),
    Failed(String),
}

impl StatusBody {
    fn into_state(self) -> TaskState {
        match self.state.as_str() {
            "SUCCESS" => match self.result {
                Some(envelope) => TaskState::Succeeded(envelope.data),
                // A terminal state with nothing in it is still terminal.
                None => TaskState::Failed("Task succeeded without a result payload".to_string()),
            },
            "FAILURE" => match self.error {
                Some(message) => TaskState::Failed(message),
                None => TaskState::Failed("Task failed".to_string()),
            },
            _ => TaskState::Pending,
        }
    }
}

/// Poll `status_url` until the task is terminal or attempts run out.
///
/// A 401 from any attempt aborts the loop through the client's shared
/// unauthorized path; sessions can expire mid-poll, so this is not a
/// first-attempt-only check.
pub async fn poll(
    client: &HttpClient,
    status_url: &str,
    config: &PollConfig,
) -> Result<Value, AcquireError> {
    for attempt in 1..=config.max_attempts {
        let response = client.get(status_url).await?;
        let status: StatusBody = serde_json::from_str(&response.text)
            .map_err(|err| AcquireError::transport("task status", err))?;

        match status.into_state() {
            TaskState::Succeeded(data) => {
                debug!(attempt, status_url, "task completed");
                return Ok(data);
            }
            TaskState::Failed(message) => return Err(AcquireError::TaskFailed(message)),
            TaskState::Pending if attempt < config.max_attempts => {
                debug!(attempt, status_url, "task still pending");
                tokio::time::sleep(config.interval).await;
            }
            TaskState::Pending => {}
        }
    }

    Err(AcquireError::TaskTimeout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn state_of(body: Value) -> TaskState {
        serde_json::from_value::<StatusBody>(body).unwrap().into_state()
    }

    #[test]
    fn success_unwraps_the_result_envelope() {
        let state = state_of(json!({
            "state": "SUCCESS",
            "result": { "data": { "fields": ["lat"], "rows": [[1.0]] } }
        }));
        match state {
            TaskState::Succeeded(data) => assert_eq!(data["fields"][0], "lat"),
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[test]
    fn failure_carries_the_service_message() {
        let state = state_of(json!({ "state": "FAILURE", "error": "solver exploded" }));
        assert!(matches!(state, TaskState::Failed(message) if message == "solver exploded"));
    }

    #[test]
    fn failure_without_message_gets_the_generic_one() {
        let state = state_of(json!({ "state": "FAILURE" }));
        assert!(matches!(state, TaskState::Failed(message) if message == "Task failed"));
    }

    #[test]
    fn anything_else_counts_as_pending() {
        for state in ["PENDING", "STARTED", "RETRY"] {
            assert!(matches!(state_of(json!({ "state": state })), TaskState::Pending));
        }
    }

    #[test]
    fn success_without_result_is_a_failure() {
        assert!(matches!(
            state_of(json!({ "state": "SUCCESS" })),
            TaskState::Failed(_)
        ));
    }
}

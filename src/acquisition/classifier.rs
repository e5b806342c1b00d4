//! Discriminates the two shapes a resource endpoint can answer with.
//!
//! The split is modeled as a tagged enum so downstream code has to match
//! both arms; there is no way to forget the background-task case.

use serde::Deserialize;
use serde_json::Value;

/// Status marker the service sets on queued-task responses.
pub const PROCESSING: &str = "processing";

/// A queued background task: where to poll, and which task it is.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaskDescriptor {
    pub task_id: String,
    pub status_url: String,
}

/// The two mutually exclusive response shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Classified {
    /// Directly usable tabular data (the service answered from cache).
    Immediate(Value),
    /// A background task that must be polled to completion.
    Pending(TaskDescriptor),
}

/// Classify a decoded response body.
///
/// A body is `Pending` iff it carries the processing marker together with a
/// task identifier and a status address; anything else is `Immediate`.
/// Pure and total; a malformed immediate body is the caller's problem.
pub fn classify(body: Value) -> Classified {
    if body.get("status").and_then(Value::as_str) == Some(PROCESSING) {
        if let (Some(task_id), Some(status_url)) = (
            body.get("task_id").and_then(Value::as_str),
            body.get("status_url").and_then(Value::as_str),
        ) {
            return Classified::Pending(TaskDescriptor {
                task_id: task_id.to_string(),
                status_url: status_url.to_string(),
            });
        }
    }
    Classified::Immediate(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn queued_task_is_pending() {
        let body = json!({
            "status": "processing",
            "task_id": "42",
            "status_url": "/api/v1/tasks/42"
        });
        assert_eq!(
            classify(body),
            Classified::Pending(TaskDescriptor {
                task_id: "42".to_string(),
                status_url: "/api/v1/tasks/42".to_string(),
            })
        );
    }

    #[test]
    fn tabular_body_is_immediate() {
        let body = json!({ "fields": ["lat", "lng"], "rows": [[1.0, 2.0]] });
        assert_eq!(classify(body.clone()), Classified::Immediate(body));
    }

    #[test]
    fn processing_marker_without_task_id_is_immediate() {
        let body = json!({ "status": "processing" });
        assert!(matches!(classify(body), Classified::Immediate(_)));
    }

    #[test]
    fn task_id_without_marker_is_immediate() {
        // A column literally named "status" must not trip the classifier.
        let body = json!({ "status": "done", "task_id": "42", "status_url": "/x" });
        assert!(matches!(classify(body), Classified::Immediate(_)));
    }
}

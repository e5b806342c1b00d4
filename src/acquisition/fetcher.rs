//! One logical "get this layer" operation.
//!
//! Issues the initial request, classifies the response shape, and polls the
//! task to completion when the service queued one. Callers always receive
//! the uniform tabular payload; the cached-vs-task split never leaks out.

use crate::acquisition::classifier::{self, Classified};
use crate::acquisition::http_client::HttpClient;
use crate::acquisition::poller::{self, PollConfig};
use crate::config::Settings;
use crate::error::AcquireError;
use crate::map::types::{LayerKind, TablePayload};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;

/// One named resource to retrieve, fixed for the lifetime of a cycle.
#[derive(Debug, Clone)]
pub struct ResourceRequest {
    pub kind: LayerKind,
    pub network_id: String,
    pub url: String,
}

impl ResourceRequest {
    pub fn new(settings: &Settings, network_id: &str, kind: LayerKind) -> Self {
        Self {
            kind,
            network_id: network_id.to_string(),
            url: settings.resource_url(network_id, kind),
        }
    }
}

/// Fetch one resource to a tabular payload, whichever path the service takes.
pub async fn fetch(
    client: &HttpClient,
    poll: &PollConfig,
    request: &ResourceRequest,
) -> Result<TablePayload, AcquireError> {
    let response = client.get(&request.url).await?;

    if response.status == StatusCode::NOT_FOUND {
        return Err(AcquireError::NotFound(request.network_id.clone()));
    }
    if !response.status.is_success() {
        return Err(AcquireError::transport(request.kind.id(), response.status));
    }

    let body: Value = serde_json::from_str(&response.text)
        .map_err(|err| AcquireError::transport(request.kind.id(), err))?;

    let raw = match classifier::classify(body) {
        Classified::Pending(descriptor) => {
            debug!(
                resource = request.kind.id(),
                task_id = %descriptor.task_id,
                "resource queued as background task"
            );
            poller::poll(client, &descriptor.status_url, poll).await?
        }
        Classified::Immediate(body) => {
            debug!(resource = request.kind.id(), "resource served from cache");
            body
        }
    };

    serde_json::from_value(raw).map_err(|err| AcquireError::transport(request.kind.id(), err))
}

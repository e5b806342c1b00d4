//! Fan-out/fan-in over the cycle's resource requests.
//!
//! All fetches are issued concurrently; total latency is the slowest single
//! fetch. The first failure cancels the remaining fetches — a map with half
//! its layers misleads more than an error screen informs.

use crate::acquisition::fetcher::{self, ResourceRequest};
use crate::acquisition::http_client::HttpClient;
use crate::acquisition::poller::PollConfig;
use crate::error::AcquireError;
use crate::map::types::{Dataset, DatasetCollection, LayerKind, TablePayload};
use futures::future;
use tracing::debug;

/// Fetch every requested resource and assemble the dataset collection.
///
/// Empty payloads are dropped silently; a collection with nothing left in
/// it fails the cycle with `NoData`.
pub async fn acquire(
    client: &HttpClient,
    poll: &PollConfig,
    requests: &[ResourceRequest],
) -> Result<DatasetCollection, AcquireError> {
    let fetches = requests.iter().map(|request| async move {
        let payload = fetcher::fetch(client, poll, request).await?;
        Ok::<(LayerKind, TablePayload), AcquireError>((request.kind, payload))
    });

    let completed = future::try_join_all(fetches).await?;

    let datasets: Vec<Dataset> = completed
        .into_iter()
        .filter(|(kind, payload)| {
            if payload.is_empty() {
                debug!(resource = kind.id(), "dropping empty resource");
            }
            !payload.is_empty()
        })
        .map(|(kind, payload)| Dataset::new(kind, payload))
        .collect();

    if datasets.is_empty() {
        return Err(AcquireError::NoData);
    }

    Ok(DatasetCollection::from_unordered(datasets))
}

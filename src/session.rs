// Copyright 2026 Gridmap Contributors
// SPDX-License-Identifier: Apache-2.0

//! Session controller: the acquisition state machine plus the two
//! session-start probes (identity, map config).
//!
//! The observable outcome lives in a single slot guarded by a generation
//! counter. Each cycle bumps the generation before doing any work and
//! compares it again at write time, so a stale in-flight cycle can never
//! overwrite the outcome of the cycle that superseded it.

use crate::acquisition::fetcher::ResourceRequest;
use crate::acquisition::http_client::HttpClient;
use crate::acquisition::orchestrator;
use crate::config::Settings;
use crate::error::AcquireError;
use crate::map::layers::{self, MapLayerConfig};
use crate::map::types::{DatasetCollection, LayerKind};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// The three observable states of one acquisition cycle.
#[derive(Debug, Clone)]
pub enum Outcome {
    Loading,
    Error(String),
    Ready {
        datasets: DatasetCollection,
        config: MapLayerConfig,
    },
}

/// How a call to [`MapSession::begin_cycle`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleEnd {
    /// This cycle wrote the outcome slot.
    Settled,
    /// A newer cycle started while this one ran; its result was discarded.
    Superseded,
    /// The service rejected the session; send the user to the login page.
    Unauthorized,
}

/// Result of the session-start identity probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthGate {
    /// Authenticated, or auth is disabled on the service.
    Open,
    /// The service wants a login before serving data.
    LoginRequired,
}

/// Map configuration served by the service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MapConfig {
    #[serde(default)]
    pub mapbox_token: String,
}

impl MapConfig {
    pub fn has_token(&self) -> bool {
        !self.mapbox_token.is_empty()
    }
}

struct Slot {
    generation: u64,
    outcome: Outcome,
}

/// One viewer session against the analysis service.
pub struct MapSession {
    settings: Settings,
    client: HttpClient,
    slot: Arc<Mutex<Slot>>,
}

impl MapSession {
    pub fn new(settings: Settings) -> Self {
        let client = HttpClient::new(settings.request_timeout);
        Self {
            settings,
            client,
            slot: Arc::new(Mutex::new(Slot {
                generation: 0,
                outcome: Outcome::Loading,
            })),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The current observable outcome.
    pub async fn outcome(&self) -> Outcome {
        self.slot.lock().await.outcome.clone()
    }

    /// Identity probe at session start. Only the 401 signal is consumed;
    /// a network failure is treated as "auth disabled" and tolerated.
    pub async fn check_auth(&self) -> AuthGate {
        match self.client.get(&self.settings.auth_probe_url()).await {
            Err(AcquireError::Unauthorized) => AuthGate::LoginRequired,
            Err(err) => {
                warn!(error = %err, "auth probe failed, continuing without auth");
                AuthGate::Open
            }
            Ok(_) => AuthGate::Open,
        }
    }

    /// Fetch the map configuration. Failure leaves the token empty; the
    /// viewer then shows its token-required screen instead of a map.
    pub async fn map_config(&self) -> MapConfig {
        match self.client.get(&self.settings.map_config_url()).await {
            Ok(body) if body.status.is_success() => {
                serde_json::from_str(&body.text).unwrap_or_default()
            }
            Ok(body) => {
                warn!(status = %body.status, "map config unavailable");
                MapConfig::default()
            }
            Err(err) => {
                warn!(error = %err, "failed to fetch map config");
                MapConfig::default()
            }
        }
    }

    /// Run one acquisition cycle for `network_id`, ending in `Error` or
    /// `Ready` unless a newer cycle supersedes this one first.
    pub async fn begin_cycle(&self, network_id: Option<&str>) -> CycleEnd {
        let generation = {
            let mut slot = self.slot.lock().await;
            slot.generation += 1;
            slot.outcome = Outcome::Loading;
            slot.generation
        };

        let Some(network_id) = network_id else {
            // No identifier means no network activity at all.
            return self
                .settle(generation, Outcome::Error("No network ID provided".to_string()))
                .await;
        };

        info!(network_id, "starting acquisition cycle");
        match self.run_cycle(network_id).await {
            Ok((datasets, config)) => {
                info!(network_id, datasets = datasets.len(), "acquisition cycle ready");
                self.settle(generation, Outcome::Ready { datasets, config }).await
            }
            Err(AcquireError::Unauthorized) => {
                // Redirect, not an error screen; the slot is left as-is.
                warn!(network_id, "unauthorized during acquisition");
                CycleEnd::Unauthorized
            }
            Err(err) => {
                warn!(network_id, error = %err, "acquisition cycle failed");
                self.settle(generation, Outcome::Error(err.to_string())).await
            }
        }
    }

    async fn run_cycle(
        &self,
        network_id: &str,
    ) -> Result<(DatasetCollection, MapLayerConfig), AcquireError> {
        let requests: Vec<ResourceRequest> = LayerKind::ALL
            .iter()
            .map(|&kind| ResourceRequest::new(&self.settings, network_id, kind))
            .collect();

        let datasets = orchestrator::acquire(&self.client, &self.settings.poll, &requests).await?;
        let config = layers::build(&datasets);
        Ok((datasets, config))
    }

    async fn settle(&self, generation: u64, outcome: Outcome) -> CycleEnd {
        let mut slot = self.slot.lock().await;
        if slot.generation != generation {
            debug!(generation, current = slot.generation, "discarding superseded cycle result");
            return CycleEnd::Superseded;
        }
        slot.outcome = outcome;
        CycleEnd::Settled
    }
}

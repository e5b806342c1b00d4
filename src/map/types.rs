// Copyright 2026 Gridmap Contributors
// SPDX-License-Identifier: Apache-2.0

//! Core data model: tabular payloads and the dataset collection.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Directly usable tabular data: an ordered column descriptor plus rows
/// whose arity matches it. This is the uniform shape every fetch resolves
/// to, whether the service answered from cache or via a background task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TablePayload {
    pub fields: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl TablePayload {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The geographic layers the service can extract from a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Buses,
    Lines,
}

impl LayerKind {
    /// Every layer fetched during one acquisition cycle.
    pub const ALL: [LayerKind; 2] = [LayerKind::Buses, LayerKind::Lines];

    /// Resource name, as it appears in service paths and dataset ids.
    pub fn id(self) -> &'static str {
        match self {
            LayerKind::Buses => "buses",
            LayerKind::Lines => "lines",
        }
    }

    /// Human-facing dataset label.
    pub fn label(self) -> &'static str {
        match self {
            LayerKind::Buses => "Network Buses",
            LayerKind::Lines => "Network Lines",
        }
    }
}

/// Identity of one dataset within the collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetInfo {
    pub id: String,
    pub label: String,
}

/// A named, labeled payload tagged with its layer kind. Only built for
/// non-empty payloads; empty layers never reach the collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub info: DatasetInfo,
    pub data: TablePayload,
    #[serde(skip)]
    pub kind: LayerKind,
}

impl Dataset {
    pub fn new(kind: LayerKind, data: TablePayload) -> Self {
        Self {
            info: DatasetInfo {
                id: kind.id().to_string(),
                label: kind.label().to_string(),
            },
            data,
            kind,
        }
    }
}

/// The datasets assembled in one acquisition cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DatasetCollection(Vec<Dataset>);

impl DatasetCollection {
    /// Build from fetch-completion order. Concurrent fetches settle in
    /// whatever order the network dictates, so the collection is normalized
    /// to resource-name order to keep the derived config reproducible.
    pub fn from_unordered(mut datasets: Vec<Dataset>) -> Self {
        datasets.sort_by(|a, b| a.info.id.cmp(&b.info.id));
        Self(datasets)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dataset> {
        self.0.iter()
    }
}

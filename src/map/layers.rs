//! Derives the declarative layer configuration the map viewer consumes.
//!
//! Purely a function of which dataset kinds are present; row values never
//! influence the emitted config.

use crate::map::types::{DatasetCollection, LayerKind};
use serde::Serialize;
use serde_json::{json, Value};

/// Top-level config document, version-tagged the way the viewer expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapLayerConfig {
    pub version: String,
    pub config: ConfigBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigBody {
    #[serde(rename = "visState")]
    pub vis_state: VisState,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisState {
    pub layers: Vec<Layer>,
}

/// One visual rendering rule bound to a dataset kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layer {
    pub id: String,
    #[serde(rename = "type")]
    pub layer_type: String,
    pub config: LayerSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerSettings {
    #[serde(rename = "dataId")]
    pub data_id: String,
    pub label: String,
    pub color: [u8; 3],
    pub columns: Value,
    #[serde(rename = "isVisible")]
    pub is_visible: bool,
    #[serde(rename = "visConfig")]
    pub vis_config: Value,
}

/// Fixed style table. A kind without an entry here is skipped, so a new
/// dataset kind can land before its rendering does.
fn layer_for(kind: LayerKind) -> Option<Layer> {
    let layer = match kind {
        LayerKind::Buses => Layer {
            id: "buses-layer".to_string(),
            layer_type: "point".to_string(),
            config: LayerSettings {
                data_id: kind.id().to_string(),
                label: "Buses".to_string(),
                color: [30, 150, 190],
                columns: json!({ "lat": "lat", "lng": "lng" }),
                is_visible: true,
                vis_config: json!({ "radius": 5, "opacity": 0.8 }),
            },
        },
        LayerKind::Lines => Layer {
            id: "lines-layer".to_string(),
            layer_type: "line".to_string(),
            config: LayerSettings {
                data_id: kind.id().to_string(),
                label: "Lines".to_string(),
                color: [255, 140, 0],
                columns: json!({
                    "lat0": "lat0",
                    "lng0": "lng0",
                    "lat1": "lat1",
                    "lng1": "lng1"
                }),
                is_visible: true,
                vis_config: json!({ "opacity": 0.6, "thickness": 2 }),
            },
        },
    };
    Some(layer)
}

/// Build the layer config for an assembled collection: one layer per
/// distinct kind present, in kind order.
pub fn build(collection: &DatasetCollection) -> MapLayerConfig {
    let mut kinds: Vec<LayerKind> = collection.iter().map(|d| d.kind).collect();
    kinds.sort_unstable();
    kinds.dedup();

    MapLayerConfig {
        version: "v1".to_string(),
        config: ConfigBody {
            vis_state: VisState {
                layers: kinds.into_iter().filter_map(layer_for).collect(),
            },
        },
    }
}

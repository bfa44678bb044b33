use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;

use crate::{
    foundation::error::{LayerflowError, LayerflowResult},
    layers::config::{ConnectiveConfig, LayerConfig},
    network::arena::Network,
    network::builder::NetworkBuilder,
};

/// JSON-facing description of a chain network.
///
/// ```json
/// {
///   "layers": [{ "node_count": 3 }, { "node_count": 2, "name": "out" }],
///   "connective": { "style": "moving_token" },
///   "layer_gap": 0.8
/// }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NetworkConfig {
    /// Layers from input to output.
    pub layers: Vec<LayerConfig>,
    /// Applied to every pair of consecutive layers.
    #[serde(default)]
    pub connective: ConnectiveConfig,
    /// Gap between neighbouring frames.
    #[serde(default = "default_layer_gap")]
    pub layer_gap: f64,
}

fn default_layer_gap() -> f64 {
    NetworkBuilder::DEFAULT_LAYER_GAP
}

impl NetworkConfig {
    /// Parse a network config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> LayerflowResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| LayerflowError::serde(format!("parse network config JSON: {e}")))
    }

    /// Parse a network config from a JSON string.
    pub fn from_json_str(s: &str) -> LayerflowResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| LayerflowError::serde(format!("parse network config JSON: {e}")))
    }

    /// Parse a network config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> LayerflowResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open network config '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Pretty-printed JSON form of this config.
    pub fn to_json_string(&self) -> LayerflowResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| LayerflowError::serde(format!("write network config JSON: {e}")))
    }

    /// Build every layer, lay them out and connect consecutive ones.
    pub fn build(&self) -> LayerflowResult<Network> {
        let mut builder = NetworkBuilder::new()
            .connective(self.connective.clone())
            .layer_gap(self.layer_gap);
        for layer in &self.layers {
            builder = builder.feed_forward(layer.clone())?;
        }
        builder.build()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/network/config.rs"]
mod tests;

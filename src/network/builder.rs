use std::collections::BTreeSet;

use crate::{
    foundation::core::{Vec2, require_non_negative},
    foundation::error::{LayerflowError, LayerflowResult},
    layers::component::NeuralLayer,
    layers::config::{ConnectiveConfig, LayerConfig},
    layers::feed_forward::FeedForwardLayer,
    network::arena::Network,
};

/// Assembles a chain network: lays every layer out, then connects consecutive layers.
pub struct NetworkBuilder {
    layers: Vec<Box<dyn NeuralLayer>>,
    connective: ConnectiveConfig,
    layer_gap: f64,
}

impl Default for NetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NetworkBuilder {
    /// Gap between neighbouring frames when none is configured.
    pub const DEFAULT_LAYER_GAP: f64 = 0.8;

    /// Empty builder with the default connective config and layer gap.
    pub fn new() -> Self {
        Self {
            layers: Vec::new(),
            connective: ConnectiveConfig::default(),
            layer_gap: Self::DEFAULT_LAYER_GAP,
        }
    }

    /// Append an already constructed layer.
    pub fn layer(mut self, layer: impl NeuralLayer + 'static) -> Self {
        self.layers.push(Box::new(layer));
        self
    }

    /// Build a [`FeedForwardLayer`] from `config`; unnamed layers become `layer{index}`.
    pub fn feed_forward(mut self, mut config: LayerConfig) -> LayerflowResult<Self> {
        if config.name.is_none() {
            config.name = Some(format!("layer{}", self.layers.len()));
        }
        self.layers.push(Box::new(FeedForwardLayer::new(config)?));
        Ok(self)
    }

    /// Config shared by every connective layer.
    pub fn connective(mut self, config: ConnectiveConfig) -> Self {
        self.connective = config;
        self
    }

    /// Horizontal distance between the right side of one frame and the left side of the next.
    pub fn layer_gap(mut self, gap: f64) -> Self {
        self.layer_gap = gap;
        self
    }

    /// Lay the layers out left to right, centered on the origin, then derive the edges.
    #[tracing::instrument(skip(self), fields(layers = self.layers.len()))]
    pub fn build(mut self) -> LayerflowResult<Network> {
        require_non_negative("layer_gap", self.layer_gap)?;
        self.connective.validate()?;

        let mut seen = BTreeSet::new();
        if let Some(dup) = self.layers.iter().find(|l| !seen.insert(l.name().to_string())) {
            return Err(LayerflowError::invalid_parameter(format!(
                "duplicate layer name '{}'",
                dup.name()
            )));
        }

        arrange(&mut self.layers, self.layer_gap);

        let mut network = Network::new();
        let mut ids = Vec::with_capacity(self.layers.len());
        for layer in self.layers {
            ids.push(network.layers_mut().insert(layer)?);
        }
        for pair in ids.windows(2) {
            let (up, down) = (pair[0], pair[1]);
            let degenerate = [up, down].iter().any(|&id| {
                network
                    .layer(id)
                    .is_some_and(|layer| layer.nodes().is_empty())
            });
            if degenerate {
                tracing::warn!(%up, %down, "connecting a layer without nodes; no edges derived");
            }
            network.connect(up, down, self.connective.clone())?;
        }
        tracing::debug!(
            layers = network.layers().len(),
            connectives = network.connectives().len(),
            "built network"
        );
        Ok(network)
    }
}

/// Place frames side by side with `gap` between them, vertically centered on y = 0, with the
/// whole row centered on x = 0.
fn arrange(layers: &mut [Box<dyn NeuralLayer>], gap: f64) {
    let mut cursor = 0.0;
    for layer in layers.iter_mut() {
        let bb = layer.bounding_box();
        layer.shift(Vec2::new(cursor - bb.x0, -bb.center().y));
        cursor += bb.width() + gap;
    }

    let total = (cursor - gap).max(0.0);
    if !layers.is_empty() {
        for layer in layers.iter_mut() {
            layer.shift(Vec2::new(-total / 2.0, 0.0));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/network/builder.rs"]
mod tests;

use crate::{
    animation::description::AnimationDescription,
    animation::ops::sequence,
    foundation::error::{LayerflowError, LayerflowResult},
    layers::component::{Component, NeuralLayer},
    layers::config::ConnectiveConfig,
    layers::connective::ConnectiveLayer,
    scene::group::Group,
};

/// Index of a layer inside a [`LayerArena`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct LayerId(pub usize);

impl std::fmt::Display for LayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Index of a connective layer inside a [`Network`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ConnectiveId(pub usize);

/// Owner of every layer in a network, addressed by [`LayerId`].
#[derive(Debug, Default)]
pub struct LayerArena {
    layers: Vec<Box<dyn NeuralLayer>>,
}

impl LayerArena {
    /// Empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of `layer`; ids are handed out in insertion order.
    ///
    /// Layer names prefix every primitive key, so a name already in the arena is rejected.
    pub fn insert(&mut self, layer: Box<dyn NeuralLayer>) -> LayerflowResult<LayerId> {
        if let Some((id, _)) = self.iter().find(|(_, l)| l.name() == layer.name()) {
            return Err(LayerflowError::invalid_parameter(format!(
                "duplicate layer name '{}' (already used by layer {id})",
                layer.name()
            )));
        }
        self.layers.push(layer);
        Ok(LayerId(self.layers.len() - 1))
    }

    /// Layer under `id`, if any.
    pub fn get(&self, id: LayerId) -> Option<&dyn NeuralLayer> {
        self.layers.get(id.0).map(|layer| layer.as_ref())
    }

    /// Number of layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// True when no layer was inserted.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Layers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (LayerId, &dyn NeuralLayer)> {
        self.layers
            .iter()
            .enumerate()
            .map(|(i, layer)| -> (LayerId, &dyn NeuralLayer) {
                (LayerId(i), layer.as_ref())
            })
    }
}

/// One entry of a network's pipeline order.
#[derive(Clone, Copy, Debug)]
pub enum Stage<'a> {
    /// A layer.
    Layer(LayerId, &'a dyn NeuralLayer),
    /// A connective layer.
    Connective(ConnectiveId, &'a ConnectiveLayer),
}

impl<'a> Stage<'a> {
    /// The stage viewed as a drawable, animatable component.
    pub fn component(&self) -> &'a dyn Component {
        match *self {
            Self::Layer(_, layer) => layer,
            Self::Connective(_, conn) => conn,
        }
    }
}

/// Layers plus the connective layers derived between them.
#[derive(Debug, Default)]
pub struct Network {
    layers: LayerArena,
    connectives: Vec<ConnectiveLayer>,
}

impl Network {
    /// Empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fully laid out layer; its name must be unique within the network.
    pub fn add_layer(&mut self, layer: impl NeuralLayer + 'static) -> LayerflowResult<LayerId> {
        self.layers.insert(Box::new(layer))
    }

    /// Derive the edges between two layers already in the network.
    pub fn connect(
        &mut self,
        upstream: LayerId,
        downstream: LayerId,
        config: ConnectiveConfig,
    ) -> LayerflowResult<ConnectiveId> {
        let conn = ConnectiveLayer::new(&self.layers, upstream, downstream, config)?;
        self.connectives.push(conn);
        Ok(ConnectiveId(self.connectives.len() - 1))
    }

    /// Every layer, in insertion order.
    pub fn layers(&self) -> &LayerArena {
        &self.layers
    }

    pub(crate) fn layers_mut(&mut self) -> &mut LayerArena {
        &mut self.layers
    }

    /// Layer under `id`, if any.
    pub fn layer(&self, id: LayerId) -> Option<&dyn NeuralLayer> {
        self.layers.get(id)
    }

    /// Connective layer under `id`, if any.
    pub fn connective(&self, id: ConnectiveId) -> Option<&ConnectiveLayer> {
        self.connectives.get(id.0)
    }

    /// Connective layers in connection order.
    pub fn connectives(&self) -> &[ConnectiveLayer] {
        &self.connectives
    }

    /// Layers in insertion order, each followed by the connective layers leaving it.
    ///
    /// For a chain this is `layer, connective, layer, connective, ..., layer`.
    pub fn pipeline(&self) -> Vec<Stage<'_>> {
        let mut out = Vec::with_capacity(self.layers.len() + self.connectives.len());
        for (id, layer) in self.layers.iter() {
            out.push(Stage::Layer(id, layer));
            out.extend(
                self.connectives
                    .iter()
                    .enumerate()
                    .filter(|(_, c)| c.upstream() == id)
                    .map(|(i, c)| Stage::Connective(ConnectiveId(i), c)),
            );
        }
        out
    }

    /// Every drawable of every stage, in pipeline order.
    pub fn group(&self) -> Group {
        let mut group = Group::new();
        for stage in self.pipeline() {
            group.extend(stage.component().group());
        }
        group
    }

    /// Stage creation animations one after another.
    pub fn creation_animation(&self) -> AnimationDescription {
        sequence(
            self.pipeline()
                .iter()
                .map(|stage| stage.component().creation_animation())
                .collect(),
        )
    }

    /// Stage pass animations one after another; `run_time` drives connective layers.
    pub fn forward_pass_animation(&self, run_time: f64) -> LayerflowResult<AnimationDescription> {
        let steps = self
            .pipeline()
            .into_iter()
            .map(|stage| match stage {
                Stage::Layer(_, layer) => Ok(layer.forward_pass_animation()),
                Stage::Connective(_, conn) => conn.forward_pass_animation_with(run_time),
            })
            .collect::<LayerflowResult<Vec<_>>>()?;
        Ok(sequence(steps))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/network/arena.rs"]
mod tests;

use crate::{
    animation::description::AnimationDescription,
    animation::ease::Ease,
    animation::ops::{create, move_along_path, parallel, passing_flash},
    foundation::core::{Circle, Line, Point, require_positive},
    foundation::error::{LayerflowError, LayerflowResult},
    layers::component::{Component, NeuralLayer},
    layers::config::{ConnectiveConfig, PropagationStyle},
    layers::feed_forward::CREATE_RUN_TIME,
    network::arena::{LayerArena, LayerId},
    scene::group::Group,
    scene::primitive::{Drawable, Fill, PrimitiveKey, Stroke},
};

/// Line from one upstream node to one downstream node.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Edge {
    /// Index of the upstream node.
    pub upstream: usize,
    /// Index of the downstream node.
    pub downstream: usize,
    /// Segment between the two node centers.
    pub line: Line,
    /// Paint.
    pub stroke: Stroke,
}

impl Edge {
    /// Line drawable painted with the edge stroke.
    pub fn drawable(&self) -> Drawable {
        Drawable::Line {
            shape: self.line,
            stroke: self.stroke,
        }
    }
}

/// Persistent dot travelling along one edge in [`PropagationStyle::MovingToken`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Token {
    /// Rest position: the start of its edge.
    pub center: Point,
    /// Radius.
    pub radius: f64,
    /// Fill; always opaque.
    pub fill: Fill,
}

impl Token {
    /// Dot drawable at the token's rest position.
    pub fn drawable(&self) -> Drawable {
        Drawable::Dot {
            shape: Circle::new(self.center, self.radius),
            fill: self.fill,
        }
    }
}

/// Complete bipartite edge set between two layers, plus its propagation animation.
///
/// The upstream and downstream layers are referenced by [`LayerId`] only; the arena that owns
/// them governs their lifetime.
#[derive(Clone, Debug)]
pub struct ConnectiveLayer {
    name: String,
    upstream: LayerId,
    downstream: LayerId,
    config: ConnectiveConfig,
    edges: Vec<Edge>,
    tokens: Vec<Token>,
}

impl ConnectiveLayer {
    /// Pass run time used by [`ConnectiveLayer::forward_pass_animation`].
    pub const DEFAULT_RUN_TIME: f64 = 1.0;

    /// Derive one edge per (upstream node, downstream node) pair from current node positions.
    ///
    /// Edges are ordered with the upstream node as the outer loop, so edge `i * Nd + j` joins
    /// upstream node `i` to downstream node `j`.
    #[tracing::instrument(skip(layers, config))]
    pub fn new(
        layers: &LayerArena,
        upstream: LayerId,
        downstream: LayerId,
        config: ConnectiveConfig,
    ) -> LayerflowResult<Self> {
        config.validate()?;
        let up = resolve(layers, upstream, "upstream")?;
        let down = resolve(layers, downstream, "downstream")?;
        let name = format!("{}->{}", up.name(), down.name());

        let stroke = Stroke {
            color: config.edge_color,
            width: config.edge_width,
        };
        let edges: Vec<Edge> = up
            .nodes()
            .iter()
            .enumerate()
            .flat_map(move |(i, from)| {
                down.nodes().iter().enumerate().map(move |(j, to)| Edge {
                    upstream: i,
                    downstream: j,
                    line: Line::new(from.center, to.center),
                    stroke,
                })
            })
            .collect();

        let tokens = match config.style {
            PropagationStyle::PassingFlash => Vec::new(),
            PropagationStyle::MovingToken => edges
                .iter()
                .map(|edge| Token {
                    center: edge.line.p0,
                    radius: config.token_radius,
                    fill: Fill::opaque(config.highlight_color),
                })
                .collect(),
        };
        tracing::debug!(
            %name,
            edges = edges.len(),
            tokens = tokens.len(),
            "derived connective layer"
        );

        Ok(Self {
            name,
            upstream,
            downstream,
            config,
            edges,
            tokens,
        })
    }

    /// Layer the edges start from.
    pub fn upstream(&self) -> LayerId {
        self.upstream
    }

    /// Layer the edges end at.
    pub fn downstream(&self) -> LayerId {
        self.downstream
    }

    /// Config this layer was built with.
    pub fn config(&self) -> &ConnectiveConfig {
        &self.config
    }

    /// Propagation style of the forward pass.
    pub fn style(&self) -> PropagationStyle {
        self.config.style
    }

    /// Edges in derivation order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Tokens, one per edge, in edge order; empty in passing-flash style.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Propagation across every edge at once, with the default run time.
    pub fn forward_pass_animation(&self) -> AnimationDescription {
        self.pass_animation(Self::DEFAULT_RUN_TIME)
    }

    /// Propagation across every edge at once.
    ///
    /// `run_time` drives the moving tokens. Passing flashes always take
    /// [`ConnectiveConfig::flash_run_time`].
    pub fn forward_pass_animation_with(
        &self,
        run_time: f64,
    ) -> LayerflowResult<AnimationDescription> {
        require_positive("forward pass run_time", run_time)?;
        Ok(self.pass_animation(run_time))
    }

    fn pass_animation(&self, run_time: f64) -> AnimationDescription {
        let cfg = &self.config;
        let per_edge = self
            .edges
            .iter()
            .enumerate()
            .map(|(k, edge)| match cfg.style {
                PropagationStyle::PassingFlash => passing_flash(
                    edge.line,
                    cfg.highlight_color,
                    edge.stroke.width,
                    cfg.flash_time_width,
                    cfg.flash_run_time,
                ),
                PropagationStyle::MovingToken => move_along_path(
                    PrimitiveKey::token(&self.name, k),
                    edge.line,
                    run_time,
                    Ease::Sigmoid,
                ),
            })
            .collect();
        parallel(per_edge)
    }
}

fn resolve<'a>(
    layers: &'a LayerArena,
    id: LayerId,
    role: &str,
) -> LayerflowResult<&'a dyn NeuralLayer> {
    layers.get(id).ok_or_else(|| {
        LayerflowError::invalid_parameter(format!("{role} layer {id} is not in the arena"))
    })
}

impl Component for ConnectiveLayer {
    fn name(&self) -> &str {
        &self.name
    }

    /// Edges, then tokens drawn on top of them.
    fn group(&self) -> Group {
        let mut group = Group::new();
        for (k, edge) in self.edges.iter().enumerate() {
            group.push(PrimitiveKey::edge(&self.name, k), edge.drawable());
        }
        for (k, token) in self.tokens.iter().enumerate() {
            group.push(PrimitiveKey::token(&self.name, k), token.drawable());
        }
        group
    }

    fn creation_animation(&self) -> AnimationDescription {
        parallel(
            (0..self.edges.len())
                .map(|k| create(PrimitiveKey::edge(&self.name, k), CREATE_RUN_TIME))
                .collect(),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layers/connective.rs"]
mod tests;

use kurbo::Shape;

use crate::{
    animation::description::AnimationDescription,
    animation::ops::{create, parallel, sequence, set_color, wait},
    foundation::core::{Circle, Point, Rect, Rgba8, Vec2},
    foundation::error::LayerflowResult,
    layers::component::{Component, NeuralLayer},
    layers::config::LayerConfig,
    scene::group::Group,
    scene::primitive::{Drawable, Fill, PrimitiveKey, Stroke},
};

/// Run time of every reveal in a creation animation.
pub(crate) const CREATE_RUN_TIME: f64 = 1.0;
/// Run time of each recolor step of a layer forward pass.
pub(crate) const HIGHLIGHT_RUN_TIME: f64 = 0.25;
/// Time a layer stays highlighted.
pub(crate) const HOLD_RUN_TIME: f64 = 1.0;

/// A layer node.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Node {
    /// Center.
    pub center: Point,
    /// Radius.
    pub radius: f64,
    /// Fill color at rest.
    pub fill: Rgba8,
    /// Outline color.
    pub outline: Rgba8,
    /// Outline width.
    pub stroke_width: f64,
}

impl Node {
    /// Node geometry.
    pub fn circle(&self) -> Circle {
        Circle::new(self.center, self.radius)
    }

    /// Outlined circle filled with the resting node color.
    pub fn drawable(&self) -> Drawable {
        Drawable::Circle {
            shape: self.circle(),
            stroke: Stroke {
                color: self.outline,
                width: self.stroke_width,
            },
            fill: Fill::opaque(self.fill),
        }
    }
}

/// Opaque rectangle enclosing a layer's nodes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Frame {
    /// Bounds, padding included.
    pub rect: Rect,
    /// Outline.
    pub stroke: Stroke,
    /// Interior; always fully opaque so edges only show at their end points.
    pub fill: Fill,
}

impl Frame {
    /// Outlined, opaque rectangle.
    pub fn drawable(&self) -> Drawable {
        Drawable::Rectangle {
            shape: self.rect,
            stroke: self.stroke,
            fill: self.fill,
        }
    }
}

/// Vertical column of nodes inside a frame.
#[derive(Clone, Debug)]
pub struct FeedForwardLayer {
    name: String,
    config: LayerConfig,
    nodes: Vec<Node>,
    frame: Frame,
}

impl FeedForwardLayer {
    /// Lay out `config.node_count` nodes at `(0, i * spacing)` and fit the frame around them.
    #[tracing::instrument(skip(config), fields(node_count = config.node_count))]
    pub fn new(config: LayerConfig) -> LayerflowResult<Self> {
        config.validate()?;
        let name = config.name.clone().unwrap_or_else(|| "layer".to_string());
        let style = &config.style;

        let nodes: Vec<Node> = (0..config.node_count)
            .map(|i| Node {
                center: Point::new(0.0, i as f64 * config.node_spacing),
                radius: config.node_radius,
                fill: style.node_color,
                outline: style.node_outline_color,
                stroke_width: style.node_stroke_width,
            })
            .collect();

        let frame = Frame {
            rect: frame_rect(&nodes, config.padding),
            stroke: Stroke {
                color: style.frame_color,
                width: style.frame_stroke_width,
            },
            fill: Fill::opaque(style.frame_fill_color),
        };
        tracing::debug!(%name, frame = ?frame.rect, "laid out feed-forward layer");

        Ok(Self {
            name,
            config,
            nodes,
            frame,
        })
    }

    /// Config this layer was built with.
    pub fn config(&self) -> &LayerConfig {
        &self.config
    }

    fn node_keys(&self) -> Vec<PrimitiveKey> {
        (0..self.nodes.len())
            .map(|i| PrimitiveKey::node(&self.name, i))
            .collect()
    }
}

/// Bounds of every node circle, inflated by `padding`.
///
/// Without nodes the frame is a `2 * padding` square around the origin.
fn frame_rect(nodes: &[Node], padding: f64) -> Rect {
    nodes
        .iter()
        .map(|n| n.circle().bounding_box())
        .reduce(|a, b| a.union(b))
        .unwrap_or(Rect::ZERO)
        .inflate(padding, padding)
}

impl Component for FeedForwardLayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn group(&self) -> Group {
        let mut group = Group::new();
        group.push(PrimitiveKey::frame(&self.name), self.frame.drawable());
        for (i, node) in self.nodes.iter().enumerate() {
            group.push(PrimitiveKey::node(&self.name, i), node.drawable());
        }
        group
    }

    /// Frame and nodes revealed together; listing order only affects stacking.
    fn creation_animation(&self) -> AnimationDescription {
        let mut reveals = Vec::with_capacity(self.nodes.len() + 1);
        reveals.push(create(PrimitiveKey::frame(&self.name), CREATE_RUN_TIME));
        reveals.extend(
            self.node_keys()
                .into_iter()
                .map(|key| create(key, CREATE_RUN_TIME)),
        );
        parallel(reveals)
    }
}

impl NeuralLayer for FeedForwardLayer {
    fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Highlight, hold, restore: 1.5 time units whatever the node count.
    fn forward_pass_animation(&self) -> AnimationDescription {
        let style = &self.config.style;
        let keys = self.node_keys();
        sequence(vec![
            set_color(
                keys.clone(),
                style.node_color,
                style.highlight_color,
                HIGHLIGHT_RUN_TIME,
            ),
            wait(HOLD_RUN_TIME),
            set_color(
                keys,
                style.highlight_color,
                style.node_color,
                HIGHLIGHT_RUN_TIME,
            ),
        ])
    }

    fn shift(&mut self, by: Vec2) {
        for node in &mut self.nodes {
            node.center += by;
        }
        self.frame.rect = self.frame.rect + by;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layers/feed_forward.rs"]
mod tests;

use crate::{
    foundation::core::{Rgba8, require_non_negative, require_positive},
    foundation::error::{LayerflowError, LayerflowResult},
};

/// Palette and stroke widths of a feed-forward layer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LayerStyle {
    /// Resting node fill color.
    pub node_color: Rgba8,
    /// Node outline color.
    pub node_outline_color: Rgba8,
    /// Frame outline color.
    pub frame_color: Rgba8,
    /// Frame interior color (drawn fully opaque).
    pub frame_fill_color: Rgba8,
    /// Node color while the layer is active during a forward pass.
    pub highlight_color: Rgba8,
    /// Node outline width.
    pub node_stroke_width: f64,
    /// Frame outline width.
    pub frame_stroke_width: f64,
}

impl Default for LayerStyle {
    fn default() -> Self {
        Self {
            node_color: Rgba8::BLUE,
            node_outline_color: Rgba8::WHITE,
            frame_color: Rgba8::WHITE,
            frame_fill_color: Rgba8::BLACK,
            highlight_color: Rgba8::RED,
            node_stroke_width: 2.0,
            frame_stroke_width: 2.0,
        }
    }
}

impl LayerStyle {
    /// Reject negative or non-finite stroke widths.
    pub fn validate(&self) -> LayerflowResult<()> {
        require_non_negative("node_stroke_width", self.node_stroke_width)?;
        require_non_negative("frame_stroke_width", self.frame_stroke_width)?;
        Ok(())
    }
}

/// Construction parameters of a [`crate::FeedForwardLayer`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerConfig {
    /// Name used as the prefix of every primitive key; `"layer"` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Number of nodes.
    pub node_count: usize,
    /// Vertical distance between consecutive node centers.
    #[serde(default = "default_node_spacing")]
    pub node_spacing: f64,
    /// Node radius.
    #[serde(default = "default_node_radius")]
    pub node_radius: f64,
    /// Gap between the outermost node edges and the frame.
    #[serde(default = "default_padding")]
    pub padding: f64,
    /// Palette and stroke widths.
    #[serde(default)]
    pub style: LayerStyle,
}

fn default_node_spacing() -> f64 {
    0.3
}

fn default_node_radius() -> f64 {
    0.08
}

fn default_padding() -> f64 {
    0.05
}

impl LayerConfig {
    /// Config for `node_count` nodes with the default geometry and style.
    pub fn new(node_count: usize) -> Self {
        Self {
            name: None,
            node_count,
            node_spacing: default_node_spacing(),
            node_radius: default_node_radius(),
            padding: default_padding(),
            style: LayerStyle::default(),
        }
    }

    /// Set the name used as the primitive key prefix.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the vertical distance between node centers.
    pub fn node_spacing(mut self, spacing: f64) -> Self {
        self.node_spacing = spacing;
        self
    }

    /// Set the node radius.
    pub fn node_radius(mut self, radius: f64) -> Self {
        self.node_radius = radius;
        self
    }

    /// Set the gap between the outermost nodes and the frame.
    pub fn padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Replace the palette and stroke widths.
    pub fn style(mut self, style: LayerStyle) -> Self {
        self.style = style;
        self
    }

    /// Reject negative or non-finite sizes and stroke widths.
    pub fn validate(&self) -> LayerflowResult<()> {
        require_non_negative("node_spacing", self.node_spacing)?;
        require_non_negative("node_radius", self.node_radius)?;
        require_non_negative("padding", self.padding)?;
        self.style.validate()
    }
}

/// How activation is depicted travelling across a connective layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropagationStyle {
    /// A short streak sweeps along a transient copy of each edge.
    #[default]
    PassingFlash,
    /// A persistent token per edge moves from the upstream to the downstream node.
    MovingToken,
}

/// Construction parameters of a [`crate::ConnectiveLayer`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ConnectiveConfig {
    /// Propagation style.
    pub style: PropagationStyle,
    /// Flash and token color.
    pub highlight_color: Rgba8,
    /// Token radius.
    pub token_radius: f64,
    /// Edge color.
    pub edge_color: Rgba8,
    /// Edge stroke width.
    pub edge_width: f64,
    /// Run time of a passing flash; not affected by the pass run time.
    pub flash_run_time: f64,
    /// Visible fraction of an edge covered by a flash streak.
    pub flash_time_width: f64,
}

impl Default for ConnectiveConfig {
    fn default() -> Self {
        Self {
            style: PropagationStyle::PassingFlash,
            highlight_color: Rgba8::RED,
            token_radius: 0.05,
            edge_color: Rgba8::WHITE,
            edge_width: 0.5,
            flash_run_time: 3.0,
            flash_time_width: 0.2,
        }
    }
}

impl ConnectiveConfig {
    /// Same config with a different propagation style.
    pub fn with_style(mut self, style: PropagationStyle) -> Self {
        self.style = style;
        self
    }

    /// Reject negative widths and radii, and flash timings outside their ranges.
    pub fn validate(&self) -> LayerflowResult<()> {
        require_non_negative("token_radius", self.token_radius)?;
        require_non_negative("edge_width", self.edge_width)?;
        require_positive("flash_run_time", self.flash_run_time)?;
        require_positive("flash_time_width", self.flash_time_width)?;
        if self.flash_time_width > 1.0 {
            return Err(LayerflowError::invalid_parameter(format!(
                "flash_time_width must be <= 1 (got {})",
                self.flash_time_width
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layers/config.rs"]
mod tests;

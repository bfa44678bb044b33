use kurbo::Shape;

use crate::foundation::core::{Circle, Line, Rect, Rgba8, Vec2};

/// Stable, user-facing key of a drawable inside a component group.
///
/// Keys are `owner/kind[/index]`, e.g. `hidden/node/2` or `input->hidden/edge/5`.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PrimitiveKey(pub String);

impl PrimitiveKey {
    /// Wrap an arbitrary key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Key of node `index` of `owner`.
    pub fn node(owner: &str, index: usize) -> Self {
        Self(format!("{owner}/node/{index}"))
    }

    /// Key of the frame of `owner`.
    pub fn frame(owner: &str) -> Self {
        Self(format!("{owner}/frame"))
    }

    /// Key of edge `index` of `owner`.
    pub fn edge(owner: &str, index: usize) -> Self {
        Self(format!("{owner}/edge/{index}"))
    }

    /// Key of token `index` of `owner`.
    pub fn token(owner: &str, index: usize) -> Self {
        Self(format!("{owner}/token/{index}"))
    }

    /// Key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PrimitiveKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outline paint.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stroke {
    /// Outline color.
    pub color: Rgba8,
    /// Outline width.
    pub width: f64,
}

/// Interior paint.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Fill {
    /// Interior color.
    pub color: Rgba8,
    /// Opacity in `[0, 1]`; 1 occludes whatever is drawn behind.
    pub opacity: f64,
}

impl Fill {
    /// Fully opaque fill.
    pub fn opaque(color: Rgba8) -> Self {
        Self {
            color,
            opacity: 1.0,
        }
    }
}

/// Drawable primitive handed to the rendering engine.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Drawable {
    /// Outlined, filled circle (layer nodes).
    Circle {
        /// Geometry.
        shape: Circle,
        /// Outline.
        stroke: Stroke,
        /// Interior.
        fill: Fill,
    },
    /// Outlined, filled axis-aligned rectangle (layer frames).
    Rectangle {
        /// Geometry.
        shape: Rect,
        /// Outline.
        stroke: Stroke,
        /// Interior.
        fill: Fill,
    },
    /// Straight line segment (edges).
    Line {
        /// Geometry.
        shape: Line,
        /// Paint.
        stroke: Stroke,
    },
    /// Filled dot without outline (tokens).
    Dot {
        /// Geometry.
        shape: Circle,
        /// Interior.
        fill: Fill,
    },
}

impl Drawable {
    /// Axis-aligned bounds of the geometry, ignoring stroke width.
    pub fn bounding_box(&self) -> Rect {
        match self {
            Self::Circle { shape, .. } | Self::Dot { shape, .. } => shape.bounding_box(),
            Self::Rectangle { shape, .. } => *shape,
            Self::Line { shape, .. } => shape.bounding_box(),
        }
    }

    /// Copy of this drawable moved by `by`.
    pub fn translated(&self, by: Vec2) -> Self {
        let mut out = self.clone();
        match &mut out {
            Self::Circle { shape, .. } | Self::Dot { shape, .. } => shape.center += by,
            Self::Rectangle { shape, .. } => *shape = *shape + by,
            Self::Line { shape, .. } => {
                shape.p0 += by;
                shape.p1 += by;
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/primitive.rs"]
mod tests;

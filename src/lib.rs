//! Layerflow builds layered neural-network diagrams and describes how to animate them.
//!
//! A network is a chain of layers (columns of nodes inside a frame) joined by connective
//! layers (the complete bipartite edge set between two neighbouring layers). Every component
//! hands out a [`Group`] of keyed drawables plus declarative [`AnimationDescription`] trees for
//! its creation and for one forward pass. Nothing is rendered here: the descriptions are
//! consumed by an external playback engine.
//!
//! # Pipeline overview
//!
//! 1. **Configure**: [`LayerConfig`] and [`ConnectiveConfig`], directly or via [`NetworkConfig`] JSON
//! 2. **Build**: [`NetworkBuilder`] lays layers out left to right and derives the edges
//! 3. **Describe**: [`Network::creation_animation`] and [`Network::forward_pass_animation`]
//! 4. **Schedule** (optional): [`AnimationDescription::schedule`] resolves absolute start/end times
//!
//! Layers live in a [`LayerArena`]; connective layers refer to their endpoints by [`LayerId`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;
mod layers;
mod network;
mod scene;

pub use animation::description::{
    AnimationDescription, Create, Effect, MoveAlongPath, Parallel, PassingFlash, SetColor, Wait,
};
pub use animation::ease::Ease;
pub use animation::ops::{
    create, move_along_path, parallel, passing_flash, sequence, set_color, stagger, wait,
};
pub use animation::schedule::{Schedule, ScheduledEffect};
pub use foundation::core::{Circle, Line, Point, Rect, Rgba8, Vec2};
pub use foundation::error::{LayerflowError, LayerflowResult};
pub use layers::component::{Component, NeuralLayer};
pub use layers::config::{ConnectiveConfig, LayerConfig, LayerStyle, PropagationStyle};
pub use layers::connective::{ConnectiveLayer, Edge, Token};
pub use layers::feed_forward::{FeedForwardLayer, Frame, Node};
pub use network::arena::{ConnectiveId, LayerArena, LayerId, Network, Stage};
pub use network::builder::NetworkBuilder;
pub use network::config::NetworkConfig;
pub use scene::group::Group;
pub use scene::primitive::{Drawable, Fill, PrimitiveKey, Stroke};

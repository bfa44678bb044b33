use crate::{
    animation::description::AnimationDescription,
    foundation::core::{Rect, Vec2},
    layers::feed_forward::{Frame, Node},
    scene::group::Group,
};

/// Anything the rendering engine can add to a scene and animate into view.
pub trait Component {
    /// Prefix of every primitive key in [`Component::group`].
    fn name(&self) -> &str;

    /// Drawables owned by this component, in drawing order.
    fn group(&self) -> Group;

    /// How the component first appears.
    fn creation_animation(&self) -> AnimationDescription;
}

/// A network stage holding nodes inside a frame.
///
/// Connective layers read [`NeuralLayer::nodes`] once, at construction; nothing ever mutates a
/// layer through a connective layer.
pub trait NeuralLayer: Component + std::fmt::Debug {
    /// Nodes in index order.
    fn nodes(&self) -> &[Node];

    /// Bounding frame.
    fn frame(&self) -> &Frame;

    /// Node highlight played while activation passes through this layer.
    fn forward_pass_animation(&self) -> AnimationDescription;

    /// Translate nodes and frame rigidly.
    ///
    /// Connective layers built before the shift keep the old positions.
    fn shift(&mut self, by: Vec2);

    /// Axis-aligned bounds of the layer; the frame rectangle by default.
    fn bounding_box(&self) -> Rect {
        self.frame().rect
    }
}

use crate::{
    foundation::core::Rect,
    scene::primitive::{Drawable, PrimitiveKey},
};

/// Ordered, keyed collection of drawables, in drawing (back-to-front) order.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Group {
    entries: Vec<(PrimitiveKey, Drawable)>,
}

impl Group {
    /// Empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a drawable on top of the existing ones.
    pub fn push(&mut self, key: PrimitiveKey, drawable: Drawable) {
        self.entries.push((key, drawable));
    }

    /// Append every entry of `other`, keeping its order.
    pub fn extend(&mut self, other: Group) {
        self.entries.extend(other.entries);
    }

    /// Number of drawables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the group holds no drawables.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in drawing order.
    pub fn iter(&self) -> impl Iterator<Item = (&PrimitiveKey, &Drawable)> {
        self.entries.iter().map(|(k, d)| (k, d))
    }

    /// Keys in drawing order.
    pub fn keys(&self) -> impl Iterator<Item = &PrimitiveKey> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Drawable registered under `key`.
    pub fn get(&self, key: &PrimitiveKey) -> Option<&Drawable> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, d)| d)
    }

    /// Union of all drawable bounds; `None` for an empty group.
    pub fn bounding_box(&self) -> Option<Rect> {
        self.entries
            .iter()
            .map(|(_, d)| d.bounding_box())
            .reduce(|a, b| a.union(b))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/group.rs"]
mod tests;

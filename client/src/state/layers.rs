//! Cosmetic layer list for the side panel.
//!
//! DESIGN
//! ======
//! The layer list is purely presentational: entries are named placeholders
//! with a single-select highlight and no binding to shapes, tools, or
//! rendering. Keeping it as plain state makes the panel trivially testable.

#[cfg(test)]
#[path = "layers_test.rs"]
mod layers_test;

/// A named entry in the layer panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layer {
    pub name: String,
}

/// Ordered layer entries with at most one holding the active highlight.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayersState {
    layers: Vec<Layer>,
    active: Option<usize>,
}

impl LayersState {
    /// Append a new entry named `Layer N` (N = current count + 1) and return
    /// its index. Adding does not move the highlight.
    pub fn add_layer(&mut self) -> usize {
        let index = self.layers.len();
        let ordinal = index + 1;
        self.layers.push(Layer { name: format!("Layer {ordinal}") });
        index
    }

    /// Move the exclusive highlight to `index`. Out-of-range indices are
    /// ignored.
    pub fn set_active(&mut self, index: usize) {
        if index < self.layers.len() {
            self.active = Some(index);
        }
    }

    /// Index of the highlighted entry, if any.
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Whether the entry at `index` holds the highlight.
    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// All entries in insertion order.
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns `true` if no layers have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

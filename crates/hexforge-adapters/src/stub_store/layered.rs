//! Stub lookup across several stores, first match wins.

use hexforge_core::{
    application::{ApplicationError, ports::StubStore},
    error::{HexforgeError, HexforgeResult},
};

/// Ordered list of stores. Earlier layers shadow later ones.
#[derive(Default)]
pub struct LayeredStubStore {
    layers: Vec<Box<dyn StubStore>>,
}

impl LayeredStubStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a lower-priority layer.
    pub fn with_layer(mut self, layer: impl StubStore + 'static) -> Self {
        self.layers.push(Box::new(layer));
        self
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }
}

impl StubStore for LayeredStubStore {
    fn load(&self, name: &str) -> HexforgeResult<String> {
        for layer in &self.layers {
            match layer.load(name) {
                Err(HexforgeError::Application(ApplicationError::StubNotFound { .. })) => continue,
                other => return other,
            }
        }
        Err(ApplicationError::StubNotFound {
            name: name.to_string(),
        }
        .into())
    }

    fn names(&self) -> HexforgeResult<Vec<String>> {
        let mut names = Vec::new();
        for layer in &self.layers {
            names.extend(layer.names()?);
        }
        names.sort();
        names.dedup();
        Ok(names)
    }
}

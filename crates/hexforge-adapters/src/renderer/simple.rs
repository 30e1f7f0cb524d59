//! Exact `{{TOKEN}}` substitution renderer.

use hexforge_core::{
    application::ports::StubRenderer, domain::PlaceholderBatch, error::HexforgeResult,
};
use tracing::{instrument, trace};

/// Renderer using plain substring replacement: no escaping, no conditionals,
/// unknown tokens left untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl StubRenderer for SimpleRenderer {
    #[instrument(skip(self, stub, batch), fields(tokens = batch.len()))]
    fn render(&self, name: &str, stub: &str, batch: &PlaceholderBatch) -> HexforgeResult<String> {
        let rendered = batch.render(stub);
        trace!(bytes = rendered.len(), "rendered");
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexforge_core::domain::tokens;

    #[test]
    fn replaces_every_occurrence() {
        let mut batch = PlaceholderBatch::new();
        batch.insert(tokens::ENTITY_NAME, "User");
        let out = SimpleRenderer
            .render("t", "{{ENTITY_NAME}} / {{ENTITY_NAME}}Entity", &batch)
            .unwrap();
        assert_eq!(out, "User / UserEntity");
    }

    #[test]
    fn unknown_tokens_survive() {
        let out = SimpleRenderer
            .render("t", "{{MYSTERY}}", &PlaceholderBatch::new())
            .unwrap();
        assert_eq!(out, "{{MYSTERY}}");
    }
}

// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for hexforge.
//!
//! Pure logic: pattern tables, the path resolver, placeholder batches, naming
//! rules and boundary validation. No I/O; stub loading, file writing and
//! process spawning go through ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Total resolution**: resolving a path never fails
//! - **Immutable tables**: loaded once, read-only afterwards
//!
// Public API - what the world sees
pub mod batch;
pub mod config;
pub mod error;
pub mod layout;
pub mod naming;
pub mod pattern;
pub mod resolver;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use batch::{PlaceholderBatch, tokens};
pub use config::PathConfig;
pub use error::{DomainError, ErrorCategory};
pub use pattern::{PathMode, PatternTable, placeholders};
pub use resolver::{PathResolver, PatternLayers, PatternSource, Resolution, bindings, expand};
pub use value_objects::{BuildTool, SeedTarget};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // End-to-end resolution scenarios
    // ========================================================================

    fn resolver(base: &str) -> PathResolver {
        PathResolver::new(base, PatternTable::new(), PatternTable::new())
    }

    #[test]
    fn hexagonal_default_scenario() {
        assert_eq!(
            resolver("com.example.app").resolve("command", "order"),
            "com.example.app.domain.order.command"
        );
    }

    #[test]
    fn hexagonal_override_scenario() {
        let config = PathConfig {
            base_package: Some("com.example.app".into()),
            paths: PatternTable::from_pairs([("command", "app.commands.{aggregate}")]),
            crud: PatternTable::new(),
        };
        let r = config.into_resolver(None).unwrap();
        assert_eq!(
            r.resolve("command", "order"),
            "com.example.app.app.commands.order"
        );
    }

    #[test]
    fn crud_controller_scenario() {
        assert_eq!(
            resolver("com.app").resolve_crud("controller", "user"),
            "com.app.user.web"
        );
    }

    #[test]
    fn unknown_key_scenario() {
        assert_eq!(
            resolver("com.example.app").resolve("totally-unknown-key", "order"),
            "com.example.app.totally-unknown-key"
        );
    }

    #[test]
    fn crud_batch_scenario() {
        let mut batch = PlaceholderBatch::new();
        resolver("com.app").populate_crud_package_placeholders("product", &mut batch);
        assert_eq!(batch.get(tokens::PACKAGE_CRUD_MODEL), Some("com.app.product.model"));
        assert_eq!(batch.get(tokens::PACKAGE_CRUD_ENTITY), Some("com.app.product.entity"));
        assert_eq!(
            batch.get(tokens::PACKAGE_CRUD_REPOSITORY),
            Some("com.app.product.repository")
        );
        assert_eq!(batch.get(tokens::PACKAGE_CRUD_SERVICE), Some("com.app.product.service"));
        assert_eq!(batch.get(tokens::PACKAGE_CRUD_MAPPER), Some("com.app.product.mapper"));
        assert_eq!(batch.len(), 5);
    }

    #[test]
    fn batch_feeds_stub_rendering() {
        let mut batch = PlaceholderBatch::new();
        resolver("com.app").populate_package_placeholders("order", &mut batch);
        let stub = "import {{PACKAGE_MODEL}}.Order;\nimport {{PACKAGE_CQRS}}.Command;";
        assert_eq!(
            batch.render(stub),
            "import com.app.domain.order.model.Order;\nimport com.app.domain.cqrs.Command;"
        );
    }
}

//! Integration tests for hexforge-core's public API.

use hexforge_core::domain::{bindings, expand};
use hexforge_core::prelude::*;

fn defaults(base: &str) -> PathResolver {
    PathResolver::new(base, PatternTable::new(), PatternTable::new())
}

#[test]
fn every_default_key_resolves_under_base() {
    let resolver = defaults("com.example.app");
    for mode in [PathMode::Hexagonal, PathMode::Crud] {
        for key in resolver.layers(mode).keys() {
            let vars = bindings([("aggregate", "order"), ("name", "user"), ("category", "mail")]);
            let resolution = resolver.resolve_detailed(mode, key, &vars);
            assert!(
                resolution.path.starts_with("com.example.app."),
                "{key} -> {}",
                resolution.path
            );
            assert!(resolution.is_complete(), "{key} left {:?}", resolution.unresolved);
            assert_eq!(resolution.source, PatternSource::Default);
        }
    }
}

#[test]
fn override_wins_and_default_survives() {
    let config = PathConfig {
        base_package: Some("com.example.app".into()),
        paths: PatternTable::from_pairs([("command", "app.commands.{aggregate}")]),
        crud: PatternTable::from_pairs([("controller", "{name}.api")]),
    };
    let resolver = config.into_resolver(None).unwrap();

    assert_eq!(
        resolver.resolve("command", "order"),
        "com.example.app.app.commands.order"
    );
    assert_eq!(
        resolver.resolve("query", "order"),
        "com.example.app.domain.order.query"
    );
    assert_eq!(
        resolver.resolve_crud("controller", "user"),
        "com.example.app.user.api"
    );
    assert_eq!(
        resolver.resolve_crud("service", "user"),
        "com.example.app.user.service"
    );
}

#[test]
fn resolution_is_single_pass() {
    let pattern = "infrastructure.{category}.{aggregate}";
    let vars = bindings([("aggregate", "{category}"), ("category", "billing")]);
    assert_eq!(expand(pattern, &vars), "infrastructure.billing.{category}");
}

#[test]
fn resolution_is_deterministic() {
    let resolver = defaults("com.app");
    let first = resolver.resolve("event-listener", "invoice");
    for _ in 0..10 {
        assert_eq!(resolver.resolve("event-listener", "invoice"), first);
    }
}

#[test]
fn hexagonal_batch_fills_every_package_token() {
    let mut batch = PlaceholderBatch::new();
    defaults("com.app").populate_package_placeholders("order", &mut batch);

    let stub = "{{PACKAGE_MODEL}} {{PACKAGE_PORT_OUT}} {{PACKAGE_PORT_IN}} {{PACKAGE_CQRS}} \
                {{PACKAGE_MEDIATOR}} {{PACKAGE_EVENT}} {{PACKAGE_DOMAIN_ROOT}}";
    let rendered = batch.render(stub);

    assert!(batch.unresolved_tokens(&rendered).is_empty());
    assert_eq!(
        rendered,
        "com.app.domain.order.model com.app.domain.order.port.out com.app.domain.order.port.in \
         com.app.domain.cqrs com.app.infrastructure.mediator com.app.domain.order.event \
         com.app.domain"
    );
}

#[test]
fn missing_base_package_is_a_configuration_error() {
    let err: HexforgeError = PathConfig::default().into_resolver(None).unwrap_err().into();
    assert_eq!(
        err.category(),
        hexforge_core::error::ErrorCategory::Configuration
    );
}

//! End-to-end generation through the real adapters.

use std::path::Path;

use hexforge_adapters::{
    InMemoryStubStore, LocalFilesystem, MemoryFilesystem, ProjectConfigLoader, SimpleRenderer,
    stub_store,
};
use hexforge_core::prelude::*;
use tempfile::TempDir;

fn resolver(base: &str) -> PathResolver {
    PathResolver::new(base, PatternTable::new(), PatternTable::new())
}

#[test]
fn crud_into_memory_renders_every_token() {
    let fs = MemoryFilesystem::new();
    let service = GenerateService::new(
        resolver("com.app"),
        Box::new(InMemoryStubStore::with_builtin()),
        Box::new(SimpleRenderer::new()),
        Box::new(fs.clone()),
        "/project",
    );

    let report = service
        .make_crud(&CrudRequest {
            resources: true,
            ..CrudRequest::new("category")
        })
        .unwrap();

    assert_eq!(report.created_count(), 6);
    assert!(report.warnings.is_empty(), "{:?}", report.warnings);

    let controller = fs
        .read_file(Path::new(
            "/project/src/main/java/com/app/category/web/CategoryController.java",
        ))
        .unwrap();
    assert!(controller.starts_with("package com.app.category.web;"));
    assert!(controller.contains("import com.app.category.service.CategoryService;"));
    assert!(controller.contains("@RequestMapping(\"/api/categories\")"));
    assert!(!controller.contains("{{"));

    let entity = fs
        .read_file(Path::new(
            "/project/src/main/java/com/app/category/entity/CategoryEntity.java",
        ))
        .unwrap();
    assert!(entity.contains("@Table(name = \"categories\")"));
}

#[test]
fn seeder_on_disk_with_project_overrides() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join(".hexforge.toml"),
        "base-package = \"org.shop\"\n[paths]\nseeder = \"support.seed\"\n",
    )
    .unwrap();

    let resolver = ProjectConfigLoader
        .discover(temp.path())
        .unwrap()
        .into_resolver(None)
        .unwrap();
    let service = GenerateService::new(
        resolver,
        Box::new(stub_store::for_project(temp.path())),
        Box::new(SimpleRenderer),
        Box::new(LocalFilesystem),
        temp.path(),
    );

    let request = SeederRequest {
        name: "Product".into(),
        entity: "Product".into(),
        aggregate: Some("catalog".into()),
    };
    let first = service.make_seeder(&request).unwrap();
    assert_eq!(first.created_count(), 3);

    let seeder = std::fs::read_to_string(
        temp.path()
            .join("src/main/java/org/shop/support/seed/ProductSeeder.java"),
    )
    .unwrap();
    assert!(seeder.contains("import org.shop.infrastructure.factory.catalog.ProductFactory;"));
    assert!(seeder.contains("class ProductSeeder implements Seeder"));

    let second = service.make_seeder(&request).unwrap();
    assert_eq!(second.created_count(), 0);
    assert_eq!(second.skipped().count(), 3);
}

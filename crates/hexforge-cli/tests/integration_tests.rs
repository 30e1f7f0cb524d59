//! Integration tests for the hexforge binary.

use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary isolated from the caller's environment and app config.
fn hexforge(dir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("hexforge");
    cmd.current_dir(dir)
        .env("HEXFORGE_CONFIG", dir.join("no-app-config.toml"))
        .env("NO_COLOR", "1")
        .env_remove("HEXFORGE_BASE_PACKAGE")
        .env_remove("HEXFORGE_STUBS_DIR")
        .env_remove("HEXFORGE_STRICT_PLACEHOLDERS")
        .env_remove("RUST_LOG");
    cmd
}

fn java(dir: &Path, relative: &str) -> std::path::PathBuf {
    dir.join("src/main/java").join(relative)
}

#[test]
fn test_help_flag() {
    let temp = TempDir::new().unwrap();
    hexforge(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("make:crud"))
        .stdout(predicate::str::contains("db:seed"));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    hexforge(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_make_crud_creates_files() {
    let temp = TempDir::new().unwrap();
    hexforge(temp.path())
        .args(["make:crud", "User", "-p", "com.app"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    for file in [
        "com/app/user/model/User.java",
        "com/app/user/entity/UserEntity.java",
        "com/app/user/repository/UserRepository.java",
        "com/app/user/mapper/UserMapper.java",
        "com/app/user/service/UserService.java",
        "com/app/user/web/UserController.java",
    ] {
        assert!(java(temp.path(), file).is_file(), "missing {file}");
    }

    let controller =
        fs::read_to_string(java(temp.path(), "com/app/user/web/UserController.java")).unwrap();
    assert!(controller.starts_with("package com.app.user.web;"));
    assert!(!controller.contains("{{"));
}

#[test]
fn test_make_crud_skips_existing_files() {
    let temp = TempDir::new().unwrap();
    let path = java(temp.path(), "com/app/tag/web/TagController.java");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "// hand written").unwrap();

    hexforge(temp.path())
        .args(["make:crud", "Tag", "--no-model", "--no-service", "-p", "com.app"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "// hand written");
    assert!(!java(temp.path(), "com/app/tag/model/Tag.java").exists());
    assert!(!java(temp.path(), "com/app/tag/service/TagService.java").exists());
}

#[test]
fn test_project_config_overrides_packages() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".hexforge.toml"),
        "base-package = \"org.shop\"\n[crud]\ncontroller = \"api.{name}\"\n",
    )
    .unwrap();

    hexforge(temp.path())
        .args(["make:crud", "Product"])
        .assert()
        .success();

    assert!(java(temp.path(), "org/shop/api/product/ProductController.java").is_file());
    assert!(java(temp.path(), "org/shop/product/service/ProductService.java").is_file());
}

#[test]
fn test_make_factory_and_seeder() {
    let temp = TempDir::new().unwrap();
    hexforge(temp.path())
        .args(["make:factory", "OrderEntity", "-a", "sales", "-p", "com.app"])
        .assert()
        .success();
    assert!(java(temp.path(), "com/app/infrastructure/factory/sales/OrderFactory.java").is_file());

    hexforge(temp.path())
        .args(["make:seeder", "Order", "--entity", "Order", "-a", "sales", "-p", "com.app"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hexforge db:seed OrderSeeder"));
    for class in ["OrderSeeder", "Seeder", "SeedRunner"] {
        assert!(
            java(temp.path(), &format!("com/app/infrastructure/seeder/{class}.java")).is_file(),
            "missing {class}"
        );
    }
}

#[test]
fn test_init_writes_config() {
    let temp = TempDir::new().unwrap();
    hexforge(temp.path())
        .args(["init", "--base-package", "com.example.app"])
        .assert()
        .success();

    let written = fs::read_to_string(temp.path().join(".hexforge.toml")).unwrap();
    assert!(written.contains("base-package = \"com.example.app\""));
    assert!(written.contains("[paths]"));
    assert!(written.contains("[crud]"));

    hexforge(temp.path())
        .args(["init", "-p", "com.other"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    hexforge(temp.path())
        .args(["init", "-p", "com.other", "--force"])
        .assert()
        .success();
    let written = fs::read_to_string(temp.path().join(".hexforge.toml")).unwrap();
    assert!(written.contains("com.other"));
}

#[test]
fn test_paths_json() {
    let temp = TempDir::new().unwrap();
    let output = hexforge(temp.path())
        .args([
            "--output-format",
            "json",
            "paths",
            "order",
            "--mode",
            "hexagonal",
            "-p",
            "com.app",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let rows: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let rows = rows.as_array().unwrap();
    let command = rows.iter().find(|r| r["key"] == "command").unwrap();
    assert_eq!(command["path"], "com.app.domain.order.command");
    assert_eq!(command["source"], "default");

    let adapter = rows.iter().find(|r| r["key"] == "adapter").unwrap();
    assert_eq!(adapter["unresolved"][0], "category");
}

#[test]
fn test_paths_table_marks_overrides() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".hexforge.toml"),
        "base-package = \"com.app\"\n[paths]\ncommand = \"app.commands.{aggregate}\"\n",
    )
    .unwrap();

    hexforge(temp.path())
        .args(["paths", "order", "--category", "mail"])
        .assert()
        .success()
        .stdout(predicate::str::contains("com.app.app.commands.order"))
        .stdout(predicate::str::contains("com.app.infrastructure.mail.order"));
}

#[test]
fn test_no_color_env_accepts_numeric_value() {
    let temp = TempDir::new().unwrap();
    hexforge(temp.path())
        .args(["--output-format", "human", "paths", "order", "-p", "com.app"])
        .assert()
        .success()
        .stdout(predicate::str::contains("com.app.domain.order.command"))
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn test_empty_no_color_keeps_colour() {
    let temp = TempDir::new().unwrap();
    hexforge(temp.path())
        .env("NO_COLOR", "")
        .args(["--output-format", "human", "paths", "order", "-p", "com.app"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}["));
}

#[test]
fn test_db_seed_dry_run_with_maven() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("pom.xml"), "<project/>").unwrap();

    hexforge(temp.path())
        .args(["db:seed", "UserSeeder", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "spring-boot:run -Dspring-boot.run.arguments=--seed=UserSeeder",
        ));
}

#[test]
fn test_db_seed_dry_run_with_gradle_all() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("build.gradle.kts"), "").unwrap();

    hexforge(temp.path())
        .args(["db:seed", "--all", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bootRun --args=--seed=all"));
}

#[test]
fn test_shell_completions() {
    let temp = TempDir::new().unwrap();
    hexforge(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hexforge"));
}

#[test]
fn test_quiet_flag() {
    let temp = TempDir::new().unwrap();
    hexforge(temp.path())
        .args(["--quiet", "make:crud", "Item", "-p", "com.app"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "hexforge",
    bin_name = "hexforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Spring Boot source generator for hexagonal and CRUD layouts",
    long_about = "hexforge generates Java sources for Spring Boot projects. \
                  Packages come from configurable patterns in .hexforge.toml, \
                  so generated code lands where your architecture expects it.",
    after_help = "EXAMPLES:\n\
        \x20 hexforge init --base-package com.example.app\n\
        \x20 hexforge make:crud Product --resources\n\
        \x20 hexforge make:factory OrderEntity -a sales\n\
        \x20 hexforge make:seeder User --entity User\n\
        \x20 hexforge db:seed --all\n\
        \x20 hexforge paths order --category messaging",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a CRUD resource.
    #[command(
        name = "make:crud",
        about = "Generate model, entity, repository, mapper, service and controller",
        after_help = "EXAMPLES:\n\
            \x20 hexforge make:crud User\n\
            \x20 hexforge make:crud Product --resources\n\
            \x20 hexforge make:crud Tag --no-model --no-service -o ../api"
    )]
    MakeCrud(CrudArgs),

    /// Generate a test-data factory.
    #[command(
        name = "make:factory",
        about = "Generate an entity factory (and its repository if missing)",
        after_help = "EXAMPLES:\n\
            \x20 hexforge make:factory Order\n\
            \x20 hexforge make:factory OrderEntity --aggregate sales"
    )]
    MakeFactory(FactoryArgs),

    /// Generate a database seeder.
    #[command(
        name = "make:seeder",
        about = "Generate a seeder (and the Seeder/SeedRunner support classes)",
        after_help = "EXAMPLES:\n\
            \x20 hexforge make:seeder User --entity User\n\
            \x20 hexforge make:seeder DemoProducts --entity Product -a catalog"
    )]
    MakeSeeder(SeederArgs),

    /// Run seeders through the project's build tool.
    #[command(
        name = "db:seed",
        about = "Run database seeders via Maven or Gradle",
        after_help = "EXAMPLES:\n\
            \x20 hexforge db:seed UserSeeder\n\
            \x20 hexforge db:seed --all\n\
            \x20 hexforge db:seed --all --dry-run"
    )]
    DbSeed(SeedArgs),

    /// Show how every key resolves.
    #[command(
        about = "Print resolved packages for an aggregate",
        after_help = "EXAMPLES:\n\
            \x20 hexforge paths order\n\
            \x20 hexforge paths order --category messaging --name user\n\
            \x20 hexforge --output-format json paths order"
    )]
    Paths(PathsArgs),

    /// Write a starter `.hexforge.toml`.
    #[command(
        about = "Initialise project configuration",
        after_help = "EXAMPLES:\n\
            \x20 hexforge init --base-package com.example.app\n\
            \x20 hexforge init -p com.example.app --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 hexforge completions bash > ~/.local/share/bash-completion/completions/hexforge\n\
            \x20 hexforge completions zsh  > ~/.zfunc/_hexforge\n\
            \x20 hexforge completions fish > ~/.config/fish/completions/hexforge.fish"
    )]
    Completions(CompletionsArgs),
}

// ── shared generator flags ────────────────────────────────────────────────────

/// Flags shared by every generator.
#[derive(Debug, Clone, Args)]
pub struct GeneratorArgs {
    /// Project root; sources go under `<DIR>/src/main/java`.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        default_value = ".",
        help = "Project directory (default: current directory)"
    )]
    pub output: PathBuf,

    /// Overrides `base-package` from `.hexforge.toml`.
    #[arg(
        short = 'p',
        long = "base-package",
        value_name = "PACKAGE",
        env = "HEXFORGE_BASE_PACKAGE",
        help = "Base Java package, e.g. com.example.app"
    )]
    pub base_package: Option<String>,
}

// ── make:crud ─────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CrudArgs {
    /// Entity name, e.g. `User`.
    #[arg(value_name = "ENTITY", help = "Entity name")]
    pub entity: String,

    #[arg(long = "no-model", help = "Skip the domain model class")]
    pub no_model: bool,

    #[arg(long = "no-service", help = "Skip the service class")]
    pub no_service: bool,

    /// Use resource-style service and controller stubs.
    #[arg(
        long = "resources",
        help = "Resource-style service and controller (index/show/store/update/destroy)"
    )]
    pub resources: bool,

    #[command(flatten)]
    pub generator: GeneratorArgs,
}

// ── make:factory ──────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct FactoryArgs {
    /// Entity name; a trailing `Entity` is dropped.
    #[arg(value_name = "ENTITY", help = "Entity name")]
    pub entity: String,

    #[arg(
        short = 'a',
        long = "aggregate",
        value_name = "AGGREGATE",
        help = "Aggregate name (default: entity name, lowercased)"
    )]
    pub aggregate: Option<String>,

    #[command(flatten)]
    pub generator: GeneratorArgs,
}

// ── make:seeder ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct SeederArgs {
    /// Seeder name; `Seeder` is appended if missing.
    #[arg(value_name = "NAME", help = "Seeder name")]
    pub name: String,

    #[arg(
        short = 'e',
        long = "entity",
        value_name = "ENTITY",
        help = "Entity the seeder populates"
    )]
    pub entity: String,

    #[arg(
        short = 'a',
        long = "aggregate",
        value_name = "AGGREGATE",
        help = "Aggregate name (default: entity name, lowercased)"
    )]
    pub aggregate: Option<String>,

    #[command(flatten)]
    pub generator: GeneratorArgs,
}

// ── db:seed ───────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Seeder class to run, e.g. `UserSeeder`.
    #[arg(value_name = "SEEDER", help = "Seeder class name")]
    pub name: Option<String>,

    #[arg(long = "all", help = "Run all seeders")]
    pub all: bool,

    #[arg(long = "dry-run", help = "Print the build command without running it")]
    pub dry_run: bool,

    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        default_value = ".",
        help = "Project directory containing pom.xml or build.gradle"
    )]
    pub dir: PathBuf,
}

// ── paths ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct PathsArgs {
    /// Aggregate bound to `{aggregate}`.
    #[arg(value_name = "AGGREGATE", help = "Aggregate name")]
    pub aggregate: String,

    #[arg(
        long = "category",
        value_name = "CATEGORY",
        help = "Value for {category} (adapter key)"
    )]
    pub category: Option<String>,

    #[arg(
        long = "name",
        value_name = "NAME",
        help = "Value for {name} in CRUD keys (default: aggregate)"
    )]
    pub name: Option<String>,

    #[arg(
        long = "mode",
        value_enum,
        help = "Only show one table (default: both)"
    )]
    pub mode: Option<ModeArg>,

    #[command(flatten)]
    pub generator: GeneratorArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Hexagonal,
    Crud,
}

// ── init ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(
        short = 'p',
        long = "base-package",
        value_name = "PACKAGE",
        help = "Base Java package, e.g. com.example.app"
    )]
    pub base_package: String,

    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        default_value = ".",
        help = "Project directory"
    )]
    pub output: PathBuf,

    /// Overwrite an existing `.hexforge.toml`.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `hexforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_make_crud() {
        let cli = Cli::parse_from([
            "hexforge",
            "make:crud",
            "Product",
            "--resources",
            "--no-model",
            "-p",
            "com.shop",
        ]);
        let Commands::MakeCrud(args) = cli.command else {
            panic!("expected make:crud");
        };
        assert_eq!(args.entity, "Product");
        assert!(args.resources && args.no_model && !args.no_service);
        assert_eq!(args.generator.base_package.as_deref(), Some("com.shop"));
        assert_eq!(args.generator.output, PathBuf::from("."));
    }

    #[test]
    fn seeder_requires_entity() {
        assert!(Cli::try_parse_from(["hexforge", "make:seeder", "User"]).is_err());
        let cli = Cli::parse_from(["hexforge", "make:seeder", "User", "-e", "User", "-a", "crm"]);
        let Commands::MakeSeeder(args) = cli.command else {
            panic!("expected make:seeder");
        };
        assert_eq!(args.aggregate.as_deref(), Some("crm"));
    }

    #[test]
    fn db_seed_accepts_all() {
        let cli = Cli::parse_from(["hexforge", "db:seed", "--all", "--dry-run"]);
        let Commands::DbSeed(args) = cli.command else {
            panic!("expected db:seed");
        };
        assert!(args.all && args.dry_run && args.name.is_none());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["hexforge", "--quiet", "--verbose", "paths", "order"]);
        assert!(result.is_err());
    }
}

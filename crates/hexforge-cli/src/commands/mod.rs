//! Command handlers, one module per subcommand.
//!
//! Handlers translate arguments into core requests, wire adapters into the
//! services and print the result. No business logic lives here.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use hexforge_adapters::{LocalFilesystem, ProjectConfigLoader, SimpleRenderer, stub_store};
use hexforge_core::{
    application::{FileOutcome, GenerateService, GenerationReport},
    domain::{PathConfig, PathResolver},
};

use crate::{
    cli::{GeneratorArgs, GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub mod completions;
pub mod crud;
pub mod factory;
pub mod init;
pub mod paths;
pub mod seed;
pub mod seeder;

// ── Project wiring ───────────────────────────────────────────────────────────

/// Read the project's path configuration.
///
/// `--config` wins; otherwise `.hexforge.toml` under the project directory,
/// or the built-in defaults when that file does not exist.
pub(crate) fn load_project_config(global: &GlobalArgs, project_dir: &Path) -> CliResult<PathConfig> {
    let loader = ProjectConfigLoader::new();
    let config = match &global.config {
        Some(path) => loader.load(path)?,
        None => loader.discover(project_dir)?,
    };
    debug!(
        base_package = config.base_package.as_deref().unwrap_or("<unset>"),
        hexagonal_overrides = config.paths.len(),
        crud_overrides = config.crud.len(),
        "Project config loaded"
    );
    Ok(config)
}

/// Resolver for the project in `args.output`, honouring `--base-package`.
pub(crate) fn build_resolver(
    args: &GeneratorArgs,
    global: &GlobalArgs,
    config: &AppConfig,
) -> CliResult<PathResolver> {
    let project = load_project_config(global, &args.output)?;
    let resolver = project
        .into_resolver(args.base_package.as_deref())
        .map_err(hexforge_core::error::HexforgeError::from)?;
    Ok(resolver.with_diagnostics(config.generate.diagnostics))
}

/// Generator wired to the local filesystem and the project's stub layers.
pub(crate) fn build_generator(
    args: &GeneratorArgs,
    global: &GlobalArgs,
    config: &AppConfig,
) -> CliResult<GenerateService> {
    let resolver = build_resolver(args, global, config)?;
    let service = GenerateService::new(
        resolver,
        Box::new(stub_store::for_project(&args.output)),
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
        args.output.clone(),
    )
    .with_strict_placeholders(config.generate.strict_placeholders || global.strict_placeholders);
    Ok(service)
}

// ── Report printing ──────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct FileView<'a> {
    path: &'a Path,
    class: &'a str,
    package: &'a str,
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct ReportView<'a> {
    created: usize,
    skipped: usize,
    files: Vec<FileView<'a>>,
    warnings: &'a [String],
}

fn status(outcome: FileOutcome) -> &'static str {
    match outcome {
        FileOutcome::Created => "created",
        FileOutcome::Skipped => "skipped",
    }
}

/// Path relative to the project root when possible, for shorter output.
fn display_path(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}

/// Print one line per emitted file, then any warnings.
pub(crate) fn print_report(
    report: &GenerationReport,
    root: &Path,
    output: &OutputManager,
) -> CliResult<()> {
    if output.is_json() {
        let view = ReportView {
            created: report.created_count(),
            skipped: report.skipped().count(),
            files: report
                .files
                .iter()
                .map(|f| FileView {
                    path: &f.path,
                    class: &f.class_name,
                    package: &f.package,
                    status: status(f.outcome),
                })
                .collect(),
            warnings: &report.warnings,
        };
        output.json(&view)?;
        return Ok(());
    }

    for file in &report.files {
        let shown = display_path(root, &file.path);
        match file.outcome {
            FileOutcome::Created => output.success(&format!("Created {}", shown.display()))?,
            FileOutcome::Skipped => {
                output.info(&format!("Skipped {} (already exists)", shown.display()))?
            }
        }
    }
    for warning in &report.warnings {
        output.warning(warning)?;
    }
    Ok(())
}

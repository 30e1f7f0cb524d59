//! `hexforge paths` - show how every known key resolves for an aggregate.
//!
//! Useful for checking `.hexforge.toml` overrides before generating code.

use serde::Serialize;
use tracing::instrument;

use hexforge_core::domain::{PathMode, PatternSource, Resolution};

use crate::{
    cli::{GlobalArgs, ModeArg, PathsArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct ResolutionView<'a> {
    mode: String,
    key: &'a str,
    pattern: &'a str,
    source: &'static str,
    path: &'a str,
    unresolved: &'a [String],
}

impl<'a> From<&'a Resolution> for ResolutionView<'a> {
    fn from(r: &'a Resolution) -> Self {
        Self {
            mode: r.mode.to_string(),
            key: &r.key,
            pattern: &r.pattern,
            source: r.source.as_str(),
            path: &r.path,
            unresolved: &r.unresolved,
        }
    }
}

fn modes(selected: Option<ModeArg>) -> Vec<PathMode> {
    match selected {
        Some(ModeArg::Hexagonal) => vec![PathMode::Hexagonal],
        Some(ModeArg::Crud) => vec![PathMode::Crud],
        None => vec![PathMode::Hexagonal, PathMode::Crud],
    }
}

#[instrument(skip_all, fields(aggregate = %args.aggregate))]
pub fn execute(
    args: PathsArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // Warnings are shown inline below, so skip the resolver's own.
    let resolver =
        super::build_resolver(&args.generator, &global, &config)?.with_diagnostics(false);

    let mut hexagonal_vars = vec![("aggregate", args.aggregate.as_str())];
    if let Some(category) = &args.category {
        hexagonal_vars.push(("category", category.as_str()));
    }
    let crud_name = args.name.as_deref().unwrap_or(&args.aggregate);
    let crud_vars = [("name", crud_name)];

    let mut resolutions = Vec::new();
    for mode in modes(args.mode) {
        let vars: &[(&str, &str)] = match mode {
            PathMode::Hexagonal => &hexagonal_vars,
            PathMode::Crud => &crud_vars,
        };
        for key in resolver.layers(mode).keys() {
            resolutions.push(resolver.resolve_detailed(mode, key, vars.iter().copied()));
        }
    }

    if output.is_json() {
        let views: Vec<ResolutionView<'_>> =
            resolutions.iter().map(ResolutionView::from).collect();
        output.json(&views)?;
        return Ok(());
    }

    output.header(&format!("Base package: {}", resolver.base_package()))?;
    let width = resolutions.iter().map(|r| r.key.len()).max().unwrap_or(0);
    let mut current = None;
    for resolution in &resolutions {
        if current != Some(resolution.mode) {
            current = Some(resolution.mode);
            output.print("")?;
            output.header(&format!("[{}]", resolution.mode.config_section()))?;
        }
        let marker = if resolution.source == PatternSource::Override {
            "*"
        } else {
            " "
        };
        output.print(&format!(
            "  {marker} {:<width$}  {}",
            resolution.key, resolution.path
        ))?;
    }
    output.print("")?;
    output.print("  * overridden in project configuration")?;

    for warning in resolutions.iter().filter_map(Resolution::warning) {
        output.warning(&warning)?;
    }
    Ok(())
}

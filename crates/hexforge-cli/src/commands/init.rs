//! `hexforge init` - write a starter `.hexforge.toml`.

use tracing::{info, instrument};

use hexforge_adapters::ProjectConfigLoader;
use hexforge_core::{domain::DomainValidator, error::HexforgeError};

use crate::{
    cli::{GlobalArgs, InitArgs},
    error::{CliError, CliResult, IoContext},
    output::OutputManager,
};

/// Create the project configuration file.
#[instrument(skip_all, fields(base_package = %args.base_package))]
pub fn execute(args: InitArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    DomainValidator::validate_base_package(&args.base_package).map_err(HexforgeError::from)?;

    let config_path = global
        .config
        .clone()
        .unwrap_or_else(|| ProjectConfigLoader::path_for(&args.output));

    if config_path.exists() && !args.force {
        return Err(CliError::ConfigExists { path: config_path });
    }

    let contents = ProjectConfigLoader::new().starter(&args.base_package);

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).doing(|| {
            format!("Failed to create directory '{}'", parent.display())
        })?;
    }

    std::fs::write(&config_path, contents).doing(|| {
        format!("Failed to write config to '{}'", config_path.display())
    })?;
    info!(path = %config_path.display(), "Project config written");

    output.success(&format!("Configuration created at {}", config_path.display()))?;
    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print("  Edit the [paths] and [crud] tables to match your layout")?;
        output.print("  hexforge paths <aggregate>   # preview resolved packages")?;
    }

    Ok(())
}

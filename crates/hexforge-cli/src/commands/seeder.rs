//! `hexforge make:seeder` - generate a seeder and its support classes.

use tracing::{info, instrument};

use hexforge_core::{application::SeederRequest, domain::naming};

use crate::{
    cli::{GlobalArgs, SeederArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(seeder = %args.name))]
pub fn execute(
    args: SeederArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = super::build_generator(&args.generator, &global, &config)?;

    let request = SeederRequest {
        name: args.name,
        entity: args.entity,
        aggregate: args.aggregate,
    };

    let report = service.make_seeder(&request)?;
    info!(created = report.created_count(), "make:seeder finished");

    super::print_report(&report, &args.generator.output, &output)?;

    if !output.is_json() && report.created_count() > 0 {
        output.print("")?;
        output.print(&format!(
            "Run it with: hexforge db:seed {}",
            naming::seeder_class_name(&request.name)
        ))?;
    }
    Ok(())
}

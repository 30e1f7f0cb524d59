//! `hexforge make:factory` - generate an entity factory.

use tracing::{info, instrument};

use hexforge_core::application::FactoryRequest;

use crate::{
    cli::{FactoryArgs, GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(entity = %args.entity))]
pub fn execute(
    args: FactoryArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = super::build_generator(&args.generator, &global, &config)?;

    let request = FactoryRequest {
        entity: args.entity,
        aggregate: args.aggregate,
    };

    let report = service.make_factory(&request)?;
    info!(created = report.created_count(), "make:factory finished");

    super::print_report(&report, &args.generator.output, &output)
}

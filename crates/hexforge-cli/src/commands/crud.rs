//! `hexforge make:crud` - generate a CRUD resource.

use tracing::{info, instrument};

use hexforge_core::application::CrudRequest;

use crate::{
    cli::{CrudArgs, GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(entity = %args.entity))]
pub fn execute(
    args: CrudArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = super::build_generator(&args.generator, &global, &config)?;

    let request = CrudRequest {
        with_model: !args.no_model,
        with_service: !args.no_service,
        resources: args.resources,
        ..CrudRequest::new(&args.entity)
    };

    let report = service.make_crud(&request)?;
    info!(created = report.created_count(), "make:crud finished");

    super::print_report(&report, &args.generator.output, &output)
}

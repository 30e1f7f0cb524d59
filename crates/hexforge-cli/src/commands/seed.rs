//! `hexforge db:seed` - run seeders through Maven or Gradle.
//!
//! The build tool inherits stdin, stdout and stderr, so its output streams
//! straight to the terminal. Its exit status becomes ours.

use std::process::{Command, ExitStatus};

use serde::Serialize;
use tracing::{debug, info, instrument};

use hexforge_adapters::FsBuildToolLocator;
use hexforge_core::{
    application::{SeedPlan, SeedService},
    domain::SeedTarget,
    error::HexforgeError,
};

use crate::{
    cli::{GlobalArgs, SeedArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct PlanView<'a> {
    tool: String,
    program: String,
    args: &'a [String],
    target: &'a str,
    working_dir: String,
}

impl<'a> From<&'a SeedPlan> for PlanView<'a> {
    fn from(plan: &'a SeedPlan) -> Self {
        Self {
            tool: plan.tool.to_string(),
            program: plan.program.display().to_string(),
            args: &plan.args,
            target: plan.target.as_arg(),
            working_dir: plan.working_dir.display().to_string(),
        }
    }
}

#[instrument(skip_all, fields(dir = %args.dir.display()))]
pub fn execute(args: SeedArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let target = SeedTarget::from_args(args.name.as_deref(), args.all)
        .map_err(HexforgeError::from)?;

    let service = SeedService::new(Box::new(FsBuildToolLocator::new()));
    let plan = service.plan(&args.dir, target)?;
    let command_line = plan.command_line();

    if args.dry_run {
        if output.is_json() {
            output.json(&PlanView::from(&plan))?;
        } else {
            output.info(&format!("Dry run ({}): would run", plan.tool))?;
            output.print(&format!("  {command_line}"))?;
        }
        return Ok(());
    }

    output.header(&format!("Seeding {} with {}", plan.target, plan.tool))?;
    output.info(&command_line)?;
    info!(command = %command_line, "Running seeders");

    let status = run(&plan).map_err(|e| CliError::ExternalCommandFailed {
        command: command_line.clone(),
        source: Some(Box::new(e)),
    })?;
    debug!(%status, "Build tool exited");

    if status.success() {
        output.success("Seeding finished")?;
        return Ok(());
    }

    Err(CliError::ChildExited {
        command: command_line,
        code: exit_code(status),
    })
}

fn run(plan: &SeedPlan) -> std::io::Result<ExitStatus> {
    Command::new(&plan.program)
        .args(&plan.args)
        .current_dir(&plan.working_dir)
        .status()
}

/// Non-zero process code as a `u8`, or 1 when there is none (killed by a
/// signal) or it does not fit.
fn exit_code(status: ExitStatus) -> u8 {
    status
        .code()
        .and_then(|code| u8::try_from(code).ok())
        .filter(|code| *code != 0)
        .unwrap_or(1)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::process::ExitStatusExt;

    #[test]
    fn child_code_is_kept() {
        // Raw wait status: exit code lives in the high byte.
        assert_eq!(exit_code(ExitStatus::from_raw(3 << 8)), 3);
    }

    #[test]
    fn signal_maps_to_one() {
        assert_eq!(exit_code(ExitStatus::from_raw(9)), 1);
    }
}

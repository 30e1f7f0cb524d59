//! `hexforge`: Spring Boot source generation into configurable package
//! layouts, plus `db:seed` through Maven or Gradle.
//!
//! Exit codes: 0 success, 1 internal error, 2 bad input, 3 not found,
//! 4 configuration. A failed `db:seed` exits with the build tool's status.

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Before tracing init, so RUST_LOG from .env applies. A missing .env is fine.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version arrive here too and must exit 0.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e:#}");
        return ExitCode::from(1);
    }
    debug!(command = ?cli.command, "Arguments parsed");

    let verbose = cli.global.verbose > 0;
    let tty = std::io::stderr().is_terminal();
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            let err = CliError::ConfigError {
                message: format!("{e:#}"),
                source: Some(e.into()),
            };
            return report(&err, verbose, error_color(&cli.global, None, tty));
        }
    };

    let color = error_color(&cli.global, Some(&config), tty);
    let output = OutputManager::new(&cli.global, &config);
    match run(cli, config, output) {
        Ok(()) => {
            info!("Done");
            ExitCode::SUCCESS
        }
        Err(err) => report(&err, verbose, color),
    }
}

#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let global = cli.global;
    match cli.command {
        Commands::MakeCrud(args) => commands::crud::execute(args, global, config, output),
        Commands::MakeFactory(args) => commands::factory::execute(args, global, config, output),
        Commands::MakeSeeder(args) => commands::seeder::execute(args, global, config, output),
        Commands::DbSeed(args) => commands::seed::execute(args, global, output),
        Commands::Paths(args) => commands::paths::execute(args, global, config, output),
        Commands::Init(args) => commands::init::execute(args, global, output),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

/// Errors are coloured under the same switches as stdout: `--no-color`
/// (or `NO_COLOR`) and `[output] no_color`, and only on a terminal.
fn error_color(global: &GlobalArgs, config: Option<&AppConfig>, tty: bool) -> bool {
    tty && !global.no_color && !config.is_some_and(|c| c.output.no_color)
}

/// Log `err`, print it on stderr and pick the exit code.
fn report(err: &CliError, verbose: bool, color: bool) -> ExitCode {
    err.log();
    eprint!("{}", err.render(verbose, color));
    ExitCode::from(err.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    use crate::cli::OutputFormat;

    fn global(no_color: bool) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color,
            config: None,
            output_format: OutputFormat::Auto,
            strict_placeholders: false,
        }
    }

    #[test]
    fn version_matches_cargo() {
        assert_eq!(Cli::command().get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn every_generator_is_a_subcommand() {
        let cmd = Cli::command();
        for name in ["make:crud", "make:factory", "make:seeder", "db:seed", "paths", "init"] {
            assert!(cmd.find_subcommand(name).is_some(), "missing {name}");
        }
    }

    #[test]
    fn error_colour_honours_every_switch() {
        let mut quiet_config = AppConfig::default();
        quiet_config.output.no_color = true;

        assert!(error_color(&global(false), None, true));
        assert!(error_color(&global(false), Some(&AppConfig::default()), true));
        assert!(!error_color(&global(false), None, false));
        assert!(!error_color(&global(true), None, true));
        assert!(!error_color(&global(false), Some(&quiet_config), true));
    }
}

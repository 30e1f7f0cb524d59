//! Tracing setup for the `hexforge` binary.
//!
//! `hexforge-core` and `hexforge-adapters` only emit events; the one
//! subscriber is installed here. Events go to stderr so stdout stays usable
//! for file listings and JSON.
//!
//! | Flag(s)   | Level |
//! |-----------|-------|
//! | (none)    | WARN  |
//! | `-v`      | INFO  |
//! | `-vv`     | DEBUG |
//! | `-vvv`    | TRACE |
//! | `--quiet` | ERROR |
//!
//! `RUST_LOG` replaces the computed filter entirely. With
//! `--output-format json` the events are JSON lines as well.

use std::io::IsTerminal as _;

use anyhow::Context as _;
use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::{GlobalArgs, OutputFormat};

/// Crates whose events are shown at the computed level.
const OWN_CRATES: [&str; 3] = ["hexforge", "hexforge_core", "hexforge_adapters"];

/// Install the global subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => EnvFilter::try_new(directives(level_for(args)))
            .context("building the log filter")?,
    };

    let events = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if args.output_format == OutputFormat::Json {
        registry.with(events.json()).try_init()
    } else {
        let ansi = !args.no_color && std::io::stderr().is_terminal();
        registry.with(events.with_ansi(ansi).without_time()).try_init()
    };
    installed.context("a tracing subscriber is already installed")
}

/// `--quiet` beats any number of `-v`.
fn level_for(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn directives(level: LevelFilter) -> String {
    OWN_CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

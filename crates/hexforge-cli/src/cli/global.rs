//! Flags accepted before or after any subcommand.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum, builder::FalseyValueParser};

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// `-v` info, `-vv` debug, `-vvv` trace. Logs go to stderr.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only errors are printed.
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Plain output without ANSI colours. Any non-empty `NO_COLOR` other
    /// than `0`/`false`/`no`/`off` turns it on.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Project configuration to use instead of `<DIR>/.hexforge.toml`.
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// How results are printed on stdout.
    #[arg(
        long = "output-format",
        value_enum,
        default_value_t = OutputFormat::Auto,
        global = true
    )]
    pub output_format: OutputFormat,

    /// Fail instead of warning when a stub keeps an unknown `{{TOKEN}}`.
    #[arg(long = "strict-placeholders", global = true)]
    pub strict_placeholders: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped.
    #[default]
    Auto,
    /// Coloured, with status symbols.
    Human,
    /// No colours.
    Plain,
    /// One JSON document per command.
    Json,
}

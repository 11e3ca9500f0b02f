//! Clap argument types and output format selection.

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

use argcalc::config::CalcOverrides;
use argcalc::models::OddPolicy;
use argcalc::output::{OutputRenderer, Report};

/// Pairwise arithmetic and argument exercises.
#[derive(Parser, Debug)]
#[command(
    name = "argcalc",
    version = argcalc::constants::VERSION,
    about = super::ABOUT,
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Config file to use instead of ./.argcalc.toml.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Apply an operator to consecutive pairs of numbers.
    Calc(CalcArgs),

    /// Print the positional arguments, numbered.
    Args(ArgsArgs),

    /// Check a password against the configured one.
    Access(AccessArgs),

    /// Print version and build information.
    Version,
}

/// Arguments for the `calc` subcommand.
#[derive(Parser, Debug)]
pub struct CalcArgs {
    /// Operator to use (+, -, * or /) [default: +]
    #[arg(short = 'o', long, value_name = "OP", allow_hyphen_values = true)]
    pub operator: Option<String>,

    /// Output format.
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Decimal places for operands and results [default: 2]
    #[arg(long, value_name = "N")]
    pub precision: Option<usize>,

    /// What to do with an unpaired trailing number [default: reject]
    #[arg(long = "odd", value_name = "POLICY")]
    pub odd_tokens: Option<OddPolicy>,

    /// Numbers, processed two at a time. Put `--` first to pass `-inf` or `-NaN`.
    #[arg(value_name = "NUMBER", allow_negative_numbers = true)]
    pub tokens: Vec<String>,
}

impl CalcArgs {
    /// Flag values that take priority over config and environment.
    pub fn overrides(&self) -> CalcOverrides<'_> {
        CalcOverrides {
            operator: self.operator.as_deref(),
            precision: self.precision,
            odd_tokens: self.odd_tokens,
        }
    }
}

/// Arguments for the `args` subcommand.
#[derive(Parser, Debug)]
pub struct ArgsArgs {
    /// Also list the program path, numbering from 0.
    #[arg(long, default_value_t = false)]
    pub include_program: bool,

    /// Arguments to list.
    #[arg(value_name = "ARG", allow_hyphen_values = true, trailing_var_arg = true)]
    pub tokens: Vec<String>,
}

/// Arguments for the `access` subcommand.
#[derive(Parser, Debug)]
pub struct AccessArgs {
    /// Password for access.
    #[arg(short = 'p', long, default_value = "")]
    pub password: String,
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Render a report using the renderer for this format.
    pub fn render(&self, report: &Report<'_>) -> String {
        match self {
            OutputFormat::Text => argcalc::output::text::TextRenderer.render(report),
            OutputFormat::Json => argcalc::output::json::JsonRenderer.render(report),
        }
    }
}

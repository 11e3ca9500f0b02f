//! CLI command definitions and argument parsing.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

use clap::CommandFactory;

/// One-line description shown at the top of `--help`.
pub const ABOUT: &str = "Pairwise arithmetic and argument exercises";

/// Print the `calc` subcommand's help to stdout.
pub fn print_calc_usage() -> std::io::Result<()> {
    let mut cmd = args::Cli::command().bin_name(argcalc::constants::APP_NAME);
    cmd.build();
    match cmd.find_subcommand_mut("calc") {
        Some(calc) => calc.print_help(),
        None => Ok(()),
    }
}

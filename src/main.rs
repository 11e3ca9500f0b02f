//! argcalc — pairwise arithmetic and argument exercises.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use argcalc::access;
use argcalc::calc;
use argcalc::constants;
use argcalc::echo;
use argcalc::logging;
use argcalc::output::Report;

use std::io::Write;
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use argcalc::config::Config;
use argcalc::env::Env;
use cli::args::{AccessArgs, ArgsArgs, CalcArgs, Cli, Command};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Command::Calc(args) => run_calc(args, cli.config.as_deref()),
        Command::Args(args) => run_args(args),
        Command::Access(args) => run_access(args, cli.config.as_deref()),
        Command::Version => run_version(),
    }
}

/// Load layered config rooted at the current directory.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let work_dir = std::env::current_dir().ok();
    Config::load(explicit, work_dir.as_deref(), &Env::real())
        .context("failed to load configuration")
}

/// Evaluate consecutive pairs of numbers and print one line per pair.
fn run_calc(args: CalcArgs, config_path: Option<&Path>) -> Result<()> {
    if args.tokens.is_empty() {
        cli::print_calc_usage()?;
        std::io::stdout().flush()?;
        process::exit(1);
    }

    let config = load_config(config_path)?;
    let settings = config.calc_settings(&args.overrides())?;
    tracing::info!(
        operator = %settings.operator,
        precision = settings.precision,
        odd = %settings.odd_tokens,
        tokens = args.tokens.len(),
        "starting calculation"
    );

    let evaluations = calc::evaluate_tokens(&settings, &args.tokens)?;
    let report = Report {
        operator: settings.operator,
        precision: settings.precision,
        evaluations: &evaluations,
    };
    print!("{}", args.format.render(&report));
    Ok(())
}

/// Print the positional arguments, numbered.
fn run_args(args: ArgsArgs) -> Result<()> {
    let lines = if args.include_program {
        let program = std::env::args()
            .next()
            .unwrap_or_else(|| constants::APP_NAME.to_string());
        echo::list_arguments_with_program(&program, &args.tokens)
    } else {
        echo::list_arguments(&args.tokens)
    };

    for line in lines {
        println!("{line}");
    }
    Ok(())
}

/// Grant or deny access based on the supplied password.
fn run_access(args: AccessArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let decision = access::check_access(&args.password, &config.access.password);
    let message = decision.to_string();
    if decision.is_granted() {
        println!("{}", message.green());
    } else {
        println!("{}", message.red());
    }
    Ok(())
}

/// Print detailed version and build information.
fn run_version() -> Result<()> {
    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}

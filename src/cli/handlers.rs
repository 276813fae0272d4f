//! Command handlers
//!
//! Each handler runs one subcommand end to end and returns the process exit
//! code: 0 for a pass (with or without warnings), 1 for one or more
//! conflicts, 2 when the check could not run at all.

use crate::checks::run_checks;
use crate::cli::commands::{CheckArgs, OutputFormatArg};
use crate::cli::output::OutputFormatter;
use crate::config::CheckConfig;
use crate::fs::RealFileSystem;
use crate::report::Outcome;
use crate::scan::TemplateScanner;
use anyhow::{Context, Result};
use std::env;
use std::fs;
use tracing::{debug, error};

pub fn handle_check(args: &CheckArgs, quiet: bool) -> i32 {
    match run_check(args, quiet) {
        Ok(exit_code) => exit_code,
        Err(err) => {
            error!("Check failed to run: {:#}", err);
            eprintln!("Error: {:#}", err);
            2
        }
    }
}

fn run_check(args: &CheckArgs, quiet: bool) -> Result<i32> {
    let config = CheckConfig::from_env().context("Invalid configuration")?;

    let repo_path = match &args.repository_path {
        Some(path) => path.clone(),
        None => env::current_dir().context("Failed to determine current directory")?,
    };

    debug!(repo_path = %repo_path.display(), "Running check");

    let scan = TemplateScanner::new(&config).scan(&repo_path)?;
    let report = run_checks(&RealFileSystem, &scan, &config);

    let color = args.format == OutputFormatArg::Human
        && args.output.is_none()
        && atty::is(atty::Stream::Stdout);

    let rendered = OutputFormatter::new(args.format.into())
        .with_color(color)
        .format(&report)?;

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{}\n", rendered))
                .context(format!("Failed to write output to {:?}", path))?;
        }
        None => {
            // Quiet mode still prints when the run failed
            if !quiet || report.outcome() == Outcome::Failed {
                println!("{}", rendered);
            }
        }
    }

    Ok(report.exit_code())
}

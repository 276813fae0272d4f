use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Static consistency checker for infrastructure configuration templates
#[derive(Parser, Debug)]
#[command(
    name = "driftcheck",
    about = "Static consistency checker for infrastructure configuration templates",
    version,
    author,
    long_about = "driftcheck scans a repository's configuration templates for \
                  environment-variable assignments and flags the same variable name \
                  carrying conflicting literal values across files. It also flags \
                  well-known network ports written as bare literals instead of being \
                  sourced from a shared variable."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Increase verbosity")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Check templates for conflicting values and hardcoded ports",
        long_about = "Scans the repository for template/config files and reports value \
                      conflicts (exit 1) and hardcoded port warnings (exit 0).\n\n\
                      Examples:\n  \
                      driftcheck check\n  \
                      driftcheck check /path/to/repo\n  \
                      driftcheck check --format json"
    )]
    Check(CheckArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    #[arg(
        value_name = "PATH",
        help = "Path to repository (defaults to current directory)"
    )]
    pub repository_path: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write output to file instead of stdout"
    )]
    pub output: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}

pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{CheckArgs, CliArgs, Commands};
pub use output::{OutputFormat, OutputFormatter};

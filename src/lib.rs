//! driftcheck - static consistency checker for infrastructure templates
//!
//! This library scans a repository's configuration and template files for
//! environment-variable assignments and reports cases where the same variable
//! name is assigned conflicting literal values in different files. It also
//! flags well-known network port numbers that appear as bare literals instead
//! of being sourced from a shared configuration variable.
//!
//! # Core Concepts
//!
//! - **Conflict**: two locations assigning the same variable name different
//!   non-templated literal values. Conflicts fail the run.
//! - **Templating marker**: placeholder syntax (`{{ ... }}`, `${ ... }`)
//!   indicating a value resolved at a later stage; such values are excluded
//!   from comparison entirely.
//! - **Hardcoded literal**: a well-known port number written directly into a
//!   template. Reported as a warning; warnings never fail the run.
//!
//! # Example Usage
//!
//! ```ignore
//! use driftcheck::checks::run_checks;
//! use driftcheck::config::CheckConfig;
//! use driftcheck::fs::RealFileSystem;
//! use driftcheck::scan::TemplateScanner;
//!
//! let config = CheckConfig::default();
//! let scan = TemplateScanner::new(&config).scan(std::path::Path::new("."))?;
//! let report = run_checks(&RealFileSystem, &scan, &config);
//! std::process::exit(report.exit_code());
//! # Ok::<(), anyhow::Error>(())
//! ```

// Public modules
pub mod checks;
pub mod cli;
pub mod config;
pub mod fs;
pub mod report;
pub mod scan;

// Re-export key types for convenient access
pub use checks::run_checks;
pub use config::{CheckConfig, ConfigError};
pub use fs::{FileSystem, RealFileSystem};
pub use report::{Conflict, Outcome, PortWarning, Report};
pub use scan::{ScanResult, TemplateScanner};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

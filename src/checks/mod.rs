//! Check execution
//!
//! Runs both checks over the scanned template files in one pass per file.

pub mod env_vars;
pub mod ports;

pub use env_vars::{parse_assignment, Assignment, ConsistencyChecker};
pub use ports::PortChecker;

use crate::config::CheckConfig;
use crate::fs::FileSystem;
use crate::report::{Report, ScanWarning};
use crate::scan::ScanResult;
use tracing::{debug, warn};

/// Reads each scanned file once and feeds it through both checks.
///
/// Unreadable files are logged and skipped; they contribute no findings.
pub fn run_checks<F: FileSystem>(fs: &F, scan: &ScanResult, config: &CheckConfig) -> Report {
    let mut consistency = ConsistencyChecker::new();
    let mut ports = PortChecker::new(config);
    let mut files_checked = 0;

    for rel_path in &scan.files {
        let abs_path = scan.repo_path.join(rel_path);
        let content = match fs.read_to_string(&abs_path) {
            Ok(c) => c,
            Err(err) => {
                warn!(path = %abs_path.display(), error = %err, "Skipping unreadable file");
                continue;
            }
        };

        debug!(path = %rel_path.display(), "Checking file");
        consistency.check_file(rel_path, &content);
        ports.check_file(rel_path, &content);
        files_checked += 1;
    }

    let mut scan_warnings = Vec::new();
    if scan.is_empty() {
        // A vacuous run must not look like a clean pass
        scan_warnings.push(ScanWarning::NoTemplateFiles {
            repo_path: scan.repo_path.clone(),
        });
    }

    Report {
        conflicts: consistency.into_conflicts(),
        port_warnings: ports.into_warnings(),
        scan_warnings,
        files_checked,
        scan_time_ms: scan.scan_time_ms,
    }
}

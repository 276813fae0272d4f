//! Check findings and exit policy
//!
//! A run produces one [`Report`]: a list of conflicts (hard errors) and a list
//! of port warnings (soft). Only conflicts affect the exit code.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A file/line position inside the scanned repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub file: PathBuf,
    /// 1-based line number
    pub line: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file.display(), self.line)
    }
}

/// Two locations assigning the same variable different literal values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    pub name: String,
    pub first: Location,
    pub first_value: String,
    pub second: Location,
    pub second_value: String,
}

/// A well-known port appearing as a bare literal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortWarning {
    pub port: u16,
    /// Total bare occurrences found
    pub occurrences: usize,
    /// Example locations, capped by configuration
    pub examples: Vec<Location>,
}

/// A warning that is not tied to a specific port
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ScanWarning {
    /// The traversal found no template files at all
    NoTemplateFiles { repo_path: PathBuf },
}

impl fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanWarning::NoTemplateFiles { repo_path } => {
                write!(
                    f,
                    "no template files found under {} (nothing was checked)",
                    repo_path.display()
                )
            }
        }
    }
}

/// Terminal outcome of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Clean,
    WarningsOnly,
    Failed,
}

/// Full result of one check run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub conflicts: Vec<Conflict>,
    pub port_warnings: Vec<PortWarning>,
    pub scan_warnings: Vec<ScanWarning>,
    pub files_checked: usize,
    pub scan_time_ms: u64,
}

impl Report {
    pub fn outcome(&self) -> Outcome {
        if !self.conflicts.is_empty() {
            Outcome::Failed
        } else if self.warning_count() > 0 {
            Outcome::WarningsOnly
        } else {
            Outcome::Clean
        }
    }

    /// Warnings are independent of conflicts and never affect exit status
    pub fn warning_count(&self) -> usize {
        self.port_warnings.len() + self.scan_warnings.len()
    }

    pub fn exit_code(&self) -> i32 {
        match self.outcome() {
            Outcome::Failed => 1,
            Outcome::WarningsOnly | Outcome::Clean => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(file: &str, line: usize) -> Location {
        Location {
            file: PathBuf::from(file),
            line,
        }
    }

    fn conflict() -> Conflict {
        Conflict {
            name: "APP_PORT".to_string(),
            first: location("a/values.yaml", 3),
            first_value: "8080".to_string(),
            second: location("b/values.yaml", 7),
            second_value: "9090".to_string(),
        }
    }

    fn warning() -> PortWarning {
        PortWarning {
            port: 5432,
            occurrences: 2,
            examples: vec![location("db.yaml", 12)],
        }
    }

    #[test]
    fn test_clean_outcome() {
        let report = Report {
            conflicts: vec![],
            port_warnings: vec![],
            scan_warnings: vec![],
            files_checked: 4,
            scan_time_ms: 1,
        };
        assert_eq!(report.outcome(), Outcome::Clean);
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn test_warnings_only_exits_zero() {
        let report = Report {
            conflicts: vec![],
            port_warnings: vec![warning()],
            scan_warnings: vec![],
            files_checked: 4,
            scan_time_ms: 1,
        };
        assert_eq!(report.outcome(), Outcome::WarningsOnly);
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn test_conflicts_fail_regardless_of_warnings() {
        let report = Report {
            conflicts: vec![conflict()],
            port_warnings: vec![warning()],
            scan_warnings: vec![],
            files_checked: 4,
            scan_time_ms: 1,
        };
        assert_eq!(report.outcome(), Outcome::Failed);
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn test_empty_scan_is_a_warning() {
        let report = Report {
            conflicts: vec![],
            port_warnings: vec![],
            scan_warnings: vec![ScanWarning::NoTemplateFiles {
                repo_path: PathBuf::from("/repo"),
            }],
            files_checked: 0,
            scan_time_ms: 0,
        };
        assert_eq!(report.outcome(), Outcome::WarningsOnly);
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn test_location_display() {
        assert_eq!(location("deploy/app.yml", 14).to_string(), "deploy/app.yml:14");
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = Report {
            conflicts: vec![conflict()],
            port_warnings: vec![warning()],
            scan_warnings: vec![],
            files_checked: 2,
            scan_time_ms: 5,
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("APP_PORT"));
        assert!(json.contains("5432"));
    }
}

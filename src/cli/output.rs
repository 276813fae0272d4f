//! Output formatting for multiple formats
//!
//! This module provides formatters for the check report: JSON and YAML for
//! machine consumption, and colorized human-readable text for terminals.
//! ANSI color is applied only when enabled by the caller (stdout is a TTY
//! and output is not redirected to a file).

use anyhow::{Context, Result};
use std::fmt::Write;

use crate::report::{Outcome, Report};

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format (human-friendly, version-control friendly)
    Yaml,
    /// Human-readable formatted text
    Human,
}

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Output formatter for check reports
pub struct OutputFormatter {
    format: OutputFormat,
    color: bool,
}

impl OutputFormatter {
    /// Creates a new output formatter with the specified format
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: false,
        }
    }

    /// Enables or disables ANSI color in human output
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Formats a report according to the configured format
    pub fn format(&self, report: &Report) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_json(report),
            OutputFormat::Yaml => self.format_yaml(report),
            OutputFormat::Human => Ok(self.format_human(report)),
        }
    }

    fn format_json(&self, report: &Report) -> Result<String> {
        serde_json::to_string_pretty(report).context("Failed to serialize report to JSON")
    }

    fn format_yaml(&self, report: &Report) -> Result<String> {
        serde_yaml::to_string(report).context("Failed to serialize report to YAML")
    }

    fn format_human(&self, report: &Report) -> String {
        let mut out = String::new();

        for conflict in &report.conflicts {
            let _ = writeln!(
                out,
                "{}conflict{}: {} assigned different values",
                self.paint(RED),
                self.paint(RESET),
                conflict.name
            );
            let _ = writeln!(out, "    {} = {}", conflict.first, conflict.first_value);
            let _ = writeln!(out, "    {} = {}", conflict.second, conflict.second_value);
        }

        for warning in &report.port_warnings {
            let _ = writeln!(
                out,
                "{}warning{}: hardcoded port {} ({} occurrence{})",
                self.paint(YELLOW),
                self.paint(RESET),
                warning.port,
                warning.occurrences,
                if warning.occurrences == 1 { "" } else { "s" }
            );
            for example in &warning.examples {
                let _ = writeln!(out, "    {}", example);
            }
            if warning.occurrences > warning.examples.len() {
                let _ = writeln!(
                    out,
                    "    ... and {} more",
                    warning.occurrences - warning.examples.len()
                );
            }
        }

        for warning in &report.scan_warnings {
            let _ = writeln!(
                out,
                "{}warning{}: {}",
                self.paint(YELLOW),
                self.paint(RESET),
                warning
            );
        }

        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&self.summary_banner(report));
        out
    }

    fn summary_banner(&self, report: &Report) -> String {
        let stats = format!(
            "{} conflict{}, {} warning{} ({} file{} checked in {}ms)",
            report.conflicts.len(),
            if report.conflicts.len() == 1 { "" } else { "s" },
            report.warning_count(),
            if report.warning_count() == 1 { "" } else { "s" },
            report.files_checked,
            if report.files_checked == 1 { "" } else { "s" },
            report.scan_time_ms
        );

        match report.outcome() {
            Outcome::Failed => format!(
                "{}{}FAILED{}: {}",
                self.paint(BOLD),
                self.paint(RED),
                self.paint(RESET),
                stats
            ),
            Outcome::WarningsOnly => format!(
                "{}{}PASSED with warnings{}: {}",
                self.paint(BOLD),
                self.paint(YELLOW),
                self.paint(RESET),
                stats
            ),
            Outcome::Clean => format!(
                "{}{}PASSED{}: {}",
                self.paint(BOLD),
                self.paint(GREEN),
                self.paint(RESET),
                stats
            ),
        }
    }

    fn paint(&self, code: &'static str) -> &'static str {
        if self.color {
            code
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{Conflict, Location, PortWarning, ScanWarning};
    use std::path::PathBuf;

    fn sample_report() -> Report {
        Report {
            conflicts: vec![Conflict {
                name: "APP_PORT".to_string(),
                first: Location {
                    file: PathBuf::from("a/values.yaml"),
                    line: 3,
                },
                first_value: "8080".to_string(),
                second: Location {
                    file: PathBuf::from("b/values.yaml"),
                    line: 7,
                },
                second_value: "9090".to_string(),
            }],
            port_warnings: vec![PortWarning {
                port: 5432,
                occurrences: 7,
                examples: vec![Location {
                    file: PathBuf::from("db.yaml"),
                    line: 12,
                }],
            }],
            scan_warnings: vec![],
            files_checked: 4,
            scan_time_ms: 12,
        }
    }

    #[test]
    fn test_human_output_names_both_locations() {
        let output = OutputFormatter::new(OutputFormat::Human)
            .format(&sample_report())
            .unwrap();

        assert!(output.contains("APP_PORT"));
        assert!(output.contains("a/values.yaml:3 = 8080"));
        assert!(output.contains("b/values.yaml:7 = 9090"));
        assert!(output.contains("FAILED"));
    }

    #[test]
    fn test_human_output_caps_port_examples() {
        let output = OutputFormatter::new(OutputFormat::Human)
            .format(&sample_report())
            .unwrap();

        assert!(output.contains("hardcoded port 5432 (7 occurrences)"));
        assert!(output.contains("db.yaml:12"));
        assert!(output.contains("... and 6 more"));
    }

    #[test]
    fn test_human_output_without_color_has_no_ansi() {
        let output = OutputFormatter::new(OutputFormat::Human)
            .format(&sample_report())
            .unwrap();
        assert!(!output.contains('\x1b'));
    }

    #[test]
    fn test_human_output_with_color_has_ansi() {
        let output = OutputFormatter::new(OutputFormat::Human)
            .with_color(true)
            .format(&sample_report())
            .unwrap();
        assert!(output.contains(RED));
        assert!(output.contains(RESET));
    }

    #[test]
    fn test_clean_report_banner() {
        let report = Report {
            conflicts: vec![],
            port_warnings: vec![],
            scan_warnings: vec![],
            files_checked: 3,
            scan_time_ms: 2,
        };
        let output = OutputFormatter::new(OutputFormat::Human)
            .format(&report)
            .unwrap();
        assert_eq!(output, "PASSED: 0 conflicts, 0 warnings (3 files checked in 2ms)");
    }

    #[test]
    fn test_empty_scan_warning_is_rendered() {
        let report = Report {
            conflicts: vec![],
            port_warnings: vec![],
            scan_warnings: vec![ScanWarning::NoTemplateFiles {
                repo_path: PathBuf::from("/repo"),
            }],
            files_checked: 0,
            scan_time_ms: 0,
        };
        let output = OutputFormatter::new(OutputFormat::Human)
            .format(&report)
            .unwrap();
        assert!(output.contains("no template files found under /repo"));
        assert!(output.contains("PASSED with warnings"));
    }

    #[test]
    fn test_json_output_round_trips() {
        let output = OutputFormatter::new(OutputFormat::Json)
            .format(&sample_report())
            .unwrap();
        let parsed: Report = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.conflicts.len(), 1);
        assert_eq!(parsed.port_warnings.len(), 1);
    }

    #[test]
    fn test_yaml_output_contains_findings() {
        let output = OutputFormatter::new(OutputFormat::Yaml)
            .format(&sample_report())
            .unwrap();
        assert!(output.contains("APP_PORT"));
        assert!(output.contains("5432"));
    }
}

//! Hardcoded-literal check
//!
//! Searches template files for bare occurrences of well-known port numbers.
//! A line that already goes through templating or a default-value expression
//! counts as parameterized and is excluded. This is a best-effort heuristic,
//! not a sound analysis.

use crate::config::CheckConfig;
use crate::report::{Location, PortWarning};
use regex::Regex;
use std::path::Path;

/// Line contexts that count as already parameterized
const PARAMETERIZED_MARKERS: &[&str] = &["{{", "${", "%{", "| default"];

pub struct PortChecker {
    ports: Vec<(u16, Regex)>,
    max_examples: usize,
    counts: Vec<usize>,
    examples: Vec<Vec<Location>>,
}

impl PortChecker {
    pub fn new(config: &CheckConfig) -> Self {
        let ports: Vec<(u16, Regex)> = config
            .hardcoded_ports
            .iter()
            .map(|&port| {
                // \b keeps 80 from matching inside 8080 or 18080
                let re = Regex::new(&format!(r"\b{}\b", port)).expect("valid regex");
                (port, re)
            })
            .collect();

        let n = ports.len();
        Self {
            ports,
            max_examples: config.max_examples_per_port,
            counts: vec![0; n],
            examples: vec![Vec::new(); n],
        }
    }

    /// Feeds every line of one file through the check.
    pub fn check_file(&mut self, rel_path: &Path, content: &str) {
        for (idx, line) in content.lines().enumerate() {
            if is_parameterized(line) {
                continue;
            }

            for (i, (_, re)) in self.ports.iter().enumerate() {
                if re.is_match(line) {
                    self.counts[i] += 1;
                    if self.examples[i].len() < self.max_examples {
                        self.examples[i].push(Location {
                            file: rel_path.to_path_buf(),
                            line: idx + 1,
                        });
                    }
                }
            }
        }
    }

    pub fn into_warnings(self) -> Vec<PortWarning> {
        self.ports
            .into_iter()
            .zip(self.counts)
            .zip(self.examples)
            .filter(|((_, count), _)| *count > 0)
            .map(|(((port, _), occurrences), examples)| PortWarning {
                port,
                occurrences,
                examples,
            })
            .collect()
    }
}

/// True when the line already contains a templating or default-value expression
fn is_parameterized(line: &str) -> bool {
    PARAMETERIZED_MARKERS.iter().any(|m| line.contains(m))
}

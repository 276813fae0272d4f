//! Variable-consistency check
//!
//! Extracts env-style assignments (`NAME=value`, `NAME: value`) from template
//! lines and flags the same name carrying different literal values in
//! different places. Values containing a templating placeholder are resolved
//! later and never participate in comparison.

use crate::report::{Conflict, Location};
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

/// A (name, value) pair extracted from one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub name: String,
    pub value: String,
}

/// Placeholder syntaxes that mark a value as resolved at a later stage
const TEMPLATING_MARKERS: &[&str] = &["{{", "}}", "${", "%{"];

fn assignment_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:export\s+)?([A-Z][A-Z0-9_]+)\s*[=:]\s*(\S.*?)\s*$").expect("valid regex")
    })
}

/// Extracts an env-style assignment from a single line.
///
/// Pure function, usable without filesystem access. Returns `None` for
/// comment lines, lines that do not match the assignment shape, and
/// assignments with an empty value. Surrounding matching quotes are stripped
/// from the value.
pub fn parse_assignment(line: &str) -> Option<Assignment> {
    let trimmed = line.trim_start();
    if trimmed.starts_with('#') {
        return None;
    }

    let caps = assignment_regex().captures(trimmed)?;
    let name = caps.get(1)?.as_str().to_string();
    let value = strip_quotes(caps.get(2)?.as_str());

    if value.is_empty() {
        return None;
    }

    Some(Assignment {
        name,
        value: value.to_string(),
    })
}

/// True when the value contains a templating placeholder marker
pub fn is_templated(value: &str) -> bool {
    TEMPLATING_MARKERS.iter().any(|m| value.contains(m))
}

fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

#[derive(Debug, Clone)]
struct FirstSeen {
    value: String,
    location: Location,
}

/// First-write-wins registry of observed assignments.
///
/// The first (value, location) recorded for a name is never overwritten;
/// every later observation is compared against it. A differing literal
/// produces a conflict naming both ends.
#[derive(Debug, Default)]
pub struct ConsistencyChecker {
    first_seen: HashMap<String, FirstSeen>,
    conflicts: Vec<Conflict>,
}

impl ConsistencyChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds every line of one file through the check.
    pub fn check_file(&mut self, rel_path: &Path, content: &str) {
        for (idx, line) in content.lines().enumerate() {
            let assignment = match parse_assignment(line) {
                Some(a) => a,
                None => continue,
            };

            if is_templated(&assignment.value) {
                continue;
            }

            let location = Location {
                file: rel_path.to_path_buf(),
                line: idx + 1,
            };
            self.observe(assignment, location);
        }
    }

    /// Insert-if-absent, else compare. Never overwrites the stored value.
    fn observe(&mut self, assignment: Assignment, location: Location) {
        match self.first_seen.get(&assignment.name) {
            None => {
                self.first_seen.insert(
                    assignment.name,
                    FirstSeen {
                        value: assignment.value,
                        location,
                    },
                );
            }
            Some(first) if first.value != assignment.value => {
                self.conflicts.push(Conflict {
                    name: assignment.name,
                    first: first.location.clone(),
                    first_value: first.value.clone(),
                    second: location,
                    second_value: assignment.value,
                });
            }
            Some(_) => {}
        }
    }

    pub fn into_conflicts(self) -> Vec<Conflict> {
        self.conflicts
    }
}

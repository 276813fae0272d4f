//! Template discovery
//!
//! Walks the repository tree once and collects the files the checks will read.
//! The walk respects `.gitignore` when the repository has a `.git` directory
//! and never descends into the configured excluded directories.

use crate::config::CheckConfig;
use anyhow::{anyhow, Context, Result};
use ignore::{overrides::OverrideBuilder, WalkBuilder};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, trace, warn};

/// Outcome of one traversal pass
#[derive(Debug, Clone)]
pub struct ScanResult {
    /// Canonicalized repository root
    pub repo_path: PathBuf,
    /// Template/config files found, relative to the root, sorted
    pub files: Vec<PathBuf>,
    /// Total files seen during the walk (template or not)
    pub files_seen: usize,
    pub scan_time_ms: u64,
}

impl ScanResult {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

pub struct TemplateScanner<'a> {
    config: &'a CheckConfig,
}

impl<'a> TemplateScanner<'a> {
    pub fn new(config: &'a CheckConfig) -> Self {
        Self { config }
    }

    pub fn scan(&self, repo_path: &Path) -> Result<ScanResult> {
        if !repo_path.exists() {
            return Err(anyhow!("Repository path does not exist: {:?}", repo_path));
        }
        if !repo_path.is_dir() {
            return Err(anyhow!("Repository path is not a directory: {:?}", repo_path));
        }

        let repo_path = repo_path
            .canonicalize()
            .context("Failed to canonicalize repository path")?;

        debug!(repo_path = %repo_path.display(), "Starting template scan");
        let start = Instant::now();

        let mut override_builder = OverrideBuilder::new(&repo_path);
        for excluded in &self.config.excluded_dirs {
            override_builder.add(&format!("!{}/", excluded)).ok();
        }
        let overrides = override_builder
            .build()
            .unwrap_or_else(|_| OverrideBuilder::new(&repo_path).build().unwrap());

        let has_git_dir = repo_path.join(".git").exists();

        let mut files = Vec::new();
        let mut files_seen = 0;

        for result in WalkBuilder::new(&repo_path)
            .max_depth(Some(self.config.max_depth))
            .hidden(false)
            .git_ignore(has_git_dir)
            .git_global(false)
            .git_exclude(false)
            .overrides(overrides)
            .build()
        {
            let entry = match result {
                Ok(e) => e,
                Err(err) => {
                    warn!(error = %err, "Failed to read directory entry");
                    continue;
                }
            };
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            if files_seen >= self.config.max_files {
                warn!(
                    files_seen,
                    max_files = self.config.max_files,
                    "Reached file limit, stopping scan"
                );
                break;
            }
            files_seen += 1;

            let filename = match path.file_name().and_then(|n| n.to_str()) {
                Some(name) => name,
                None => continue,
            };

            if !self.config.is_template_file(filename) {
                continue;
            }

            let rel_path = path.strip_prefix(&repo_path).unwrap_or(path).to_path_buf();
            trace!(path = %rel_path.display(), "Found template file");
            files.push(rel_path);
        }

        // Sort for deterministic reporting
        files.sort();

        let scan_time_ms = start.elapsed().as_millis() as u64;
        info!(
            template_files = files.len(),
            files_seen, scan_time_ms, "Template scan completed"
        );

        Ok(ScanResult {
            repo_path,
            files,
            files_seen,
            scan_time_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_repo() -> TempDir {
        let dir = TempDir::new().unwrap();
        let base = dir.path();

        fs::write(base.join("values.yaml"), "replicas: 2").unwrap();
        fs::write(base.join(".env.example"), "PORT=8080").unwrap();
        fs::write(base.join("README.md"), "# docs").unwrap();

        fs::create_dir_all(base.join("deploy/staging")).unwrap();
        fs::write(base.join("deploy/staging/app.yml"), "image: app:1").unwrap();

        fs::create_dir(base.join("node_modules")).unwrap();
        fs::write(base.join("node_modules/pkg.yaml"), "ignored: true").unwrap();

        dir
    }

    #[test]
    fn test_scan_collects_template_files() {
        let temp = create_test_repo();
        let config = CheckConfig::default();
        let result = TemplateScanner::new(&config).scan(temp.path()).unwrap();

        let paths: Vec<String> = result
            .files
            .iter()
            .map(|p| p.to_string_lossy().to_string())
            .collect();

        assert!(paths.contains(&"values.yaml".to_string()));
        assert!(paths.contains(&".env.example".to_string()));
        assert!(paths.contains(&"deploy/staging/app.yml".to_string()));
        assert!(!paths.iter().any(|p| p.contains("README")));
    }

    #[test]
    fn test_scan_excludes_node_modules() {
        let temp = create_test_repo();
        let config = CheckConfig::default();
        let result = TemplateScanner::new(&config).scan(temp.path()).unwrap();

        assert!(!result
            .files
            .iter()
            .any(|p| p.to_string_lossy().contains("node_modules")));
    }

    #[test]
    fn test_scan_files_are_sorted() {
        let temp = create_test_repo();
        let config = CheckConfig::default();
        let result = TemplateScanner::new(&config).scan(temp.path()).unwrap();

        let mut sorted = result.files.clone();
        sorted.sort();
        assert_eq!(result.files, sorted);
    }

    #[test]
    fn test_scan_missing_path_is_error() {
        let config = CheckConfig::default();
        let result = TemplateScanner::new(&config).scan(Path::new("/does/not/exist"));
        assert!(result.is_err());
    }

    #[test]
    fn test_scan_empty_repo_is_ok() {
        let temp = TempDir::new().unwrap();
        let config = CheckConfig::default();
        let result = TemplateScanner::new(&config).scan(temp.path()).unwrap();

        assert!(result.is_empty());
        assert_eq!(result.files_seen, 0);
    }

    #[test]
    fn test_scan_respects_max_files() {
        let temp = create_test_repo();
        let config = CheckConfig {
            max_files: 1,
            ..CheckConfig::default()
        };
        let result = TemplateScanner::new(&config).scan(temp.path()).unwrap();

        assert_eq!(result.files_seen, 1);
    }
}

use super::FileSystem;
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// In-memory file system for tests
pub struct MockFileSystem {
    files: RwLock<HashMap<PathBuf, String>>,
    root: PathBuf,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self {
            files: RwLock::new(HashMap::new()),
            root: PathBuf::from("/mock"),
        }
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        let path = self.normalize_path(path.as_ref());
        self.files.write().unwrap().insert(path, content.to_string());
    }

    /// Relative paths of all files, sorted for deterministic iteration
    pub fn file_list(&self) -> Vec<PathBuf> {
        let files = self.files.read().unwrap();
        let mut paths: Vec<PathBuf> = files
            .keys()
            .map(|path| path.strip_prefix(&self.root).unwrap_or(path).to_path_buf())
            .collect();
        paths.sort();
        paths
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn normalize_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        let path = self.normalize_path(path);
        self.files
            .read()
            .unwrap()
            .get(&path)
            .cloned()
            .ok_or_else(|| anyhow!("File not found: {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_to_string() {
        let fs = MockFileSystem::new();
        fs.add_file("values.yaml", "port: 8080");

        let content = fs.read_to_string(Path::new("/mock/values.yaml")).unwrap();
        assert_eq!(content, "port: 8080");
    }

    #[test]
    fn test_relative_paths_resolve_against_root() {
        let fs = MockFileSystem::new();
        fs.add_file("charts/api/values.yaml", "replicas: 1");

        let content = fs
            .read_to_string(Path::new("charts/api/values.yaml"))
            .unwrap();
        assert_eq!(content, "replicas: 1");
    }

    #[test]
    fn test_file_list_is_sorted_and_relative() {
        let fs = MockFileSystem::new();
        fs.add_file("b.yaml", "");
        fs.add_file("a/c.yaml", "");

        let list = fs.file_list();
        assert_eq!(
            list,
            vec![PathBuf::from("a/c.yaml"), PathBuf::from("b.yaml")]
        );
    }

    #[test]
    fn test_missing_file_is_error() {
        let fs = MockFileSystem::new();
        assert!(fs.read_to_string(Path::new("missing.yaml")).is_err());
    }
}

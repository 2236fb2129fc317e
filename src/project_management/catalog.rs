use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::shared::utils::fs::subdirectory_names;

#[derive(Debug, Error)]
pub enum ListError {
    #[error("No modules found in {}", .0.display())]
    NoModulesFound(PathBuf),
    #[error("No modules installed in {}", .0.display())]
    NoModulesInstalled(PathBuf),
    #[error("Failed to list modules in {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read-only view over the installed-modules root
pub struct ModuleCatalog {
    root: PathBuf,
}

impl ModuleCatalog {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Names of installed modules, in directory-listing order
    pub fn installed(&self) -> Result<Vec<String>, ListError> {
        if !self.root.exists() {
            return Err(ListError::NoModulesFound(self.root.clone()));
        }

        let names = subdirectory_names(&self.root).map_err(|source| ListError::Io {
            path: self.root.clone(),
            source,
        })?;

        if names.is_empty() {
            return Err(ListError::NoModulesInstalled(self.root.clone()));
        }

        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("vendor/arealtime");
        let catalog = ModuleCatalog::new(&root);

        assert!(matches!(catalog.installed(), Err(ListError::NoModulesFound(p)) if p == root));
        // listing never creates the root
        assert!(!root.exists());
        assert!(!temp_dir.path().join("vendor").exists());
    }

    #[test]
    fn test_empty_root() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = ModuleCatalog::new(temp_dir.path());

        assert!(matches!(catalog.installed(), Err(ListError::NoModulesInstalled(_))));
    }

    #[test]
    fn test_files_do_not_count_as_modules() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("composer.lock"), "{}").unwrap();
        let catalog = ModuleCatalog::new(temp_dir.path());

        assert!(matches!(catalog.installed(), Err(ListError::NoModulesInstalled(_))));
    }

    #[test]
    fn test_lists_subdirectories() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("blog")).unwrap();
        fs::create_dir(temp_dir.path().join("exception-log")).unwrap();
        let catalog = ModuleCatalog::new(temp_dir.path());

        let mut names = catalog.installed().unwrap();
        names.sort();
        assert_eq!(names, vec!["blog".to_string(), "exception-log".to_string()]);
    }
}

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

/// modgen.yml configuration root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleConfig {
    /// Directory (relative to the project root) that generated modules are written to
    pub base_path: PathBuf,
    /// Directory (relative to the project root) scanned by `list`
    pub modules_root: PathBuf,
    /// Root PHP namespace segment
    pub vendor: String,
    /// Prefix for package names, command signatures and config filenames
    pub package_prefix: String,
    pub php_version: String,
    pub author: Author,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    pub name: String,
    pub email: String,
    pub github: String,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("packages/Arealtime"),
            modules_root: PathBuf::from("vendor/arealtime"),
            vendor: "Arealtime".to_string(),
            package_prefix: "arealtime".to_string(),
            php_version: "^8.3".to_string(),
            author: Author::default(),
            keywords: ["laravel", "artisan", "module", "generator", "clean architecture"]
                .iter()
                .map(|k| k.to_string())
                .collect(),
        }
    }
}

impl Default for Author {
    fn default() -> Self {
        Self {
            name: "Arash Taghavi".to_string(),
            email: "arash.taghavi69@gmail.com".to_string(),
            github: "arashtaghavi".to_string(),
        }
    }
}

impl ModuleConfig {
    /// Directory a module named `name` is generated into
    pub fn module_dir(&self, root: &Path, name: &str) -> PathBuf {
        root.join(&self.base_path).join(name)
    }

    /// Directory holding installed modules
    pub fn modules_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.modules_root)
    }
}

use std::fmt;
use std::path::{Path, PathBuf};

/// Kinds of artifact produced by one generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Directory,
    Controller,
    Model,
    ServiceProvider,
    Command,
    Migration,
    Config,
    Route,
    Manifest,
    Readme,
}

impl ArtifactKind {
    /// Label shown in the report's Type column
    pub fn label(self) -> &'static str {
        match self {
            ArtifactKind::Directory => "Directory",
            ArtifactKind::Controller => "Controller",
            ArtifactKind::Model => "Model",
            ArtifactKind::ServiceProvider => "ServiceProvider",
            ArtifactKind::Command => "Command",
            ArtifactKind::Migration => "Migration",
            ArtifactKind::Config => "Config",
            ArtifactKind::Route => "Route",
            ArtifactKind::Manifest => "Composer",
            ArtifactKind::Readme => "Readme",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one create-if-absent attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactResult {
    pub step: usize,
    pub created: bool,
    pub kind: ArtifactKind,
    pub path: PathBuf,
}

impl ArtifactResult {
    pub fn status_glyph(&self) -> &'static str {
        if self.created { "✅" } else { "⚠️" }
    }

    pub fn action_label(&self) -> &'static str {
        if self.created { "Created" } else { "Exists" }
    }
}

/// Ordered, append-only record of one generation run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Ledger {
    entries: Vec<ArtifactResult>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an outcome; steps are numbered from 1 in recording order.
    pub fn record<P: AsRef<Path>>(&mut self, kind: ArtifactKind, path: P, created: bool) {
        let step = self.entries.len() + 1;
        self.entries.push(ArtifactResult {
            step,
            created,
            kind,
            path: path.as_ref().to_path_buf(),
        });
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[ArtifactResult] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn created_count(&self) -> usize {
        self.entries.iter().filter(|e| e.created).count()
    }

    /// Rows for the report table: Step, Status, Action, Type, Path
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.entries
            .iter()
            .map(|e| {
                vec![
                    e.step.to_string(),
                    e.status_glyph().to_string(),
                    e.action_label().to_string(),
                    e.kind.label().to_string(),
                    e.path.display().to_string(),
                ]
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_start_at_one_and_increase() {
        let mut ledger = Ledger::new();
        ledger.record(ArtifactKind::Directory, "/a", true);
        ledger.record(ArtifactKind::Directory, "/b", false);
        ledger.record(ArtifactKind::Controller, "/a/C.php", true);

        let steps: Vec<usize> = ledger.entries().iter().map(|e| e.step).collect();
        assert_eq!(steps, vec![1, 2, 3]);
        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.created_count(), 2);
    }

    #[test]
    fn test_rows() {
        let mut ledger = Ledger::new();
        ledger.record(ArtifactKind::Manifest, "/m/composer.json", true);
        ledger.record(ArtifactKind::Readme, "/m/README.md", false);

        let rows = ledger.rows();
        assert_eq!(rows[0], vec!["1", "✅", "Created", "Composer", "/m/composer.json"]);
        assert_eq!(rows[1], vec!["2", "⚠️", "Exists", "Readme", "/m/README.md"]);
    }

    #[test]
    fn test_empty_ledger() {
        let ledger = Ledger::new();
        assert_eq!(ledger.len(), 0);
        assert!(ledger.rows().is_empty());
    }
}

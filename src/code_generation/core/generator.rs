use std::path::{Path, PathBuf};
use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use tracing::{debug, info};

use crate::code_generation::core::ledger::{ArtifactKind, Ledger};
use crate::code_generation::language::php::context::ModuleContext;
use crate::code_generation::language::php::manifest::ComposerManifest;
use crate::code_generation::language::php::templates;
use crate::project_management::config::ModuleConfig;
use crate::shared::utils::fs::{create_dir_if_absent, write_if_absent};

/// Timestamp prefix of migration filenames
pub const MIGRATION_TIMESTAMP_FORMAT: &str = "%Y_%m_%d_%H%M%S";

/// Deterministic paths of every artifact of one module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleLayout {
    pub module_dir: PathBuf,
    name: String,
}

impl ModuleLayout {
    pub fn new<P: AsRef<Path>>(module_dir: P, name: &str) -> Self {
        Self {
            module_dir: module_dir.as_ref().to_path_buf(),
            name: name.to_string(),
        }
    }

    fn src(&self) -> PathBuf {
        self.module_dir.join("src")
    }

    fn app(&self) -> PathBuf {
        self.src().join("app")
    }

    /// Directories created by the first step, in creation order
    pub fn directories(&self) -> Vec<PathBuf> {
        let app = self.app();
        let src = self.src();
        vec![
            app.join("Http/Controllers"),
            app.join("Models"),
            app.join("Providers"),
            app.join("Console/Commands"),
            src.join("database/migrations"),
            src.join("config"),
            src.join("routes"),
        ]
    }

    pub fn controller(&self) -> PathBuf {
        self.app().join("Http/Controllers").join(format!("{}Controller.php", self.name))
    }

    pub fn model(&self) -> PathBuf {
        self.app().join("Models").join(format!("{}.php", self.name))
    }

    pub fn service_provider(&self) -> PathBuf {
        self.app().join("Providers").join(format!("{}ServiceProvider.php", self.name))
    }

    pub fn command(&self) -> PathBuf {
        self.app().join("Console/Commands").join(format!("{}.php", self.name))
    }

    pub fn migration(&self, timestamp: &str, plural_snake: &str) -> PathBuf {
        self.src()
            .join("database/migrations")
            .join(format!("{}_create_{}_table.php", timestamp, plural_snake))
    }

    pub fn config(&self, stem: &str) -> PathBuf {
        self.src().join("config").join(format!("{}.php", stem))
    }

    pub fn routes(&self) -> PathBuf {
        self.src().join("routes/api.php")
    }

    pub fn manifest(&self) -> PathBuf {
        self.module_dir.join("composer.json")
    }

    pub fn readme(&self) -> PathBuf {
        self.module_dir.join("README.md")
    }
}

/// Builds a module skeleton with create-if-absent steps
pub struct ArtifactGenerator {
    config: ModuleConfig,
    root: PathBuf,
}

impl ArtifactGenerator {
    /// `root` is the host project root that the configured base path hangs off.
    pub fn new<P: AsRef<Path>>(config: ModuleConfig, root: P) -> Self {
        Self {
            config,
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn layout(&self, name: &str) -> ModuleLayout {
        ModuleLayout::new(self.config.module_dir(&self.root, name), name)
    }

    /// Generate the module `name`, stamping the migration with the local time
    pub fn generate(&self, name: &str) -> Result<Ledger> {
        self.generate_at(name, Local::now().naive_local())
    }

    /// Generate the module `name` as of `now`.
    ///
    /// Every step checks for its own artifact and leaves existing ones alone,
    /// so running this twice never changes file contents. A failing step
    /// aborts the run; earlier artifacts stay on disk.
    pub fn generate_at(&self, name: &str, now: NaiveDateTime) -> Result<Ledger> {
        let ctx = ModuleContext::new(&self.config, name);
        let layout = self.layout(name);
        let mut ledger = Ledger::new();

        info!(module = name, path = %layout.module_dir.display(), "generating module");

        for dir in layout.directories() {
            let created = create_dir_if_absent(&dir)?;
            self.record(&mut ledger, ArtifactKind::Directory, dir, created);
        }

        self.create_file(&mut ledger, ArtifactKind::Controller, layout.controller(), templates::controller(&ctx)?)?;
        self.create_file(&mut ledger, ArtifactKind::Model, layout.model(), templates::model(&ctx)?)?;
        self.create_file(
            &mut ledger,
            ArtifactKind::ServiceProvider,
            layout.service_provider(),
            templates::service_provider(&ctx)?,
        )?;
        self.create_file(&mut ledger, ArtifactKind::Command, layout.command(), templates::command(&ctx)?)?;

        let timestamp = now.format(MIGRATION_TIMESTAMP_FORMAT).to_string();
        self.create_file(
            &mut ledger,
            ArtifactKind::Migration,
            layout.migration(&timestamp, &ctx.plural_snake),
            templates::migration(&ctx)?,
        )?;

        self.create_file(
            &mut ledger,
            ArtifactKind::Config,
            layout.config(&ctx.config_stem(&self.config)),
            templates::config(&ctx)?,
        )?;
        self.create_file(&mut ledger, ArtifactKind::Route, layout.routes(), templates::routes(&ctx)?)?;

        let manifest = ComposerManifest::new(&ctx, &self.config).to_pretty_json()?;
        self.create_file(&mut ledger, ArtifactKind::Manifest, layout.manifest(), manifest)?;
        self.create_file(
            &mut ledger,
            ArtifactKind::Readme,
            layout.readme(),
            templates::readme(&ctx, &self.config)?,
        )?;

        info!(
            module = name,
            created = ledger.created_count(),
            total = ledger.len(),
            "module generation finished"
        );

        Ok(ledger)
    }

    fn create_file(&self, ledger: &mut Ledger, kind: ArtifactKind, path: PathBuf, content: String) -> Result<()> {
        let created = write_if_absent(&path, &content)?;
        self.record(ledger, kind, path, created);
        Ok(())
    }

    fn record(&self, ledger: &mut Ledger, kind: ArtifactKind, path: PathBuf, created: bool) {
        debug!(kind = %kind, created, path = %path.display(), "artifact");
        ledger.record(kind, path, created);
    }
}

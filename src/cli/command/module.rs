use std::env;
use std::io;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgMatches, Command};
use tracing::debug;

use crate::cli::reporter::{ConsoleReporter, Reporter};
use crate::code_generation::core::action::Action;
use crate::code_generation::core::generator::ArtifactGenerator;
use crate::code_generation::core::validator::NameValidator;
use crate::project_management::catalog::{ListError, ModuleCatalog};
use crate::project_management::config::ConfigParser;

pub fn spec() -> Command {
    let version = env!("CARGO_PKG_VERSION");

    Command::new("modgen")
        .about(format!("Modgen v{} - Scaffold self-contained Laravel modules", version))
        .long_about(
            "Generate the skeleton of a self-contained Laravel module (controller, model, \
            service provider, console command, migration, config, routes, composer.json and \
            README) from a single name. Existing files are never overwritten, so the command \
            can be re-run safely.\n\
            \n\
            Actions:\n  \
            generate <Name>  Generate a new module\n  \
            list             List installed modules\n  \
            help             Show the usage guide (default)"
        )
        .version(version)
        .arg(
            Arg::new("action")
                .help("Action to run: generate, list or help")
                .value_name("ACTION")
                .required(false)
        )
        .arg(
            Arg::new("name")
                .help("Module name (required for generate)")
                .value_name("NAME")
                .required(false)
        )
        .arg(
            Arg::new("root")
                .long("root")
                .help("Project root the module paths are resolved against")
                .long_help(
                    "Project root that the configured base path and installed-modules \
                    root are resolved against. Defaults to the current directory."
                )
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf))
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Configuration file (defaults to modgen.yml under the root)")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
        )
}

pub fn action(matches: &ArgMatches) -> Result<()> {
    let root = resolve_root(matches.get_one::<PathBuf>("root").map(PathBuf::as_path))?;
    let config = ConfigParser::load(&root, matches.get_one::<PathBuf>("config").map(PathBuf::as_path))
        .context("Failed to load configuration")?;
    debug!(root = %root.display(), ?config, "resolved configuration");

    let validator = NameValidator::new()?;
    let catalog = ModuleCatalog::new(config.modules_dir(&root));
    let generator = ArtifactGenerator::new(config, &root);
    let mut reporter = ConsoleReporter::new(io::stdout().lock());

    ModuleCommand::new(&validator, &generator, &catalog, &mut reporter).run(
        matches.get_one::<String>("action").map(String::as_str),
        matches.get_one::<String>("name").map(String::as_str),
    )
}

/// Absolute project root; relative paths are taken from the current directory
fn resolve_root(root: Option<&Path>) -> Result<PathBuf> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    Ok(match root {
        Some(root) if root.is_absolute() => root.to_path_buf(),
        Some(root) => cwd.join(root),
        None => cwd,
    })
}

/// Runs one invocation: select the action, gate it, then dispatch
pub struct ModuleCommand<'a, R: Reporter> {
    validator: &'a NameValidator,
    generator: &'a ArtifactGenerator,
    catalog: &'a ModuleCatalog,
    reporter: &'a mut R,
}

impl<'a, R: Reporter> ModuleCommand<'a, R> {
    pub fn new(
        validator: &'a NameValidator,
        generator: &'a ArtifactGenerator,
        catalog: &'a ModuleCatalog,
        reporter: &'a mut R,
    ) -> Self {
        Self { validator, generator, catalog, reporter }
    }

    /// Validation and list-time problems are reported and end the run
    /// normally; only I/O failures come back as errors.
    pub fn run(&mut self, action: Option<&str>, name: Option<&str>) -> Result<()> {
        let action = Action::select(action);

        if let Err(err) = self.validator.validate(action, name) {
            debug!(%action, error = %err, "validation failed");
            return self.reporter.validation_failed(&err);
        }

        match (action, name) {
            (Action::Generate, Some(name)) => self.generate(name),
            (Action::List, _) => self.list(),
            _ => self.reporter.help(),
        }
    }

    fn generate(&mut self, name: &str) -> Result<()> {
        let ledger = self.generator
            .generate(name)
            .with_context(|| format!("Failed to generate module: {}", name))?;
        self.reporter.generation_finished(ledger)
    }

    fn list(&mut self) -> Result<()> {
        match self.catalog.installed() {
            Ok(names) => self.reporter.modules(&names),
            Err(err @ ListError::Io { .. }) => Err(err.into()),
            Err(err) => {
                debug!(root = %self.catalog.root().display(), error = %err, "nothing to list");
                self.reporter.list_failed(&err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use crate::code_generation::core::ledger::Ledger;
    use crate::code_generation::core::validator::ValidationError;
    use crate::project_management::config::ModuleConfig;

    /// Records which reporter calls happened
    #[derive(Default)]
    struct RecordingReporter {
        events: Vec<String>,
        ledger: Option<Ledger>,
    }

    impl Reporter for RecordingReporter {
        fn validation_failed(&mut self, error: &ValidationError) -> Result<()> {
            self.events.push(format!("invalid:{:?}", error));
            Ok(())
        }

        fn generation_finished(&mut self, ledger: Ledger) -> Result<()> {
            self.events.push("generated".to_string());
            self.ledger = Some(ledger);
            Ok(())
        }

        fn modules(&mut self, names: &[String]) -> Result<()> {
            self.events.push(format!("modules:{}", names.join(",")));
            Ok(())
        }

        fn list_failed(&mut self, error: &ListError) -> Result<()> {
            let tag = match error {
                ListError::NoModulesFound(_) => "not-found",
                ListError::NoModulesInstalled(_) => "empty",
                ListError::Io { .. } => "io",
            };
            self.events.push(format!("list-failed:{}", tag));
            Ok(())
        }

        fn help(&mut self) -> Result<()> {
            self.events.push("help".to_string());
            Ok(())
        }
    }

    fn run(root: &Path, action: Option<&str>, name: Option<&str>) -> RecordingReporter {
        let config = ModuleConfig::default();
        let validator = NameValidator::new().unwrap();
        let catalog = ModuleCatalog::new(config.modules_dir(root));
        let generator = ArtifactGenerator::new(config, root);
        let mut reporter = RecordingReporter::default();

        ModuleCommand::new(&validator, &generator, &catalog, &mut reporter)
            .run(action, name)
            .unwrap();
        reporter
    }

    fn is_empty_dir(path: &Path) -> bool {
        fs::read_dir(path).unwrap().next().is_none()
    }

    #[test]
    fn test_generate_reports_ledger() {
        let temp_dir = TempDir::new().unwrap();
        let reporter = run(temp_dir.path(), Some("generate"), Some("Person"));

        assert_eq!(reporter.events, vec!["generated"]);
        let ledger = reporter.ledger.unwrap();
        assert_eq!(ledger.len(), 16);
        assert_eq!(ledger.created_count(), 16);
        assert!(temp_dir.path().join("packages/Arealtime/Person/composer.json").is_file());
    }

    #[test]
    fn test_generate_without_name_does_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let reporter = run(temp_dir.path(), Some("generate"), None);

        assert_eq!(reporter.events, vec!["invalid:MissingName"]);
        assert!(is_empty_dir(temp_dir.path()));
    }

    #[test]
    fn test_generate_with_bad_name_does_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let reporter = run(temp_dir.path(), Some("generate"), Some("9lives"));

        assert_eq!(reporter.events, vec!["invalid:InvalidNameFormat(\"9lives\")"]);
        assert!(is_empty_dir(temp_dir.path()));
    }

    #[test]
    fn test_unknown_actions_show_help() {
        let temp_dir = TempDir::new().unwrap();

        for action in [None, Some("bogus"), Some("reomve"), Some("help")] {
            let reporter = run(temp_dir.path(), action, Some("Person"));
            assert_eq!(reporter.events, vec!["help"], "{:?}", action);
        }
        assert!(is_empty_dir(temp_dir.path()));
    }

    #[test]
    fn test_list_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let reporter = run(temp_dir.path(), Some("list"), None);

        assert_eq!(reporter.events, vec!["list-failed:not-found"]);
        assert!(is_empty_dir(temp_dir.path()));
    }

    #[test]
    fn test_list_empty_root() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("vendor/arealtime")).unwrap();

        let reporter = run(temp_dir.path(), Some("list"), None);
        assert_eq!(reporter.events, vec!["list-failed:empty"]);
    }

    #[test]
    fn test_list_modules() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("vendor/arealtime/blog")).unwrap();

        let reporter = run(temp_dir.path(), Some("list"), Some("Blog"));
        assert_eq!(reporter.events, vec!["modules:blog"]);
    }

    #[test]
    fn test_list_with_bad_name_stops_before_listing() {
        let temp_dir = TempDir::new().unwrap();
        let reporter = run(temp_dir.path(), Some("list"), Some("9bad"));

        assert_eq!(reporter.events, vec!["invalid:InvalidNameFormat(\"9bad\")"]);
        assert!(is_empty_dir(temp_dir.path()));
    }

    #[test]
    fn test_help_with_bad_name_reports_format() {
        let temp_dir = TempDir::new().unwrap();
        let reporter = run(temp_dir.path(), Some("help"), Some("not valid!"));

        assert_eq!(reporter.events, vec!["invalid:InvalidNameFormat(\"not valid!\")"]);
    }

    #[test]
    fn test_resolve_root() {
        let cwd = env::current_dir().unwrap();

        assert_eq!(resolve_root(None).unwrap(), cwd);
        assert_eq!(resolve_root(Some(Path::new("app"))).unwrap(), cwd.join("app"));
        assert_eq!(resolve_root(Some(Path::new("/srv/app"))).unwrap(), PathBuf::from("/srv/app"));
    }

    #[test]
    fn test_spec_parses_positionals_and_flags() {
        let matches = spec()
            .try_get_matches_from(["modgen", "--root", "/srv/app", "generate", "Person"])
            .unwrap();

        assert_eq!(matches.get_one::<String>("action").unwrap(), "generate");
        assert_eq!(matches.get_one::<String>("name").unwrap(), "Person");
        assert_eq!(matches.get_one::<PathBuf>("root").unwrap(), &PathBuf::from("/srv/app"));
    }

    #[test]
    fn test_spec_accepts_no_arguments() {
        let matches = spec().try_get_matches_from(["modgen"]).unwrap();

        assert!(matches.get_one::<String>("action").is_none());
        assert!(matches.get_one::<String>("name").is_none());
    }
}

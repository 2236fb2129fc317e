use crate::project_management::config::ModuleConfig;
use crate::shared::utils::naming;

/// Names derived once from a module name and shared by every artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleContext {
    pub name: String,
    pub vendor: String,
    pub snake: String,
    pub kebab: String,
    pub plural_snake: String,
    /// `<prefix>/<kebab>`
    pub package: String,
    /// `<prefix>:<snake>`
    pub command_signature: String,
    /// `<vendor>\<Name>\App`
    pub app_namespace: String,
}

impl ModuleContext {
    pub fn new(config: &ModuleConfig, name: &str) -> Self {
        let snake = naming::snake(name);
        let kebab = naming::kebab(name);
        let plural_snake = naming::plural_snake(&snake);

        Self {
            name: name.to_string(),
            vendor: config.vendor.clone(),
            package: format!("{}/{}", config.package_prefix, kebab),
            command_signature: format!("{}:{}", config.package_prefix, snake),
            app_namespace: format!("{}\\{}\\App", config.vendor, name),
            snake,
            kebab,
            plural_snake,
        }
    }

    /// Namespace below `App`, e.g. `sub_namespace("Http\\Controllers")`
    pub fn sub_namespace(&self, segment: &str) -> String {
        format!("{}\\{}", self.app_namespace, segment)
    }

    /// Fully-qualified name of the generated service provider
    pub fn provider_class(&self) -> String {
        format!("{}\\Providers\\{}ServiceProvider", self.app_namespace, self.name)
    }

    /// Migration class suffix, e.g. `People` for `Person`
    pub fn migration_class_plural(&self) -> String {
        naming::pascal(&self.plural_snake)
    }

    /// `https://github.com/<prefix>/<kebab>`
    pub fn homepage(&self, config: &ModuleConfig) -> String {
        format!("https://github.com/{}/{}", config.package_prefix, self.kebab)
    }

    /// Config filename stem: `<prefix>-<name>` lowercased
    pub fn config_stem(&self, config: &ModuleConfig) -> String {
        format!("{}-{}", config.package_prefix, self.name).to_lowercase()
    }
}

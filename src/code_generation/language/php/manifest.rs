use std::collections::BTreeMap;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::project_management::config::ModuleConfig;
use super::context::ModuleContext;

/// composer.json for a generated module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposerManifest {
    pub name: String,
    pub description: String,
    pub version: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub license: String,
    pub keywords: Vec<String>,
    pub autoload: Autoload,
    pub authors: Vec<ManifestAuthor>,
    pub require: BTreeMap<String, String>,
    #[serde(rename = "minimum-stability")]
    pub minimum_stability: String,
    #[serde(rename = "prefer-stable")]
    pub prefer_stable: bool,
    pub homepage: String,
    pub repositories: Vec<Repository>,
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Autoload {
    #[serde(rename = "psr-4")]
    pub psr4: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestAuthor {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extra {
    pub laravel: LaravelExtra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaravelExtra {
    pub providers: Vec<String>,
}

impl ComposerManifest {
    pub fn new(ctx: &ModuleContext, config: &ModuleConfig) -> Self {
        let homepage = ctx.homepage(config);

        Self {
            name: ctx.package.clone(),
            description: String::new(),
            version: "1.0.0".to_string(),
            kind: "module".to_string(),
            license: "MIT".to_string(),
            keywords: config.keywords.clone(),
            autoload: Autoload {
                psr4: BTreeMap::from([(format!("{}\\", ctx.app_namespace), "src/app/".to_string())]),
            },
            authors: vec![ManifestAuthor {
                name: config.author.name.clone(),
                email: config.author.email.clone(),
            }],
            require: BTreeMap::from([("php".to_string(), config.php_version.clone())]),
            minimum_stability: "dev".to_string(),
            prefer_stable: true,
            repositories: vec![Repository {
                kind: "vcs".to_string(),
                url: homepage.clone(),
            }],
            homepage,
            extra: Extra {
                laravel: LaravelExtra {
                    providers: vec![ctx.provider_class()],
                },
            },
        }
    }

    /// Pretty JSON with 4-space indentation; `/` is left unescaped.
    pub fn to_pretty_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)
            .context("Failed to serialize composer.json")?;

        String::from_utf8(buf).context("composer.json is not valid UTF-8")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn person_manifest() -> ComposerManifest {
        let config = ModuleConfig::default();
        let ctx = ModuleContext::new(&config, "Person");
        ComposerManifest::new(&ctx, &config)
    }

    #[test]
    fn test_manifest_fields() {
        let json = person_manifest().to_pretty_json().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["name"], "arealtime/person");
        assert_eq!(value["version"], "1.0.0");
        assert_eq!(value["type"], "module");
        assert_eq!(value["license"], "MIT");
        assert_eq!(value["autoload"]["psr-4"]["Arealtime\\Person\\App\\"], "src/app/");
        assert_eq!(value["require"]["php"], "^8.3");
        assert_eq!(value["minimum-stability"], "dev");
        assert_eq!(value["prefer-stable"], true);
        assert_eq!(value["homepage"], "https://github.com/arealtime/person");
        assert_eq!(value["repositories"][0]["type"], "vcs");
        assert_eq!(value["repositories"][0]["url"], "https://github.com/arealtime/person");
        assert_eq!(
            value["extra"]["laravel"]["providers"],
            serde_json::json!(["Arealtime\\Person\\App\\Providers\\PersonServiceProvider"])
        );
    }

    #[test]
    fn test_pretty_format() {
        let json = person_manifest().to_pretty_json().unwrap();

        assert!(json.starts_with("{\n    \"name\": \"arealtime/person\",\n    \"description\": \"\",\n"));
        assert!(json.contains("\"homepage\": \"https://github.com/arealtime/person\""));
        assert!(!json.contains("\\/"));
    }

    #[test]
    fn test_round_trip() {
        let manifest = person_manifest();
        let parsed: ComposerManifest =
            serde_json::from_str(&manifest.to_pretty_json().unwrap()).unwrap();
        assert_eq!(parsed, manifest);
    }
}

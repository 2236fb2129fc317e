use anyhow::{Context, Result};
use askama::Template;

use crate::project_management::config::ModuleConfig;
use super::context::ModuleContext;

#[derive(Template)]
#[template(path = "php/controller.php", escape = "none")]
pub struct ControllerTemplate<'a> {
    pub namespace: &'a str,
    pub name: &'a str,
}

#[derive(Template)]
#[template(path = "php/model.php", escape = "none")]
pub struct ModelTemplate<'a> {
    pub namespace: &'a str,
    pub name: &'a str,
}

#[derive(Template)]
#[template(path = "php/service_provider.php", escape = "none")]
pub struct ServiceProviderTemplate<'a> {
    pub namespace: &'a str,
    pub name: &'a str,
}

#[derive(Template)]
#[template(path = "php/command.php", escape = "none")]
pub struct CommandTemplate<'a> {
    pub namespace: &'a str,
    pub name: &'a str,
    pub signature: &'a str,
}

#[derive(Template)]
#[template(path = "php/migration.php", escape = "none")]
pub struct MigrationTemplate<'a> {
    pub class_plural: &'a str,
    pub table: &'a str,
}

#[derive(Template)]
#[template(path = "php/config.php", escape = "none")]
pub struct ConfigTemplate<'a> {
    pub name: &'a str,
}

#[derive(Template)]
#[template(path = "php/routes.php", escape = "none")]
pub struct RoutesTemplate<'a> {
    pub name: &'a str,
}

#[derive(Template)]
#[template(path = "php/README.md", escape = "none")]
pub struct ReadmeTemplate<'a> {
    pub name: &'a str,
    pub vendor: &'a str,
    pub kebab: &'a str,
    pub package: &'a str,
    pub author_name: &'a str,
    pub author_email: &'a str,
    pub author_github: &'a str,
}

/// Render a template, making sure the output ends with a newline
pub fn render<T: Template>(template: &T) -> Result<String> {
    let mut output = template.render().context("Failed to render template")?;
    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}

pub fn controller(ctx: &ModuleContext) -> Result<String> {
    render(&ControllerTemplate {
        namespace: &ctx.sub_namespace("Http\\Controllers"),
        name: &ctx.name,
    })
}

pub fn model(ctx: &ModuleContext) -> Result<String> {
    render(&ModelTemplate {
        namespace: &ctx.sub_namespace("Models"),
        name: &ctx.name,
    })
}

pub fn service_provider(ctx: &ModuleContext) -> Result<String> {
    render(&ServiceProviderTemplate {
        namespace: &ctx.sub_namespace("Providers"),
        name: &ctx.name,
    })
}

pub fn command(ctx: &ModuleContext) -> Result<String> {
    render(&CommandTemplate {
        namespace: &ctx.sub_namespace("Console\\Commands"),
        name: &ctx.name,
        signature: &ctx.command_signature,
    })
}

pub fn migration(ctx: &ModuleContext) -> Result<String> {
    render(&MigrationTemplate {
        class_plural: &ctx.migration_class_plural(),
        table: &ctx.plural_snake,
    })
}

pub fn config(ctx: &ModuleContext) -> Result<String> {
    render(&ConfigTemplate { name: &ctx.name })
}

pub fn routes(ctx: &ModuleContext) -> Result<String> {
    render(&RoutesTemplate { name: &ctx.name })
}

pub fn readme(ctx: &ModuleContext, config: &ModuleConfig) -> Result<String> {
    render(&ReadmeTemplate {
        name: &ctx.name,
        vendor: &ctx.vendor,
        kebab: &ctx.kebab,
        package: &ctx.package,
        author_name: &config.author.name,
        author_email: &config.author.email,
        author_github: &config.author.github,
    })
}

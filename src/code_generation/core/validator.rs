use anyhow::{Context, Result};
use regex::Regex;
use thiserror::Error;

use super::action::Action;

/// Module names start with a letter followed by letters, digits or underscores.
pub const MODULE_NAME_PATTERN: &str = r"^[A-Za-z][A-Za-z0-9_]*$";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("You must provide a module name for generation")]
    MissingName,
    #[error("Module name must be alphanumeric and start with a letter: {0}")]
    InvalidNameFormat(String),
}

/// Gate in front of the generation pipeline
pub struct NameValidator {
    pattern: Regex,
}

impl NameValidator {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(MODULE_NAME_PATTERN)
            .context("Failed to create regex for module name validation")?;
        Ok(Self { pattern })
    }

    /// Decide whether `action` may run with `name`.
    ///
    /// A name is only required by actions that need one, but any non-empty
    /// name must match the module-name format whatever the action.
    pub fn validate(&self, action: Action, name: Option<&str>) -> Result<(), ValidationError> {
        match name {
            None | Some("") if action.requires_name() => Err(ValidationError::MissingName),
            Some(name) if !name.is_empty() && !self.is_valid_name(name) => {
                Err(ValidationError::InvalidNameFormat(name.to_string()))
            }
            _ => Ok(()),
        }
    }

    pub fn is_valid_name(&self, name: &str) -> bool {
        self.pattern.is_match(name)
    }
}

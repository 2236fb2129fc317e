use std::io::Write;
use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};

use crate::code_generation::core::ledger::Ledger;
use crate::code_generation::core::validator::ValidationError;
use crate::project_management::catalog::ListError;
use crate::shared::utils::table::{self, display_width};

pub const REPORT_HEADERS: [&str; 5] = ["Step", "Status", "Action", "Type", "Path"];

/// Everything the command shows to the user goes through here
pub trait Reporter {
    fn validation_failed(&mut self, error: &ValidationError) -> Result<()>;
    /// Takes the ledger by value; it is not used after reporting.
    fn generation_finished(&mut self, ledger: Ledger) -> Result<()>;
    fn modules(&mut self, names: &[String]) -> Result<()>;
    fn list_failed(&mut self, error: &ListError) -> Result<()>;
    fn help(&mut self) -> Result<()>;
}

type Paint = fn(&str) -> ColoredString;

struct Line {
    text: String,
    paint: Paint,
}

impl Line {
    fn new(text: impl Into<String>, paint: Paint) -> Self {
        Self { text: text.into(), paint }
    }

    fn blank() -> Self {
        Self::new("", plain)
    }
}

fn plain(s: &str) -> ColoredString {
    s.normal()
}

/// Renders reports as text on any writer
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text).context("Failed to write output")
    }

    fn framed(&mut self, lines: &[Line]) -> Result<()> {
        let width = lines.iter().map(|l| display_width(&l.text)).max().unwrap_or(0) + 4;
        let border = "─".repeat(width);

        let mut rendered = Vec::with_capacity(lines.len() + 2);
        rendered.push(format!("╔{}╗", border));
        for line in lines {
            let pad = width - 2 - display_width(&line.text);
            rendered.push(format!("│  {}{}│", (line.paint)(&line.text), " ".repeat(pad)));
        }
        rendered.push(format!("╚{}╝", border));

        self.emit(&rendered.join("\n"))
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn validation_failed(&mut self, error: &ValidationError) -> Result<()> {
        let lines = match error {
            ValidationError::MissingName => vec![
                Line::blank(),
                Line::new("❌ Error: You must provide a module name for generation", |s| s.white().on_red().bold()),
                Line::blank(),
                Line::new("🛠  Usage: modgen generate {ModuleName}", |s| s.cyan().bold()),
                Line::new("📦 Example: modgen generate Person", |s| s.cyan().bold()),
                Line::blank(),
                Line::new("❓ For more information, run: modgen help", |s| s.yellow().bold()),
                Line::blank(),
            ],
            ValidationError::InvalidNameFormat(_) => vec![
                Line::blank(),
                Line::new(
                    "❌ Error: Module name must be alphanumeric and start with a letter",
                    |s| s.white().on_red().bold(),
                ),
                Line::blank(),
                Line::new("📦 Example: modgen generate Person", |s| s.cyan().bold()),
                Line::blank(),
            ],
        };
        self.framed(&lines)
    }

    fn generation_finished(&mut self, ledger: Ledger) -> Result<()> {
        let table = table::render(&REPORT_HEADERS, &ledger.rows());
        self.emit(&table)?;
        self.emit("🎉 Module structure generated successfully!")
    }

    fn modules(&mut self, names: &[String]) -> Result<()> {
        let mut lines = vec![
            Line::blank(),
            Line::new("📦 Available Modules", |s| s.green().bold().underline()),
            Line::blank(),
        ];
        lines.extend(names.iter().map(|name| Line::new(format!("📁 {}", name), |s| s.white().bold())));
        lines.push(Line::blank());
        self.framed(&lines)
    }

    fn list_failed(&mut self, error: &ListError) -> Result<()> {
        match error {
            ListError::NoModulesFound(path) => {
                let message = format!("❌ No modules found in {}.", path.display());
                self.emit(&message.as_str().red().to_string())
            }
            ListError::NoModulesInstalled(_) => self.emit(&"ℹ️ No modules found.".blue().to_string()),
            ListError::Io { .. } => {
                let message = format!("❌ {}", error);
                self.emit(&message.as_str().red().to_string())
            }
        }
    }

    fn help(&mut self) -> Result<()> {
        let version = env!("CARGO_PKG_VERSION");
        let lines = vec![
            Line::blank(),
            Line::new(format!("📚 Module Generator v{} — Command Usage Guide", version), |s| {
                s.green().bold().underline()
            }),
            Line::blank(),
            Line::new("🛠  Usage: modgen {action} {name?}", |s| s.cyan().bold()),
            Line::blank(),
            Line::new("📝 Available actions:", |s| s.white().bold()),
            Line::new("  - ⚙️  generate: Generate a new module with the provided name.", |s| s.magenta()),
            Line::new("  - 📄 list: List all the available modules.", |s| s.magenta()),
            Line::new("  - ❓ help: Display this help message.", |s| s.magenta()),
            Line::blank(),
            Line::new("💻 Command                       📝 Description", |s| s.white().bold()),
            Line::new("modgen generate `ModuleName`     Generate a new module.", |s| s.blue()),
            Line::new("modgen list                      List all available modules.", |s| s.blue()),
            Line::new("modgen help                      Display this help message.", |s| s.blue()),
            Line::blank(),
        ];
        self.framed(&lines)
    }
}

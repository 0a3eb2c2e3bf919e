//! Renderer module
//!
//! Renders a Report to different output formats: text, jsonl, json, md

use colored::Colorize;
use std::io::Write;

use crate::core::model::Report;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Jsonl,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    /// Create a new render config with default options
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Banner printed before the lookups start (text format only)
pub fn render_banner(total: usize, collection: &str) -> String {
    format!(
        "Checking {} applications for {} icons...\n",
        total,
        collection.to_uppercase()
    )
    .cyan()
    .to_string()
}

/// Renderer for reports
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            config: RenderConfig::new(format),
        }
    }

    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a report to a string
    pub fn render(&self, report: &Report) -> String {
        match self.config.format {
            OutputFormat::Text => self.render_text(report),
            OutputFormat::Jsonl => self.render_jsonl(report),
            OutputFormat::Json => self.render_json(report),
            OutputFormat::Markdown => self.render_markdown(report),
        }
    }

    /// Render to a writer
    pub fn render_to<W: Write>(&self, report: &Report, mut writer: W) -> std::io::Result<()> {
        let output = self.render(report);
        writer.write_all(output.as_bytes())?;
        if !output.is_empty() && !output.ends_with('\n') {
            writer.write_all(b"\n")?;
        }
        Ok(())
    }

    fn render_text(&self, report: &Report) -> String {
        let label = report.collection.to_uppercase();
        let mut output = String::new();

        output.push_str(&format!("\n{}\n", "📊 Summary".bold()));
        output.push_str(&format!("Total applications: {}\n", report.total));
        output.push_str(&format!(
            "{}\n",
            format!("✅ Found {} icons: {}", label, report.found_count).green()
        ));
        output.push_str(&format!(
            "{}\n",
            format!("❌ Not found: {}", report.not_found_count).red()
        ));
        if let Some(failed) = report.check_failed_count {
            output.push_str(&format!(
                "{}\n",
                format!("⚠️  Could not check: {}", failed).yellow()
            ));
        }

        if !report.found.is_empty() {
            output.push_str(&format!(
                "\n{}\n",
                format!("✅ Applications WITH {} icons:", label).bold().green()
            ));

            let app_width = report
                .found
                .iter()
                .map(|f| f.app.chars().count())
                .chain(std::iter::once("Application".len()))
                .max()
                .unwrap_or_default();
            let icon_width = report
                .found
                .iter()
                .map(|f| f.icon.chars().count())
                .chain(std::iter::once("Icon".len()))
                .max()
                .unwrap_or_default();

            output.push_str(&format!(
                "{}  {}\n",
                format!("{:<app_width$}", "Application").bold().green(),
                format!("{:<icon_width$}", "Icon").bold().green()
            ));
            output.push_str(&format!(
                "{}  {}\n",
                "─".repeat(app_width),
                "─".repeat(icon_width)
            ));
            for found in &report.found {
                output.push_str(&format!(
                    "{}  {}\n",
                    format!("{:<app_width$}", found.app).cyan(),
                    found.icon.green()
                ));
            }
        }

        if !report.not_found.is_empty() {
            output.push_str(&format!(
                "\n{}\n",
                format!("❌ Applications WITHOUT {} icons:", label)
                    .bold()
                    .red()
            ));
            for app in &report.not_found {
                output.push_str(&format!("  • {}\n", app));
            }
        }

        if !report.check_failed.is_empty() {
            output.push_str(&format!(
                "\n{}\n",
                "⚠️  Applications that could not be checked:".bold().yellow()
            ));
            for failed in &report.check_failed {
                output.push_str(&format!("  • {} ({})\n", failed.app, failed.reason));
            }
        }

        output
    }

    /// Render as JSON Lines (one record per application)
    fn render_jsonl(&self, report: &Report) -> String {
        report
            .records()
            .iter()
            .filter_map(|record| {
                if self.config.pretty {
                    serde_json::to_string_pretty(record).ok()
                } else {
                    serde_json::to_string(record).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render the whole report as a single JSON object
    fn render_json(&self, report: &Report) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(report).unwrap_or_else(|_| "{}".to_string())
        }
    }

    fn render_markdown(&self, report: &Report) -> String {
        let label = report.collection.to_uppercase();
        let mut output = String::new();

        output.push_str("## Summary\n\n");
        output.push_str(&format!("- Total applications: {}\n", report.total));
        output.push_str(&format!("- Found {} icons: {}\n", label, report.found_count));
        output.push_str(&format!("- Not found: {}\n", report.not_found_count));
        if let Some(failed) = report.check_failed_count {
            output.push_str(&format!("- Could not check: {}\n", failed));
        }
        output.push('\n');

        if !report.found.is_empty() {
            output.push_str(&format!("## Applications with {} icons\n\n", label));
            output.push_str("| Application | Icon |\n");
            output.push_str("|---|---|\n");
            for found in &report.found {
                output.push_str(&format!("| `{}` | `{}` |\n", found.app, found.icon));
            }
            output.push('\n');
        }

        if !report.not_found.is_empty() {
            output.push_str(&format!("## Applications without {} icons\n\n", label));
            for app in &report.not_found {
                output.push_str(&format!("- `{}`\n", app));
            }
            output.push('\n');
        }

        if !report.check_failed.is_empty() {
            output.push_str("## Applications that could not be checked\n\n");
            for failed in &report.check_failed {
                output.push_str(&format!("- `{}`: {}\n", failed.app, failed.reason));
            }
            output.push('\n');
        }

        output
    }
}

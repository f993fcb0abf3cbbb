//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use byline_domain::EntryOutcome;
use byline_harness::RunReport;
use colored::*;
use serde_json;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the end-of-run report.
    pub fn format_report(&self, report: &RunReport) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(report.summary()),
            OutputFormat::Json => self.format_report_json(report),
        }
    }

    fn format_report_json(&self, report: &RunReport) -> Result<String> {
        let skipped: Vec<serde_json::Value> = report
            .skipped()
            .map(|(url, outcome)| {
                serde_json::json!({
                    "url": url,
                    "reason": outcome.label(),
                })
            })
            .collect();

        let value = serde_json::json!({
            "duration_secs": report.duration.as_secs_f64(),
            "n_document": report.n_document(),
            "n_correct": report.n_correct(),
            "percentage": report.accuracy(),
            "skipped": skipped,
        });

        Ok(serde_json::to_string_pretty(&value)?)
    }

    /// Format evaluated entries that did not match as a table.
    pub fn format_failures(&self, report: &RunReport) -> String {
        let mut builder = Builder::default();
        builder.push_record(["URL", "Outcome", "Expected", "Actual"]);

        let mut rows = 0;
        for (url, outcome) in report.failures() {
            let (expected, actual) = match outcome {
                EntryOutcome::Mismatched { expected, actual } => (expected.as_str(), actual.as_str()),
                EntryOutcome::ExtractionFailed { expected } => (expected.as_str(), "-"),
                _ => continue,
            };
            builder.push_record([url, outcome.label(), expected, actual]);
            rows += 1;
        }

        if rows == 0 {
            return self.colorize("No failures.", "green");
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

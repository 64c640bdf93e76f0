//! Output formatting for halving reports

use crate::error::{ErrorCode, ListFoldError};
use crate::halving::HalvingReport;
use serde_json::json;
use std::fmt::Write;
use std::str::FromStr;

/// Format type for output presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text format
    #[default]
    Text,
    /// JSON format
    Json,
    /// Pretty-printed JSON
    JsonPretty,
    /// CSV format
    Csv,
    /// Markdown table format
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = ListFoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "json-pretty" => Ok(Self::JsonPretty),
            "csv" => Ok(Self::Csv),
            "markdown" | "md" => Ok(Self::Markdown),
            other => Err(ListFoldError::validation_with_code(
                ErrorCode::VALIDATION_INVALID_FORMAT,
                format!("unknown output format '{other}'"),
                Some("format".to_string()),
            )),
        }
    }
}

/// Renders a [`HalvingReport`] in the configured format
pub struct ReportFormatter {
    format: OutputFormat,
}

impl ReportFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self, report: &HalvingReport) -> String {
        match self.format {
            OutputFormat::Text => self.format_text(report),
            OutputFormat::Json => self.format_json(report),
            OutputFormat::JsonPretty => self.format_json_pretty(report),
            OutputFormat::Csv => self.format_csv(report),
            OutputFormat::Markdown => self.format_markdown(report),
        }
    }

    fn format_text(&self, report: &HalvingReport) -> String {
        let mut output = String::new();

        writeln!(
            &mut output,
            "Steps in the iteration of halved quantities: {}",
            join_values(&report.steps)
        )
        .unwrap();
        writeln!(
            &mut output,
            "Series of sequentially halved quantities: {}",
            join_values(&report.quantities)
        )
        .unwrap();

        output
    }

    fn format_json(&self, report: &HalvingReport) -> String {
        json!({ "steps": report.steps, "quantities": report.quantities }).to_string()
    }

    fn format_json_pretty(&self, report: &HalvingReport) -> String {
        let output = json!({ "steps": report.steps, "quantities": report.quantities });
        serde_json::to_string_pretty(&output).unwrap_or_else(|_| output.to_string())
    }

    fn format_csv(&self, report: &HalvingReport) -> String {
        let mut output = String::from("step,quantity\n");
        for (step, quantity) in report.rows() {
            writeln!(&mut output, "{step},{quantity}").unwrap();
        }
        output
    }

    fn format_markdown(&self, report: &HalvingReport) -> String {
        let mut output = String::new();

        writeln!(&mut output, "## Sequentially halved quantities\n").unwrap();
        writeln!(&mut output, "| Step | Quantity |").unwrap();
        writeln!(&mut output, "|------|----------|").unwrap();
        for (step, quantity) in report.rows() {
            writeln!(&mut output, "| {step} | {quantity} |").unwrap();
        }

        output
    }
}

fn join_values(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}

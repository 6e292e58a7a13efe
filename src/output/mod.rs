//! Output formatting and writing functionality

mod formatters;
mod progress;
mod writers;

pub use self::formatters::{escape_markdown, AGGREGATED_HEADERS, FLAT_HEADERS};
pub use self::progress::{create_progress_callback, ProgressReporter};
pub use self::writers::{create_writer, FileWriter, OutputWriter, StdoutWriter};

use crate::error::Result;
use crate::models::config::OutputFormat;
use crate::models::dependency::{AggregatedDependencyRecord, FlatDependencyRecord};

/// Renders flat or aggregated records into one output format
pub trait Formatter {
    /// Render one record per declared dependency
    fn format_flat(&self, records: &[FlatDependencyRecord]) -> Result<String>;

    /// Render one record per (name, category, packaging) group
    fn format_aggregated(&self, records: &[AggregatedDependencyRecord]) -> Result<String>;
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_flat(&self, records: &[FlatDependencyRecord]) -> Result<String> {
        formatters::format_json(records)
    }

    fn format_aggregated(&self, records: &[AggregatedDependencyRecord]) -> Result<String> {
        formatters::format_json(records)
    }
}

/// CSV formatter for spreadsheet analysis
pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format_flat(&self, records: &[FlatDependencyRecord]) -> Result<String> {
        formatters::format_flat_csv(records)
    }

    fn format_aggregated(&self, records: &[AggregatedDependencyRecord]) -> Result<String> {
        formatters::format_aggregated_csv(records)
    }
}

/// Markdown table formatter
pub struct MarkdownFormatter;

impl Formatter for MarkdownFormatter {
    fn format_flat(&self, records: &[FlatDependencyRecord]) -> Result<String> {
        Ok(formatters::format_flat_markdown(records))
    }

    fn format_aggregated(&self, records: &[AggregatedDependencyRecord]) -> Result<String> {
        Ok(formatters::format_aggregated_markdown(records))
    }
}

/// Create a formatter based on the output format
pub fn create_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
        OutputFormat::Md => Box::new(MarkdownFormatter),
    }
}

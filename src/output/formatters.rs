//! Record rendering for JSON, CSV and Markdown

use crate::error::Result;
use crate::models::dependency::{AggregatedDependencyRecord, FlatDependencyRecord};
use serde::Serialize;

pub const FLAT_HEADERS: [&str; 5] = ["Name", "Version", "Category", "Path", "Packaging"];

pub const AGGREGATED_HEADERS: [&str; 6] = [
    "Name",
    "MinVersion",
    "MaxVersion",
    "Count",
    "Category",
    "Packaging",
];

fn flat_row(record: &FlatDependencyRecord) -> [String; 5] {
    [
        record.name.clone(),
        record.version.clone(),
        record.category.clone(),
        record.path.clone(),
        record.packaging.clone(),
    ]
}

fn aggregated_row(record: &AggregatedDependencyRecord) -> [String; 6] {
    [
        record.name.clone(),
        record.min_version.clone(),
        record.max_version.clone(),
        record.count.to_string(),
        record.category.clone(),
        record.packaging.clone(),
    ]
}

/// Pretty-printed JSON array with two-space indentation
pub fn format_json<T: Serialize>(records: &[T]) -> Result<String> {
    let mut output = serde_json::to_string_pretty(records)?;
    output.push('\n');
    Ok(output)
}

pub fn format_flat_csv(records: &[FlatDependencyRecord]) -> Result<String> {
    format_csv(&FLAT_HEADERS, records.iter().map(flat_row))
}

pub fn format_aggregated_csv(records: &[AggregatedDependencyRecord]) -> Result<String> {
    format_csv(&AGGREGATED_HEADERS, records.iter().map(aggregated_row))
}

fn format_csv<R, I>(headers: &[&str], rows: I) -> Result<String>
where
    R: AsRef<[String]>,
    I: Iterator<Item = R>,
{
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row.as_ref())?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| crate::error::ScanError::io_error(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

pub fn format_flat_markdown(records: &[FlatDependencyRecord]) -> String {
    format_markdown(&FLAT_HEADERS, records.iter().map(flat_row))
}

pub fn format_aggregated_markdown(records: &[AggregatedDependencyRecord]) -> String {
    format_markdown(&AGGREGATED_HEADERS, records.iter().map(aggregated_row))
}

fn format_markdown<R, I>(headers: &[&str], rows: I) -> String
where
    R: AsRef<[String]>,
    I: Iterator<Item = R>,
{
    let mut output = String::new();

    output.push_str(&markdown_line(headers.iter().map(|h| h.to_string())));
    output.push_str(&markdown_line(headers.iter().map(|h| "-".repeat(h.len()))));

    for row in rows {
        output.push_str(&markdown_line(row.as_ref().iter().map(|cell| escape_markdown(cell))));
    }

    output
}

fn markdown_line(cells: impl Iterator<Item = String>) -> String {
    let cells: Vec<String> = cells.collect();
    format!("| {} |\n", cells.join(" | "))
}

/// Escape pipe characters so a value cannot break the table layout
pub fn escape_markdown(value: &str) -> String {
    value.replace('|', "\\|")
}

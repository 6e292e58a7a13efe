use std::fs;
use tempfile::tempdir;
use depwalker::{
    error::Result,
    models::config::OutputFormat,
    models::dependency::{AggregatedDependencyRecord, FlatDependencyRecord},
    output::{create_formatter, create_writer},
};

fn flat_records() -> Vec<FlatDependencyRecord> {
    vec![FlatDependencyRecord {
        name: "requests".to_string(),
        version: "2.31.0".to_string(),
        category: "prod".to_string(),
        path: "/srv/app/requirements.txt".to_string(),
        packaging: "python".to_string(),
    }]
}

fn aggregated_records() -> Vec<AggregatedDependencyRecord> {
    vec![AggregatedDependencyRecord {
        name: "requests".to_string(),
        min_version: "2.28.0".to_string(),
        max_version: "2.31.0".to_string(),
        count: 3,
        category: "prod".to_string(),
        packaging: "python".to_string(),
    }]
}

#[test]
fn test_flat_output_in_every_format() -> Result<()> {
    let json = create_formatter(OutputFormat::Json).format_flat(&flat_records())?;
    let parsed: serde_json::Value = serde_json::from_str(&json)?;
    assert_eq!(parsed[0]["Name"], "requests");
    assert_eq!(parsed[0]["Packaging"], "python");

    let csv = create_formatter(OutputFormat::Csv).format_flat(&flat_records())?;
    assert_eq!(
        csv,
        "Name,Version,Category,Path,Packaging\nrequests,2.31.0,prod,/srv/app/requirements.txt,python\n"
    );

    let md = create_formatter(OutputFormat::Md).format_flat(&flat_records())?;
    let lines: Vec<&str> = md.lines().collect();
    assert_eq!(lines[0], "| Name | Version | Category | Path | Packaging |");
    assert_eq!(lines[2], "| requests | 2.31.0 | prod | /srv/app/requirements.txt | python |");
    Ok(())
}

#[test]
fn test_aggregated_output_in_every_format() -> Result<()> {
    let json = create_formatter(OutputFormat::Json).format_aggregated(&aggregated_records())?;
    let parsed: serde_json::Value = serde_json::from_str(&json)?;
    assert_eq!(parsed[0]["MinVersion"], "2.28.0");
    assert_eq!(parsed[0]["Count"], 3);

    let csv = create_formatter(OutputFormat::Csv).format_aggregated(&aggregated_records())?;
    assert_eq!(
        csv,
        "Name,MinVersion,MaxVersion,Count,Category,Packaging\nrequests,2.28.0,2.31.0,3,prod,python\n"
    );

    let md = create_formatter(OutputFormat::Md).format_aggregated(&aggregated_records())?;
    assert!(md.contains("| requests | 2.28.0 | 2.31.0 | 3 | prod | python |"));
    Ok(())
}

#[test]
fn test_empty_results_render_headers_only() -> Result<()> {
    let csv = create_formatter(OutputFormat::Csv).format_flat(&[])?;
    assert_eq!(csv, "Name,Version,Category,Path,Packaging\n");

    let json = create_formatter(OutputFormat::Json).format_aggregated(&[])?;
    assert_eq!(json.trim(), "[]");
    Ok(())
}

#[test]
fn test_write_to_file() -> Result<()> {
    let temp_dir = tempdir()?;
    let output_path = temp_dir.path().join("deps.csv");

    let rendered = create_formatter(OutputFormat::Csv).format_flat(&flat_records())?;
    create_writer(Some(&output_path)).write(&rendered)?;

    assert_eq!(fs::read_to_string(&output_path)?, rendered);
    Ok(())
}

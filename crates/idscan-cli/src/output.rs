//! Output formatting for extraction results.

use idscan_core::{BatchReport, ExtractionRecord, FileOutcome};

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

const CSV_HEADER: [&str; 8] = [
    "filename",
    "status",
    "name",
    "date_of_birth",
    "age",
    "gender",
    "document_type",
    "error",
];

/// Format a whole batch report.
pub fn format_report(report: &BatchReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Csv => format_csv(&report.results),
        OutputFormat::Text => Ok(format_report_text(report)),
    }
}

/// Format a single record.
pub fn format_record(record: &ExtractionRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Csv => format_csv(&[FileOutcome::succeeded("", record.clone())]),
        OutputFormat::Text => Ok(format_record_text(record)),
    }
}

fn format_csv(outcomes: &[FileOutcome]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(CSV_HEADER)?;

    for outcome in outcomes {
        match &outcome.data {
            Some(record) => wtr.write_record([
                outcome.filename.as_str(),
                "success",
                &record.name,
                &record.date_of_birth,
                &record.age.map(|a| a.to_string()).unwrap_or_default(),
                record.gender.as_str(),
                record.document_type.as_str(),
                "",
            ])?,
            None => wtr.write_record([
                outcome.filename.as_str(),
                "error",
                "",
                "",
                "",
                "",
                "",
                outcome.error.as_deref().unwrap_or(""),
            ])?,
        }
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_record_text(record: &ExtractionRecord) -> String {
    let mut output = String::new();

    output.push_str(&format!("Document: {}\n", record.document_type));
    output.push_str(&format!("Name:     {}\n", record.name));
    output.push_str(&format!("DOB:      {}\n", record.date_of_birth));
    if let Some(age) = record.age {
        output.push_str(&format!("Age:      {}\n", age));
    }
    if !record.gender.as_str().is_empty() {
        output.push_str(&format!("Gender:   {}\n", record.gender));
    }

    output
}

fn format_report_text(report: &BatchReport) -> String {
    let mut output = String::new();

    for outcome in &report.results {
        output.push_str(&format!("== {}\n", outcome.filename));
        match (&outcome.data, &outcome.error) {
            (Some(record), _) => output.push_str(&format_record_text(record)),
            (None, Some(error)) => output.push_str(&format!("Error:    {}\n", error)),
            (None, None) => {}
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "Total: {}, successful: {}, failed: {}\n",
        report.summary.total, report.summary.successful, report.summary.failed
    ));

    output
}

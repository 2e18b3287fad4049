use super::domain::{display_date, ComplaintRecord};
use super::filter::FilterState;
use chrono::NaiveDateTime;

pub const REPORT_TITLE: &str = "Complaint Report";
pub const REPORT_FILE_NAME: &str = "Complaint Report.csv";
pub const REPORT_CONTENT_TYPE: &str = "text/csv";
pub const HEADER: [&str; 5] = ["Complaint Type", "Location", "Status", "Date", "Details"];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to encode report row: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("report is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// A rendered CSV report ready to be handed to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    pub file_name: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

impl ReportDocument {
    /// Number of complaint rows, excluding the preamble and header.
    pub fn row_count(&self) -> usize {
        let table = self
            .body
            .split_once("\n\n")
            .map_or("", |(_, table)| table);
        csv::Reader::from_reader(table.as_bytes())
            .records()
            .filter(Result::is_ok)
            .count()
    }
}

/// Writes the preamble, header and one row per complaint in `view`.
///
/// Fields are quoted when they contain delimiters, so free text survives a
/// round trip through any CSV reader.
pub fn write_report(
    view: &[ComplaintRecord],
    filters: &FilterState,
    generated_by: &str,
    generated_at: NaiveDateTime,
) -> Result<ReportDocument, ExportError> {
    let mut preamble = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());

    preamble.write_record([REPORT_TITLE])?;
    preamble.write_record([format!(
        "Date of Generation: {}",
        generated_at.format("%-m/%-d/%Y %-I:%M:%S %p")
    )])?;
    preamble.write_record([format!("Generated by: {generated_by}")])?;
    for line in filters.describe() {
        preamble.write_record([line])?;
    }

    let mut bytes = preamble
        .into_inner()
        .map_err(|err| ExportError::Io(err.into_error()))?;
    bytes.push(b'\n');

    let mut table = csv::Writer::from_writer(bytes);
    table.write_record(HEADER)?;
    for record in view {
        table.write_record([
            record.complaint_type.as_str(),
            record.location.as_str(),
            record.status().label(),
            display_date(record.complaint_date).as_str(),
            record.details.as_str(),
        ])?;
    }

    let bytes = table
        .into_inner()
        .map_err(|err| ExportError::Io(err.into_error()))?;

    Ok(ReportDocument {
        file_name: REPORT_FILE_NAME,
        content_type: REPORT_CONTENT_TYPE,
        body: String::from_utf8(bytes)?,
    })
}

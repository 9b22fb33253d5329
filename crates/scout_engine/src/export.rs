use std::path::{Path, PathBuf};

use scout_core::JobRecord;

use crate::persist::{AtomicFileWriter, PersistError};

/// Column names and order of the downloadable listing table.
pub const CSV_HEADER: [&str; 4] = ["Title", "Company", "Date Posted", "Job Link"];

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub output_filename: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            output_filename: "linkedin_jobs.csv".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
}

/// Render records as CSV: header row, then one row per record in order.
pub fn records_to_csv(records: &[JobRecord]) -> String {
    let mut buffer = String::new();
    push_row(&mut buffer, CSV_HEADER);
    for record in records {
        let posted = record.posted_label();
        push_row(
            &mut buffer,
            [record.title(), record.company(), posted.as_str(), record.link()],
        );
    }
    buffer
}

/// Write the CSV export into `dir`, replacing any previous export atomically.
pub fn write_csv_export(
    dir: &Path,
    options: &ExportOptions,
    records: &[JobRecord],
) -> Result<PathBuf, ExportError> {
    let writer = AtomicFileWriter::new(dir.to_path_buf());
    let path = writer.write(&options.output_filename, &records_to_csv(records))?;
    Ok(path)
}

fn push_row(buffer: &mut String, fields: [&str; 4]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            buffer.push(',');
        }
        push_field(buffer, field);
    }
    buffer.push('\n');
}

fn push_field(buffer: &mut String, field: &str) {
    if field.contains([',', '"', '\n', '\r']) {
        buffer.push('"');
        buffer.push_str(&field.replace('"', "\"\""));
        buffer.push('"');
    } else {
        buffer.push_str(field);
    }
}

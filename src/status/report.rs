// src/status/report.rs
// =============================================================================
// CSV in, CSV out.
//
// Input: no header row, the URL is the first column of each record. Extra
// columns are ignored and records with an empty first column are skipped.
//
// Output: one `url,status` record per checked URL.
// =============================================================================

use anyhow::{Context, Result};
use std::io::{Read, Write};

use super::http::StatusRecord;

/// Reads the list of URLs to check
pub fn read_urls<R: Read>(reader: R) -> Result<Vec<String>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut urls = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record.with_context(|| format!("failed to read CSV record {}", index + 1))?;
        if let Some(url) = record.get(0).filter(|url| !url.is_empty()) {
            urls.push(url.to_string());
        }
    }

    Ok(urls)
}

/// Writes one `url,status` record per result
pub fn write_records<W: Write>(writer: W, records: &[StatusRecord]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for record in records {
        let status = record.status.to_string();
        csv_writer
            .write_record([record.url.as_str(), status.as_str()])
            .with_context(|| format!("failed to write result for {}", record.url))?;
    }

    csv_writer.flush().context("failed to flush CSV output")?;
    Ok(())
}

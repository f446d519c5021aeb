//! CSV parser for the salary survey dataset.

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::io::Read;
use tracing::debug;

use crate::record::Record;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Decodes a header-first CSV document into [`Record`]s.
///
/// Gzip-compressed input is inflated first. Rows shorter than the header
/// leave their trailing fields missing.
///
/// # Errors
///
/// Returns an error if the bytes are not valid gzip (when gzip-tagged) or
/// not well-formed CSV.
pub fn parse_records(bytes: &[u8]) -> Result<Vec<Record>> {
    if bytes.starts_with(&GZIP_MAGIC) {
        let mut inflated = Vec::new();
        GzDecoder::new(bytes)
            .read_to_end(&mut inflated)
            .context("Failed to inflate gzip dataset")?;
        debug!(
            compressed = bytes.len(),
            inflated = inflated.len(),
            "Inflated gzip dataset"
        );
        return parse_csv(&inflated);
    }

    parse_csv(bytes)
}

fn parse_csv(bytes: &[u8]) -> Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(bytes);

    let headers = rdr.headers().context("Failed to read CSV header")?.clone();

    let mut records = Vec::new();
    for (row, result) in rdr.records().enumerate() {
        let row_data = result.with_context(|| format!("Malformed CSV row {}", row + 1))?;
        let record: Record = headers
            .iter()
            .zip(row_data.iter())
            .collect();
        records.push(record);
    }

    debug!(rows = records.len(), columns = headers.len(), "Parsed dataset");
    Ok(records)
}

//! Handoff of computed aggregates to the rendering layer.
//!
//! Supports pretty-printing, JSON serialization, and a CSV dump of the map averages.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Debug;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

use crate::aggregate::MapScan;
use crate::views::WorldMap;

/// Logs a value using Rust's debug pretty-print format.
pub fn print_pretty(value: &impl Debug) {
    debug!("{:#?}", value);
}

/// Logs a value as pretty-printed JSON.
///
/// NaN and infinite numbers serialize as `null`.
pub fn print_json(value: &impl Serialize) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Writes a value as pretty-printed JSON to `path`, replacing any existing file.
pub fn write_json(path: &str, value: &impl Serialize) -> Result<()> {
    if let Some(parent) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = File::create(path).with_context(|| format!("Failed to create '{path}'"))?;
    serde_json::to_writer_pretty(&mut file, value)?;
    file.write_all(b"\n")?;

    debug!(path, "JSON written");
    Ok(())
}

#[derive(Serialize)]
struct MapRow<'a> {
    code: &'a str,
    average: f64,
}

/// Writes one `code,average` row per country, in key order.
pub fn write_map_csv(path: &str, scan: &MapScan) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("Failed to create '{path}'"))?;

    for (code, average) in &scan.averages {
        writer.serialize(MapRow {
            code,
            average: *average,
        })?;
    }
    writer.flush()?;

    debug!(path, rows = scan.averages.len(), "Map CSV written");
    Ok(())
}

/// Either writes `value` as JSON to `output`, or logs it when no path is given.
pub fn emit(output: Option<&str>, value: &impl Serialize) -> Result<()> {
    match output {
        Some(path) => {
            write_json(path, value)?;
            info!(path, "Report written");
            Ok(())
        }
        None => print_json(value),
    }
}

/// Summary line for a built map.
pub fn log_map_summary(map: &WorldMap) {
    match map.domain {
        Some(domain) => info!(
            countries = map.scan.averages.len(),
            low = domain.low,
            mid = domain.mid,
            high = domain.high,
            "World map ready"
        ),
        None => info!("World map has no data"),
    }
}

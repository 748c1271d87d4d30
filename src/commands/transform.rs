//! Transformation step: intermediate document to CSV dataset.

use std::io;
use tracing::{debug, info, warn};

use crate::{
    config::Config,
    core::write_atomic,
    dataset::{
        read_document, summary::DEFAULT_TOP_N, validate_entry, DatasetSummary, FlatPlayerRow,
        RawDocument, COLUMNS,
    },
    NhlError, Result,
};

/// A document entry rejected during validation.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedEntry {
    pub player: String,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct TransformReport {
    /// One row per valid entry, in document order.
    pub rows: Vec<FlatPlayerRow>,
    pub skipped: Vec<SkippedEntry>,
}

/// Validate and flatten every entry of `doc`.
///
/// Pure and order-preserving. Invalid entries are logged and reported, never fatal.
pub fn transform_document(doc: &RawDocument) -> TransformReport {
    let mut report = TransformReport::default();

    for (key, value) in doc {
        match validate_entry(key, value) {
            Ok(record) => {
                debug!(player = %key, name = %record.name(), "Player flattened");
                report.rows.push(FlatPlayerRow::from_record(&record));
            }
            Err(NhlError::InvalidRecord { player, reason }) => {
                warn!(%player, %reason, "Skipping invalid record");
                report.skipped.push(SkippedEntry { player, reason });
            }
            Err(e) => {
                warn!(player = %key, error = %e, "Skipping invalid record");
                report.skipped.push(SkippedEntry {
                    player: key.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    report
}

/// Write the header and one record per row.
pub fn write_csv<W: io::Write>(writer: W, rows: &[FlatPlayerRow]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(COLUMNS)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub struct Transformer {
    config: Config,
}

impl Transformer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read `config.raw_path`, transform it, and write `config.csv_path`.
    ///
    /// An unreadable or malformed document fails before anything is written.
    pub fn run(&self) -> Result<TransformReport> {
        let doc = read_document(&self.config.raw_path)?;
        info!(
            path = %self.config.raw_path.display(),
            entries = doc.len(),
            "Intermediate document loaded"
        );

        let report = transform_document(&doc);
        if report.rows.is_empty() {
            warn!("No valid player records; writing header only");
        }

        let mut buf = Vec::new();
        write_csv(&mut buf, &report.rows)?;
        write_atomic(&self.config.csv_path, &buf)?;

        info!(
            path = %self.config.csv_path.display(),
            rows = report.rows.len(),
            skipped = report.skipped.len(),
            "Dataset written"
        );
        Ok(report)
    }
}

/// Handle the transform command
pub fn handle_transform(config: &Config, print_summary: bool) -> Result<TransformReport> {
    let report = Transformer::new(config.clone()).run()?;

    if print_summary {
        println!("\n{}", DatasetSummary::from_rows(&report.rows, DEFAULT_TOP_N));
    }
    Ok(report)
}

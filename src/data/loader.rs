use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::StringRecord;
use thiserror::Error;

use super::model::{Sample, SampleLog};

/// Fields per line: `value,state_a,state_b,value_ref`.
pub const FIELD_COUNT: usize = 4;

// ---------------------------------------------------------------------------
// Per-line validity
// ---------------------------------------------------------------------------

/// Why a line was rejected. Rejected lines are dropped from every series.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("expected 4 fields, found {0}")]
    FieldCount(usize),
    #[error("field {field}: '{text}' is not a number")]
    InvalidFloat { field: usize, text: String },
    #[error("field {field}: '{text}' is not an integer")]
    InvalidInteger { field: usize, text: String },
}

/// Turn one split line into a [`Sample`].
///
/// Checks the field count first, then parses fields 1 and 4 as floats and
/// fields 2 and 3 as integers. Field numbers in errors are 1-based.
pub fn parse_record(record: &StringRecord) -> Result<Sample, LineError> {
    if record.len() != FIELD_COUNT {
        return Err(LineError::FieldCount(record.len()));
    }
    Ok(Sample {
        value: parse_float(record, 0)?,
        state_a: parse_integer(record, 1)?,
        state_b: parse_integer(record, 2)?,
        value_ref: parse_float(record, 3)?,
    })
}

fn parse_float(record: &StringRecord, idx: usize) -> Result<f64, LineError> {
    let text = &record[idx];
    text.parse().map_err(|_| LineError::InvalidFloat {
        field: idx + 1,
        text: text.to_string(),
    })
}

fn parse_integer(record: &StringRecord, idx: usize) -> Result<i64, LineError> {
    let text = &record[idx];
    text.parse().map_err(|_| LineError::InvalidInteger {
        field: idx + 1,
        text: text.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a sample log from a file. Failing to open or read the file is an
/// error; malformed lines are not.
pub fn load_file(path: &Path) -> Result<SampleLog> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let samples = read_samples(file).with_context(|| format!("reading {}", path.display()))?;
    log::info!("Loaded {} samples from {}", samples.len(), path.display());
    Ok(samples)
}

/// Read `value,state_a,state_b,value_ref` lines, one sample per line, no
/// header row. Lines that are blank, not UTF-8, or rejected by
/// [`parse_record`] are skipped.
pub fn read_samples<R: Read>(reader: R) -> Result<SampleLog> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut samples = SampleLog::new();
    let mut record = StringRecord::new();

    loop {
        match reader.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) if e.is_io_error() => return Err(e).context("reading sample lines"),
            Err(e) => {
                log::trace!("skipping unreadable line: {e}");
                continue;
            }
        }
        match parse_record(&record) {
            Ok(sample) => samples.push(sample),
            Err(e) => log::trace!(
                "skipping line {}: {e}",
                record.position().map_or(0, |p| p.line())
            ),
        }
    }

    Ok(samples)
}

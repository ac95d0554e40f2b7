//! FIR coefficient table loading.
//!
//! Evaluation-board filter tables ship as plain text with one coefficient
//! per line, often with surrounding whitespace and the occasional blank
//! line. The same format carries measured noise-density curves, so the
//! loader returns a flat `Vec<f64>` and leaves interpretation to the
//! caller.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::num::ParseFloatError;
use std::path::Path;

/// Errors raised while loading a coefficient table.
#[derive(Debug)]
pub enum CoeffError {
    /// Underlying filesystem I/O failure.
    Io(std::io::Error),
    /// A line failed to parse as a float.
    Parse {
        /// 1-based line number of the offending line.
        line: usize,
        /// The parse failure itself.
        source: ParseFloatError,
    },
}

impl core::fmt::Display for CoeffError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CoeffError::Io(err) => write!(f, "coefficient file I/O failure: {err}"),
            CoeffError::Parse { line, source } => {
                write!(f, "coefficient file line {line} is not a float: {source}")
            }
        }
    }
}

impl std::error::Error for CoeffError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CoeffError::Io(err) => Some(err),
            CoeffError::Parse { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for CoeffError {
    fn from(value: std::io::Error) -> Self {
        CoeffError::Io(value)
    }
}

/// Read a one-value-per-line table of floats.
///
/// Blank lines are skipped; anything else must parse as a float. An empty
/// file yields an empty vector, which the spectral kernels will reject at
/// their own boundaries.
pub fn read_coefficients<P: AsRef<Path>>(path: P) -> Result<Vec<f64>, CoeffError> {
    let file = File::open(path)?;
    let mut values = Vec::new();
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let value = trimmed
            .parse::<f64>()
            .map_err(|source| CoeffError::Parse {
                line: idx + 1,
                source,
            })?;
        values.push(value);
    }
    Ok(values)
}

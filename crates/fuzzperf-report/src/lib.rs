use std::fs;
use std::path::Path;

use fuzzperf_core::{evaluate, EvaluateError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One student's raw inputs, as imported from a roster file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentRecord {
    pub id: String,
    pub gpa: f32,
    pub activity: f32,
}

/// One student's evaluated outcome; the data behind a results-table row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentReport {
    pub id: String,
    pub score: f32,
    pub label: String,
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("evaluation failed for record {id}: {source}")]
    Evaluate {
        id: String,
        #[source]
        source: EvaluateError,
    },
}

pub fn evaluate_record(record: &StudentRecord) -> Result<StudentReport, ReportError> {
    let outcome = evaluate(record.gpa, record.activity).map_err(|source| {
        ReportError::Evaluate {
            id: record.id.clone(),
            source,
        }
    })?;

    Ok(StudentReport {
        id: record.id.clone(),
        score: outcome.score,
        label: outcome.label.as_str().to_string(),
    })
}

/// Evaluates a whole roster; the first failing record aborts the batch so a
/// bad row never produces a partially garbage report set.
pub fn evaluate_roster(records: &[StudentRecord]) -> Result<Vec<StudentReport>, ReportError> {
    records.iter().map(evaluate_record).collect()
}

pub fn load_roster(path: impl AsRef<Path>) -> Result<Vec<StudentRecord>, ReportError> {
    let bytes = fs::read(path.as_ref())?;
    let records = serde_json::from_slice(&bytes)?;
    Ok(records)
}

pub fn write_reports(
    path: impl AsRef<Path>,
    reports: &[StudentReport],
) -> Result<(), ReportError> {
    let bytes = serde_json::to_vec_pretty(reports)?;
    fs::write(path.as_ref(), bytes)?;
    Ok(())
}

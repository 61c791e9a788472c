//! JSONL result persistence.
//!
//! One self-contained JSON object per completed run, appended to the output
//! file. The file is opened in append mode for every write; no handle is
//! held across runs, so a crashed run can never corrupt prior lines.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::bench::WorkloadId;

/// One structured line summarizing a completed run. Immutable once created.
#[derive(Debug, Serialize)]
pub struct RunRecord {
    pub language: &'static str,
    pub alg: u32,
    pub threads: u32,
    pub run_index: u32,
    pub input_size: u64,
    pub seconds: f64,
}

impl RunRecord {
    pub fn new(
        workload: WorkloadId,
        threads: u32,
        run_index: u32,
        input_size: u64,
        seconds: f64,
    ) -> Self {
        Self {
            language: "rust",
            alg: workload.id(),
            threads,
            run_index,
            input_size,
            seconds,
        }
    }
}

/// Creates the output file if missing and verifies it is appendable, so an
/// unwritable path fails before the first run is executed.
pub fn touch_append(path: &Path) -> Result<()> {
    OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .with_context(|| format!("cannot open output file {}", path.display()))?;
    Ok(())
}

/// Appends one encoded record as a single line.
pub fn append_record(path: &Path, record: &RunRecord) -> Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .with_context(|| format!("cannot open output file {}", path.display()))?;
    let line = serde_json::to_string(record).context("failed to encode run record")?;
    writeln!(file, "{line}")
        .with_context(|| format!("failed to append record to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn records_append_as_parseable_jsonl() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.jsonl");
        touch_append(&path).unwrap();

        for run_index in 0..2 {
            let record = RunRecord::new(WorkloadId::MergeSort, 8, run_index, 4096, 0.125);
            append_record(&path, &record).unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);

        for (run_index, line) in lines.iter().enumerate() {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(value["language"], "rust");
            assert_eq!(value["alg"], 4);
            assert_eq!(value["threads"], 8);
            assert_eq!(value["run_index"], run_index as u64);
            assert_eq!(value["input_size"], 4096);
            assert!(value["seconds"].as_f64().unwrap() > 0.0);
        }
    }

    #[test]
    fn appending_preserves_existing_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.jsonl");

        append_record(&path, &RunRecord::new(WorkloadId::Fft, 1, 0, 1024, 0.5)).unwrap();
        append_record(&path, &RunRecord::new(WorkloadId::Fft, 1, 1, 1024, 0.5)).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn touch_rejects_unwritable_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing-subdir").join("results.jsonl");
        assert!(touch_append(&path).is_err());
    }
}

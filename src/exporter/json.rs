// file: src/exporter/json.rs
// description: json export of pipeline reports and batch summaries

use crate::error::{PipelineError, Result};
use crate::models::{BatchSummary, PipelineReport};
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const REPORT_FILE: &str = "report.json";
pub const BATCH_FILE: &str = "batch-summary.json";

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct ExportEnvelope<'a, T: Serialize> {
    pub exported_at: String,
    #[serde(flatten)]
    pub payload: &'a T,
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir).map_err(|source| PipelineError::FileOperation {
            path: output_dir.clone(),
            source,
        })?;
        Ok(Self { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn export_report(&self, report: &PipelineReport, pretty: bool) -> Result<PathBuf> {
        self.write(REPORT_FILE, report, pretty)
    }

    pub fn export_reports(&self, reports: &[PipelineReport], pretty: bool) -> Result<PathBuf> {
        #[derive(Serialize)]
        struct Reports<'a> {
            total: usize,
            reports: &'a [PipelineReport],
        }

        self.write(
            REPORT_FILE,
            &Reports {
                total: reports.len(),
                reports,
            },
            pretty,
        )
    }

    pub fn export_batch(&self, summary: &BatchSummary, pretty: bool) -> Result<PathBuf> {
        self.write(BATCH_FILE, summary, pretty)
    }

    fn write<T: Serialize>(&self, file_name: &str, payload: &T, pretty: bool) -> Result<PathBuf> {
        let envelope = ExportEnvelope {
            exported_at: Utc::now().to_rfc3339(),
            payload,
        };

        let json = if pretty {
            serde_json::to_string_pretty(&envelope)?
        } else {
            serde_json::to_string(&envelope)?
        };

        let path = self.output_dir.join(file_name);
        fs::write(&path, json).map_err(|source| PipelineError::FileOperation {
            path: path.clone(),
            source,
        })?;

        info!("Exported {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Mismatch, Sequence};
    use serde_json::Value;
    use tempfile::tempdir;

    fn sample_report() -> PipelineReport {
        PipelineReport {
            original: Sequence::from(vec![1, 2, 3, 4, 5]),
            squared: Sequence::from(vec![1, 4, 9, 16, 25]),
            evens: Sequence::from(vec![2, 4]),
            sum: 15,
        }
    }

    #[test]
    fn test_exporter_creation() {
        let dir = tempdir().unwrap();
        let exporter = JsonExporter::new(dir.path().join("exports"));
        assert!(exporter.is_ok());
        assert!(dir.path().join("exports").is_dir());
    }

    #[test]
    fn test_export_report() {
        let dir = tempdir().unwrap();
        let exporter = JsonExporter::new(dir.path()).unwrap();

        let path = exporter.export_report(&sample_report(), true).unwrap();
        let value: Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();

        assert!(value["exported_at"].is_string());
        assert_eq!(value["squared"], serde_json::json!([1, 4, 9, 16, 25]));
        assert_eq!(value["evens"], serde_json::json!([2, 4]));
        assert_eq!(value["sum"], 15);
    }

    #[test]
    fn test_export_reports() {
        let dir = tempdir().unwrap();
        let exporter = JsonExporter::new(dir.path()).unwrap();

        let path = exporter
            .export_reports(&[sample_report(), sample_report()], false)
            .unwrap();
        let value: Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();

        assert_eq!(value["total"], 2);
        assert_eq!(value["reports"][1]["sum"], 15);
    }

    #[test]
    fn test_export_batch() {
        let dir = tempdir().unwrap();
        let exporter = JsonExporter::new(dir.path()).unwrap();

        let summary = BatchSummary {
            total: 2,
            passed: 1,
            mismatches: vec![Mismatch {
                case: 1,
                expected: 4,
                actual: 5,
            }],
            errors: vec![],
            duration_ms: 1,
        };

        let path = exporter.export_batch(&summary, false).unwrap();
        assert!(path.ends_with(BATCH_FILE));

        let value: Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(value["passed"], 1);
        assert_eq!(value["mismatches"][0]["actual"], 5);
    }
}

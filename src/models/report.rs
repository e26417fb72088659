// file: src/models/report.rs
// description: derived results of a single pipeline run and batch verification
// reference: internal data structures

use crate::models::Sequence;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineReport {
    pub original: Sequence,
    pub squared: Sequence,
    pub evens: Sequence,
    pub sum: i64,
}

impl fmt::Display for PipelineReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Original numbers: {}", self.original)?;
        writeln!(f, "Squared numbers: {}", self.squared)?;
        writeln!(f, "Even numbers: {}", self.evens)?;
        write!(f, "Sum of numbers: {}", self.sum)
    }
}

/// A case whose computed sum disagrees with the expected output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mismatch {
    pub case: usize,
    pub expected: i64,
    pub actual: i64,
}

/// A case that could not be evaluated at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseError {
    pub case: usize,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub passed: usize,
    pub mismatches: Vec<Mismatch>,
    pub errors: Vec<CaseError>,
    pub duration_ms: u64,
}

impl BatchSummary {
    pub fn failed(&self) -> usize {
        self.mismatches.len()
    }

    pub fn errored(&self) -> usize {
        self.errors.len()
    }

    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }

    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.passed as f64 / self.total as f64) * 100.0
    }
}

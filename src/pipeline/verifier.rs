// file: src/pipeline/verifier.rs
// description: checks pipeline sums against the expected outputs of a testcase suite
// reference: judge-style comparison of computed and expected answers

use crate::error::{PipelineError, Result};
use crate::models::{BatchSummary, CaseError, Mismatch};
use crate::pipeline::{ProgressTracker, SequencePipeline};
use crate::testcase::TestCase;
use tracing::{debug, info, warn};

pub struct BatchVerifier {
    pipeline: SequencePipeline,
    show_progress: bool,
    colored: bool,
}

impl BatchVerifier {
    pub fn new(pipeline: SequencePipeline) -> Self {
        Self {
            pipeline,
            show_progress: true,
            colored: true,
        }
    }

    pub fn with_progress(mut self, show_progress: bool, colored: bool) -> Self {
        self.show_progress = show_progress;
        self.colored = colored;
        self
    }

    pub fn verify(&self, cases: &[TestCase], expected: &[i64]) -> Result<BatchSummary> {
        if cases.len() != expected.len() {
            return Err(PipelineError::CaseCountMismatch {
                cases: cases.len(),
                expected: expected.len(),
            });
        }

        info!("Verifying {} cases", cases.len());

        let tracker = if self.show_progress {
            ProgressTracker::with_color(cases.len(), self.colored)
        } else {
            ProgressTracker::hidden(cases.len())
        };

        let mut summary = BatchSummary {
            total: cases.len(),
            ..BatchSummary::default()
        };

        for (case, &want) in cases.iter().zip(expected) {
            match self.pipeline.sum(&case.numbers) {
                Ok(actual) if actual == want => tracker.inc_passed(),
                Ok(actual) => {
                    debug!(
                        "Case {} mismatch: expected {}, got {}",
                        case.index, want, actual
                    );
                    summary.mismatches.push(Mismatch {
                        case: case.index,
                        expected: want,
                        actual,
                    });
                    tracker.inc_failed();
                }
                Err(e) => {
                    warn!("Case {} could not be evaluated: {}", case.index, e);
                    summary.errors.push(CaseError {
                        case: case.index,
                        message: e.to_string(),
                    });
                    tracker.inc_errored();
                }
            }
        }

        tracker.finish();
        let stats = tracker.get_stats();
        summary.passed = stats.cases_passed;
        summary.duration_ms = stats.duration_ms;

        info!(
            "Verification done: {}/{} passed, {} failed, {} errored",
            summary.passed,
            summary.total,
            summary.failed(),
            summary.errored()
        );

        Ok(summary)
    }
}

// file: src/pipeline/processor.rs
// description: derives squared, even and sum results from one input sequence
// reference: runs the transform stages and bundles them into a report

use crate::error::Result;
use crate::models::{PipelineReport, Sequence};
use crate::pipeline::transform::{self, OverflowPolicy};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct SequencePipeline {
    policy: OverflowPolicy,
}

impl SequencePipeline {
    pub fn new(policy: OverflowPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    pub fn run(&self, input: &Sequence) -> Result<PipelineReport> {
        debug!("Running pipeline over {} elements", input.len());

        let squared = transform::map_square_with(input, self.policy)?;
        let evens = transform::filter_even(input);
        let sum = transform::sum_all_with(input, self.policy)?;

        debug!(
            "Derived {} squares, {} evens, sum {}",
            squared.len(),
            evens.len(),
            sum
        );

        Ok(PipelineReport {
            original: input.clone(),
            squared,
            evens,
            sum,
        })
    }

    pub fn sum(&self, input: &Sequence) -> Result<i64> {
        transform::sum_all_with(input, self.policy)
    }
}

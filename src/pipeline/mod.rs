// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

mod processor;
mod progress;
pub mod transform;
mod verifier;

pub use processor::SequencePipeline;
pub use progress::{BatchStats, ProgressTracker};
pub use transform::{OverflowPolicy, filter_even, map_square, sum_all};
pub use verifier::BatchVerifier;

// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod report;
pub mod sequence;

pub use report::{BatchSummary, CaseError, Mismatch, PipelineReport};
pub use sequence::Sequence;

// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod exporter;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod testcase;
pub mod utils;

pub use config::{Config, OutputConfig, PipelineConfig, TestcaseConfig};
pub use error::{PipelineError, Result};
pub use exporter::JsonExporter;
pub use models::{BatchSummary, CaseError, Mismatch, PipelineReport, Sequence};
pub use parser::parse_sequence;
pub use pipeline::{
    BatchStats, BatchVerifier, OverflowPolicy, ProgressTracker, SequencePipeline, filter_even,
    map_square, sum_all,
};
pub use testcase::{GeneratedSuite, TestCase, TestcaseGenerator};
pub use utils::{StageTimer, ThroughputMetrics, Validator};

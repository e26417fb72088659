// file: src/testcase/mod.rs
// description: testcase suite format and generation exports
// reference: internal module structure

pub mod format;
pub mod generator;

pub use format::{
    DEFAULT_SEPARATOR, TestCase, parse_cases, parse_expected, read_suite_file, render_cases,
    render_expected, write_suite_file,
};
pub use generator::{GeneratedSuite, TestcaseGenerator};

// file: src/parser/mod.rs
// description: sequence parsing module exports
// reference: internal module structure

pub mod numbers;

pub use numbers::{parse_integer, parse_sequence, tokens};

// file: src/testcase/format.rs
// description: reads and writes the separator-delimited testcase suite format
// reference: judge input/output files ("n a1 .. an ### n a1 .. an")

use crate::error::{PipelineError, Result};
use crate::models::Sequence;
use crate::parser::{parse_integer, tokens};
use std::fs;
use std::path::Path;

pub const DEFAULT_SEPARATOR: &str = "###";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub index: usize,
    pub numbers: Sequence,
}

fn blocks<'a>(text: &'a str, separator: &'a str) -> impl Iterator<Item = &'a str> {
    let trimmed = text.trim();
    let empty = trimmed.is_empty();
    trimmed
        .split(separator)
        .map(str::trim)
        .filter(move |_| !empty)
}

/// Parse an input suite. Each block starts with the declared element count.
pub fn parse_cases(text: &str, separator: &str) -> Result<Vec<TestCase>> {
    blocks(text, separator)
        .enumerate()
        .map(|(index, block)| parse_case(index, block))
        .collect()
}

fn parse_case(index: usize, block: &str) -> Result<TestCase> {
    let mut values = tokens(block)
        .enumerate()
        .map(|(position, token)| parse_integer(token, position));

    let declared = match values.next() {
        Some(declared) => declared?,
        None => {
            return Err(PipelineError::Validation(format!(
                "Case {} is empty (missing element count)",
                index
            )));
        }
    };

    let numbers = values.collect::<Result<Sequence>>()?;

    if declared < 0 || declared as usize != numbers.len() {
        return Err(PipelineError::LengthMismatch {
            case: index,
            declared: declared.max(0) as usize,
            actual: numbers.len(),
        });
    }

    Ok(TestCase { index, numbers })
}

/// Parse an expected-output suite: one integer per block.
pub fn parse_expected(text: &str, separator: &str) -> Result<Vec<i64>> {
    blocks(text, separator)
        .enumerate()
        .map(|(index, block)| {
            let mut values = tokens(block);
            match (values.next(), values.next()) {
                (Some(token), None) => token.parse::<i64>().map_err(|_| {
                    PipelineError::Validation(format!(
                        "Expected output for case {} is not an integer: {:?}",
                        index, token
                    ))
                }),
                _ => Err(PipelineError::Validation(format!(
                    "Expected output {} must hold exactly one integer, found {:?}",
                    index, block
                ))),
            }
        })
        .collect()
}

pub fn render_cases(cases: &[Sequence], separator: &str) -> String {
    let joiner = format!(" {} ", separator);
    cases
        .iter()
        .map(|case| {
            let mut parts = Vec::with_capacity(case.len() + 1);
            parts.push(case.len().to_string());
            parts.extend(case.iter().map(|n| n.to_string()));
            parts.join(" ")
        })
        .collect::<Vec<_>>()
        .join(&joiner)
}

pub fn render_expected(sums: &[i64], separator: &str) -> String {
    let joiner = format!(" {} ", separator);
    sums.iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(&joiner)
}

pub fn read_suite_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| PipelineError::FileOperation {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_suite_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| PipelineError::FileOperation {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, content).map_err(|source| PipelineError::FileOperation {
        path: path.to_path_buf(),
        source,
    })
}

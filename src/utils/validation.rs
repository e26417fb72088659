// file: src/utils/validation.rs
// description: data validation utilities and helpers
// reference: input validation patterns

use crate::error::{PipelineError, Result};
use std::fs;
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_file_path(path: &Path) -> Result<()> {
        let canonical = fs::canonicalize(path).map_err(|e| {
            PipelineError::Validation(format!(
                "Cannot canonicalize path {}: {}",
                path.display(),
                e
            ))
        })?;

        if !canonical.is_file() {
            return Err(PipelineError::Validation(format!(
                "Path is not a file: {}",
                canonical.display()
            )));
        }

        Ok(())
    }

    pub fn validate_length_bounds(min_len: usize, max_len: usize) -> Result<()> {
        if min_len == 0 {
            return Err(PipelineError::Validation(
                "Minimum case length must be greater than 0".to_string(),
            ));
        }

        if min_len > max_len {
            return Err(PipelineError::Validation(format!(
                "Minimum case length {} exceeds maximum {}",
                min_len, max_len
            )));
        }

        Ok(())
    }

    pub fn validate_value_bounds(min_value: i64, max_value: i64) -> Result<()> {
        if min_value > max_value {
            return Err(PipelineError::Validation(format!(
                "Minimum value {} exceeds maximum {}",
                min_value, max_value
            )));
        }
        Ok(())
    }

    pub fn validate_separator(separator: &str) -> Result<()> {
        if separator.trim().is_empty() {
            return Err(PipelineError::Validation(
                "Separator must not be blank".to_string(),
            ));
        }

        let clashes = |c: char| c.is_ascii_digit() || c == '-' || c == '+' || c.is_whitespace();
        if separator.contains(clashes) {
            return Err(PipelineError::Validation(format!(
                "Separator {:?} would be confused with case contents",
                separator
            )));
        }

        Ok(())
    }
}

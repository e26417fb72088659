// file: src/parser/numbers.rs
// description: parses integer sequences from free-form text
// reference: accepts whitespace/comma separated values and the bracketed display form

use crate::error::{PipelineError, Result};
use crate::models::Sequence;

/// Parse a sequence such as `1 2 3`, `1,2,3` or `[1, 2, 3]`.
pub fn parse_sequence(text: &str) -> Result<Sequence> {
    let trimmed = text.trim();
    let body = match (trimmed.strip_prefix('['), trimmed.ends_with(']')) {
        (Some(rest), true) => &rest[..rest.len() - 1],
        (None, false) => trimmed,
        _ => {
            return Err(PipelineError::Validation(format!(
                "Unbalanced brackets in sequence: {}",
                trimmed
            )));
        }
    };

    tokens(body)
        .enumerate()
        .map(|(position, token)| parse_integer(token, position))
        .collect()
}

/// Tokens separated by whitespace and/or commas; empty tokens are skipped.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
}

pub fn parse_integer(token: &str, position: usize) -> Result<i64> {
    token
        .strip_prefix('+')
        .unwrap_or(token)
        .parse::<i64>()
        .map_err(|_| PipelineError::InvalidInput {
            position,
            token: token.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_whitespace_separated() {
        assert_eq!(
            parse_sequence("1 2  3\n4\t5").unwrap(),
            Sequence::from(vec![1, 2, 3, 4, 5])
        );
    }

    #[test]
    fn test_parse_display_form() {
        let seq = Sequence::from(vec![1, -4, 9, 16, 25]);
        assert_eq!(parse_sequence(&seq.to_string()).unwrap(), seq);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_sequence("").unwrap(), Sequence::empty());
        assert_eq!(parse_sequence("  []  ").unwrap(), Sequence::empty());
    }

    #[test]
    fn test_parse_signed_values() {
        assert_eq!(
            parse_sequence("+3,-3,0").unwrap(),
            Sequence::from(vec![3, -3, 0])
        );
    }

    #[test]
    fn test_rejects_non_integer() {
        let err = parse_sequence("1, 2, 3.5, 4").unwrap_err();
        match err {
            PipelineError::InvalidInput { position, token } => {
                assert_eq!(position, 2);
                assert_eq!(token, "3.5");
            }
            other => panic!("unexpected error: {other}"),
        }

        assert!(parse_sequence("one two").is_err());
        assert!(parse_sequence("99999999999999999999").is_err());
    }

    #[test]
    fn test_rejects_unbalanced_brackets() {
        assert!(matches!(
            parse_sequence("[1, 2"),
            Err(PipelineError::Validation(_))
        ));
        assert!(parse_sequence("1, 2]").is_err());
    }
}

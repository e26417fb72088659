// file: src/pipeline/transform.rs
// description: element-wise square, even filter and sum reduction over sequences
// reference: iterator map / filter / fold combinators

use crate::error::{PipelineError, Result};
use crate::models::Sequence;
use serde::{Deserialize, Serialize};

/// What to do when a square or a sum leaves the `i64` range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    #[default]
    Error,
    Saturate,
}

impl std::str::FromStr for OverflowPolicy {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "saturate" => Ok(Self::Saturate),
            other => Err(PipelineError::Config(format!(
                "unknown overflow policy '{}' (expected 'error' or 'saturate')",
                other
            ))),
        }
    }
}

pub fn map_square(input: &Sequence) -> Result<Sequence> {
    map_square_with(input, OverflowPolicy::Error)
}

pub fn map_square_with(input: &Sequence, policy: OverflowPolicy) -> Result<Sequence> {
    input
        .iter()
        .map(|&n| match policy {
            OverflowPolicy::Error => n.checked_mul(n).ok_or_else(|| PipelineError::Overflow {
                operation: "map_square",
                detail: format!("{} squared exceeds i64 range", n),
            }),
            OverflowPolicy::Saturate => Ok(n.saturating_mul(n)),
        })
        .collect::<Result<Vec<_>>>()
        .map(Sequence::from)
}

pub fn filter_even(input: &Sequence) -> Sequence {
    input.iter().copied().filter(|n| n % 2 == 0).collect()
}

pub fn sum_all(input: &Sequence) -> Result<i64> {
    sum_all_with(input, OverflowPolicy::Error)
}

/// Left-to-right sum. The running total is kept in `i128`, so only the final
/// value is range-checked and the result does not depend on element order.
pub fn sum_all_with(input: &Sequence, policy: OverflowPolicy) -> Result<i64> {
    let total: i128 = input.iter().fold(0i128, |acc, &n| acc + i128::from(n));

    match i64::try_from(total) {
        Ok(sum) => Ok(sum),
        Err(_) => match policy {
            OverflowPolicy::Error => Err(PipelineError::Overflow {
                operation: "sum_all",
                detail: format!("total {} exceeds i64 range", total),
            }),
            OverflowPolicy::Saturate => Ok(if total > 0 { i64::MAX } else { i64::MIN }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn seq(values: &[i64]) -> Sequence {
        Sequence::from(values)
    }

    #[test]
    fn test_reference_sequence() {
        let input = seq(&[1, 2, 3, 4, 5]);

        assert_eq!(map_square(&input).unwrap(), seq(&[1, 4, 9, 16, 25]));
        assert_eq!(filter_even(&input), seq(&[2, 4]));
        assert_eq!(sum_all(&input).unwrap(), 15);
    }

    #[test]
    fn test_empty_sequence() {
        let input = Sequence::empty();

        assert_eq!(map_square(&input).unwrap(), Sequence::empty());
        assert_eq!(filter_even(&input), Sequence::empty());
        assert_eq!(sum_all(&input).unwrap(), 0);
    }

    #[test]
    fn test_negative_values() {
        let input = seq(&[-4, -3, 0, 7, -2]);

        assert_eq!(map_square(&input).unwrap(), seq(&[16, 9, 0, 49, 4]));
        assert_eq!(filter_even(&input), seq(&[-4, 0, -2]));
        assert_eq!(sum_all(&input).unwrap(), -2);
    }

    #[test]
    fn test_square_overflow_errors() {
        let input = seq(&[1, i64::MAX]);
        let err = map_square(&input).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Overflow {
                operation: "map_square",
                ..
            }
        ));
    }

    #[test]
    fn test_square_overflow_saturates() {
        let input = seq(&[3, i64::MIN, -3_037_000_500]);
        let squared = map_square_with(&input, OverflowPolicy::Saturate).unwrap();
        assert_eq!(squared, seq(&[9, i64::MAX, i64::MAX]));
    }

    #[test]
    fn test_largest_exact_square() {
        let input = seq(&[3_037_000_499, -3_037_000_499]);
        let squared = map_square(&input).unwrap();
        assert_eq!(squared[0], 3_037_000_499 * 3_037_000_499);
        assert_eq!(squared[0], squared[1]);
    }

    #[test]
    fn test_sum_overflow() {
        let input = seq(&[i64::MAX, 1]);
        assert!(matches!(
            sum_all(&input),
            Err(PipelineError::Overflow {
                operation: "sum_all",
                ..
            })
        ));
        assert_eq!(
            sum_all_with(&input, OverflowPolicy::Saturate).unwrap(),
            i64::MAX
        );
        assert_eq!(
            sum_all_with(&seq(&[i64::MIN, -1]), OverflowPolicy::Saturate).unwrap(),
            i64::MIN
        );
    }

    #[test]
    fn test_sum_intermediate_overflow_is_order_independent() {
        let a = seq(&[i64::MAX, 1, -1]);
        let b = seq(&[1, -1, i64::MAX]);
        assert_eq!(sum_all(&a).unwrap(), i64::MAX);
        assert_eq!(sum_all(&b).unwrap(), i64::MAX);
    }

    #[test]
    fn test_overflow_policy_from_str() {
        assert_eq!("error".parse::<OverflowPolicy>().unwrap(), OverflowPolicy::Error);
        assert_eq!(
            " Saturate ".parse::<OverflowPolicy>().unwrap(),
            OverflowPolicy::Saturate
        );
        assert!("wrap".parse::<OverflowPolicy>().is_err());
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let input = seq(&[5, 8, -2, 8, 1]);
        assert_eq!(map_square(&input).unwrap(), map_square(&input).unwrap());
        assert_eq!(filter_even(&input), filter_even(&input));
        assert_eq!(sum_all(&input).unwrap(), sum_all(&input).unwrap());
    }

    proptest! {
        #[test]
        fn test_square_is_elementwise(values in prop::collection::vec(-1_000_000i64..1_000_000, 0..64)) {
            let input = Sequence::from(values.clone());
            let squared = map_square(&input).unwrap();

            prop_assert_eq!(squared.len(), input.len());
            for (i, n) in values.iter().enumerate() {
                prop_assert_eq!(squared[i], n * n);
            }
        }

        #[test]
        fn test_evens_are_ordered_subsequence(values in prop::collection::vec(any::<i64>(), 0..64)) {
            let input = Sequence::from(values);
            let evens = filter_even(&input);

            prop_assert!(evens.is_subsequence_of(&input));
            prop_assert!(evens.iter().all(|n| n % 2 == 0));
            prop_assert_eq!(
                evens.len(),
                input.iter().filter(|n| *n % 2 == 0).count()
            );
        }

        #[test]
        fn test_sum_invariant_under_reordering(values in prop::collection::vec(-1_000_000i64..1_000_000, 0..64)) {
            let forward = Sequence::from(values.clone());
            let mut reversed_values = values.clone();
            reversed_values.reverse();
            let mut sorted_values = values;
            sorted_values.sort_unstable();

            let expected = sum_all(&forward).unwrap();
            prop_assert_eq!(sum_all(&Sequence::from(reversed_values)).unwrap(), expected);
            prop_assert_eq!(sum_all(&Sequence::from(sorted_values)).unwrap(), expected);
        }
    }
}

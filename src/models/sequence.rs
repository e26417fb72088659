// file: src/models/sequence.rs
// description: immutable ordered integer sequence with list-style display
// reference: internal data structures

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// Ordered, immutable sequence of integers. Duplicates are allowed and order
/// is significant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence(Vec<i64>);

impl Sequence {
    pub fn new(values: Vec<i64>) -> Self {
        Self(values)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, i64> {
        self.0.iter()
    }

    pub fn get(&self, index: usize) -> Option<i64> {
        self.0.get(index).copied()
    }

    pub fn into_vec(self) -> Vec<i64> {
        self.0
    }

    /// True when every element of `self` appears in `other` in the same
    /// relative order.
    pub fn is_subsequence_of(&self, other: &Sequence) -> bool {
        let mut rest = other.iter();
        self.iter().all(|needle| rest.any(|candidate| candidate == needle))
    }
}

impl From<Vec<i64>> for Sequence {
    fn from(values: Vec<i64>) -> Self {
        Self(values)
    }
}

impl From<&[i64]> for Sequence {
    fn from(values: &[i64]) -> Self {
        Self(values.to_vec())
    }
}

impl FromIterator<i64> for Sequence {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a i64;
    type IntoIter = std::slice::Iter<'a, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Index<usize> for Sequence {
    type Output = i64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        assert_eq!(Sequence::from(vec![1, 2, 3, 4, 5]).to_string(), "[1, 2, 3, 4, 5]");
        assert_eq!(Sequence::from(vec![-7]).to_string(), "[-7]");
        assert_eq!(Sequence::empty().to_string(), "[]");
    }

    #[test]
    fn test_subsequence() {
        let full = Sequence::from(vec![1, 2, 3, 4, 2]);
        assert!(Sequence::from(vec![2, 4]).is_subsequence_of(&full));
        assert!(Sequence::from(vec![4, 2]).is_subsequence_of(&full));
        assert!(Sequence::empty().is_subsequence_of(&full));
        assert!(!Sequence::from(vec![4, 3]).is_subsequence_of(&full));
        assert!(!Sequence::from(vec![6]).is_subsequence_of(&full));
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let seq = Sequence::from(vec![1, -2, 3]);
        let json = serde_json::to_string(&seq).unwrap();
        assert_eq!(json, "[1,-2,3]");

        let back: Sequence = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seq);
    }
}

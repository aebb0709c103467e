use std::collections::HashMap;

use itertools::Itertools;

use crate::error::Day01Error;

/// Occurrence count of every distinct value in a column.
pub type FrequencyMap = HashMap<i64, usize>;

/// The two columns of location IDs, kept in file order.
///
/// Both columns always have the same length: values only enter in pairs, or
/// through [`LocationLists::from_columns`] which checks it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationLists {
    left: Vec<i64>,
    right: Vec<i64>,
}

impl LocationLists {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_columns(left: Vec<i64>, right: Vec<i64>) -> Result<Self, Day01Error> {
        if left.len() != right.len() {
            return Err(Day01Error::LengthMismatch {
                left: left.len(),
                right: right.len(),
            });
        }
        Ok(Self { left, right })
    }

    pub fn push(&mut self, left: i64, right: i64) {
        self.left.push(left);
        self.right.push(right);
    }

    pub fn left(&self) -> &[i64] {
        &self.left
    }

    pub fn right(&self) -> &[i64] {
        &self.right
    }

    pub fn len(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Exchanges the roles of the two columns.
    pub fn swapped(self) -> Self {
        Self {
            left: self.right,
            right: self.left,
        }
    }

    /// Sorts each column ascending, independently of the other.
    pub fn sort(&mut self) {
        self.left.sort_unstable();
        self.right.sort_unstable();
    }

    pub fn right_frequencies(&self) -> FrequencyMap {
        frequency_map(&self.right)
    }
}

pub fn frequency_map(values: &[i64]) -> FrequencyMap {
    values.iter().copied().counts()
}

impl Extend<(i64, i64)> for LocationLists {
    fn extend<T: IntoIterator<Item = (i64, i64)>>(&mut self, iter: T) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.left.reserve(lower);
        self.right.reserve(lower);

        for (left, right) in iter {
            self.push(left, right);
        }
    }
}

impl FromIterator<(i64, i64)> for LocationLists {
    fn from_iter<T: IntoIterator<Item = (i64, i64)>>(iter: T) -> Self {
        let mut lists = Self::new();
        lists.extend(iter);
        lists
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_pairs() {
        let lists: LocationLists = [(3, 4), (4, 3), (2, 5)].into_iter().collect();
        assert_eq!(&[3, 4, 2], lists.left());
        assert_eq!(&[4, 3, 5], lists.right());
        assert_eq!(3, lists.len());
    }

    #[test]
    fn test_from_columns_length_mismatch() {
        let err = LocationLists::from_columns(vec![1, 2, 3], vec![1, 2]).unwrap_err();
        assert!(matches!(
            err,
            Day01Error::LengthMismatch { left: 3, right: 2 }
        ));
    }

    #[test]
    fn test_sort_is_independent() -> miette::Result<()> {
        let mut lists = LocationLists::from_columns(vec![3, 1, 2], vec![9, 8, 7])?;
        lists.sort();
        assert_eq!(&[1, 2, 3], lists.left());
        assert_eq!(&[7, 8, 9], lists.right());
        Ok(())
    }

    #[test]
    fn test_frequency_map() {
        let counts = frequency_map(&[4, 3, 5, 3, 9, 3]);
        assert_eq!(Some(&3), counts.get(&3));
        assert_eq!(Some(&1), counts.get(&4));
        assert_eq!(None, counts.get(&2));
        assert_eq!(4, counts.len());
    }

    #[test]
    fn test_swapped() -> miette::Result<()> {
        let lists = LocationLists::from_columns(vec![1, 2], vec![3, 4])?.swapped();
        assert_eq!(&[3, 4], lists.left());
        assert_eq!(&[1, 2], lists.right());
        Ok(())
    }
}

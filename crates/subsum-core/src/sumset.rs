//! Subset-sum sets, plain and cardinality-annotated.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// An ordered set of reachable subset sums.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubsetSums {
    sums: BTreeSet<u64>,
}

impl SubsetSums {
    /// The empty set (no reachable sum, e.g. for a negative bound).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The set `{0}`, reachable by the empty subset.
    #[must_use]
    pub fn zero() -> Self {
        std::iter::once(0).collect()
    }

    /// Insert a sum. Returns `true` if it was not present.
    pub fn insert(&mut self, sum: u64) -> bool {
        self.sums.insert(sum)
    }

    #[must_use]
    pub fn contains(&self, sum: u64) -> bool {
        self.sums.contains(&sum)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sums.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sums.is_empty()
    }

    /// Largest reachable sum.
    #[must_use]
    pub fn max(&self) -> Option<u64> {
        self.sums.last().copied()
    }

    /// Iterate sums in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.sums.iter().copied()
    }

    /// Keep only the sums `<= bound`.
    #[must_use]
    pub fn truncated(&self, bound: u64) -> Self {
        self.sums.range(..=bound).copied().collect()
    }

    /// Whether every sum of `self` is also in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.sums.is_subset(&other.sums)
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<u64> {
        self.iter().collect()
    }
}

impl FromIterator<u64> for SubsetSums {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Self {
            sums: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for SubsetSums {
    type Item = u64;
    type IntoIter = std::collections::btree_set::IntoIter<u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.sums.into_iter()
    }
}

/// A set of `(sum, cardinality)` points.
///
/// Every witnessing cardinality of a sum is kept: rescaled buckets map a
/// point `(q, k)` back to `b·q + l·k`, so dropping any `k` loses sums.
/// [`CardinalitySums::witnesses`] gives the one-per-sum view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardinalitySums {
    points: BTreeSet<(u64, u64)>,
}

impl CardinalitySums {
    /// The empty point set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `{(0, 0)}`: the empty subset.
    #[must_use]
    pub fn empty_subset() -> Self {
        std::iter::once((0, 0)).collect()
    }

    /// Subsets of a single element `value`, restricted to sums `<= bound`.
    #[must_use]
    pub fn singleton(value: u64, bound: u64) -> Self {
        let mut points = Self::empty_subset();
        if value <= bound {
            points.insert(value, 1);
        }
        points
    }

    /// Insert a point. Returns `true` if it was not present.
    pub fn insert(&mut self, sum: u64, cardinality: u64) -> bool {
        self.points.insert((sum, cardinality))
    }

    #[must_use]
    pub fn contains(&self, sum: u64, cardinality: u64) -> bool {
        self.points.contains(&(sum, cardinality))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate `(sum, cardinality)` points ordered by sum, then cardinality.
    pub fn iter(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.points.iter().copied()
    }

    /// Largest sum of any point.
    #[must_use]
    pub fn max_sum(&self) -> Option<u64> {
        self.points.last().map(|&(sum, _)| sum)
    }

    /// Largest cardinality of any point.
    #[must_use]
    pub fn max_cardinality(&self) -> Option<u64> {
        self.points.iter().map(|&(_, card)| card).max()
    }

    /// Project onto the sums, forgetting cardinalities.
    #[must_use]
    pub fn sums(&self) -> SubsetSums {
        self.points.iter().map(|&(sum, _)| sum).collect()
    }

    /// Smallest cardinality witnessing `sum`.
    #[must_use]
    pub fn min_cardinality(&self, sum: u64) -> Option<u64> {
        self.points
            .range((sum, 0)..=(sum, u64::MAX))
            .next()
            .map(|&(_, card)| card)
    }

    /// One cardinality per reachable sum; ties resolve to the smallest.
    #[must_use]
    pub fn witnesses(&self) -> BTreeMap<u64, u64> {
        let mut out = BTreeMap::new();
        for &(sum, card) in &self.points {
            out.entry(sum).or_insert(card);
        }
        out
    }
}

impl FromIterator<(u64, u64)> for CardinalitySums {
    fn from_iter<I: IntoIterator<Item = (u64, u64)>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

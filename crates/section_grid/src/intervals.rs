//! Merged set of half-open column ranges.

use std::collections::BTreeMap;

/// Sorted, non-overlapping, non-adjacent `[start, end)` column ranges.
///
/// Inserting a range that touches or overlaps existing ones merges them, so a
/// lookup for the range containing a column needs at most one ordered probe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnRanges {
    /// Range start mapped to exclusive range end
    ranges: BTreeMap<usize, usize>,
}

impl ColumnRanges {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `[start, end)`, merging with any range it touches.
    pub fn insert(&mut self, start: usize, end: usize) {
        if start >= end {
            return;
        }
        let mut merged_start = start;
        let mut merged_end = end;

        if let Some((&prev_start, &prev_end)) = self.ranges.range(..=start).next_back()
            && prev_end >= start
        {
            merged_start = prev_start;
            merged_end = merged_end.max(prev_end);
        }

        let absorbed: Vec<usize> = self
            .ranges
            .range(merged_start..=merged_end)
            .map(|(&key, _)| key)
            .collect();
        for key in absorbed {
            if let Some(old_end) = self.ranges.remove(&key) {
                merged_end = merged_end.max(old_end);
            }
        }

        self.ranges.insert(merged_start, merged_end);
    }

    /// The range containing `column`, if any.
    pub fn containing(&self, column: usize) -> Option<(usize, usize)> {
        self.ranges
            .range(..=column)
            .next_back()
            .filter(|&(_, &end)| end > column)
            .map(|(&start, &end)| (start, end))
    }

    /// First column at or after `column` not inside any range.
    pub fn next_free(&self, column: usize) -> usize {
        self.containing(column).map_or(column, |(_, end)| end)
    }

    /// Whether every column in `[start, end)` is inside the set.
    pub fn covers(&self, start: usize, end: usize) -> bool {
        if start >= end {
            return true;
        }
        self.containing(start)
            .is_some_and(|(_, range_end)| range_end >= end)
    }

    /// Whether the set holds no ranges.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Iterate over `(start, end)` pairs in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.ranges.iter().map(|(&start, &end)| (start, end))
    }
}

impl FromIterator<(usize, usize)> for ColumnRanges {
    fn from_iter<I: IntoIterator<Item = (usize, usize)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (start, end) in iter {
            set.insert(start, end);
        }
        set
    }
}

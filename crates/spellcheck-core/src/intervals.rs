//! Non-overlapping interval sets.
//!
//! The headless editor stores indicator layers and lexer style runs as sorted,
//! non-overlapping `[start, end)` byte intervals carrying a value. Lookups are binary
//! searches; edits shift the intervals that follow them.

use std::ops::Range;

/// One `[start, end)` interval with its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    /// Start offset.
    pub start: usize,
    /// End offset (exclusive).
    pub end: usize,
    /// Value painted over the interval (indicator value or style id).
    pub value: u32,
}

impl Interval {
    /// Create a new interval.
    pub fn new(start: usize, end: usize, value: u32) -> Self {
        Self { start, end, value }
    }

    /// Check if the interval contains `pos`.
    pub fn contains(&self, pos: usize) -> bool {
        self.start <= pos && pos < self.end
    }

    /// Byte range covered.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Sorted set of non-overlapping intervals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntervalSet {
    intervals: Vec<Interval>,
}

impl IntervalSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Returns `true` if nothing is painted.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Iterate intervals in order.
    pub fn iter(&self) -> impl Iterator<Item = &Interval> {
        self.intervals.iter()
    }

    /// Covered ranges in order.
    pub fn ranges(&self) -> Vec<Range<usize>> {
        self.intervals.iter().map(Interval::range).collect()
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.intervals.clear();
    }

    /// Value at `pos`, or 0 when nothing covers it.
    pub fn value_at(&self, pos: usize) -> u32 {
        let idx = self.intervals.partition_point(|iv| iv.end <= pos);
        match self.intervals.get(idx) {
            Some(iv) if iv.contains(pos) => iv.value,
            _ => 0,
        }
    }

    /// Paint `value` over `start..end`, replacing whatever was there.
    ///
    /// Touching neighbours with the same value are merged.
    pub fn fill(&mut self, start: usize, end: usize, value: u32) {
        if start >= end {
            return;
        }
        self.clear_range(start, end);

        let mut idx = self.intervals.partition_point(|iv| iv.start < start);
        let mut interval = Interval::new(start, end, value);

        if idx > 0 {
            let prev = &self.intervals[idx - 1];
            if prev.end == start && prev.value == value {
                interval.start = prev.start;
                self.intervals.remove(idx - 1);
                idx -= 1;
            }
        }
        if let Some(next) = self.intervals.get(idx)
            && next.start == end
            && next.value == value
        {
            interval.end = next.end;
            self.intervals.remove(idx);
        }
        self.intervals.insert(idx, interval);
    }

    /// Remove coverage of `start..end`, splitting intervals that straddle the edges.
    pub fn clear_range(&mut self, start: usize, end: usize) {
        if start >= end {
            return;
        }
        let first = self.intervals.partition_point(|iv| iv.end <= start);
        let last = self.intervals.partition_point(|iv| iv.start < end);
        if first >= last {
            return;
        }

        let mut kept = Vec::new();
        let head = &self.intervals[first];
        if head.start < start {
            kept.push(Interval::new(head.start, start, head.value));
        }
        let tail = &self.intervals[last - 1];
        if tail.end > end {
            kept.push(Interval::new(end, tail.end, tail.value));
        }
        self.intervals.splice(first..last, kept);
    }

    /// Shift intervals for `delta` bytes inserted at `pos`.
    pub fn update_for_insertion(&mut self, pos: usize, delta: usize) {
        for interval in &mut self.intervals {
            if interval.start >= pos {
                interval.start += delta;
                interval.end += delta;
            } else if interval.end > pos {
                interval.end += delta;
            }
        }
    }

    /// Shift intervals for the deletion of `start..end`.
    pub fn update_for_deletion(&mut self, start: usize, end: usize) {
        let delta = end - start;
        for interval in &mut self.intervals {
            let shift = |p: usize| {
                if p >= end {
                    p - delta
                } else if p > start {
                    start
                } else {
                    p
                }
            };
            interval.start = shift(interval.start);
            interval.end = shift(interval.end);
        }
        self.intervals.retain(|iv| iv.start < iv.end);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_and_query() {
        let mut set = IntervalSet::new();
        set.fill(5, 10, 1);
        set.fill(20, 25, 1);
        assert_eq!(set.value_at(4), 0);
        assert_eq!(set.value_at(5), 1);
        assert_eq!(set.value_at(9), 1);
        assert_eq!(set.value_at(10), 0);
        assert_eq!(set.ranges(), vec![5..10, 20..25]);
    }

    #[test]
    fn test_fill_merges_touching_neighbours() {
        let mut set = IntervalSet::new();
        set.fill(0, 5, 1);
        set.fill(10, 15, 1);
        set.fill(5, 10, 1);
        assert_eq!(set.ranges(), vec![0..15]);

        set.fill(3, 4, 2);
        assert_eq!(set.len(), 3);
        assert_eq!(set.value_at(3), 2);
    }

    #[test]
    fn test_clear_range_splits() {
        let mut set = IntervalSet::new();
        set.fill(0, 20, 7);
        set.clear_range(5, 10);
        assert_eq!(set.ranges(), vec![0..5, 10..20]);
        set.clear_range(0, 100);
        assert!(set.is_empty());
    }

    #[test]
    fn test_edits_shift_intervals() {
        let mut set = IntervalSet::new();
        set.fill(10, 20, 1);
        set.update_for_insertion(0, 5);
        assert_eq!(set.ranges(), vec![15..25]);
        set.update_for_deletion(0, 5);
        assert_eq!(set.ranges(), vec![10..20]);
        set.update_for_deletion(12, 30);
        assert_eq!(set.ranges(), vec![10..12]);
        set.update_for_deletion(5, 15);
        assert!(set.is_empty());
    }
}

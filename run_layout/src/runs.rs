// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coalesced attribute runs over the whole position space.

use editable_layout::TextRange;
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq)]
struct Run<T> {
    start: u32,
    value: T,
}

/// The values of one attribute over `0..u32::MAX`, stored as maximal runs.
///
/// Each run extends to the start of the next one (the last run extends to `u32::MAX`), and
/// adjacent runs never hold equal values, so [`RunList::get`] always reports the largest range
/// over which the attribute is uniform.
#[derive(Clone, Debug, PartialEq)]
pub struct RunList<T> {
    // Invariant: non-empty, `runs[0].start == 0`, starts strictly increasing.
    runs: SmallVec<[Run<T>; 4]>,
}

impl<T: Clone + PartialEq> RunList<T> {
    /// Creates a list holding `value` everywhere.
    pub fn new(value: T) -> Self {
        let mut runs = SmallVec::new();
        runs.push(Run { start: 0, value });
        Self { runs }
    }

    fn index_at(&self, position: u32) -> usize {
        // `runs[0].start == 0`, so the partition point is at least 1.
        self.runs.partition_point(|run| run.start <= position) - 1
    }

    fn run_range(&self, index: usize) -> TextRange {
        let end = self.runs.get(index + 1).map_or(u32::MAX, |next| next.start);
        TextRange::from_bounds(self.runs[index].start, end)
    }

    /// The value at `position` and the run that contains it.
    pub fn get(&self, position: u32) -> (&T, TextRange) {
        let index = self.index_at(position);
        (&self.runs[index].value, self.run_range(index))
    }

    /// Makes sure a run starts at `position`.
    fn split_at(&mut self, position: u32) {
        if position == u32::MAX {
            return;
        }
        let index = self.index_at(position);
        if self.runs[index].start != position {
            let value = self.runs[index].value.clone();
            self.runs.insert(
                index + 1,
                Run {
                    start: position,
                    value,
                },
            );
        }
    }

    /// Sets `value` over `range`, merging with equal neighbours.
    pub fn set(&mut self, range: TextRange, value: T) {
        let range = range.clamped();
        if range.is_empty() {
            return;
        }
        let end = range.end();
        self.split_at(end);
        self.split_at(range.start);

        let first = self.index_at(range.start);
        let last = if end == u32::MAX {
            self.runs.len()
        } else {
            self.index_at(end)
        };
        self.runs.drain(first + 1..last);
        self.runs[first].value = value;

        if first + 1 < self.runs.len() && self.runs[first + 1].value == self.runs[first].value {
            self.runs.remove(first + 1);
        }
        if first > 0 && self.runs[first - 1].value == self.runs[first].value {
            self.runs.remove(first);
        }
    }

    /// The number of runs.
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Always `false`: a run list covers the whole position space.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over the runs and their values.
    pub fn iter(&self) -> impl Iterator<Item = (TextRange, &T)> + '_ {
        (0..self.runs.len()).map(|index| (self.run_range(index), &self.runs[index].value))
    }

    /// The ranges of all runs that start before `end`.
    pub fn ranges_before(&self, end: u32) -> impl Iterator<Item = TextRange> + '_ {
        self.iter()
            .map(|(range, _)| range)
            .take_while(move |range| range.start < end)
    }
}

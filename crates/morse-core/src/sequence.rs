//! Compiled interval sequences

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::interval::{Interval, IntervalKind};
use crate::playback::{Playable, StateSetter, Waiter};
use crate::timing::MorseTiming;

/// An ordered run of intervals, ready to play.
///
/// Nested sequences are flattened when they are appended, so a sequence is
/// always a flat list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sequence {
    intervals: Vec<Interval>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            intervals: Vec::with_capacity(capacity),
        }
    }

    /// Build a sequence from kinds taken literally (no gaps inserted)
    pub fn from_kinds(kinds: &[IntervalKind]) -> Self {
        kinds.iter().copied().collect()
    }

    pub fn push(&mut self, kind: IntervalKind) {
        self.intervals.push(Interval::new(kind));
    }

    /// Append every interval of `other`
    pub fn append(&mut self, other: &Sequence) {
        self.intervals.extend_from_slice(&other.intervals);
    }

    /// Join several sequences in order
    pub fn concat<'a>(parts: impl IntoIterator<Item = &'a Sequence>) -> Self {
        let mut out = Self::new();
        for part in parts {
            out.append(part);
        }
        out
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn iter(&self) -> impl Iterator<Item = &Interval> {
        self.intervals.iter()
    }

    pub fn kinds(&self) -> impl Iterator<Item = IntervalKind> + '_ {
        self.intervals.iter().map(|i| i.kind())
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn first(&self) -> Option<IntervalKind> {
        self.intervals.first().map(|i| i.kind())
    }

    pub fn last(&self) -> Option<IntervalKind> {
        self.intervals.last().map(|i| i.kind())
    }

    /// Number of dots and dashes
    pub fn active_count(&self) -> usize {
        self.intervals.iter().filter(|i| i.is_active()).count()
    }

    /// Number of on/off state changes when played from an "off" start
    pub fn transitions(&self) -> usize {
        let mut state = false;
        let mut count = 0;
        for interval in &self.intervals {
            if interval.is_active() != state {
                state = interval.is_active();
                count += 1;
            }
        }
        count
    }

    /// Total time a full play of this sequence waits under `timing`
    pub fn total_duration<T: MorseTiming + ?Sized>(&self, timing: &T) -> Duration {
        self.intervals
            .iter()
            .map(|i| timing.duration_of(i.kind()))
            .sum()
    }
}

impl Playable for Sequence {
    fn play<E, S, W, T>(&self, setter: &mut S, waiter: &mut W, timing: &T) -> Result<(), E>
    where
        S: StateSetter<E> + ?Sized,
        W: Waiter<E> + ?Sized,
        T: MorseTiming + ?Sized,
    {
        self.intervals[..].play(setter, waiter, timing)
    }
}

impl FromIterator<IntervalKind> for Sequence {
    fn from_iter<I: IntoIterator<Item = IntervalKind>>(iter: I) -> Self {
        Self {
            intervals: iter.into_iter().map(Interval::new).collect(),
        }
    }
}

impl Extend<IntervalKind> for Sequence {
    fn extend<I: IntoIterator<Item = IntervalKind>>(&mut self, iter: I) {
        self.intervals.extend(iter.into_iter().map(Interval::new));
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

/// Renders `.` and `-`, a space between letters and ` / ` between words
impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for interval in &self.intervals {
            match interval.kind() {
                IntervalKind::Dot => f.write_str(".")?,
                IntervalKind::Dash => f.write_str("-")?,
                IntervalKind::IntraSymbolGap => {}
                IntervalKind::LetterGap => f.write_str(" ")?,
                IntervalKind::WordGap => f.write_str(" / ")?,
            }
        }
        Ok(())
    }
}

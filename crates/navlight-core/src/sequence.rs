use crate::Segment;
use serde::{Deserialize, Serialize};

/// A finite, ordered list of segments replayed cyclically
///
/// The compiler only ever produces non-empty sequences with positive segment
/// durations; that pair of guarantees is what lets a timer-driven playback
/// loop schedule each step and stop cleanly on teardown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sequence {
    segments: Vec<Segment>,
}

impl Sequence {
    pub fn new(segments: Vec<Segment>) -> Self {
        Sequence { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Sum of all segment durations, in seconds
    pub fn total_duration(&self) -> f64 {
        self.segments.iter().map(|s| s.duration).sum()
    }

    /// Endless cyclic iteration over the segments
    pub fn cycle(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter().cycle()
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// Cyclic cursor over a sequence
///
/// Pure index arithmetic for timer-driven playback loops: the loop shows
/// `current`, sleeps for its duration, then calls `advance`. The index wraps
/// modulo the sequence length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playhead {
    index: usize,
}

impl Playhead {
    pub fn new() -> Self {
        Playhead::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The segment under the cursor; `None` only for an empty sequence
    pub fn current<'a>(&self, sequence: &'a Sequence) -> Option<&'a Segment> {
        sequence.get(self.index)
    }

    /// Step to the next segment, wrapping at the end
    pub fn advance(&mut self, sequence: &Sequence) {
        self.index = (self.index + 1) % sequence.len().max(1);
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}

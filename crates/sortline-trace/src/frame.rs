//! Frames and traces: the replay protocol shared by every algorithm.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Value;

/// Discriminant of a [`Frame`], useful for counting and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "lowercase"))]
pub enum FrameKind {
    Compare,
    Swap,
    Settled,
}

/// One discrete, replayable event of a sorting run.
///
/// Every variant carries the full sequence as it stands immediately
/// after the event was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(tag = "type", rename_all = "lowercase"))]
pub enum Frame {
    /// Two positions were examined. The sequence is unchanged.
    Compare {
        indices: [usize; 2],
        snapshot: Vec<Value>,
    },

    /// Two positions were exchanged. The snapshot already reflects it.
    Swap {
        indices: [usize; 2],
        snapshot: Vec<Value>,
    },

    /// A position holds its final sorted value.
    Settled {
        index: usize,
        snapshot: Vec<Value>,
    },
}

impl Frame {
    /// Get the kind of this frame.
    pub fn kind(&self) -> FrameKind {
        match self {
            Frame::Compare { .. } => FrameKind::Compare,
            Frame::Swap { .. } => FrameKind::Swap,
            Frame::Settled { .. } => FrameKind::Settled,
        }
    }

    /// Positions implicated by this frame (two for compare/swap, one for settled).
    pub fn indices(&self) -> &[usize] {
        match self {
            Frame::Compare { indices, .. } | Frame::Swap { indices, .. } => indices,
            Frame::Settled { index, .. } => std::slice::from_ref(index),
        }
    }

    /// The sequence after this frame was applied.
    pub fn snapshot(&self) -> &[Value] {
        match self {
            Frame::Compare { snapshot, .. }
            | Frame::Swap { snapshot, .. }
            | Frame::Settled { snapshot, .. } => snapshot,
        }
    }
}

/// The complete, ordered output of one algorithm run against one input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Trace {
    frames: Vec<Frame>,
}

impl Trace {
    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Get the frame at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    /// Count frames of the given kind.
    pub fn count(&self, kind: FrameKind) -> usize {
        self.frames.iter().filter(|f| f.kind() == kind).count()
    }

    /// Number of compare frames (what a full replay reports as comparisons).
    pub fn compare_count(&self) -> usize {
        self.count(FrameKind::Compare)
    }

    /// Number of swap frames (what a full replay reports as swaps).
    pub fn swap_count(&self) -> usize {
        self.count(FrameKind::Swap)
    }

    /// Ascending, de-duplicated union of every settled index in the trace.
    pub fn settled_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self
            .frames
            .iter()
            .filter_map(|f| match f {
                Frame::Settled { index, .. } => Some(*index),
                _ => None,
            })
            .collect();
        indices.sort_unstable();
        indices.dedup();
        indices
    }

    /// Snapshot carried by the last frame. `None` for an empty trace.
    pub fn final_snapshot(&self) -> Option<&[Value]> {
        self.frames.last().map(Frame::snapshot)
    }
}

impl From<Vec<Frame>> for Trace {
    fn from(frames: Vec<Frame>) -> Self {
        Self { frames }
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

/// Working copy plus growing frame list, threaded explicitly through
/// every generator (and every recursive call of quick sort).
pub(crate) struct Recorder {
    values: Vec<Value>,
    frames: Vec<Frame>,
    settled: Vec<bool>,
}

impl Recorder {
    pub(crate) fn new(input: &[Value]) -> Self {
        Self {
            values: input.to_vec(),
            frames: Vec::new(),
            settled: vec![false; input.len()],
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    pub(crate) fn value(&self, index: usize) -> Value {
        self.values[index]
    }

    pub(crate) fn compare(&mut self, a: usize, b: usize) {
        self.frames.push(Frame::Compare {
            indices: [a, b],
            snapshot: self.values.clone(),
        });
    }

    /// Exchange two positions and record the result.
    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.values.swap(a, b);
        self.frames.push(Frame::Swap {
            indices: [a, b],
            snapshot: self.values.clone(),
        });
    }

    /// Record a settled frame, even if the index was settled before.
    pub(crate) fn settle(&mut self, index: usize) {
        self.settled[index] = true;
        self.frames.push(Frame::Settled {
            index,
            snapshot: self.values.clone(),
        });
    }

    /// Record a settled frame unless the index is already marked.
    pub(crate) fn settle_once(&mut self, index: usize) -> bool {
        if self.settled[index] {
            return false;
        }
        self.settle(index);
        true
    }

    /// Settle every index the algorithm left unmarked, ascending, and
    /// hand back the finished trace.
    pub(crate) fn finish(mut self) -> Trace {
        for index in 0..self.values.len() {
            self.settle_once(index);
        }
        Trace::from(self.frames)
    }
}

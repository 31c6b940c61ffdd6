//! Algorithm selection and the display metadata that goes with it.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::frame::Trace;
use crate::{bubble_sort, insertion_sort, quick_sort, selection_sort, Value};

/// The sorting algorithms a trace can be generated for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "lowercase"))]
pub enum Algorithm {
    #[default]
    Bubble,
    Insertion,
    Selection,
    Quick,
}

impl Algorithm {
    /// Every algorithm, in display order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Quick,
    ];

    /// Generate the trace for this algorithm. `input` is never mutated.
    pub fn trace(&self, input: &[Value]) -> Trace {
        match self {
            Algorithm::Bubble => bubble_sort(input),
            Algorithm::Insertion => insertion_sort(input),
            Algorithm::Selection => selection_sort(input),
            Algorithm::Quick => quick_sort(input),
        }
    }

    /// Stable lowercase identifier, as used on the wire.
    pub const fn id(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Selection => "selection",
            Algorithm::Quick => "quick",
        }
    }

    /// Look up the display metadata for this algorithm.
    pub const fn info(&self) -> AlgorithmInfo {
        match self {
            Algorithm::Bubble => AlgorithmInfo {
                name: "Bubble Sort",
                best_case: "O(n)",
                average_case: "O(n²)",
                worst_case: "O(n²)",
                space: "O(1)",
                comparisons: "O(n²)",
                swaps: "O(n²)",
            },
            Algorithm::Insertion => AlgorithmInfo {
                name: "Insertion Sort",
                best_case: "O(n)",
                average_case: "O(n²)",
                worst_case: "O(n²)",
                space: "O(1)",
                comparisons: "O(n²)",
                swaps: "O(n²)",
            },
            Algorithm::Selection => AlgorithmInfo {
                name: "Selection Sort",
                best_case: "O(n²)",
                average_case: "O(n²)",
                worst_case: "O(n²)",
                space: "O(1)",
                comparisons: "O(n²)",
                swaps: "O(n)",
            },
            Algorithm::Quick => AlgorithmInfo {
                name: "Quick Sort",
                best_case: "O(n log n)",
                average_case: "O(n log n)",
                worst_case: "O(n²)",
                space: "O(log n)",
                comparisons: "O(n log n)",
                swaps: "O(n log n)",
            },
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Returned when parsing an unknown algorithm identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm: {0:?} (expected bubble, insertion, selection or quick)")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.id() == wanted)
            .ok_or_else(|| ParseAlgorithmError(s.to_string()))
    }
}

/// Complexity annotations shown next to a running algorithm.
///
/// Purely informational: nothing in trace generation or playback reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub best_case: &'static str,
    pub average_case: &'static str,
    pub worst_case: &'static str,
    pub space: &'static str,
    pub comparisons: &'static str,
    pub swaps: &'static str,
}

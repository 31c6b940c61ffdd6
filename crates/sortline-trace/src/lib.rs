//! Sortline Trace Generation
//!
//! Runs classic comparison sorts against a copy of an input sequence and
//! records every step as a replayable [`Frame`].
//!
//! # Frame Protocol
//!
//! All four algorithms emit the same three events, whatever their control
//! flow looks like:
//! - **Compare**: two positions were examined (sequence unchanged)
//! - **Swap**: two positions were exchanged
//! - **Settled**: a position holds its final value
//!
//! Each frame carries the full sequence as it stands after the event, so a
//! player can jump to any frame without replaying the ones before it.
//!
//! # Guarantees
//!
//! For an input of length N, the trace:
//! - is empty for N = 0, and a single `Settled(0)` for N = 1
//! - settles every index in `0..N` at least once by its final frame
//! - ends on a snapshot that is the input's values in ascending order
//! - never mutates the caller's input
//!
//! Comparison and swap frame counts are meaningful as complexity
//! demonstrations: replaying a trace in full reports exactly
//! [`Trace::compare_count`] comparisons and [`Trace::swap_count`] swaps.

mod algorithm;
mod bubble;
mod frame;
mod insertion;
mod quick;
mod selection;

pub use algorithm::{Algorithm, AlgorithmInfo, ParseAlgorithmError};
pub use bubble::bubble_sort;
pub use frame::{Frame, FrameKind, Trace};
pub use insertion::insertion_sort;
pub use quick::quick_sort;
pub use selection::selection_sort;

/// A single element of a sequence.
pub type Value = u32;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sorted(values: &[Value]) -> Vec<Value> {
        let mut v = values.to_vec();
        v.sort_unstable();
        v
    }

    #[test]
    fn empty_input_yields_empty_trace() {
        for algorithm in Algorithm::ALL {
            assert!(algorithm.trace(&[]).is_empty(), "{algorithm}");
        }
    }

    #[test]
    fn single_element_is_one_settled_frame() {
        for algorithm in Algorithm::ALL {
            let trace = algorithm.trace(&[42]);
            assert_eq!(
                trace.frames(),
                &[Frame::Settled { index: 0, snapshot: vec![42] }],
                "{algorithm}"
            );
        }
    }

    #[test]
    fn duplicates_sort_by_value() {
        let input = [7, 3, 7, 3, 7];
        for algorithm in Algorithm::ALL {
            let trace = algorithm.trace(&input);
            assert_eq!(trace.final_snapshot(), Some(&[3, 3, 7, 7, 7][..]), "{algorithm}");
        }
    }

    proptest! {
        #[test]
        fn final_snapshot_is_sorted_permutation(
            input in prop::collection::vec(5u32..=100, 0..=200)
        ) {
            let expected = sorted(&input);
            for algorithm in Algorithm::ALL {
                let trace = algorithm.trace(&input);
                match trace.final_snapshot() {
                    Some(last) => prop_assert_eq!(last, expected.as_slice()),
                    None => prop_assert!(input.is_empty()),
                }
            }
        }

        #[test]
        fn every_index_is_settled(
            input in prop::collection::vec(0u32..=1000, 0..=200)
        ) {
            for algorithm in Algorithm::ALL {
                let trace = algorithm.trace(&input);
                let expected: Vec<usize> = (0..input.len()).collect();
                prop_assert_eq!(trace.settled_indices(), expected);
            }
        }

        #[test]
        fn bubble_selection_quick_settle_exactly_once(
            input in prop::collection::vec(0u32..=50, 0..=120)
        ) {
            for algorithm in [Algorithm::Bubble, Algorithm::Selection, Algorithm::Quick] {
                let trace = algorithm.trace(&input);
                prop_assert_eq!(trace.count(FrameKind::Settled), input.len());
            }
        }

        #[test]
        fn frames_reference_valid_positions(
            input in prop::collection::vec(0u32..=100, 1..=60)
        ) {
            for algorithm in Algorithm::ALL {
                for frame in &algorithm.trace(&input) {
                    prop_assert!(frame.indices().iter().all(|&i| i < input.len()));
                    prop_assert_eq!(frame.snapshot().len(), input.len());
                    if frame.kind() != FrameKind::Settled {
                        prop_assert_eq!(frame.indices().len(), 2);
                    }
                }
            }
        }

        #[test]
        fn compare_frames_leave_sequence_unchanged(
            input in prop::collection::vec(0u32..=100, 2..=60)
        ) {
            for algorithm in Algorithm::ALL {
                let trace = algorithm.trace(&input);
                let mut previous: &[Value] = &input;
                for frame in &trace {
                    if frame.kind() == FrameKind::Compare {
                        prop_assert_eq!(frame.snapshot(), previous);
                    }
                    previous = frame.snapshot();
                }
            }
        }
    }
}

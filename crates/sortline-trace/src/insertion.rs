//! Insertion sort trace generation.

use crate::frame::{Recorder, Trace};
use crate::Value;

/// Run insertion sort on a copy of `input`, recording every step.
///
/// Index 0 is settled up front. Each following key walks left one
/// adjacent exchange at a time while the candidate to its left is
/// larger, so every snapshot stays a permutation of the input and the
/// last exchange is the key's placement. The key's resting position is
/// then settled.
pub fn insertion_sort(input: &[Value]) -> Trace {
    let mut rec = Recorder::new(input);
    let n = rec.len();
    if n == 0 {
        return rec.finish();
    }

    rec.settle(0);

    for i in 1..n {
        let mut j = i;
        while j > 0 {
            rec.compare(j - 1, j);
            if rec.value(j - 1) > rec.value(j) {
                rec.swap(j - 1, j);
                j -= 1;
            } else {
                break;
            }
        }
        rec.settle(j);
    }

    rec.finish()
}

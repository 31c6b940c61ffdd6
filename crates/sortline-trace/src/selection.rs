//! Selection sort trace generation.

use crate::frame::{Recorder, Trace};
use crate::Value;

/// Run selection sort on a copy of `input`, recording every step.
///
/// For each boundary `i` the remainder is scanned against the running
/// minimum; the minimum is swapped into `i` only when it lives elsewhere.
pub fn selection_sort(input: &[Value]) -> Trace {
    let mut rec = Recorder::new(input);
    let n = rec.len();
    if n == 0 {
        return rec.finish();
    }

    for i in 0..n - 1 {
        let mut min_index = i;
        for j in i + 1..n {
            rec.compare(min_index, j);
            if rec.value(j) < rec.value(min_index) {
                min_index = j;
            }
        }

        if min_index != i {
            rec.swap(i, min_index);
        }
        rec.settle(i);
    }
    rec.settle(n - 1);

    rec.finish()
}

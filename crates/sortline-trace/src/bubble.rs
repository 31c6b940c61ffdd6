//! Bubble sort trace generation.

use crate::frame::{Recorder, Trace};
use crate::Value;

/// Run bubble sort on a copy of `input`, recording every step.
///
/// Each pass sweeps adjacent pairs left to right over a window that
/// shrinks by one, settling the window's right boundary. A pass without
/// a single swap ends the run; the positions it never reached are
/// settled afterwards.
pub fn bubble_sort(input: &[Value]) -> Trace {
    let mut rec = Recorder::new(input);
    let n = rec.len();

    for pass in 0..n {
        let boundary = n - pass - 1;
        let mut swapped = false;

        for j in 0..boundary {
            rec.compare(j, j + 1);
            if rec.value(j) > rec.value(j + 1) {
                rec.swap(j, j + 1);
                swapped = true;
            }
        }

        rec.settle(boundary);

        if !swapped {
            break;
        }
    }

    rec.finish()
}

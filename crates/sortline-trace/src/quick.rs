//! Quick sort trace generation (Lomuto partition, last element as pivot).

use crate::frame::{Recorder, Trace};
use crate::Value;

/// Run quick sort on a copy of `input`, recording every step.
pub fn quick_sort(input: &[Value]) -> Trace {
    let mut rec = Recorder::new(input);
    let n = rec.len();
    sort_range(&mut rec, 0, n);
    rec.finish()
}

/// Sort the half-open range `low..high`.
fn sort_range(rec: &mut Recorder, low: usize, high: usize) {
    match high.saturating_sub(low) {
        0 => {}
        1 => {
            rec.settle_once(low);
        }
        _ => {
            let pivot = partition(rec, low, high - 1);
            sort_range(rec, low, pivot);
            sort_range(rec, pivot + 1, high);
        }
    }
}

/// Partition `low..=high` around the value at `high` and return the
/// pivot's final index, which is settled here.
fn partition(rec: &mut Recorder, low: usize, high: usize) -> usize {
    let pivot = rec.value(high);
    let mut store = low;

    for j in low..high {
        rec.compare(j, high);
        if rec.value(j) <= pivot {
            if store != j {
                rec.swap(store, j);
            }
            store += 1;
        }
    }

    if store != high {
        rec.swap(store, high);
    }
    rec.settle_once(store);

    store
}

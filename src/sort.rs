//! In-place slice sorts: bubble, insertion, merge, and quick.
//!
//! All four sort ascending per the element type's [`Ord`] and accept empty
//! and single-element slices as no-ops. [`bubble`], [`insertion`], and
//! [`merge`] are stable; [`quick`] is not.
//!
//! # Examples
//!
//! ```
//! let mut data = [5, 3, 8, 1];
//! adt::sort::quick(&mut data);
//! assert_eq!(data, [1, 3, 5, 8]);
//! ```

/// Bubble sort: repeatedly swaps adjacent out-of-order elements, bubbling the
/// largest remaining element to the end of each pass. Exits early once a pass
/// makes no swap, so already-sorted input is `O(n)`; the worst case is
/// `O(n^2)`. Stable.
pub fn bubble<T: Ord>(data: &mut [T]) {
    let len = data.len();
    for pass in 0..len.saturating_sub(1) {
        let mut swapped = false;
        for i in 0..len - 1 - pass {
            if data[i] > data[i + 1] {
                data.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            return;
        }
    }
}

/// Insertion sort: grows a sorted prefix by sinking each element leftward to
/// its place. `O(n)` on sorted input, `O(n^2)` worst case; the sort of choice
/// for small or nearly-sorted slices. Stable.
pub fn insertion<T: Ord>(data: &mut [T]) {
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && data[j - 1] > data[j] {
            data.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Merge sort: top-down, splitting at the midpoint and merging the sorted
/// halves through an auxiliary buffer. `O(n log n)` in every case, at the
/// price of `O(n)` scratch space — hence the `Clone` bound, which pays for
/// the buffer. Stable.
pub fn merge<T: Ord + Clone>(data: &mut [T]) {
    if data.len() < 2 {
        return;
    }
    let mut aux = data.to_vec();
    merge_into(data, &mut aux);
}

/// Recursively sorts `data`, using `aux` (same length) as scratch space.
fn merge_into<T: Ord + Clone>(data: &mut [T], aux: &mut [T]) {
    if data.len() < 2 {
        return;
    }
    let mid = data.len() / 2;
    {
        let (lo, hi) = data.split_at_mut(mid);
        let (aux_lo, aux_hi) = aux.split_at_mut(mid);
        merge_into(lo, aux_lo);
        merge_into(hi, aux_hi);
    }

    // Merge the two sorted halves into aux, then copy back. Taking from the
    // left half on ties keeps the sort stable.
    let mut i = 0;
    let mut j = mid;
    for slot in aux.iter_mut() {
        if i < mid && (j >= data.len() || data[i] <= data[j]) {
            *slot = data[i].clone();
            i += 1;
        } else {
            *slot = data[j].clone();
            j += 1;
        }
    }
    data.clone_from_slice(aux);
}

/// Quicksort: Lomuto partition around a last-element pivot, then recurses
/// into both sides. `O(n log n)` on average; already-sorted input hits the
/// `O(n^2)` worst case (the pivot choice is the textbook one, not a robust
/// one). Not stable.
pub fn quick<T: Ord>(data: &mut [T]) {
    if data.len() < 2 {
        return;
    }
    let pivot = partition(data);
    let (lo, hi) = data.split_at_mut(pivot);
    quick(lo);
    quick(&mut hi[1..]);
}

/// Partitions `data` around its last element, returning the pivot's final
/// index: everything left of it is `<=` the pivot, everything right of it is
/// greater.
fn partition<T: Ord>(data: &mut [T]) -> usize {
    let hi = data.len() - 1;
    let mut store = 0;
    for i in 0..hi {
        if data[i] <= data[hi] {
            data.swap(store, i);
            store += 1;
        }
    }
    data.swap(store, hi);
    store
}

use std::cmp::Ordering;

sort_impl!("quicksort");

/// Sorts the slice in place, without preserving the initial order of equal elements.
///
/// The first element of every range is used as pivot. That makes already sorted or reverse
/// sorted inputs *O*(*n*^2), which is exactly what the ordering sensitivity campaign measures.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    quicksort(v, &mut |a, b| a.lt(b));
}

/// Sorts the slice in place with a comparator function. See [`sort`].
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn quicksort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return;
    }

    let end = v.len() - 1;
    quicksort_range_by(v, 0, end, is_less);
}

/// Sorts the inclusive index range `v[start..=end]` in place.
///
/// # Panics
///
/// Panics with a [`ContractViolation`](crate::ContractViolation) if `start > end` or
/// `end >= v.len()`.
pub fn quicksort_range<T: Ord>(v: &mut [T], start: usize, end: usize) {
    quicksort_range_by(v, start, end, &mut |a, b| a.lt(b));
}

fn quicksort_range_by<T, F>(v: &mut [T], start: usize, end: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    contract!(start <= end, "inverted quicksort range {start}..={end}");
    contract!(
        end < v.len(),
        "quicksort range {start}..={end} out of bounds for len {}",
        v.len()
    );

    // Pending inclusive ranges. Only ranges holding at least two elements are pushed, which keeps
    // the stack at one entry for already sorted input instead of recursing n levels deep.
    let mut pending = Vec::new();
    if start < end {
        pending.push((start, end));
    }

    while let Some((start, end)) = pending.pop() {
        let pivot_pos = partition(v, start, end, is_less);

        if pivot_pos + 1 < end {
            pending.push((pivot_pos + 1, end));
        }
        if pivot_pos > start + 1 {
            pending.push((start, pivot_pos - 1));
        }
    }
}

/// Partitions `v[start..=end]` around the pivot `v[start]` and returns the pivot's final index.
///
/// On return every element left of the returned index is not greater than the pivot and every
/// element right of it is greater.
///
/// # Panics
///
/// Panics with a [`ContractViolation`](crate::ContractViolation) if `start > end` or
/// `end >= v.len()`.
pub fn partition<T, F>(v: &mut [T], start: usize, end: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    contract!(start <= end, "inverted partition range {start}..={end}");
    contract!(
        end < v.len(),
        "partition range {start}..={end} out of bounds for len {}",
        v.len()
    );

    // The pivot stays at `start` until the final swap, both scan pointers are always > start
    // while swapping.
    let mut left = start + 1;
    let mut right = end;

    while left <= right {
        // Skip elements <= pivot.
        while left <= right && !is_less(&v[start], &v[left]) {
            left += 1;
        }

        // Skip elements > pivot.
        while right >= left && is_less(&v[start], &v[right]) {
            right -= 1;
        }

        if left < right {
            v.swap(left, right);
            left += 1;
            right -= 1;
        }
    }

    v.swap(start, right);
    right
}

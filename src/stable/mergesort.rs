use std::cmp::Ordering;
use std::ptr;
use std::slice;

sort_impl!("merge_sort");

/// Sorts the slice.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* \* log(*n*))
/// worst-case.
///
/// # Current implementation
///
/// Plain top-down merge sort. Every level moves both halves into two freshly allocated buffers,
/// sorts them recursively and merges them back into `v`, so it allocates *O*(*n*) per level.
/// Recursion depth is bounded by log2(*n*).
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    merge_sort(v, &mut |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function. See [`sort`].
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn merge_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mid = len / 2;

    // The buffers keep a length of zero, so they never drop the elements bitwise copied into them.
    // Until the merge starts `v` still holds every element exactly once, which makes a panic in
    // `is_less` during the recursive calls harmless.
    let mut left_buf = Vec::<T>::with_capacity(mid);
    let mut right_buf = Vec::<T>::with_capacity(len - mid);

    // SAFETY: Both buffers have the capacity for their half and do not overlap `v`. The slices
    // built from them cover exactly the elements copied in.
    unsafe {
        ptr::copy_nonoverlapping(v.as_ptr(), left_buf.as_mut_ptr(), mid);
        ptr::copy_nonoverlapping(v.as_ptr().add(mid), right_buf.as_mut_ptr(), len - mid);

        let left = slice::from_raw_parts_mut(left_buf.as_mut_ptr(), mid);
        let right = slice::from_raw_parts_mut(right_buf.as_mut_ptr(), len - mid);

        merge_sort(left, is_less);
        merge_sort(right, is_less);

        merge_into(v.as_mut_ptr(), left, right, is_less);
    }
}

/// Merges the sorted runs `left` and `right` into `dst`.
///
/// On ties the element from `left` is written first, which keeps the merge stable.
///
/// # Panics
///
/// Panics with a [`ContractViolation`](crate::ContractViolation) if
/// `dst.len() != left.len() + right.len()`.
pub fn merge<T, F>(dst: &mut [T], left: &[T], right: &[T], is_less: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    contract!(
        dst.len() == left.len() + right.len(),
        "merge destination of len {} cannot hold runs of len {} and {}",
        dst.len(),
        left.len(),
        right.len()
    );

    // SAFETY: `dst` has room for both runs and, being a unique borrow, overlaps neither. `T: Copy`
    // means overwriting `dst` without dropping its old values is fine.
    unsafe { merge_into(dst.as_mut_ptr(), left, right, is_less) }
}

/// Moves the elements of `left` and `right` into `dst` in merged order.
///
/// SAFETY: `dst` must be valid for `left.len() + right.len()` writes and must not overlap either
/// run. Afterwards `dst` owns the elements, the runs must not be dropped.
unsafe fn merge_into<T, F>(dst: *mut T, left: &[T], right: &[T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut state = MergeState {
        left: left.as_ptr(),
        left_len: left.len(),
        i: 0,
        right: right.as_ptr(),
        right_len: right.len(),
        j: 0,
        dst,
        k: 0,
    };

    while state.i < state.left_len && state.j < state.right_len {
        let l = &*state.left.add(state.i);
        let r = &*state.right.add(state.j);

        if is_less(r, l) {
            ptr::copy_nonoverlapping(r, state.dst.add(state.k), 1);
            state.j += 1;
        } else {
            ptr::copy_nonoverlapping(l, state.dst.add(state.k), 1);
            state.i += 1;
        }
        state.k += 1;
    }

    // Dropping `state` appends whatever tail is left.
}

/// Progress of a merge. When dropped, copies the unmerged rest of both runs behind the merged
/// prefix, so `dst` ends up holding every element once even if `is_less` panics.
struct MergeState<T> {
    left: *const T,
    left_len: usize,
    i: usize,
    right: *const T,
    right_len: usize,
    j: usize,
    dst: *mut T,
    k: usize,
}

impl<T> Drop for MergeState<T> {
    fn drop(&mut self) {
        let left_rest = self.left_len - self.i;
        let right_rest = self.right_len - self.j;

        // SAFETY: `k == i + j`, so `dst` has exactly `left_rest + right_rest` unwritten slots left.
        unsafe {
            ptr::copy_nonoverlapping(self.left.add(self.i), self.dst.add(self.k), left_rest);
            ptr::copy_nonoverlapping(
                self.right.add(self.j),
                self.dst.add(self.k + left_rest),
                right_rest,
            );
        }
    }
}

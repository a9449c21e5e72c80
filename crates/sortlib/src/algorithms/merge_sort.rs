use crate::{Order, TUNED_PARAMS};

use super::common;

pub fn merge_sort<T: Ord + Clone>(data: &mut [T], order: Order) {
    let len = data.len();
    if len < 2 {
        return;
    }
    if order.is_sorted(data) {
        return;
    }

    let mut buf = data.to_vec();
    merge_sort_recursive(&mut buf, data, 0, len, order);
}

// Sorts `src[left..right]` into `dst[left..right]`, using `dst` as the source of the
// next level down. Both ranges hold the same elements on entry.
fn merge_sort_recursive<T: Ord + Clone>(
    src: &mut [T],
    dst: &mut [T],
    left: usize,
    right: usize,
    order: Order,
) {
    let len = right - left;
    if len <= TUNED_PARAMS.insertion_threshold {
        dst[left..right].clone_from_slice(&src[left..right]);
        common::insertion_sort(&mut dst[left..right], order);
        return;
    }

    let mid = left + (len >> 1);

    merge_sort_recursive(dst, src, left, mid, order);
    merge_sort_recursive(dst, src, mid, right, order);

    if !order.is_less(&src[mid], &src[mid - 1]) {
        dst[left..right].clone_from_slice(&src[left..right]);
        return;
    }

    common::merge_ranges(src, dst, left, mid, right, order);
}

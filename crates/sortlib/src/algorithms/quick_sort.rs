use crate::{Order, TUNED_PARAMS};

use super::{common, heap_sort};

/// Recursion depth is capped at `2.5 * log2(len)`; past it the range is heap sorted.
pub fn quick_sort<T: Ord + Clone>(data: &mut [T], order: Order) {
    if data.len() < 2 {
        return;
    }
    let depth_limit = common::quick_sort_depth_limit(data.len()) + 1;
    quick_sort_recursive(data, depth_limit, order);
}

fn quick_sort_recursive<T: Ord + Clone>(
    mut data: &mut [T],
    mut depth_limit: usize,
    order: Order,
) {
    while data.len() > TUNED_PARAMS.insertion_threshold {
        if depth_limit == 0 {
            heap_sort::heap_sort(data, order);
            return;
        }
        depth_limit -= 1;

        let pivot_idx = if data.len() >= TUNED_PARAMS.ninther_threshold {
            common::choose_pivot_ninther(data, order)
        } else {
            common::choose_pivot_median3(data, order)
        };
        let pivot = data[pivot_idx].clone();

        let split = common::partition_hoare(data, &pivot, order);
        if split == 0 || split + 1 == data.len() {
            let (lt, gt) = common::partition_3way(data, &pivot, order);
            if lt == 0 && gt == data.len() {
                return;
            }
            let (left, rest) = data.split_at_mut(lt);
            let (_, right) = rest.split_at_mut(gt - lt);
            data = sort_smaller_side(left, right, depth_limit, order);
            continue;
        }

        let (left, right) = data.split_at_mut(split + 1);
        data = sort_smaller_side(left, right, depth_limit, order);
    }

    common::insertion_sort(data, order);
}

// Recurses into the shorter half and hands the longer one back to the caller's loop.
#[inline]
fn sort_smaller_side<'a, T: Ord + Clone>(
    left: &'a mut [T],
    right: &'a mut [T],
    depth_limit: usize,
    order: Order,
) -> &'a mut [T] {
    if left.len() < right.len() {
        quick_sort_recursive(left, depth_limit, order);
        right
    } else {
        quick_sort_recursive(right, depth_limit, order);
        left
    }
}

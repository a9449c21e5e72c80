use crate::{DiscreteKey, Order, TUNED_PARAMS};

#[inline]
pub fn insertion_sort<T: Ord>(data: &mut [T], order: Order) {
    let len = data.len();
    if len < 2 {
        return;
    }

    for i in 1..len {
        let mut j = i;
        while j > 0 && order.is_less(&data[i], &data[j - 1]) {
            j -= 1;
        }
        // Rotating shifts data[j..i] right by one, so equal keys never pass each other.
        data[j..=i].rotate_right(1);
    }
}

#[inline]
pub fn floor_log2(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        usize::BITS as usize - 1 - n.leading_zeros() as usize
    }
}

#[inline]
pub fn quick_sort_depth_limit(n: usize) -> usize {
    let log = floor_log2(n);
    (log * TUNED_PARAMS.quick_sort_depth_factor_num) / TUNED_PARAMS.quick_sort_depth_factor_den
}

#[inline]
pub fn median3<T: Ord>(data: &[T], a: usize, b: usize, c: usize, order: Order) -> usize {
    let less = |x: usize, y: usize| order.is_less(&data[x], &data[y]);
    if less(a, b) {
        if less(b, c) {
            b
        } else if less(a, c) {
            c
        } else {
            a
        }
    } else if less(a, c) {
        a
    } else if less(b, c) {
        c
    } else {
        b
    }
}

#[inline]
pub fn choose_pivot_median3<T: Ord>(data: &[T], order: Order) -> usize {
    let len = data.len();
    median3(data, 0, len >> 1, len - 1, order)
}

#[inline]
pub fn choose_pivot_ninther<T: Ord>(data: &[T], order: Order) -> usize {
    if data.len() < 64 {
        return choose_pivot_median3(data, order);
    }

    let step = data.len() / 8;
    let m1 = median3(data, 0, step, step * 2, order);
    let mid = data.len() / 2;
    let m2 = median3(data, mid - step, mid, mid + step, order);
    let r = data.len() - 1;
    let m3 = median3(data, r - step * 2, r - step, r, order);
    median3(data, m1, m2, m3, order)
}

#[inline]
pub fn key_bounds<K: DiscreteKey>(data: &[K]) -> Option<(u64, u64)> {
    let (first, rest) = data.split_first()?;
    let mut min = first.to_key();
    let mut max = min;
    for x in rest {
        let key = x.to_key();
        if key < min {
            min = key;
        }
        if key > max {
            max = key;
        }
    }
    Some((min, max))
}

// `pivot` must equal some element of `data`; the scans rely on it as a sentinel.
#[inline]
pub fn partition_hoare<T: Ord>(data: &mut [T], pivot: &T, order: Order) -> usize {
    debug_assert!(!data.is_empty());

    let mut i = 0usize;
    let mut j = data.len() - 1;

    loop {
        while order.is_less(&data[i], pivot) {
            i += 1;
        }

        while order.is_less(pivot, &data[j]) {
            j -= 1;
        }

        if i >= j {
            return j;
        }

        data.swap(i, j);
        i += 1;
        j -= 1;
    }
}

#[inline]
pub fn partition_3way<T: Ord>(data: &mut [T], pivot: &T, order: Order) -> (usize, usize) {
    let mut lt = 0usize;
    let mut i = 0usize;
    let mut gt = data.len();

    while i < gt {
        if order.is_less(&data[i], pivot) {
            data.swap(i, lt);
            i += 1;
            lt += 1;
        } else if order.is_less(pivot, &data[i]) {
            gt -= 1;
            data.swap(i, gt);
        } else {
            i += 1;
        }
    }

    (lt, gt)
}

#[inline]
pub fn merge_ranges<T: Ord + Clone>(
    src: &[T],
    dst: &mut [T],
    left: usize,
    mid: usize,
    right: usize,
    order: Order,
) {
    let mut i = left;
    let mut j = mid;
    let mut k = left;

    while i < mid && j < right {
        if order.is_less(&src[j], &src[i]) {
            dst[k].clone_from(&src[j]);
            j += 1;
        } else {
            dst[k].clone_from(&src[i]);
            i += 1;
        }
        k += 1;
    }

    if i < mid {
        dst[k..(k + (mid - i))].clone_from_slice(&src[i..mid]);
    } else if j < right {
        dst[k..(k + (right - j))].clone_from_slice(&src[j..right]);
    }
}

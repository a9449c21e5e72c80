use crate::Order;

pub fn heap_sort<T: Ord + Clone>(data: &mut [T], order: Order) {
    let len = data.len();
    if len < 2 {
        return;
    }

    let mut start = (len - 2) / 2;
    loop {
        sift_down(data, start, len, order);
        if start == 0 {
            break;
        }
        start -= 1;
    }

    let mut end = len - 1;
    while end > 0 {
        data.swap(0, end);
        sift_down(data, 0, end, order);
        end -= 1;
    }
}

// The heap root is the element that comes last under `order`.
#[inline]
fn sift_down<T: Ord>(data: &mut [T], mut root: usize, end: usize, order: Order) {
    loop {
        let child = root * 2 + 1;
        if child >= end {
            break;
        }

        let mut swap_idx = child;
        if child + 1 < end && order.is_less(&data[child], &data[child + 1]) {
            swap_idx = child + 1;
        }

        if !order.is_less(&data[root], &data[swap_idx]) {
            break;
        }

        data.swap(root, swap_idx);
        root = swap_idx;
    }
}

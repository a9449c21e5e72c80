use crate::Order;

pub fn bubble_sort<T: Ord + Clone>(data: &mut [T], order: Order) {
    let mut end = data.len();
    while end > 1 {
        let mut last_swap = 0usize;
        for i in 1..end {
            if order.is_less(&data[i], &data[i - 1]) {
                data.swap(i - 1, i);
                last_swap = i;
            }
        }
        end = last_swap;
    }
}

use crate::Order;

pub fn selection_sort<T: Ord + Clone>(data: &mut [T], order: Order) {
    let len = data.len();
    if len < 2 {
        return;
    }

    for i in 0..(len - 1) {
        let mut best = i;
        for j in (i + 1)..len {
            if order.is_less(&data[j], &data[best]) {
                best = j;
            }
        }
        if best != i {
            data.swap(i, best);
        }
    }
}

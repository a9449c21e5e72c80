use crate::Order;

use super::common;

pub fn insertion_sort<T: Ord + Clone>(data: &mut [T], order: Order) {
    common::insertion_sort(data, order);
}

use crate::{DiscreteKey, Order, TUNED_PARAMS};

use super::{common, radix_sort};

/// Key ranges wider than `TUNED_PARAMS.max_counting_range`, or wider than
/// `counting_range_factor * len`, are radix sorted instead.
pub fn counting_sort<K: DiscreteKey>(data: &mut [K], order: Order) {
    let len = data.len();
    if len < 2 {
        return;
    }

    let Some((min, max)) = common::key_bounds(data) else {
        return;
    };
    if min == max {
        return;
    }

    let range_u128 = (max as u128) - (min as u128) + 1;
    let limit = TUNED_PARAMS
        .max_counting_range
        .min(len.saturating_mul(TUNED_PARAMS.counting_range_factor));
    if range_u128 > limit as u128 {
        radix_sort::radix_sort(data, order);
        return;
    }

    let range = range_u128 as usize;
    let mut counts = vec![0usize; range];
    for x in data.iter() {
        counts[(x.to_key() - min) as usize] += 1;
    }

    let mut out = 0usize;
    for i in 0..range {
        let offset = match order {
            Order::Ascending => i,
            Order::Descending => range - 1 - i,
        };
        let count = counts[offset];
        if count == 0 {
            continue;
        }
        data[out..(out + count)].fill(K::from_key(min + offset as u64));
        out += count;
    }
}

use crate::{DiscreteKey, Order, TUNED_PARAMS};

use super::{common, merge_sort};

pub fn bucket_sort<K: DiscreteKey>(data: &mut [K], order: Order) {
    let len = data.len();
    if len < 2 {
        return;
    }
    if order.is_sorted(data) {
        return;
    }

    let Some((min, max)) = common::key_bounds(data) else {
        return;
    };
    if min == max {
        return;
    }

    let bucket_count = (len / TUNED_PARAMS.bucket_size_divisor)
        .clamp(TUNED_PARAMS.min_buckets, TUNED_PARAMS.max_buckets)
        .next_power_of_two();
    let range = (max as u128) - (min as u128) + 1;

    let mut starts = vec![0usize; bucket_count];
    for &x in data.iter() {
        starts[bucket_index(x, min, range, bucket_count, order)] += 1;
    }

    let mut heads = vec![0usize; bucket_count];
    let mut prefix = 0usize;
    for i in 0..bucket_count {
        let c = starts[i];
        starts[i] = prefix;
        heads[i] = prefix;
        prefix += c;
    }

    let mut scratch = data.to_vec();
    for &x in data.iter() {
        let idx = bucket_index(x, min, range, bucket_count, order);
        scratch[heads[idx]] = x;
        heads[idx] += 1;
    }

    for i in 0..bucket_count {
        let start = starts[i];
        let end = heads[i];
        if end - start <= 1 {
            continue;
        }
        let bucket = &mut scratch[start..end];
        if bucket.len() <= TUNED_PARAMS.insertion_threshold {
            common::insertion_sort(bucket, order);
        } else {
            merge_sort::merge_sort(bucket, order);
        }
    }

    data.copy_from_slice(&scratch);
}

#[inline]
fn bucket_index<K: DiscreteKey>(
    value: K,
    min: u64,
    range: u128,
    bucket_count: usize,
    order: Order,
) -> usize {
    let offset = (value.to_key() - min) as u128;
    let idx = ((offset * bucket_count as u128 / range) as usize).min(bucket_count - 1);
    match order {
        Order::Ascending => idx,
        Order::Descending => bucket_count - 1 - idx,
    }
}

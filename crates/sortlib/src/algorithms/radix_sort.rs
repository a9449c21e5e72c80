use crate::{DiscreteKey, Order, TUNED_PARAMS};

const DIGIT_BITS: u32 = TUNED_PARAMS.radix_digit_bits;
const RADIX: usize = 1 << DIGIT_BITS;
const DIGIT_MASK: u64 = (RADIX - 1) as u64;

pub fn radix_sort<K: DiscreteKey>(data: &mut [K], order: Order) {
    let len = data.len();
    if len < 2 {
        return;
    }
    if order.is_sorted(data) {
        return;
    }

    let passes = radix_passes(data);
    if passes == 0 {
        return;
    }

    let mut scratch = data.to_vec();
    let mut counts = [0usize; RADIX];
    let mut src_is_data = true;
    for pass in 0..passes {
        let shift = pass * DIGIT_BITS;

        if src_is_data {
            count_digits(data, &mut counts, shift, order);
            prefix_sum(&mut counts);
            scatter(data, &mut scratch, &mut counts, shift, order);
        } else {
            count_digits(&scratch, &mut counts, shift, order);
            prefix_sum(&mut counts);
            scatter(&scratch, data, &mut counts, shift, order);
        }

        src_is_data = !src_is_data;
    }

    if !src_is_data {
        data.copy_from_slice(&scratch);
    }
}

#[inline]
fn sort_key<K: DiscreteKey>(x: K, order: Order) -> u64 {
    match order {
        Order::Ascending => x.to_key(),
        Order::Descending => !x.to_key(),
    }
}

#[inline]
fn digit<K: DiscreteKey>(x: K, shift: u32, order: Order) -> usize {
    ((sort_key(x, order) >> shift) & DIGIT_MASK) as usize
}

// Complementing keys flips the same bits in every key, so the differing digits do not
// depend on the order.
#[inline]
fn radix_passes<K: DiscreteKey>(data: &[K]) -> u32 {
    let first = data[0].to_key();
    let mut diff = 0_u64;
    for x in data.iter().skip(1) {
        diff |= first ^ x.to_key();
    }
    if diff == 0 {
        return 0;
    }
    (63 - diff.leading_zeros()) / DIGIT_BITS + 1
}

#[inline]
fn count_digits<K: DiscreteKey>(
    src: &[K],
    counts: &mut [usize; RADIX],
    shift: u32,
    order: Order,
) {
    counts.fill(0);
    for &x in src {
        counts[digit(x, shift, order)] += 1;
    }
}

#[inline]
fn prefix_sum(counts: &mut [usize; RADIX]) {
    let mut sum = 0usize;
    for c in counts.iter_mut() {
        let old = *c;
        *c = sum;
        sum += old;
    }
}

#[inline]
fn scatter<K: DiscreteKey>(
    src: &[K],
    dst: &mut [K],
    offsets: &mut [usize; RADIX],
    shift: u32,
    order: Order,
) {
    for &x in src {
        let d = digit(x, shift, order);
        dst[offsets[d]] = x;
        offsets[d] += 1;
    }
}

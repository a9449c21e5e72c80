//! In-place sorting algorithms sharing one call contract: a mutable slice and an [`Order`].
//!
//! Comparison sorts accept any `T: Ord + Clone`. Distribution sorts (counting, radix and
//! bucket sort) additionally need a bounded key domain and accept `T: DiscreteKey`.

mod algorithms;
mod key;
mod traits;

use std::cmp::Ordering;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

pub use algorithms::bubble_sort::bubble_sort;
pub use algorithms::bucket_sort::bucket_sort;
pub use algorithms::counting_sort::counting_sort;
pub use algorithms::heap_sort::heap_sort;
pub use algorithms::insertion_sort::insertion_sort;
pub use algorithms::merge_sort::merge_sort;
pub use algorithms::quick_sort::quick_sort;
pub use algorithms::radix_sort::radix_sort;
pub use algorithms::selection_sort::selection_sort;
pub use key::DiscreteKey;
pub use traits::{
    BubbleSort, BucketSort, CountingSort, HeapSort, InsertionSort, MergeSort, QuickSort,
    RadixSort, SelectionSort, SortStrategy,
};

/// Direction of the final arrangement.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Order {
    #[default]
    Ascending,
    Descending,
}

impl Order {
    /// Returns `true` when `a` must come strictly before `b`.
    #[inline]
    pub fn is_less<T: Ord + ?Sized>(self, a: &T, b: &T) -> bool {
        match self {
            Order::Ascending => a < b,
            Order::Descending => b < a,
        }
    }

    #[inline]
    pub fn compare<T: Ord + ?Sized>(self, a: &T, b: &T) -> Ordering {
        match self {
            Order::Ascending => a.cmp(b),
            Order::Descending => b.cmp(a),
        }
    }

    #[inline]
    pub fn reverse(self) -> Self {
        match self {
            Order::Ascending => Order::Descending,
            Order::Descending => Order::Ascending,
        }
    }

    /// Non-strict sortedness: no adjacent pair is out of order.
    pub fn is_sorted<T: Ord>(self, data: &[T]) -> bool {
        data.windows(2).all(|pair| !self.is_less(&pair[1], &pair[0]))
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    InsertionSort,
    SelectionSort,
    BubbleSort,
    MergeSort,
    HeapSort,
    QuickSort,
    CountingSort,
    RadixSort,
    BucketSort,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 9] = [
    SortAlgorithm::InsertionSort,
    SortAlgorithm::SelectionSort,
    SortAlgorithm::BubbleSort,
    SortAlgorithm::MergeSort,
    SortAlgorithm::HeapSort,
    SortAlgorithm::QuickSort,
    SortAlgorithm::CountingSort,
    SortAlgorithm::RadixSort,
    SortAlgorithm::BucketSort,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::InsertionSort => "insertion_sort",
        SortAlgorithm::SelectionSort => "selection_sort",
        SortAlgorithm::BubbleSort => "bubble_sort",
        SortAlgorithm::MergeSort => "merge_sort",
        SortAlgorithm::HeapSort => "heap_sort",
        SortAlgorithm::QuickSort => "quick_sort",
        SortAlgorithm::CountingSort => "counting_sort",
        SortAlgorithm::RadixSort => "radix_sort",
        SortAlgorithm::BucketSort => "bucket_sort",
    }
}

impl SortAlgorithm {
    /// Whether equal elements keep their relative order.
    pub fn is_stable(self) -> bool {
        !matches!(
            self,
            SortAlgorithm::SelectionSort | SortAlgorithm::HeapSort | SortAlgorithm::QuickSort
        )
    }

    /// Distribution sorts only work over a bounded key domain, see [`DiscreteKey`].
    pub fn requires_discrete_keys(self) -> bool {
        matches!(
            self,
            SortAlgorithm::CountingSort | SortAlgorithm::RadixSort | SortAlgorithm::BucketSort
        )
    }

    pub fn is_comparison_based(self) -> bool {
        !self.requires_discrete_keys()
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(algorithm_name(*self))
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseAlgorithmError {
    name: String,
}

impl ParseAlgorithmError {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sort algorithm `{}`", self.name)
    }
}

impl Error for ParseAlgorithmError {}

impl FromStr for SortAlgorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        all_algorithms()
            .iter()
            .copied()
            .find(|&algo| algorithm_name(algo) == s)
            .ok_or_else(|| ParseAlgorithmError { name: s.to_owned() })
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TunedParams {
    pub insertion_threshold: usize,
    pub ninther_threshold: usize,
    pub quick_sort_depth_factor_num: usize,
    pub quick_sort_depth_factor_den: usize,
    pub max_counting_range: usize,
    pub counting_range_factor: usize,
    pub radix_digit_bits: u32,
    pub bucket_size_divisor: usize,
    pub min_buckets: usize,
    pub max_buckets: usize,
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    insertion_threshold: 20,
    ninther_threshold: 2048,
    quick_sort_depth_factor_num: 5,
    quick_sort_depth_factor_den: 2,
    max_counting_range: 1 << 20,
    counting_range_factor: 24,
    radix_digit_bits: 8,
    bucket_size_divisor: 32,
    min_buckets: 16,
    max_buckets: 4096,
};

/// Runs `algo` over discrete keys. Every algorithm accepts such input.
pub fn sort<T: DiscreteKey>(algo: SortAlgorithm, data: &mut [T], order: Order) {
    match algo {
        SortAlgorithm::InsertionSort => insertion_sort(data, order),
        SortAlgorithm::SelectionSort => selection_sort(data, order),
        SortAlgorithm::BubbleSort => bubble_sort(data, order),
        SortAlgorithm::MergeSort => merge_sort(data, order),
        SortAlgorithm::HeapSort => heap_sort(data, order),
        SortAlgorithm::QuickSort => quick_sort(data, order),
        SortAlgorithm::CountingSort => counting_sort(data, order),
        SortAlgorithm::RadixSort => radix_sort(data, order),
        SortAlgorithm::BucketSort => bucket_sort(data, order),
    }
}

/// The comparison-based subset of [`SortAlgorithm`], usable with any `T: Ord + Clone`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ComparisonAlgorithm {
    InsertionSort,
    SelectionSort,
    BubbleSort,
    MergeSort,
    HeapSort,
    QuickSort,
}

impl From<ComparisonAlgorithm> for SortAlgorithm {
    fn from(algo: ComparisonAlgorithm) -> Self {
        match algo {
            ComparisonAlgorithm::InsertionSort => SortAlgorithm::InsertionSort,
            ComparisonAlgorithm::SelectionSort => SortAlgorithm::SelectionSort,
            ComparisonAlgorithm::BubbleSort => SortAlgorithm::BubbleSort,
            ComparisonAlgorithm::MergeSort => SortAlgorithm::MergeSort,
            ComparisonAlgorithm::HeapSort => SortAlgorithm::HeapSort,
            ComparisonAlgorithm::QuickSort => SortAlgorithm::QuickSort,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NotComparisonBased(SortAlgorithm);

impl NotComparisonBased {
    pub fn algorithm(&self) -> SortAlgorithm {
        self.0
    }
}

impl fmt::Display for NotComparisonBased {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` needs discrete keys", self.0)
    }
}

impl Error for NotComparisonBased {}

impl TryFrom<SortAlgorithm> for ComparisonAlgorithm {
    type Error = NotComparisonBased;

    fn try_from(algo: SortAlgorithm) -> Result<Self, Self::Error> {
        match algo {
            SortAlgorithm::InsertionSort => Ok(ComparisonAlgorithm::InsertionSort),
            SortAlgorithm::SelectionSort => Ok(ComparisonAlgorithm::SelectionSort),
            SortAlgorithm::BubbleSort => Ok(ComparisonAlgorithm::BubbleSort),
            SortAlgorithm::MergeSort => Ok(ComparisonAlgorithm::MergeSort),
            SortAlgorithm::HeapSort => Ok(ComparisonAlgorithm::HeapSort),
            SortAlgorithm::QuickSort => Ok(ComparisonAlgorithm::QuickSort),
            SortAlgorithm::CountingSort | SortAlgorithm::RadixSort | SortAlgorithm::BucketSort => {
                Err(NotComparisonBased(algo))
            }
        }
    }
}

/// Runs a comparison-based `algo` over any totally ordered type.
pub fn sort_comparison<T: Ord + Clone>(
    algo: ComparisonAlgorithm,
    data: &mut [T],
    order: Order,
) {
    match algo {
        ComparisonAlgorithm::InsertionSort => insertion_sort(data, order),
        ComparisonAlgorithm::SelectionSort => selection_sort(data, order),
        ComparisonAlgorithm::BubbleSort => bubble_sort(data, order),
        ComparisonAlgorithm::MergeSort => merge_sort(data, order),
        ComparisonAlgorithm::HeapSort => heap_sort(data, order),
        ComparisonAlgorithm::QuickSort => quick_sort(data, order),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    const ORDERS: [Order; 2] = [Order::Ascending, Order::Descending];

    fn expected_sorted<T: Ord + Clone>(data: &[T], order: Order) -> Vec<T> {
        let mut expected = data.to_vec();
        expected.sort_by(|a, b| order.compare(a, b));
        expected
    }

    fn assert_sorts_like_std<T: DiscreteKey + fmt::Debug>(algo: SortAlgorithm, data: &[T]) {
        for order in ORDERS {
            let mut actual = data.to_vec();
            sort(algo, &mut actual, order);

            assert_eq!(
                actual,
                expected_sorted(data, order),
                "algorithm={} order={:?} input_len={}",
                algorithm_name(algo),
                order,
                data.len(),
            );
        }
    }

    fn check_edge_cases(algo: SortAlgorithm) {
        let cases = [
            vec![],
            vec![-9],
            vec![-3, -2, -1, 0, 1, 2, 3],
            vec![3, 2, 1, 0, -1, -2, -3],
            vec![-4; 65],
            vec![i64::MIN, -1, i64::MAX, 0, i64::MAX - 1, i64::MIN + 1, 1],
            vec![-2, 2, -2, 2, 0, 0, -1, 1, -1, 1],
            vec![5, 3, 1, 4, 2, 5, 3, 1, 4, 2, 5, 3, 1, 4, 2, 5, 3, 1, 4, 2, 5, -5],
        ];

        for case in &cases {
            assert_sorts_like_std(algo, case);
        }
    }

    fn check_fixed_seed_random(algo: SortAlgorithm) {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for &size in &[2_usize, 3, 8, 19, 20, 21, 63, 64, 127, 511, 2048, 3000] {
            let data: Vec<u64> = (0..size).map(|_| rng.random::<u64>()).collect();
            assert_sorts_like_std(algo, &data);
        }
    }

    fn check_many_duplicates(algo: SortAlgorithm) {
        let mut rng = StdRng::seed_from_u64(0xD0_0B1E5);
        for &size in &[21_usize, 500, 3333] {
            let data: Vec<i16> = (0..size).map(|_| rng.random_range(-3..=3)).collect();
            assert_sorts_like_std(algo, &data);

            let bits: Vec<bool> = (0..size).map(|_| rng.random_bool(0.3)).collect();
            assert_sorts_like_std(algo, &bits);
        }
    }

    fn check_signed_keys(algo: SortAlgorithm) {
        let mut rng = StdRng::seed_from_u64(0x51_6E_ED);
        let mut data: Vec<i64> = (0..700).map(|_| rng.random_range(-5_000..5_000)).collect();
        data.extend([i64::MIN, i64::MAX, 0, -1, i64::MIN + 1]);
        assert_sorts_like_std(algo, &data);

        let small = [-3_i8, 127, -128, 0, 5, -3, 1];
        assert_sorts_like_std(algo, &small);
    }

    fn check_idempotent(algo: SortAlgorithm) {
        let mut rng = StdRng::seed_from_u64(0x1D_E0);
        let base: Vec<u16> = (0..300).map(|_| rng.random::<u16>()).collect();
        for order in ORDERS {
            let mut once = base.clone();
            sort(algo, &mut once, order);
            let mut twice = once.clone();
            sort(algo, &mut twice, order);
            assert_eq!(once, twice, "algorithm={}", algorithm_name(algo));
            assert!(order.is_sorted(&twice));
        }
    }

    macro_rules! algorithm_tests {
        ($($algo:ident),* $(,)?) => {
            paste::paste! {
                $(
                    #[test]
                    fn [<$algo:snake _edge_cases>]() {
                        check_edge_cases(SortAlgorithm::$algo);
                    }

                    #[test]
                    fn [<$algo:snake _fixed_seed_random>]() {
                        check_fixed_seed_random(SortAlgorithm::$algo);
                    }

                    #[test]
                    fn [<$algo:snake _many_duplicates>]() {
                        check_many_duplicates(SortAlgorithm::$algo);
                    }

                    #[test]
                    fn [<$algo:snake _signed_keys>]() {
                        check_signed_keys(SortAlgorithm::$algo);
                    }

                    #[test]
                    fn [<$algo:snake _idempotent>]() {
                        check_idempotent(SortAlgorithm::$algo);
                    }
                )*
            }
        };
    }

    algorithm_tests!(
        InsertionSort,
        SelectionSort,
        BubbleSort,
        MergeSort,
        HeapSort,
        QuickSort,
        CountingSort,
        RadixSort,
        BucketSort,
    );

    #[test]
    fn insertion_sort_known_cases() {
        let mut v = vec![5, 3, 1, 4, 2];
        insertion_sort(&mut v, Order::Ascending);
        assert_eq!(v, [1, 2, 3, 4, 5]);

        let mut v = vec![5, 3, 1, 4, 2];
        insertion_sort(&mut v, Order::Descending);
        assert_eq!(v, [5, 4, 3, 2, 1]);
    }

    #[test]
    fn selection_sort_known_cases() {
        let mut v = vec![2, 2, 1, 3, 1];
        selection_sort(&mut v, Order::Ascending);
        assert_eq!(v, [1, 1, 2, 2, 3]);

        let mut v = vec![1, 2, 3];
        selection_sort(&mut v, Order::default());
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    fn empty_and_singleton_are_untouched() {
        for &algo in all_algorithms() {
            let mut empty: Vec<i32> = vec![];
            sort(algo, &mut empty, Order::Ascending);
            assert!(empty.is_empty());

            let mut single = vec![7];
            sort(algo, &mut single, Order::Ascending);
            assert_eq!(single, [7]);
        }
    }

    #[derive(Clone, Debug)]
    struct Tagged {
        key: u8,
        seq: usize,
    }

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl Eq for Tagged {}

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> Ordering {
            self.key.cmp(&other.key)
        }
    }

    #[test]
    fn stable_comparison_sorts_keep_equal_elements_in_order() {
        let mut rng = StdRng::seed_from_u64(0x57AB_1E);
        let data: Vec<Tagged> = (0..500)
            .map(|seq| Tagged {
                key: rng.random_range(0..8),
                seq,
            })
            .collect();

        for &algo in all_algorithms() {
            if !algo.is_stable() {
                continue;
            }
            let Ok(comparison) = ComparisonAlgorithm::try_from(algo) else {
                continue;
            };
            for order in ORDERS {
                let mut actual = data.clone();
                sort_comparison(comparison, &mut actual, order);

                let expected = expected_sorted(&data, order);
                let actual_seq: Vec<usize> = actual.iter().map(|t| t.seq).collect();
                let expected_seq: Vec<usize> = expected.iter().map(|t| t.seq).collect();
                assert_eq!(
                    actual_seq,
                    expected_seq,
                    "algorithm={} order={:?}",
                    algorithm_name(algo),
                    order
                );
            }
        }
    }

    #[test]
    fn unstable_comparison_sorts_preserve_multiset() {
        let mut rng = StdRng::seed_from_u64(0x0057_AB1E);
        let data: Vec<Tagged> = (0..500)
            .map(|seq| Tagged {
                key: rng.random_range(0..8),
                seq,
            })
            .collect();

        for &algo in all_algorithms() {
            if algo.is_stable() {
                continue;
            }
            let comparison = ComparisonAlgorithm::try_from(algo).unwrap();
            let mut actual = data.clone();
            sort_comparison(comparison, &mut actual, Order::Ascending);
            assert!(Order::Ascending.is_sorted(&actual));

            let mut seqs: Vec<usize> = actual.iter().map(|t| t.seq).collect();
            seqs.sort_unstable();
            assert!(seqs.iter().copied().eq(0..500));
        }
    }

    #[test]
    fn comparison_sorts_handle_strings() {
        let words = [
            "pear", "apple", "fig", "banana", "apple", "kiwi", "", "cherry", "date", "fig",
        ];
        let data: Vec<String> = words.iter().map(|w| w.to_string()).collect();

        for &algo in all_algorithms() {
            let Ok(comparison) = ComparisonAlgorithm::try_from(algo) else {
                continue;
            };
            for order in ORDERS {
                let mut actual = data.clone();
                sort_comparison(comparison, &mut actual, order);
                assert_eq!(actual, expected_sorted(&data, order));
            }
        }
    }

    #[test]
    fn distribution_algorithms_are_not_comparison_algorithms() {
        for &algo in all_algorithms() {
            match ComparisonAlgorithm::try_from(algo) {
                Ok(comparison) => {
                    assert!(algo.is_comparison_based());
                    assert_eq!(SortAlgorithm::from(comparison), algo);
                }
                Err(err) => {
                    assert!(algo.requires_discrete_keys());
                    assert_eq!(err.algorithm(), algo);
                }
            }
        }

        let err = ComparisonAlgorithm::try_from(SortAlgorithm::RadixSort).unwrap_err();
        assert_eq!(err.to_string(), "`radix_sort` needs discrete keys");
    }

    #[test]
    fn order_helpers() {
        assert_eq!(Order::default(), Order::Ascending);
        assert_eq!(Order::Ascending.reverse(), Order::Descending);
        assert!(Order::Ascending.is_less(&1, &2));
        assert!(Order::Descending.is_less(&2, &1));
        assert!(!Order::Descending.is_less(&2, &2));
        assert!(Order::Ascending.is_sorted(&[1, 1, 2]));
        assert!(Order::Descending.is_sorted(&[2, 1, 1]));
        assert!(!Order::Descending.is_sorted(&[1, 2]));
        assert!(Order::Ascending.is_sorted::<u8>(&[]));
    }

    #[test]
    fn requires_discrete_keys_contract() {
        for &algo in all_algorithms() {
            match algo {
                SortAlgorithm::CountingSort
                | SortAlgorithm::RadixSort
                | SortAlgorithm::BucketSort => {
                    assert!(algo.requires_discrete_keys());
                    assert!(!algo.is_comparison_based());
                }
                _ => {
                    assert!(!algo.requires_discrete_keys());
                    assert!(algo.is_comparison_based());
                }
            }
        }

        let stable: Vec<&str> = all_algorithms()
            .iter()
            .filter(|algo| algo.is_stable())
            .map(|&algo| algorithm_name(algo))
            .collect();
        assert_eq!(
            stable,
            [
                "insertion_sort",
                "bubble_sort",
                "merge_sort",
                "counting_sort",
                "radix_sort",
                "bucket_sort"
            ]
        );
    }

    #[test]
    fn algorithm_names_are_unique_snake_case() {
        let names: HashSet<&str> = all_algorithms().iter().map(|&a| algorithm_name(a)).collect();
        assert_eq!(names.len(), ALL_ALGORITHMS.len());
        for name in names {
            assert!(name.ends_with("_sort"), "{name}");
            assert!(name.chars().all(|c| c.is_ascii_lowercase() || c == '_'));
        }
    }

    #[test]
    fn algorithm_names_parse_back() {
        for &algo in all_algorithms() {
            let parsed: SortAlgorithm = algo.to_string().parse().unwrap();
            assert_eq!(parsed, algo);
        }

        let err = "bogo_sort".parse::<SortAlgorithm>().unwrap_err();
        assert_eq!(err.name(), "bogo_sort");
        assert_eq!(err.to_string(), "unknown sort algorithm `bogo_sort`");
    }
}

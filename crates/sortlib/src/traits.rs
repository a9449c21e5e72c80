use crate::{DiscreteKey, Order, SortAlgorithm};

/// A sorting algorithm usable interchangeably with any other over element type `T`.
///
/// Whether `T` qualifies is decided by the implementing type's bounds, so a distribution
/// sort over a type without [`DiscreteKey`] is rejected at compile time.
pub trait SortStrategy<T> {
    const ALGORITHM: SortAlgorithm;

    fn sort(data: &mut [T], order: Order);

    fn sort_ascending(data: &mut [T]) {
        Self::sort(data, Order::Ascending);
    }

    fn sort_descending(data: &mut [T]) {
        Self::sort(data, Order::Descending);
    }
}

macro_rules! strategy {
    ($name:ident: $func:path where $($bound:tt)+) => {
        #[derive(Clone, Copy, Debug, Default)]
        pub struct $name;

        impl<T: $($bound)+> SortStrategy<T> for $name {
            const ALGORITHM: SortAlgorithm = SortAlgorithm::$name;

            #[inline]
            fn sort(data: &mut [T], order: Order) {
                $func(data, order);
            }
        }
    };
}

strategy!(InsertionSort: crate::insertion_sort where Ord + Clone);
strategy!(SelectionSort: crate::selection_sort where Ord + Clone);
strategy!(BubbleSort: crate::bubble_sort where Ord + Clone);
strategy!(MergeSort: crate::merge_sort where Ord + Clone);
strategy!(HeapSort: crate::heap_sort where Ord + Clone);
strategy!(QuickSort: crate::quick_sort where Ord + Clone);
strategy!(CountingSort: crate::counting_sort where DiscreteKey);
strategy!(RadixSort: crate::radix_sort where DiscreteKey);
strategy!(BucketSort: crate::bucket_sort where DiscreteKey);

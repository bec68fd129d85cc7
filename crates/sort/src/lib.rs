mod algorithms;
mod error;

use heap::{Comparator, NaturalOrder};
use tracing::debug;

pub use algorithms::common::is_sorted_by;
pub use algorithms::heap_sort::{heap_sort, heap_sort_by};
pub use algorithms::in_place_heap_sort::in_place_heap_sort_by;
pub use error::SortError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    HeapSort,
    InPlaceHeapSort,
    StdStable,
    StdUnstable,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 4] = [
    SortAlgorithm::HeapSort,
    SortAlgorithm::InPlaceHeapSort,
    SortAlgorithm::StdStable,
    SortAlgorithm::StdUnstable,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::HeapSort => "heap_sort",
        SortAlgorithm::InPlaceHeapSort => "in_place_heap_sort",
        SortAlgorithm::StdStable => "std_stable",
        SortAlgorithm::StdUnstable => "std_unstable",
    }
}

/// Sorts `data` ascending under `comparator` with the chosen algorithm.
///
/// Only [`SortAlgorithm::HeapSort`] allocates through the heap engine and can fail.
pub fn sort_by<T, C>(algo: SortAlgorithm, data: &mut [T], comparator: C) -> Result<(), SortError>
where
    T: Clone,
    C: Comparator<T>,
{
    debug!(algorithm = algorithm_name(algo), len = data.len(), "sort");
    match algo {
        SortAlgorithm::HeapSort => {
            heap_sort_by(data, |a: &T, b: &T| comparator.compare(a, b))?;
        }
        SortAlgorithm::InPlaceHeapSort => in_place_heap_sort_by(data, &comparator),
        SortAlgorithm::StdStable => algorithms::std_sort::stable_sort_by(data, &comparator),
        SortAlgorithm::StdUnstable => algorithms::std_sort::unstable_sort_by(data, &comparator),
    }
    Ok(())
}

pub fn sort_u32(algo: SortAlgorithm, data: &mut [u32]) -> Result<(), SortError> {
    sort_by(algo, data, NaturalOrder)
}

pub mod common;
pub mod heap_sort;
pub mod in_place_heap_sort;
pub mod std_sort;

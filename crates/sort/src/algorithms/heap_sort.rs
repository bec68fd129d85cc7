use heap::{Comparator, Heap, HeapError, HeapKind, NaturalOrder};

/// Sorts `data` ascending by draining a min-heap built from a copy of it.
///
/// Uses `data.len()` auxiliary slots. Equal elements come back in no
/// particular order.
pub fn heap_sort_by<T, C>(data: &mut [T], comparator: C) -> Result<(), HeapError>
where
    T: Clone,
    C: Comparator<T>,
{
    let mut heap = Heap::with_capacity(HeapKind::Min, comparator, data.len())?;

    for value in data.iter() {
        heap.push(value.clone())?;
    }

    for slot in data.iter_mut() {
        *slot = heap.pop()?;
    }

    heap.destroy();
    Ok(())
}

pub fn heap_sort<T: Ord + Clone>(data: &mut [T]) -> Result<(), HeapError> {
    heap_sort_by(data, NaturalOrder)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::cmp::Ordering;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    #[test]
    fn sorts_mixed_values() {
        let mut data = [5_u32, 3, 8, 1, 9, 2];
        heap_sort(&mut data).unwrap();
        assert_eq!(data, [1, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn empty_input_never_compares() {
        let calls = Cell::new(0_usize);
        let mut data: [u32; 0] = [];
        heap_sort_by(&mut data, |a: &u32, b: &u32| {
            calls.set(calls.get() + 1);
            a.cmp(b)
        })
        .unwrap();
        assert!(data.is_empty());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn single_element() {
        let mut data = [42_u32];
        heap_sort(&mut data).unwrap();
        assert_eq!(data, [42]);
    }

    #[test]
    fn identical_elements() {
        let mut data = [4_u32, 4, 4, 4];
        heap_sort(&mut data).unwrap();
        assert_eq!(data, [4, 4, 4, 4]);
    }

    #[test]
    fn descending_comparator_reverses_order() {
        let mut data = [3_i32, -1, 7, 0, 7];
        heap_sort_by(&mut data, |a: &i32, b: &i32| b.cmp(a)).unwrap();
        assert_eq!(data, [7, 7, 3, 0, -1]);
    }

    #[test]
    fn owned_strings() {
        let mut data: Vec<String> = ["pear", "fig", "apple", "fig"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        heap_sort(&mut data).unwrap();
        assert_eq!(data, ["apple", "fig", "fig", "pear"]);
    }

    #[test]
    fn keyed_records_keep_their_multiset() {
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
        struct Record {
            key: u8,
            tag: u32,
        }

        let mut rng = StdRng::seed_from_u64(0xD0D1_2026);
        let mut data: Vec<Record> = (0..500)
            .map(|tag| Record {
                key: rng.random_range(0..8),
                tag,
            })
            .collect();
        let original = data.clone();

        let by_key = |a: &Record, b: &Record| -> Ordering { a.key.cmp(&b.key) };
        heap_sort_by(&mut data, by_key).unwrap();

        assert!(data.windows(2).all(|w| w[0].key <= w[1].key));

        let mut got = data.clone();
        got.sort();
        let mut expected = original;
        expected.sort();
        assert_eq!(got, expected);
    }
}

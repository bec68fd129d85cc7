use heap::Comparator;

/// Heapify `data` as a max-heap, then repeatedly swap the root behind the
/// shrinking heap prefix. No auxiliary storage.
pub fn in_place_heap_sort_by<T, C: Comparator<T>>(data: &mut [T], comparator: &C) {
    let len = data.len();
    if len < 2 {
        return;
    }

    let mut start = (len - 2) / 2;
    loop {
        sift_down(data, start, len, comparator);
        if start == 0 {
            break;
        }
        start -= 1;
    }

    let mut end = len - 1;
    while end > 0 {
        data.swap(0, end);
        sift_down(data, 0, end, comparator);
        end -= 1;
    }
}

#[inline]
fn sift_down<T, C: Comparator<T>>(data: &mut [T], mut root: usize, end: usize, comparator: &C) {
    loop {
        let child = root * 2 + 1;
        if child >= end {
            break;
        }

        let mut swap_idx = child;
        if child + 1 < end && comparator.compare(&data[child], &data[child + 1]).is_lt() {
            swap_idx = child + 1;
        }

        if comparator.compare(&data[root], &data[swap_idx]).is_ge() {
            break;
        }

        data.swap(root, swap_idx);
        root = swap_idx;
    }
}

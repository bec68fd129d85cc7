use heap::Comparator;

#[inline]
pub fn stable_sort_by<T, C: Comparator<T>>(data: &mut [T], comparator: &C) {
    data.sort_by(|a, b| comparator.compare(a, b));
}

#[inline]
pub fn unstable_sort_by<T, C: Comparator<T>>(data: &mut [T], comparator: &C) {
    data.sort_unstable_by(|a, b| comparator.compare(a, b));
}

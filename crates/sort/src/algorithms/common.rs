use heap::Comparator;

/// `true` when no adjacent pair compares `Greater`.
#[inline]
pub fn is_sorted_by<T, C: Comparator<T>>(data: &[T], comparator: &C) -> bool {
    data.windows(2)
        .all(|pair| comparator.compare(&pair[0], &pair[1]).is_le())
}

use std::cmp::Ordering;

/// Three-way total order over `T`.
///
/// Must be consistent and define a valid total order; the heap relies on it
/// without checking.
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders elements by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

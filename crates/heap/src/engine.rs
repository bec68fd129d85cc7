use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::comparator::Comparator;
use crate::error::HeapError;

pub const DEFAULT_INITIAL_CAPACITY: usize = 0;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum HeapKind {
    Max,
    Min,
}

impl HeapKind {
    /// Outcome of `compare(parent, child)` that breaks the heap property.
    #[inline]
    fn violation(self) -> Ordering {
        match self {
            HeapKind::Max => Ordering::Less,
            HeapKind::Min => Ordering::Greater,
        }
    }
}

/// Array-backed binary heap ordered by an injected comparator.
///
/// - `data[..len]` is a complete binary tree; `parent(i) = (i - 1) / 2`.
/// - For every live `i > 0`, `data[parent(i)]` never violates `kind` against `data[i]`.
/// - `len <= capacity`; `capacity` only changes by doubling inside `push`.
/// - Equal elements never move relative to each other during a sift, so
///   their extraction order is unspecified.
pub struct Heap<T, C> {
    kind: HeapKind,
    comparator: C,
    capacity: usize,
    data: Vec<T>,
}

impl<T, C: Comparator<T>> Heap<T, C> {
    pub fn new(kind: HeapKind, comparator: C) -> Self {
        Self {
            kind,
            comparator,
            capacity: DEFAULT_INITIAL_CAPACITY,
            data: Vec::new(),
        }
    }

    pub fn with_capacity(
        kind: HeapKind,
        comparator: C,
        initial_capacity: usize,
    ) -> Result<Self, HeapError> {
        let mut data = Vec::new();
        if let Err(source) = data.try_reserve_exact(initial_capacity) {
            debug!(initial_capacity, error = %source, "heap storage reservation failed");
            return Err(HeapError::AllocationFailure {
                requested: initial_capacity,
                source,
            });
        }

        Ok(Self {
            kind,
            comparator,
            capacity: initial_capacity,
            data,
        })
    }

    /// Releases the heap.
    ///
    /// # Panics
    ///
    /// Panics if the heap still holds elements; callers drain it first.
    pub fn destroy(self) {
        assert!(
            self.data.is_empty(),
            "destroying a heap that still holds {} elements",
            self.data.len()
        );
    }

    #[inline]
    pub fn kind(&self) -> HeapKind {
        self.kind
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Live elements in storage order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Calls `visit` once per live element in storage order, which is not
    /// sorted order. Whatever `visit` returns is discarded.
    pub fn iterate<F, R>(&self, mut visit: F)
    where
        F: FnMut(&T) -> R,
    {
        for value in &self.data {
            let _ = visit(value);
        }
    }

    pub fn push(&mut self, value: T) -> Result<(), HeapError> {
        if self.data.len() == self.capacity {
            self.grow()?;
        }

        self.data.push(value);
        self.sift_up(self.data.len() - 1);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Empty);
        }

        // Moves the last live element into the root slot.
        let top = self.data.swap_remove(0);
        self.sift_down(0);
        Ok(top)
    }

    fn grow(&mut self) -> Result<(), HeapError> {
        let old = self.capacity;
        let Some(new) = doubled_capacity(old) else {
            debug!(capacity = old, "heap capacity overflow");
            return Err(HeapError::CapacityOverflow { capacity: old });
        };

        if let Err(source) = self.data.try_reserve_exact(new - self.data.len()) {
            debug!(capacity = old, error = %source, "heap growth failed");
            return Err(HeapError::CapacityExhausted {
                capacity: old,
                source,
            });
        }

        trace!(from = old, to = new, "heap capacity doubled");
        self.capacity = new;
        Ok(())
    }

    #[inline]
    fn violates(&self, parent: &T, child: &T) -> bool {
        self.comparator.compare(parent, child) == self.kind.violation()
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.violates(&self.data[parent], &self.data[pos]) {
                break;
            }
            self.data.swap(parent, pos);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.data.len();
        loop {
            let left = pos * 2 + 1;
            if left >= len {
                break;
            }
            let right = left + 1;

            let child = if self.violates(&self.data[pos], &self.data[left]) {
                if right < len && self.violates(&self.data[left], &self.data[right]) {
                    right
                } else {
                    left
                }
            } else if right < len && self.violates(&self.data[pos], &self.data[right]) {
                right
            } else {
                break;
            };

            self.data.swap(pos, child);
            pos = child;
        }
    }
}

/// Next capacity after a full push; `None` once doubling overflows `usize`.
#[inline]
fn doubled_capacity(capacity: usize) -> Option<usize> {
    if capacity == 0 {
        Some(1)
    } else {
        capacity.checked_mul(2)
    }
}

impl<T: fmt::Debug, C> fmt::Debug for Heap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap")
            .field("kind", &self.kind)
            .field("capacity", &self.capacity)
            .field("data", &self.data)
            .finish()
    }
}

impl<'a, T, C> IntoIterator for &'a Heap<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HeapError {
    #[error("unable to allocate storage for {requested} elements")]
    AllocationFailure {
        requested: usize,
        #[source]
        source: TryReserveError,
    },
    #[error("unable to grow heap beyond capacity {capacity}")]
    CapacityExhausted {
        capacity: usize,
        #[source]
        source: TryReserveError,
    },
    #[error("heap capacity {capacity} cannot be doubled")]
    CapacityOverflow { capacity: usize },
    #[error("heap is empty")]
    Empty,
}

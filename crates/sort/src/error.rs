use heap::HeapError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SortError {
    #[error(transparent)]
    Heap(#[from] HeapError),
}

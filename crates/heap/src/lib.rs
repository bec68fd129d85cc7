mod comparator;
mod engine;
mod error;

pub use comparator::{Comparator, NaturalOrder};
pub use engine::{DEFAULT_INITIAL_CAPACITY, Heap, HeapKind};
pub use error::HeapError;

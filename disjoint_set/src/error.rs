use std::fmt::Debug;

use thiserror::Error;

/// Reasons a raw parent mapping cannot be restored as a disjoint set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParentMapError<T: Debug> {
    #[error("element {0:?} is listed more than once")]
    DuplicateElement(T),
    #[error("parent {parent:?} of element {element:?} is not itself an element")]
    DanglingParent { element: T, parent: T },
    /// The parent chain starting at `element` loops without reaching a root.
    #[error("parent chain from {0:?} never reaches a root")]
    Cycle(T),
}

impl<T: Debug> ParentMapError<T> {
    /// The element the violation was detected at.
    pub fn element(&self) -> &T {
        match self {
            ParentMapError::DuplicateElement(x) => x,
            ParentMapError::DanglingParent { element, .. } => element,
            ParentMapError::Cycle(x) => x,
        }
    }
}

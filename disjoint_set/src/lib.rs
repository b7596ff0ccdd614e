//! Persistent disjoint-set (union-find) forests.
//!
//! [`DisjointSet`] is a value: `union` and the bulk constructors return a new
//! set and leave the receiver as it was. The parent mapping lives in a
//! [`ParentStore`]; [`HashStore`] is the default, [`AssocStore`] serves element
//! types that only implement `Eq`.

pub mod disjoint_set;
pub mod error;
pub mod graphviz;
pub mod serialization;
pub mod store;

pub use disjoint_set::{AssocDisjointSet, DisjointSet, HashDisjointSet};
pub use error::ParentMapError;
pub use store::{AssocStore, HashStore, ParentStore};

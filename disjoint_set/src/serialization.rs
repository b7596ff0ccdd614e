//! Serde support. A set is written as its raw `(element, parent)` pairs in
//! insertion order and read back through [`DisjointSet::try_from_parents`], so
//! malformed input is rejected instead of producing a broken forest.

use std::fmt::Debug;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::disjoint_set::DisjointSet;
use crate::store::ParentStore;

impl<T, S> Serialize for DisjointSet<T, S>
where
    T: Eq + Clone + Serialize,
    S: ParentStore<T>,
{
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for pair in self.store().entries() {
            seq.serialize_element(&pair)?;
        }
        seq.end()
    }
}

impl<'de, T, S> Deserialize<'de> for DisjointSet<T, S>
where
    T: Eq + Clone + Debug + Deserialize<'de>,
    S: ParentStore<T>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let pairs = Vec::<(T, T)>::deserialize(deserializer)?;
        DisjointSet::try_from_parents(pairs).map_err(de::Error::custom)
    }
}

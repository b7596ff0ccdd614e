//! Backing stores for the parent mapping of a [`DisjointSet`](crate::DisjointSet).
//!
//! Both stores are persistent: cloning one is O(1) and shares structure with the
//! original, so a disjoint set can hand out a modified copy without touching the
//! snapshot it was derived from.

use std::fmt;
use std::hash::Hash;

/// Element to immediate-parent mapping, remembering the order keys were first inserted.
pub trait ParentStore<T>: Clone + Default {
    /// Immediate parent of `x`, if `x` is a key.
    fn parent(&self, x: &T) -> Option<&T>;

    /// Points `x` at `parent`, inserting `x` as a new key if needed.
    fn upsert(&mut self, x: T, parent: T);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index of `x` in insertion order, if `x` is a key.
    fn position(&self, x: &T) -> Option<usize>;

    /// `(element, parent)` pairs in insertion order of the elements.
    fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a T, &'a T)>
    where
        T: 'a;
}

/// Hash-indexed store. Requires `T: Hash + Eq`.
#[derive(Clone)]
pub struct HashStore<T> {
    /// Parent and insertion position of each element.
    parents: im::HashMap<T, (T, usize)>,
    order: im::Vector<T>,
}

impl<T> Default for HashStore<T>
where
    T: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self {
            parents: im::HashMap::new(),
            order: im::Vector::new(),
        }
    }
}

impl<T> ParentStore<T> for HashStore<T>
where
    T: Hash + Eq + Clone,
{
    fn parent(&self, x: &T) -> Option<&T> {
        self.parents.get(x).map(|(p, _)| p)
    }

    fn upsert(&mut self, x: T, parent: T) {
        match self.parents.get_mut(&x) {
            Some(entry) => entry.0 = parent,
            None => {
                self.parents.insert(x.clone(), (parent, self.order.len()));
                self.order.push_back(x);
            }
        }
    }

    fn len(&self) -> usize {
        self.parents.len()
    }

    fn position(&self, x: &T) -> Option<usize> {
        self.parents.get(x).map(|(_, i)| *i)
    }

    fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a T, &'a T)>
    where
        T: 'a,
    {
        self.order
            .iter()
            .filter_map(move |x| self.parents.get(x).map(|(p, _)| (x, p)))
    }
}

impl<T> fmt::Debug for HashStore<T>
where
    T: Hash + Eq + Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries()).finish()
    }
}

/// Association-list store. Only needs `T: Eq`, at the cost of a linear scan per lookup.
#[derive(Clone)]
pub struct AssocStore<T> {
    pairs: im::Vector<(T, T)>,
}

impl<T: Clone> Default for AssocStore<T> {
    fn default() -> Self {
        Self {
            pairs: im::Vector::new(),
        }
    }
}

impl<T> ParentStore<T> for AssocStore<T>
where
    T: Eq + Clone,
{
    fn parent(&self, x: &T) -> Option<&T> {
        self.pairs.iter().find(|(k, _)| k == x).map(|(_, p)| p)
    }

    fn upsert(&mut self, x: T, parent: T) {
        match self.pairs.iter().position(|(k, _)| *k == x) {
            Some(i) => {
                self.pairs.set(i, (x, parent));
            }
            None => self.pairs.push_back((x, parent)),
        }
    }

    fn len(&self) -> usize {
        self.pairs.len()
    }

    fn position(&self, x: &T) -> Option<usize> {
        self.pairs.iter().position(|(k, _)| k == x)
    }

    fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a T, &'a T)>
    where
        T: 'a,
    {
        self.pairs.iter().map(|(k, p)| (k, p))
    }
}

impl<T> fmt::Debug for AssocStore<T>
where
    T: Eq + Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise<S: ParentStore<&'static str>>() {
        let mut store = S::default();
        assert!(store.is_empty());

        store.upsert("b", "b");
        store.upsert("a", "b");
        store.upsert("c", "c");
        assert_eq!(store.len(), 3);
        assert_eq!(store.parent(&"a"), Some(&"b"));
        assert_eq!(store.parent(&"z"), None);

        // Overwriting keeps the original insertion slot
        store.upsert("b", "c");
        assert_eq!(store.len(), 3);
        assert_eq!(store.parent(&"b"), Some(&"c"));
        let keys: Vec<_> = store.entries().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
        assert_eq!(store.position(&"a"), Some(1));
        assert_eq!(store.position(&"c"), Some(2));
        assert_eq!(store.position(&"z"), None);
    }

    #[test]
    fn hash_store_upsert() {
        exercise::<HashStore<_>>();
    }

    #[test]
    fn assoc_store_upsert() {
        exercise::<AssocStore<_>>();
    }

    #[test]
    fn clones_are_independent() {
        let mut original = HashStore::default();
        original.upsert(1, 1);
        let mut copy = original.clone();
        copy.upsert(2, 1);
        copy.upsert(1, 2);

        assert_eq!(original.len(), 1);
        assert_eq!(original.parent(&1), Some(&1));
        assert_eq!(copy.parent(&1), Some(&2));
    }

    #[test]
    fn debug_lists_entries_in_order() {
        let mut store = AssocStore::default();
        store.upsert('x', 'x');
        store.upsert('y', 'x');
        assert_eq!(format!("{:?}", store), "{'x': 'x', 'y': 'x'}");
    }
}

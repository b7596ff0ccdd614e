use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use log::{debug, trace};

use crate::error::ParentMapError;
use crate::store::{AssocStore, HashStore, ParentStore};

/// Persistent disjoint-set forest.
///
/// Every operation that changes the partition takes `&self` and returns a new
/// set; the receiver is left untouched, and since the stores share structure,
/// keeping old snapshots around is cheap.
///
/// # Root selection
///
/// `union(x, y)` always keeps the root of `x`'s class (or `x` itself, if it
/// is new) as the root of the merged class. The operation is therefore not
/// symmetric: `union(a, b)` and `union(b, a)` may pick different roots when
/// both elements already belong to distinct classes.
///
/// ```
/// use disjoint_set::DisjointSet;
///
/// let ds = DisjointSet::new().union("a", "b").union("x", "y").union("b", "y");
/// assert_eq!(ds.find(&"y"), Some(&"a"));
/// assert_eq!(ds.parent(&"x"), Some(&"a"));
/// ```
#[derive(Clone)]
pub struct DisjointSet<T, S = HashStore<T>> {
    store: S,
    _marker: PhantomData<T>,
}

/// Disjoint set over hashable elements.
pub type HashDisjointSet<T> = DisjointSet<T, HashStore<T>>;

/// Disjoint set over elements that only support equality.
pub type AssocDisjointSet<T> = DisjointSet<T, AssocStore<T>>;

impl<T> DisjointSet<T, HashStore<T>>
where
    T: Hash + Eq + Clone,
{
    /// Creates an empty hash-backed set.
    pub fn new() -> Self {
        Self::empty()
    }

    /// The raw parent mapping as a hash map.
    pub fn to_map(&self) -> HashMap<T, T> {
        self.store
            .entries()
            .map(|(x, p)| (x.clone(), p.clone()))
            .collect()
    }
}

impl<T, S> DisjointSet<T, S>
where
    T: Eq + Clone,
    S: ParentStore<T>,
{
    /// Creates a set with no elements.
    pub fn empty() -> Self {
        Self {
            store: S::default(),
            _marker: PhantomData,
        }
    }

    /// Chain of ancestors from `x` up to and including its root.
    /// An element not yet in the set is its own singleton chain.
    fn path(&self, x: &T) -> Vec<T> {
        let mut path = vec![x.clone()];
        let mut cur = x;
        while let Some(p) = self.store.parent(cur) {
            if p == cur {
                break;
            }
            path.push(p.clone());
            cur = p;
        }
        path
    }

    /// Merges the classes of `x` and `y`, inserting either if missing.
    ///
    /// The root of `x`'s class survives. Every node on the chains from `x`
    /// and from `y` is re-pointed directly at that root; all other entries
    /// are kept as they are.
    pub fn union(&self, x: T, y: T) -> Self {
        let path_x = self.path(&x);
        let path_y = self.path(&y);
        let Some(root) = path_x.last().cloned() else {
            return self.clone();
        };
        let touched = path_x.len() + path_y.len();

        let mut store = self.store.clone();
        for node in path_x.into_iter().chain(path_y) {
            store.upsert(node, root.clone());
        }
        if let Some(root_pos) = store.position(&root) {
            trace!(
                "union compressed {} nodes onto root at position {}, {} elements in set",
                touched,
                root_pos,
                store.len()
            );
        }

        Self {
            store,
            _marker: PhantomData,
        }
    }

    /// Root of the class containing `x`, or `None` if `x` was never inserted.
    ///
    /// Does not compress paths; only `union` does.
    pub fn find(&self, x: &T) -> Option<&T> {
        let mut cur = self.store.parent(x)?;
        loop {
            let next = self.store.parent(cur)?;
            if next == cur {
                return Some(cur);
            }
            cur = next;
        }
    }

    /// Returns true if `x` was ever inserted.
    pub fn has(&self, x: &T) -> bool {
        self.find(x).is_some()
    }

    /// Immediate parent of `x` in the forest.
    pub fn parent(&self, x: &T) -> Option<&T> {
        self.store.parent(x)
    }

    /// Returns true if both elements are present and share a root.
    pub fn equivalent(&self, a: &T, b: &T) -> bool {
        match (self.find(a), self.find(b)) {
            (Some(ra), Some(rb)) => ra == rb,
            _ => false,
        }
    }

    /// All elements, in the order they were first inserted.
    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.store.entries().map(|(x, _)| x)
    }

    /// Inserts each missing element of `xs` as a singleton class.
    pub fn add(&self, xs: impl IntoIterator<Item = T>) -> Self {
        xs.into_iter().fold(self.clone(), |ds, x| {
            if ds.has(&x) {
                ds
            } else {
                ds.union(x.clone(), x)
            }
        })
    }

    /// Folds `union` over `pairs` in order, starting from an empty set.
    ///
    /// Order matters: each pair's first element decides which root survives.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (T, T)>) -> Self {
        pairs
            .into_iter()
            .fold(Self::empty(), |ds, (x, y)| ds.union(x, y))
    }

    /// The raw `(element, parent)` mapping in insertion order.
    ///
    /// Parents are immediate parents, not resolved roots; use [`find`](Self::find)
    /// for the latter.
    pub fn to_pairs(&self) -> Vec<(T, T)> {
        self.store
            .entries()
            .map(|(x, p)| (x.clone(), p.clone()))
            .collect()
    }

    /// Restores a set from a raw parent mapping, keeping every pointer as given.
    ///
    /// This is the inverse of [`to_pairs`](Self::to_pairs). The mapping must
    /// list each element once, only point at listed elements, and be free of
    /// cycles other than root self-loops.
    pub fn try_from_parents(
        pairs: impl IntoIterator<Item = (T, T)>,
    ) -> Result<Self, ParentMapError<T>>
    where
        T: fmt::Debug,
    {
        let mut store = S::default();
        for (x, p) in pairs {
            if store.parent(&x).is_some() {
                debug!("rejected parent mapping: duplicate element {:?}", x);
                return Err(ParentMapError::DuplicateElement(x));
            }
            store.upsert(x, p);
        }

        // Parents as insertion positions, so chains can be walked by index
        let mut parent_at = Vec::with_capacity(store.len());
        for (x, p) in store.entries() {
            match store.position(p) {
                Some(i) => parent_at.push(i),
                None => {
                    debug!("rejected parent mapping: dangling parent {:?}", p);
                    return Err(ParentMapError::DanglingParent {
                        element: x.clone(),
                        parent: p.clone(),
                    });
                }
            }
        }
        if let Some(start) = first_unrooted(&parent_at) {
            if let Some((x, _)) = store.entries().nth(start) {
                debug!("rejected parent mapping: cycle through {:?}", x);
                return Err(ParentMapError::Cycle(x.clone()));
            }
        }

        Ok(Self {
            store,
            _marker: PhantomData,
        })
    }

    /// Returns the total number of elements.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns true if the set has no elements.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Class representatives, in insertion order.
    pub fn roots(&self) -> impl Iterator<Item = &T> {
        self.store.entries().filter(|(x, p)| x == p).map(|(x, _)| x)
    }

    /// Number of disjoint classes.
    pub fn class_count(&self) -> usize {
        self.roots().count()
    }

    /// Members of each class.
    ///
    /// Classes are ordered by the insertion of their earliest member, and
    /// members keep insertion order within a class.
    pub fn classes(&self) -> Vec<Vec<T>> {
        let mut groups: Vec<(&T, Vec<T>)> = Vec::new();
        for x in self.items() {
            let Some(root) = self.find(x) else { continue };
            match groups.iter_mut().find(|(r, _)| *r == root) {
                Some((_, members)) => members.push(x.clone()),
                None => groups.push((root, vec![x.clone()])),
            }
        }
        groups.into_iter().map(|(_, members)| members).collect()
    }

    pub(crate) fn store(&self) -> &S {
        &self.store
    }
}

/// First position whose parent chain loops instead of ending in a self-loop.
///
/// Each position is walked at most once: chains already known to reach a
/// root stop later walks early, so the check is linear in the element count.
fn first_unrooted(parent_at: &[usize]) -> Option<usize> {
    #[derive(Clone, Copy, PartialEq, Eq)]
    enum Mark {
        Unvisited,
        OnPath,
        Rooted,
    }

    let mut marks = vec![Mark::Unvisited; parent_at.len()];
    let mut path = Vec::new();
    for start in 0..parent_at.len() {
        let mut cur = start;
        let rooted = loop {
            match marks[cur] {
                Mark::Rooted => break true,
                // Revisited within this walk
                Mark::OnPath => break false,
                Mark::Unvisited => {
                    marks[cur] = Mark::OnPath;
                    path.push(cur);
                    if parent_at[cur] == cur {
                        break true;
                    }
                    cur = parent_at[cur];
                }
            }
        };
        if !rooted {
            return Some(start);
        }
        for i in path.drain(..) {
            marks[i] = Mark::Rooted;
        }
    }
    None
}

impl<T, S> Default for DisjointSet<T, S>
where
    T: Eq + Clone,
    S: ParentStore<T>,
{
    fn default() -> Self {
        Self::empty()
    }
}

impl<T, S> FromIterator<(T, T)> for DisjointSet<T, S>
where
    T: Eq + Clone,
    S: ParentStore<T>,
{
    fn from_iter<I: IntoIterator<Item = (T, T)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

/// Two sets are equal when their parent mappings are, regardless of insertion order.
impl<T, S> PartialEq for DisjointSet<T, S>
where
    T: Eq + Clone,
    S: ParentStore<T>,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .store
                .entries()
                .all(|(x, p)| other.store.parent(x) == Some(p))
    }
}

impl<T, S> Eq for DisjointSet<T, S>
where
    T: Eq + Clone,
    S: ParentStore<T>,
{
}

impl<T, S> fmt::Debug for DisjointSet<T, S>
where
    T: fmt::Debug,
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisjointSet")
            .field("parents", &self.store)
            .finish()
    }
}

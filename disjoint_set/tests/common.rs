#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;

use disjoint_set::{DisjointSet, ParentStore};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Every parent is itself an element, and every chain ends in a self-loop
/// that `find` reports.
pub fn assert_well_formed<T, S>(ds: &DisjointSet<T, S>)
where
    T: Eq + Clone + Debug,
    S: ParentStore<T>,
{
    assert_eq!(ds.items().count(), ds.len());
    for x in ds.items() {
        let mut cur = x;
        let mut steps = 0;
        loop {
            let p = ds
                .parent(cur)
                .unwrap_or_else(|| panic!("dangling parent {:?} on chain from {:?}", cur, x));
            if p == cur {
                break;
            }
            cur = p;
            steps += 1;
            assert!(steps <= ds.len(), "cycle through {:?}", x);
        }
        assert_eq!(ds.find(x), Some(cur));
        assert!(ds.has(x));
    }
}

/// Naive partition: each element carries a class label, and union relabels a
/// whole class.
#[derive(Debug, Clone, Default)]
pub struct Model {
    labels: HashMap<u32, usize>,
    next: usize,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    fn label(&mut self, x: u32) -> usize {
        if let Some(&c) = self.labels.get(&x) {
            return c;
        }
        let c = self.next;
        self.next += 1;
        self.labels.insert(x, c);
        c
    }

    pub fn union(&mut self, x: u32, y: u32) {
        let cx = self.label(x);
        let cy = self.label(y);
        if cx != cy {
            for c in self.labels.values_mut() {
                if *c == cy {
                    *c = cx;
                }
            }
        }
    }

    pub fn same(&self, a: u32, b: u32) -> bool {
        matches!((self.labels.get(&a), self.labels.get(&b)), (Some(x), Some(y)) if x == y)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn class_count(&self) -> usize {
        self.labels.values().collect::<HashSet<_>>().len()
    }

    pub fn elements(&self) -> impl Iterator<Item = u32> + '_ {
        self.labels.keys().cloned()
    }
}

pub fn assert_matches_model<S: ParentStore<u32>>(ds: &DisjointSet<u32, S>, model: &Model) {
    assert_eq!(ds.len(), model.len());
    assert_eq!(ds.class_count(), model.class_count());
    let elements: Vec<u32> = model.elements().collect();
    for &a in &elements {
        assert!(ds.has(&a), "{} missing", a);
        for &b in &elements {
            assert_eq!(
                ds.equivalent(&a, &b),
                model.same(a, b),
                "disagreement on {} ~ {}",
                a,
                b
            );
        }
    }
}

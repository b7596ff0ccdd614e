use std::fmt::Display;
use std::io;

use crate::disjoint_set::DisjointSet;
use crate::store::ParentStore;

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

impl<T, S> DisjointSet<T, S>
where
    T: Eq + Clone + Display,
    S: ParentStore<T>,
{
    /// Writes the parent forest as a DOT digraph, one edge per child -> parent.
    /// Roots are drawn as double circles.
    pub fn emit_graphviz(&self, f: &mut impl io::Write) -> io::Result<()> {
        writeln!(f, "digraph DisjointSet {{")?;
        writeln!(f, "  // Graph settings")?;
        writeln!(f, "  graph [")?;
        writeln!(f, "    fontname = \"Helvetica\"")?;
        writeln!(f, "    fontsize = 11")?;
        writeln!(f, "    rankdir = \"BT\"")?;
        writeln!(f, "  ]")?;
        writeln!(f, "  node [fontname = \"Helvetica\", fontsize = 11]")?;

        // Nodes are named by insertion index so labels need no quoting rules
        let items: Vec<&T> = self.items().collect();
        for (i, (x, p)) in self.store().entries().enumerate() {
            let shape = if x == p { "doublecircle" } else { "circle" };
            writeln!(
                f,
                "  n{} [label = \"{}\", shape = \"{}\"]",
                i,
                escape(&x.to_string()),
                shape
            )?;
        }
        for (i, (x, p)) in self.store().entries().enumerate() {
            if x == p {
                continue;
            }
            if let Some(j) = items.iter().position(|y| *y == p) {
                writeln!(f, "  n{} -> n{}", i, j)?;
            }
        }

        writeln!(f, "}}")
    }
}

//! Containment graph and cycle detection.
//!
//! Nodes are unit identifiers, edges run from an assembly to each of its
//! components. The graph borrows identifiers from the dataset and lives only
//! for the duration of one check.

use helios_core::UnitComponent;
use std::collections::{HashMap, HashSet};

/// Directed assembly → component graph.
///
/// Edge multiplicity is ignored: a repeated `(assembly, component)` pair is
/// stored once. Assemblies keep the order in which they first appear, which
/// is the order the cycle search starts from.
#[derive(Debug, Default)]
pub struct ContainmentGraph<'a> {
    assemblies: Vec<&'a str>,
    edges: HashMap<&'a str, Vec<&'a str>>,
}

impl<'a> ContainmentGraph<'a> {
    /// Builds the graph from `unit_components` rows.
    pub fn from_components(components: &'a [UnitComponent]) -> Self {
        let mut graph = Self::default();
        for edge in components {
            graph.add_edge(&edge.assembly_id, &edge.component_id);
        }
        graph
    }

    /// Adds an edge, ignoring duplicates.
    pub fn add_edge(&mut self, assembly: &'a str, component: &'a str) {
        let neighbors = self.edges.entry(assembly).or_insert_with(|| {
            self.assemblies.push(assembly);
            Vec::new()
        });
        if !neighbors.contains(&component) {
            neighbors.push(component);
        }
    }

    /// Assemblies in declaration order.
    pub fn assemblies(&self) -> &[&'a str] {
        &self.assemblies
    }

    /// Components of `node`, empty for leaves.
    pub fn neighbors(&self, node: &str) -> &[&'a str] {
        self.edges.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// Finds the first cycle reachable in a depth-first search.
    ///
    /// Roots are tried in declaration order and neighbors in insertion order.
    /// The search stops at the first back edge; the returned path starts at
    /// the node the back edge points to and ends with that node again, so a
    /// self-loop on `A` yields `[A, A]`. Returns `None` for an acyclic graph.
    ///
    /// The traversal keeps an explicit stack, so deep assembly chains do not
    /// grow the call stack.
    pub fn find_first_cycle(&self) -> Option<Vec<String>> {
        let mut visited: HashSet<&str> = HashSet::new();

        for &root in &self.assemblies {
            if visited.contains(root) {
                continue;
            }

            let mut on_path: HashSet<&str> = HashSet::new();
            let mut path: Vec<&str> = Vec::new();
            // (node, index of the next neighbor to explore)
            let mut stack: Vec<(&str, usize)> = Vec::new();

            visited.insert(root);
            on_path.insert(root);
            path.push(root);
            stack.push((root, 0));

            while let Some(frame) = stack.last_mut() {
                let (node, next) = *frame;
                let Some(&neighbor) = self.neighbors(node).get(next) else {
                    stack.pop();
                    path.pop();
                    on_path.remove(node);
                    continue;
                };
                frame.1 += 1;

                if !visited.contains(neighbor) {
                    visited.insert(neighbor);
                    on_path.insert(neighbor);
                    path.push(neighbor);
                    stack.push((neighbor, 0));
                } else if on_path.contains(neighbor) {
                    let start = path.iter().position(|&n| n == neighbor).unwrap_or(0);
                    let mut cycle: Vec<String> =
                        path[start..].iter().map(|n| n.to_string()).collect();
                    cycle.push(neighbor.to_string());
                    return Some(cycle);
                }
            }
        }

        None
    }
}

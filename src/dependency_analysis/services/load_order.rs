use crate::dependency_analysis::domain::DependencyGraph;
use std::collections::{BTreeMap, BTreeSet};

/// LoadOrderPlanner computes a dependencies-first order over a built graph
///
/// Kahn's algorithm driven by each node's count of unresolved dependencies.
/// Nodes stuck behind a cycle never become ready and are left out; the root
/// is always placed last.
pub struct LoadOrderPlanner;

impl LoadOrderPlanner {
    /// Plans the load order for `root`
    ///
    /// # Returns
    /// An empty sequence when `root` is not a node of `graph`
    pub fn plan(graph: &DependencyGraph, root: &str) -> Vec<String> {
        let nodes = graph.all_packages();
        if !nodes.contains(root) {
            return Vec::new();
        }

        let mut remaining: BTreeMap<&str, usize> = nodes
            .iter()
            .map(|node| (*node, graph.dependencies_of(node).map_or(0, BTreeSet::len)))
            .collect();

        let mut dependents: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for (package, deps) in graph.edges() {
            for dep in deps {
                dependents
                    .entry(dep.as_str())
                    .or_default()
                    .push(package.as_str());
            }
        }

        let mut ready: BTreeSet<&str> = remaining
            .iter()
            .filter(|(_, count)| **count == 0)
            .map(|(node, _)| *node)
            .collect();

        let mut order: Vec<String> = Vec::with_capacity(nodes.len());
        let mut placed: BTreeSet<&str> = BTreeSet::new();

        while let Some(node) = ready.pop_first() {
            if !placed.insert(node) {
                continue;
            }
            order.push(node.to_string());

            for dependent in dependents.get(node).into_iter().flatten() {
                if *dependent == node {
                    continue;
                }
                if let Some(count) = remaining.get_mut(dependent) {
                    *count = count.saturating_sub(1);
                    if *count == 0 {
                        ready.insert(*dependent);
                    }
                }
            }
        }

        if let Some(position) = order.iter().position(|p| p == root) {
            order.remove(position);
        }
        order.push(root.to_string());
        order
    }

    /// Nodes of `graph` missing from `order`, i.e. those blocked by a cycle
    pub fn unresolved(graph: &DependencyGraph, order: &[String]) -> Vec<String> {
        let placed: BTreeSet<&str> = order.iter().map(String::as_str).collect();
        graph
            .all_packages()
            .into_iter()
            .filter(|node| !placed.contains(node))
            .map(str::to_string)
            .collect()
    }
}

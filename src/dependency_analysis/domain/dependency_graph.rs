use super::{Cycle, GraphStatistics};
use std::collections::{BTreeMap, BTreeSet};

/// DependencyGraph aggregate produced by one graph build
///
/// Edges read "package depends on dependency". Keys are the packages whose
/// dependencies were expanded; every dependency is itself a graph node even
/// when it never became a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyGraph {
    root: String,
    edges: BTreeMap<String, BTreeSet<String>>,
    cycles: Vec<Cycle>,
}

impl DependencyGraph {
    pub fn new(
        root: String,
        edges: BTreeMap<String, BTreeSet<String>>,
        cycles: Vec<Cycle>,
    ) -> Self {
        Self {
            root,
            edges,
            cycles,
        }
    }

    /// Graph without any node, used when the root itself is filtered out
    pub fn empty(root: String) -> Self {
        Self::new(root, BTreeMap::new(), Vec::new())
    }

    /// Package the graph was built from
    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn edges(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.edges
    }

    /// Outgoing edges of `package`, `None` when it is not a key
    pub fn dependencies_of(&self, package: &str) -> Option<&BTreeSet<String>> {
        self.edges.get(package)
    }

    /// Cycles in discovery order
    pub fn cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    /// Union of all keys and every dependency named in any edge set
    pub fn all_packages(&self) -> BTreeSet<&str> {
        self.edges
            .iter()
            .flat_map(|(package, deps)| {
                std::iter::once(package.as_str()).chain(deps.iter().map(String::as_str))
            })
            .collect()
    }

    pub fn contains(&self, package: &str) -> bool {
        self.edges.contains_key(package) || self.edges.values().any(|deps| deps.contains(package))
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn total_package_count(&self) -> usize {
        self.all_packages().len()
    }

    pub fn total_edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum()
    }

    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    pub fn statistics(&self) -> GraphStatistics {
        GraphStatistics {
            total_packages: self.total_package_count(),
            total_edges: self.total_edge_count(),
            cycles_found: self.cycles.len(),
            cycles: self
                .cycles
                .iter()
                .map(|cycle| cycle.packages().to_vec())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn example_graph() -> DependencyGraph {
        let mut edges = BTreeMap::new();
        edges.insert("A".to_string(), set(&["B", "C"]));
        edges.insert("B".to_string(), set(&["C"]));
        edges.insert("C".to_string(), set(&[]));
        DependencyGraph::new("A".to_string(), edges, vec![])
    }

    #[test]
    fn test_statistics_example() {
        let stats = example_graph().statistics();
        assert_eq!(stats.total_packages, 3);
        assert_eq!(stats.total_edges, 3);
        assert_eq!(stats.cycles_found, 0);
        assert!(stats.cycles.is_empty());
    }

    #[test]
    fn test_all_packages_includes_values_that_are_not_keys() {
        let mut edges = BTreeMap::new();
        edges.insert("app".to_string(), set(&["lib", "util"]));
        let graph = DependencyGraph::new("app".to_string(), edges, vec![]);

        let all: Vec<&str> = graph.all_packages().into_iter().collect();
        assert_eq!(all, vec!["app", "lib", "util"]);
        assert_eq!(graph.total_package_count(), 3);
        assert_eq!(graph.total_edge_count(), 2);
        assert!(graph.contains("util"));
        assert!(graph.dependencies_of("util").is_none());
    }

    #[test]
    fn test_empty_graph() {
        let graph = DependencyGraph::empty("root".to_string());
        assert!(graph.is_empty());
        assert_eq!(graph.root(), "root");
        assert!(!graph.contains("root"));
        let stats = graph.statistics();
        assert_eq!(stats.total_packages, 0);
        assert_eq!(stats.total_edges, 0);
    }

    #[test]
    fn test_statistics_lists_cycles() {
        let mut edges = BTreeMap::new();
        edges.insert("A".to_string(), set(&["B"]));
        edges.insert("B".to_string(), set(&["A"]));
        let cycle = Cycle::closing(vec!["A".to_string(), "B".to_string()]).unwrap();
        let graph = DependencyGraph::new("A".to_string(), edges, vec![cycle]);

        assert!(graph.has_cycles());
        let stats = graph.statistics();
        assert_eq!(stats.cycles_found, 1);
        assert_eq!(stats.cycles, vec![vec!["A", "B", "A"]]);
    }
}

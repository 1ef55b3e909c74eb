// Dependency graph structures for depscan.
// Represents the heuristic function-to-function call relation.

use std::collections::BTreeMap;

/// A node in the dependency graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepNode {
    /// Canonical function name (`Owner::name` or bare `name`).
    pub id: String,
    /// Canonical names this function appears to call, in discovery order.
    pub callees: Vec<String>,
}

/// The dependency graph itself, in kept-function order.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    pub nodes: Vec<DepNode>,
}

impl DependencyGraph {
    pub fn new(nodes: Vec<DepNode>) -> Self {
        Self { nodes }
    }

    /// Adjacency view keyed by canonical name, sorted by key.
    ///
    /// Duplicate ids collapse last-write-wins. Both exporters iterate this
    /// view, so serialization is byte-stable across runs.
    pub fn adjacency(&self) -> BTreeMap<&str, &[String]> {
        self.nodes
            .iter()
            .map(|n| (n.id.as_str(), n.callees.as_slice()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, callees: &[&str]) -> DepNode {
        DepNode {
            id: id.to_string(),
            callees: callees.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn adjacency_is_sorted_by_key() {
        let graph = DependencyGraph::new(vec![
            node("zeta", &[]),
            node("alpha", &["zeta"]),
        ]);
        let keys: Vec<&str> = graph.adjacency().keys().copied().collect();
        assert_eq!(keys, vec!["alpha", "zeta"]);
    }

    #[test]
    fn duplicate_ids_collapse_last_write_wins() {
        let graph = DependencyGraph::new(vec![
            node("get_name", &["first"]),
            node("get_name", &["second"]),
        ]);
        let adjacency = graph.adjacency();
        assert_eq!(adjacency.len(), 1);
        assert_eq!(adjacency["get_name"], ["second".to_string()]);
    }
}

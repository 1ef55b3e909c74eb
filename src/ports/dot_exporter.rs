//! Graphviz DOT exporter.
//!
//! Emits the dependency graph as a `digraph` with one quoted node per
//! function and one edge line per (caller, callee) pair.

use crate::domain::depgraph::DependencyGraph;
use crate::ports::GraphExporter;
use anyhow::{Context, Result};
use std::path::Path;

pub struct DotExporter;

impl DotExporter {
    /// Convert a dependency graph to DOT text.
    ///
    /// Nodes and edges are written in the order of the sorted adjacency
    /// view. Parallel edges are kept as-is; there is no styling beyond the
    /// global box shape.
    pub fn to_dot(graph: &DependencyGraph) -> String {
        let adjacency = graph.adjacency();
        let mut lines = Vec::new();

        lines.push("digraph deps {".to_string());
        lines.push("\tnode [shape=box];".to_string());
        lines.push(String::new());

        for id in adjacency.keys() {
            lines.push(format!("\t\"{}\"", Self::escape(id)));
        }

        lines.push(String::new());

        for (src, callees) in &adjacency {
            for dst in callees.iter() {
                lines.push(format!(
                    "\t\"{}\" -> \"{}\"",
                    Self::escape(src),
                    Self::escape(dst)
                ));
            }
        }

        lines.push("}".to_string());
        lines.join("\n") + "\n"
    }

    fn escape(id: &str) -> String {
        id.replace('\\', "\\\\").replace('"', "\\\"")
    }
}

impl GraphExporter for DotExporter {
    fn export(&self, graph: &DependencyGraph, path: &Path) -> Result<()> {
        std::fs::write(path, Self::to_dot(graph))
            .with_context(|| format!("failed to write {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::depgraph::DepNode;

    #[test]
    fn test_to_dot() {
        let graph = DependencyGraph::new(vec![
            DepNode {
                id: "main".to_string(),
                callees: vec!["helper".to_string()],
            },
            DepNode {
                id: "helper".to_string(),
                callees: vec![],
            },
        ]);

        let dot = DotExporter::to_dot(&graph);
        assert!(dot.starts_with("digraph deps {"));
        assert!(dot.contains("\tnode [shape=box];"));
        assert!(dot.contains("\t\"main\""));
        assert!(dot.contains("\t\"helper\""));
        assert_eq!(dot.matches("->").count(), 1);
        assert!(dot.contains("\t\"main\" -> \"helper\""));
        assert!(dot.ends_with("}\n"));
    }

    #[test]
    fn test_quotes_are_escaped() {
        let graph = DependencyGraph::new(vec![DepNode {
            id: "odd\"name".to_string(),
            callees: vec![],
        }]);
        let dot = DotExporter::to_dot(&graph);
        assert!(dot.contains("\"odd\\\"name\""));
    }
}

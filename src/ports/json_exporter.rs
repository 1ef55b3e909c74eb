//! JSON exporter.
//!
//! Writes the dependency graph as a single JSON object mapping canonical
//! function names to their callee lists, plus an optional dump of the raw
//! function records.

use crate::domain::depgraph::DependencyGraph;
use crate::domain::function_record::FunctionRecord;
use crate::ports::GraphExporter;
use anyhow::{Context, Result};
use std::path::Path;

pub struct JsonExporter;

impl JsonExporter {
    /// Render the adjacency map as pretty-printed JSON with sorted keys.
    pub fn to_json(graph: &DependencyGraph) -> Result<String> {
        serde_json::to_string_pretty(&graph.adjacency())
            .context("failed to serialize dependency map")
    }
}

impl GraphExporter for JsonExporter {
    fn export(&self, graph: &DependencyGraph, path: &Path) -> Result<()> {
        std::fs::write(path, Self::to_json(graph)?)
            .with_context(|| format!("failed to write {}", path.display()))
    }
}

/// Dump the raw function records, the intermediate artifact of the scan.
pub fn dump_records(records: &[FunctionRecord], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(records)
        .context("failed to serialize function records")?;
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}

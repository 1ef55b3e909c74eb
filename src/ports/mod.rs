use crate::domain::depgraph::DependencyGraph;
use crate::domain::function_record::FunctionRecord;
use anyhow::Result;
use std::path::Path;

pub mod dot_exporter;
pub mod json_exporter;

/// Turns one source file's text into function records.
///
/// The default implementation is a best-effort structural scanner; this
/// seam exists so it can be swapped for a real parser without touching
/// extraction or serialization.
pub trait SourceParser {
    fn parse(&self, file: &str, text: &str) -> Result<Vec<FunctionRecord>>;
}

/// Builds the dependency graph from the full record list.
pub trait DependencyExtractor {
    fn extract(&self, records: &[FunctionRecord]) -> DependencyGraph;
}

/// Writes a dependency graph to disk in some output format.
pub trait GraphExporter {
    fn export(&self, graph: &DependencyGraph, path: &Path) -> Result<()>;
}

use crate::domain::depgraph::DependencyGraph;
use crate::domain::function_record::FunctionRecord;
use crate::ports::{DependencyExtractor, GraphExporter, SourceParser};
use anyhow::Result;
use std::path::PathBuf;

/// Everything one analysis run produces in memory.
pub struct AnalysisOutput {
    pub records: Vec<FunctionRecord>,
    pub graph: DependencyGraph,
}

pub struct AnalyzeUsecase<'a> {
    pub parser: &'a dyn SourceParser,
    pub extractor: &'a dyn DependencyExtractor,
    pub exporters: &'a [(&'a dyn GraphExporter, PathBuf)],
}

impl<'a> AnalyzeUsecase<'a> {
    /// Scan every source, build the dependency graph, run the exporters.
    ///
    /// A file the scanner cannot balance is skipped with a warning; the
    /// remaining files still contribute records.
    pub fn run(&self, sources: &[(String, String)]) -> Result<AnalysisOutput> {
        let mut records = Vec::new();
        for (file, text) in sources {
            match self.parser.parse(file, text) {
                Ok(mut parsed) => records.append(&mut parsed),
                Err(e) => eprintln!("[WARN] failed to scan {}: {}", file, e),
            }
        }

        let graph = self.extractor.extract(&records);

        for (exporter, path) in self.exporters {
            exporter.export(&graph, path)?;
        }

        Ok(AnalysisOutput { records, graph })
    }
}

//! Dependency extraction.
//!
//! Filters the scanned records and approximates the call relation by
//! searching each kept function's body for the literal text `name(` of
//! every kept function. Purely textual: comments, strings and shadowed
//! names produce false positives, fully-qualified and trait-dispatched
//! calls produce false negatives. Both are accepted.

use crate::domain::depgraph::{DepNode, DependencyGraph};
use crate::domain::function_record::FunctionRecord;
use crate::ports::DependencyExtractor;
use std::collections::HashSet;

/// Filtering policy for the extractor, supplied explicitly so it stays
/// testable and swappable.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Owning types whose methods are dropped entirely.
    pub excluded_owners: HashSet<String>,
    /// Function names dropped regardless of owner.
    pub excluded_names: HashSet<String>,
    /// The only owner whose `new` constructor is kept.
    pub constructor_owner: String,
}

impl Default for FilterConfig {
    /// Defaults tuned for graph-library analysis: vocabulary and file
    /// reader/writer helper types are noise, as are ubiquitous collection
    /// method names.
    fn default() -> Self {
        let excluded_owners = [
            "Vocabulary",
            "VocabularyVec",
            "CSVFileReader",
            "EdgeFileReader",
            "EdgeFileWriter",
            "NodeFileReader",
            "NodeFileWriter",
        ];
        let excluded_names = ["len", "clone", "get", "insert", "not_one", "contains_key"];
        Self {
            excluded_owners: excluded_owners.iter().map(|s| s.to_string()).collect(),
            excluded_names: excluded_names.iter().map(|s| s.to_string()).collect(),
            constructor_owner: "Graph".to_string(),
        }
    }
}

impl FilterConfig {
    /// Keep predicate over scanned records.
    pub fn keeps(&self, record: &FunctionRecord) -> bool {
        if record.name.is_empty() {
            return false;
        }
        if let Some(owner) = &record.owner {
            if self.excluded_owners.contains(owner) {
                return false;
            }
        }
        if self.excluded_names.contains(&record.name) {
            return false;
        }
        if record.name == "new" {
            return record.owner.as_deref() == Some(self.constructor_owner.as_str());
        }
        true
    }
}

/// Builds the dependency graph by textual `name(` substring search over
/// function bodies.
#[derive(Debug, Default)]
pub struct TextualDependencyExtractor {
    pub config: FilterConfig,
}

impl TextualDependencyExtractor {
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }
}

impl DependencyExtractor for TextualDependencyExtractor {
    fn extract(&self, records: &[FunctionRecord]) -> DependencyGraph {
        let kept: Vec<&FunctionRecord> =
            records.iter().filter(|r| self.config.keeps(r)).collect();

        let mut nodes = Vec::with_capacity(kept.len());
        for function in &kept {
            // One callee entry per matching record, in kept-list order.
            // Self-reference is possible (recursion) and same-named
            // functions of different owners all match.
            let mut callees = Vec::new();
            for candidate in &kept {
                let needle = format!("{}(", candidate.name);
                if function.body.contains(&needle) {
                    callees.push(candidate.canonical_name());
                }
            }
            nodes.push(DepNode {
                id: function.canonical_name(),
                callees,
            });
        }
        DependencyGraph::new(nodes)
    }
}

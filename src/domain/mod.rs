// Domain types for depscan.

pub mod depgraph;
pub mod function_record;

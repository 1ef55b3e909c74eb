// Function records for depscan.
// One record per function or method found by the structural scanner.

use serde::{Deserialize, Serialize};

/// A single parsed function or method.
///
/// Signature fields (`modifiers`, `generics`, `return_type`) hold raw
/// source text; only `name`, `owner` and `args` are broken down further.
/// `body` is the unparsed text between the outermost braces and is only
/// ever used for substring search by the dependency extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    /// Path of the source file this record came from.
    pub file: String,
    /// Owning type name, present only when the function was found inside
    /// that type's `impl` block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Lines of the `///` block immediately preceding the function.
    pub doc: Vec<String>,
    /// Raw text before the `fn` keyword (`pub`, `pub(crate)`, `async`, ...).
    pub modifiers: String,
    /// Bare function identifier.
    pub name: String,
    /// Raw `<...>` generic parameter text, unparsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generics: Option<String>,
    /// Ordered (argument name, argument type) pairs. A receiver is captured
    /// as `("self", "&self")` / `("self", "&mut self")` / `("self", "self")`.
    pub args: Vec<(String, String)>,
    /// Raw return type text; `None` when the signature has no `->` arrow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
    /// Raw body text between the outermost braces.
    pub body: String,
}

impl FunctionRecord {
    /// `Owner::name` for methods, bare `name` for free functions.
    ///
    /// Canonical names key the dependency map. Uniqueness is not enforced:
    /// two records may share a canonical name, in which case the later one
    /// wins when the map is built.
    pub fn canonical_name(&self) -> String {
        match &self.owner {
            Some(owner) => format!("{}::{}", owner, self.name),
            None => self.name.clone(),
        }
    }
}

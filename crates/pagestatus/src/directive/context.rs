//! Directive processing context.

use std::path::Path;

/// Source location information passed to directive handlers.
///
/// Created by the [`Registry`](crate::Registry) for each directive line so
/// handlers can record provenance on the nodes they produce.
#[derive(Clone, Copy, Debug)]
pub struct DirectiveContext<'a> {
    /// Identifier of the document being built.
    pub docname: &'a str,
    /// Path to the source file being built (if known).
    pub source_path: Option<&'a Path>,
    /// Line number where the directive appears (1-indexed).
    pub line: usize,
}

//! Directive API for the `::name[content]{attrs}` leaf-directive syntax.
//!
//! A [`Directive`] handler is registered by name with the
//! [`Registry`](crate::Registry). During [`build_document`](crate::Registry::build_document)
//! every recognized directive line is parsed into [`DirectiveArgs`] and
//! dispatched to the matching handler, which either produces a tree node or
//! a validation error. Errors become diagnostic nodes; the build continues.

mod args;
mod context;
mod page_status;
pub(crate) mod parser;

pub use args::DirectiveArgs;
pub use context::DirectiveContext;
pub use page_status::{DEFAULT_CLASS, PageStatusDirective};

use crate::error::DirectiveError;
use crate::node::Node;

/// Handler for a named leaf directive.
///
/// Handlers implement `Send` only (not `Sync`) since each build gets its
/// own registry instance.
pub trait Directive: Send {
    /// Directive name matched against the syntax `::name`.
    fn name(&self) -> &str;

    /// Validate the parsed options and produce a tree node.
    ///
    /// # Errors
    ///
    /// Returns a [`DirectiveError`] when option validation fails. The
    /// caller replaces the node with a diagnostic and keeps building.
    fn run(&mut self, args: DirectiveArgs, ctx: &DirectiveContext<'_>)
    -> Result<Node, DirectiveError>;
}

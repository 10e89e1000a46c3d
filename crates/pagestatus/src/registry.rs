//! Extension registry: directives, node handlers and declared events.
//!
//! The registry is the host-facing seam. Extensions register their pieces
//! once at startup (see [`setup`](crate::setup)); the registry then drives
//! the two build phases:
//!
//! 1. [`build_document`](Registry::build_document): scans source lines for
//!    leaf-directive syntax and dispatches to the registered handlers,
//!    collecting nodes and diagnostics into a [`Document`].
//! 2. [`render_document`](Registry::render_document): traverses the node
//!    list for one output format, dispatching each node through the
//!    visit/depart pair registered for that format.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use crate::directive::parser::{FenceTracker, parse_leaf_line};
use crate::directive::{Directive, DirectiveArgs, DirectiveContext};
use crate::document::Document;
use crate::error::{RegistryError, RenderError};
use crate::node::{MessageLevel, Node, NodeChild, PageStatusNode, SystemMessage};
use crate::translator::{Format, NodeHandlers, Translator};

/// Registration state for one build.
///
/// Holds no mutable cross-document state: documents are built one at a
/// time and rendering works on per-pass node clones, so parallel *reading*
/// of separately built documents is safe.
#[derive(Default)]
pub struct Registry {
    directives: HashMap<String, Box<dyn Directive>>,
    handlers: HashMap<Format, NodeHandlers>,
    events: BTreeSet<String>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("directives", &self.directives.keys().collect::<Vec<_>>())
            .field("handlers", &self.handlers.keys().collect::<Vec<_>>())
            .field("events", &self.events)
            .finish()
    }
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a directive handler under its own name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateDirective`] if the name is taken.
    pub fn add_directive<D: Directive + 'static>(
        &mut self,
        directive: D,
    ) -> Result<(), RegistryError> {
        let name = directive.name().to_owned();
        if self.directives.contains_key(&name) {
            return Err(RegistryError::DuplicateDirective(name));
        }
        self.directives.insert(name, Box::new(directive));
        Ok(())
    }

    /// Register the visit/depart pair for a node type in one format.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateHandlers`] if the format already
    /// has a pair registered.
    pub fn add_node_handlers(
        &mut self,
        format: Format,
        handlers: NodeHandlers,
    ) -> Result<(), RegistryError> {
        if self.handlers.contains_key(&format) {
            return Err(RegistryError::DuplicateHandlers(format));
        }
        self.handlers.insert(format, handlers);
        Ok(())
    }

    /// Declare a named event other extensions can hook into.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateEvent`] if already declared.
    pub fn add_event(&mut self, name: &str) -> Result<(), RegistryError> {
        if !self.events.insert(name.to_owned()) {
            return Err(RegistryError::DuplicateEvent(name.to_owned()));
        }
        Ok(())
    }

    /// Whether an event with this name has been declared.
    #[must_use]
    pub fn has_event(&self, name: &str) -> bool {
        self.events.contains(name)
    }

    /// Whether a directive with this name has been registered.
    #[must_use]
    pub fn has_directive(&self, name: &str) -> bool {
        self.directives.contains_key(name)
    }

    /// Whether node handlers are registered for this format.
    #[must_use]
    pub fn has_node_handlers(&self, format: Format) -> bool {
        self.handlers.contains_key(&format)
    }

    /// Build a document from source text.
    ///
    /// Scans for leaf-directive lines outside code fences and dispatches
    /// them to registered directives. A failed invocation is replaced by a
    /// [`SystemMessage`] node and logged; the rest of the document still
    /// builds. Lines that are not directives, and directives no handler
    /// owns, pass through untouched.
    pub fn build_document(
        &mut self,
        docname: &str,
        source_path: Option<&Path>,
        source: &str,
    ) -> Document {
        let mut doc = Document::new(docname);
        let mut fence = FenceTracker::new();

        for (idx, line) in source.lines().enumerate() {
            let line_num = idx + 1;
            if fence.update(line) || fence.in_fence() {
                continue;
            }
            let Some(parsed) = parse_leaf_line(line) else {
                continue;
            };
            let Some(directive) = self.directives.get_mut(parsed.name) else {
                continue;
            };

            let args = DirectiveArgs::parse(parsed.content, parsed.attrs);
            let ctx = DirectiveContext {
                docname,
                source_path,
                line: line_num,
            };
            match directive.run(args, &ctx) {
                Ok(Node::PageStatus(mut node)) => {
                    doc.note_explicit_target(&mut node);
                    doc.push_node(Node::PageStatus(node));
                }
                Ok(node @ Node::SystemMessage(_)) => doc.push_node(node),
                Err(err) => {
                    tracing::warn!(docname, line = line_num, error = %err, "directive error");
                    doc.push_node(Node::SystemMessage(SystemMessage {
                        level: MessageLevel::Error,
                        message: format!("invalid '{}' directive: {err}", parsed.name),
                        source: source_path.map(Path::to_path_buf),
                        line: line_num,
                    }));
                }
            }
        }

        doc
    }

    /// Render a document to one output format.
    ///
    /// Each page-status node is cloned for the pass, so a mutating format
    /// (LaTeX removes the title child) never affects subsequent renders of
    /// the same document.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::MissingHandlers`] if no visit/depart pair is
    /// registered for the format.
    pub fn render_document(&self, doc: &Document, format: Format) -> Result<String, RenderError> {
        let handlers = self
            .handlers
            .get(&format)
            .copied()
            .ok_or(RenderError::MissingHandlers(format))?;

        let mut translator = format.translator();
        for node in doc.nodes() {
            match node {
                Node::PageStatus(node) => {
                    let mut pass = node.clone();
                    render_one(handlers, translator.as_mut(), &mut pass);
                }
                Node::SystemMessage(message) => translator.system_message(message),
            }
        }
        Ok(translator.finish())
    }

    /// Render a single node instance to one output format.
    ///
    /// The node is visited in place: a mutating visit handler (LaTeX)
    /// leaves the instance without its title child afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::MissingHandlers`] if no visit/depart pair is
    /// registered for the format.
    pub fn render_node(
        &self,
        format: Format,
        node: &mut PageStatusNode,
    ) -> Result<String, RenderError> {
        let handlers = self
            .handlers
            .get(&format)
            .copied()
            .ok_or(RenderError::MissingHandlers(format))?;

        let mut translator = format.translator();
        render_one(handlers, translator.as_mut(), node);
        Ok(translator.finish())
    }
}

/// Single enter/exit transition: visit, render remaining children, depart.
fn render_one(handlers: NodeHandlers, translator: &mut dyn Translator, node: &mut PageStatusNode) {
    (handlers.visit)(translator, node);
    for child in node.children() {
        match child {
            NodeChild::Title(text) => translator.title(text),
            NodeChild::Paragraph(text) => translator.paragraph(text),
        }
    }
    (handlers.depart)(translator, node);
}

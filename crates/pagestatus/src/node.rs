//! Document tree nodes produced by the `::page_status` directive.

use std::path::PathBuf;

use crate::status::StatusKind;

/// A node in a built document.
///
/// Successful directive invocations produce [`Node::PageStatus`]; failed
/// option validation produces [`Node::SystemMessage`] in its place so the
/// rest of the document still builds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// A page-status admonition.
    PageStatus(PageStatusNode),
    /// A build diagnostic embedded at the offending location.
    SystemMessage(SystemMessage),
}

/// Child of a [`PageStatusNode`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeChild {
    /// Admonition title ("Page status: {title}").
    Title(String),
    /// Explanatory paragraph from the status catalog.
    Paragraph(String),
}

/// The page-status admonition node.
///
/// Created during document building when the directive is encountered and
/// owned by the [`Document`](crate::Document). A render pass works on its
/// own clone, so a pass that mutates the node (the LaTeX translator removes
/// the title child) never affects another format's rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageStatusNode {
    /// Validated status kind.
    pub kind: StatusKind,
    /// Identifier of the document that defined this node.
    pub docname: String,
    /// CSS-like class list; defaults to `admonition-page-status`.
    pub classes: Vec<String>,
    /// Explicit names registered as cross-reference targets.
    pub names: Vec<String>,
    /// Identifiers assigned by [`Document::note_explicit_target`](crate::Document::note_explicit_target).
    pub ids: Vec<String>,
    /// Source file the directive appeared in, if known.
    pub source: Option<PathBuf>,
    /// Line number of the directive (1-indexed).
    pub line: usize,
    children: Vec<NodeChild>,
}

impl PageStatusNode {
    /// Create an empty node for the given kind.
    ///
    /// The directive populates the title and explanation children.
    #[must_use]
    pub fn new(kind: StatusKind) -> Self {
        Self {
            kind,
            docname: String::new(),
            classes: Vec::new(),
            names: Vec::new(),
            ids: Vec::new(),
            source: None,
            line: 0,
            children: Vec::new(),
        }
    }

    /// Append a child node.
    pub fn push_child(&mut self, child: NodeChild) {
        self.children.push(child);
    }

    /// The node's children, in document order.
    #[must_use]
    pub fn children(&self) -> &[NodeChild] {
        &self.children
    }

    /// Text of the title child, if present.
    #[must_use]
    pub fn title_text(&self) -> Option<&str> {
        self.children.iter().find_map(|child| match child {
            NodeChild::Title(text) => Some(text.as_str()),
            NodeChild::Paragraph(_) => None,
        })
    }

    /// Remove and return the title child.
    ///
    /// Used by the LaTeX visit handler, which renders the title inside the
    /// begin-block marker and must keep the generic child pass from
    /// rendering it a second time.
    pub fn pop_title(&mut self) -> Option<String> {
        let index = self
            .children
            .iter()
            .position(|child| matches!(child, NodeChild::Title(_)));
        index.map(|i| match self.children.remove(i) {
            NodeChild::Title(text) => text,
            NodeChild::Paragraph(_) => unreachable!("position matched a title child"),
        })
    }

    /// First assigned identifier, used as the anchor for hyperlink targets.
    #[must_use]
    pub fn first_id(&self) -> Option<&str> {
        self.ids.first().map(String::as_str)
    }
}

/// Severity of a [`SystemMessage`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageLevel {
    /// Reported but the build continues.
    Warning,
    /// Reported prominently; the build still continues.
    Error,
}

/// A build diagnostic inserted in place of a failed directive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SystemMessage {
    /// Severity of the diagnostic.
    pub level: MessageLevel,
    /// Human-readable description of what went wrong.
    pub message: String,
    /// Source file of the offending directive, if known.
    pub source: Option<PathBuf>,
    /// Line number of the offending directive (1-indexed).
    pub line: usize,
}

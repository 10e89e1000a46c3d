//! In-memory document holding built nodes and cross-reference targets.

use std::collections::BTreeMap;

use crate::node::{Node, PageStatusNode, SystemMessage};

/// A built document: an ordered node list plus the explicit-target table.
#[derive(Debug, Default)]
pub struct Document {
    docname: String,
    nodes: Vec<Node>,
    /// Explicit target name -> assigned node id.
    targets: BTreeMap<String, String>,
}

impl Document {
    /// Create an empty document.
    #[must_use]
    pub fn new(docname: impl Into<String>) -> Self {
        Self {
            docname: docname.into(),
            nodes: Vec::new(),
            targets: BTreeMap::new(),
        }
    }

    /// Identifier of this document within the project.
    #[must_use]
    pub fn docname(&self) -> &str {
        &self.docname
    }

    /// Append a node to the document tree.
    pub fn push_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Nodes in document order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Register the node's explicit names as cross-reference targets.
    ///
    /// Each name gets an id derived via [`make_id`], pushed onto the node's
    /// id list and recorded in the target table. The first registration of
    /// a name wins; later duplicates are logged and skipped.
    pub fn note_explicit_target(&mut self, node: &mut PageStatusNode) {
        for name in &node.names {
            let id = make_id(name);
            if id.is_empty() {
                continue;
            }
            if self.targets.contains_key(name) {
                tracing::warn!(docname = %self.docname, name = %name, "duplicate explicit target");
                continue;
            }
            self.targets.insert(name.clone(), id.clone());
            node.ids.push(id);
        }
    }

    /// Resolve an explicit target name to its assigned id.
    #[must_use]
    pub fn resolve_target(&self, name: &str) -> Option<&str> {
        self.targets.get(name).map(String::as_str)
    }

    /// Diagnostics collected during the build, in document order.
    pub fn system_messages(&self) -> impl Iterator<Item = &SystemMessage> {
        self.nodes.iter().filter_map(|node| match node {
            Node::SystemMessage(message) => Some(message),
            Node::PageStatus(_) => None,
        })
    }
}

/// Derive an identifier from a target name.
///
/// Lowercases, maps runs of non-alphanumeric characters to single hyphens
/// and trims hyphens from both ends, matching the slug form used for
/// heading ids.
#[must_use]
pub fn make_id(name: &str) -> String {
    let mut id = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for ch in name.chars() {
        if ch.is_alphanumeric() {
            if pending_hyphen && !id.is_empty() {
                id.push('-');
            }
            pending_hyphen = false;
            id.extend(ch.to_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    id
}

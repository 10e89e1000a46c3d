//! LaTeX translator.
//!
//! The admonition maps onto a `docadmonition` environment taking the
//! admonition kind and title as arguments:
//! `\begin{docadmonition}{note}{<anchor><title>:}`. The page-status visit
//! handler emits this marker itself (with the title escaped and the title
//! child removed); the generic primitives here cover any other traversal.

use std::fmt::Write;

use super::Translator;
use crate::escape::escape_latex;
use crate::node::{PageStatusNode, SystemMessage};

/// LaTeX output translator.
#[derive(Debug, Default)]
pub struct LatexTranslator {
    out: String,
}

impl LatexTranslator {
    /// Create a translator with an empty output buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Hyperlink anchor markup for a node, empty when the node has no id.
#[must_use]
pub fn hypertarget_to(node: &PageStatusNode) -> String {
    node.first_id()
        .map(|id| format!("\\hypertarget{{{id}}}{{}}"))
        .unwrap_or_default()
}

impl Translator for LatexTranslator {
    fn raw(&mut self, markup: &str) {
        self.out.push_str(markup);
    }

    fn admonition_open(&mut self, node: &PageStatusNode) {
        self.out.push_str("\n\\begin{docadmonition}{note}{");
        self.out.push_str(&hypertarget_to(node));
        self.out.push('}');
    }

    fn admonition_close(&mut self, _node: &PageStatusNode) {
        self.out.push_str("\\end{docadmonition}\n");
    }

    fn title(&mut self, text: &str) {
        writeln!(self.out, "\\textbf{{{}}}\\par", escape_latex(text)).unwrap();
    }

    fn paragraph(&mut self, text: &str) {
        self.out.push('\n');
        self.out.push_str(&escape_latex(text));
        self.out.push('\n');
    }

    fn system_message(&mut self, message: &SystemMessage) {
        // Comment line; escaping is pointless after '%'.
        writeln!(self.out, "% {}", message.message.replace('\n', " ")).unwrap();
    }

    fn finish(self: Box<Self>) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::StatusKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hypertarget_to_without_id() {
        let node = PageStatusNode::new(StatusKind::Draft);
        assert_eq!(hypertarget_to(&node), "");
    }

    #[test]
    fn test_hypertarget_to_with_id() {
        let mut node = PageStatusNode::new(StatusKind::Draft);
        node.ids.push("intro-status".to_owned());
        assert_eq!(hypertarget_to(&node), "\\hypertarget{intro-status}{}");
    }

    #[test]
    fn test_paragraph_escapes_reserved_chars() {
        let mut t = LatexTranslator::new();
        t.paragraph("100% done & counting");
        assert_eq!(Box::new(t).finish(), "\n100\\% done \\& counting\n");
    }

    #[test]
    fn test_admonition_pair() {
        let node = PageStatusNode::new(StatusKind::Outline);
        let mut t = LatexTranslator::new();
        t.admonition_open(&node);
        t.admonition_close(&node);
        assert_eq!(
            Box::new(t).finish(),
            "\n\\begin{docadmonition}{note}{}\\end{docadmonition}\n"
        );
    }
}

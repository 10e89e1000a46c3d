//! Plain-text translator.

use std::fmt::Write;

use super::Translator;
use crate::node::{PageStatusNode, SystemMessage};

/// Plain-text output translator.
///
/// The admonition renders as a title line followed by an indented body,
/// separated from surrounding content by blank lines.
#[derive(Debug, Default)]
pub struct TextTranslator {
    out: String,
}

impl TextTranslator {
    /// Create a translator with an empty output buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Translator for TextTranslator {
    fn raw(&mut self, markup: &str) {
        self.out.push_str(markup);
    }

    fn admonition_open(&mut self, _node: &PageStatusNode) {
        self.out.push('\n');
    }

    fn admonition_close(&mut self, _node: &PageStatusNode) {
        self.out.push('\n');
    }

    fn title(&mut self, text: &str) {
        writeln!(self.out, "{text}").unwrap();
    }

    fn paragraph(&mut self, text: &str) {
        writeln!(self.out, "   {text}").unwrap();
    }

    fn system_message(&mut self, message: &SystemMessage) {
        writeln!(self.out, "[{}]", message.message).unwrap();
    }

    fn finish(self: Box<Self>) -> String {
        self.out
    }
}

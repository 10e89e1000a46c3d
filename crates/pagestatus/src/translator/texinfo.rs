//! Texinfo translator.

use std::fmt::Write;

use super::Translator;
use crate::node::{PageStatusNode, SystemMessage};

/// Texinfo output translator.
///
/// The admonition renders inside a `@quotation` block with a bold title.
#[derive(Debug, Default)]
pub struct TexinfoTranslator {
    out: String,
}

impl TexinfoTranslator {
    /// Create a translator with an empty output buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Escape the Texinfo command characters `@`, `{` and `}`.
fn escape_texinfo(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '@' => escaped.push_str("@@"),
            '{' => escaped.push_str("@{"),
            '}' => escaped.push_str("@}"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

impl Translator for TexinfoTranslator {
    fn raw(&mut self, markup: &str) {
        self.out.push_str(markup);
    }

    fn admonition_open(&mut self, _node: &PageStatusNode) {
        self.out.push_str("\n@quotation\n");
    }

    fn admonition_close(&mut self, _node: &PageStatusNode) {
        self.out.push_str("@end quotation\n");
    }

    fn title(&mut self, text: &str) {
        writeln!(self.out, "@strong{{{}}}", escape_texinfo(text)).unwrap();
    }

    fn paragraph(&mut self, text: &str) {
        writeln!(self.out, "{}", escape_texinfo(text)).unwrap();
    }

    fn system_message(&mut self, message: &SystemMessage) {
        writeln!(self.out, "@c {}", message.message.replace('\n', " ")).unwrap();
    }

    fn finish(self: Box<Self>) -> String {
        self.out
    }
}

//! HTML translator.
//!
//! Produces semantic HTML5: the admonition becomes a `<div>` carrying the
//! node's class list, with the title in a `<p class="admonition-title">`.

use std::fmt::Write;

use super::Translator;
use crate::escape::escape_html;
use crate::node::{PageStatusNode, SystemMessage};

/// HTML output translator.
#[derive(Debug, Default)]
pub struct HtmlTranslator {
    out: String,
}

impl HtmlTranslator {
    /// Create a translator with an empty output buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Translator for HtmlTranslator {
    fn raw(&mut self, markup: &str) {
        self.out.push_str(markup);
    }

    fn admonition_open(&mut self, node: &PageStatusNode) {
        self.out.push_str(r#"<div class="admonition"#);
        for class in &node.classes {
            write!(self.out, " {}", escape_html(class)).unwrap();
        }
        self.out.push('"');
        if let Some(id) = node.first_id() {
            write!(self.out, r#" id="{}""#, escape_html(id)).unwrap();
        }
        self.out.push('>');
    }

    fn admonition_close(&mut self, _node: &PageStatusNode) {
        self.out.push_str("</div>");
    }

    fn title(&mut self, text: &str) {
        write!(
            self.out,
            r#"<p class="admonition-title">{}</p>"#,
            escape_html(text)
        )
        .unwrap();
    }

    fn paragraph(&mut self, text: &str) {
        write!(self.out, "<p>{}</p>", escape_html(text)).unwrap();
    }

    fn system_message(&mut self, message: &SystemMessage) {
        write!(
            self.out,
            r#"<div class="system-message">{}</div>"#,
            escape_html(&message.message)
        )
        .unwrap();
    }

    fn finish(self: Box<Self>) -> String {
        self.out
    }
}

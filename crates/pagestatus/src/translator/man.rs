//! Manual-page (roff) translator.

use std::fmt::Write;

use super::Translator;
use crate::node::{PageStatusNode, SystemMessage};

/// Roff output translator for manual pages.
///
/// The admonition renders as an indented block (`.RS`/`.RE`) with a bold
/// title line.
#[derive(Debug, Default)]
pub struct ManTranslator {
    out: String,
}

impl ManTranslator {
    /// Create a translator with an empty output buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Escape text for roff: backslashes, quotes, and a leading control dot.
fn escape_man(text: &str) -> String {
    let escaped = text.replace('\\', "\\e").replace('"', "\\(dq");
    if escaped.starts_with('.') || escaped.starts_with('\'') {
        format!("\\&{escaped}")
    } else {
        escaped
    }
}

impl Translator for ManTranslator {
    fn raw(&mut self, markup: &str) {
        self.out.push_str(markup);
    }

    fn admonition_open(&mut self, _node: &PageStatusNode) {
        self.out.push_str(".sp\n.RS 4\n");
    }

    fn admonition_close(&mut self, _node: &PageStatusNode) {
        self.out.push_str(".RE\n");
    }

    fn title(&mut self, text: &str) {
        writeln!(self.out, ".B \"{}\"", escape_man(text)).unwrap();
    }

    fn paragraph(&mut self, text: &str) {
        writeln!(self.out, "{}", escape_man(text)).unwrap();
    }

    fn system_message(&mut self, message: &SystemMessage) {
        writeln!(self.out, ".\\\" {}", message.message.replace('\n', " ")).unwrap();
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
    fn test_admonition_shape() {
        let node = PageStatusNode::new(StatusKind::Finished);
        let mut t = ManTranslator::new();
        t.admonition_open(&node);
        t.title("Page status: Finished");
        t.paragraph("Body text.");
        t.admonition_close(&node);
        assert_eq!(
            Box::new(t).finish(),
            ".sp\n.RS 4\n.B \"Page status: Finished\"\nBody text.\n.RE\n"
        );
    }

    #[test]
    fn test_escape_man() {
        assert_eq!(escape_man("a\\b"), "a\\eb");
        assert_eq!(escape_man(".leading dot"), "\\&.leading dot");
        assert_eq!(escape_man("say \"hi\""), "say \\(dqhi\\(dq");
    }
}

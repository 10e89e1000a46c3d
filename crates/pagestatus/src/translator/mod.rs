//! Per-format output translators.
//!
//! A [`Translator`] turns visited nodes into one format's concrete output.
//! The extension supplies visit/depart callback pairs ([`NodeHandlers`])
//! keyed by [`Format`]; the [`Registry`](crate::Registry) performs the
//! dispatch during traversal.
//!
//! Four formats render the admonition through their generic
//! [`admonition_open`](Translator::admonition_open) /
//! [`admonition_close`](Translator::admonition_close) primitives. The LaTeX
//! handlers bypass them and emit the begin/end block pair manually (see
//! [`setup`](crate::setup)).

mod html;
mod latex;
mod man;
mod text;
mod texinfo;

pub use html::HtmlTranslator;
pub use latex::{LatexTranslator, hypertarget_to};
pub use man::ManTranslator;
pub use texinfo::TexinfoTranslator;
pub use text::TextTranslator;

use std::fmt;

use crate::node::{PageStatusNode, SystemMessage};

/// Supported output formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Format {
    /// Structured web markup.
    Html,
    /// Typeset/print output.
    Latex,
    /// Plain text.
    Text,
    /// Manual pages (roff).
    Man,
    /// Texinfo.
    Texinfo,
}

impl Format {
    /// All supported formats.
    pub const ALL: [Self; 5] = [Self::Html, Self::Latex, Self::Text, Self::Man, Self::Texinfo];

    /// Stable lowercase identifier for this format.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Latex => "latex",
            Self::Text => "text",
            Self::Man => "man",
            Self::Texinfo => "texinfo",
        }
    }

    /// Create a fresh translator for this format.
    #[must_use]
    pub fn translator(self) -> Box<dyn Translator> {
        match self {
            Self::Html => Box::new(HtmlTranslator::new()),
            Self::Latex => Box::new(LatexTranslator::new()),
            Self::Text => Box::new(TextTranslator::new()),
            Self::Man => Box::new(ManTranslator::new()),
            Self::Texinfo => Box::new(TexinfoTranslator::new()),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format-specific output sink visited during traversal.
///
/// Implementations own their output buffer; [`finish`](Self::finish)
/// returns it once the traversal completes.
pub trait Translator {
    /// Append raw markup verbatim.
    fn raw(&mut self, markup: &str);

    /// Open the surrounding presentation markup for an admonition block.
    fn admonition_open(&mut self, node: &PageStatusNode);

    /// Close the admonition block.
    fn admonition_close(&mut self, node: &PageStatusNode);

    /// Render a title child with the format's standard title markup.
    fn title(&mut self, text: &str);

    /// Render a paragraph child with the format's standard text rendering.
    fn paragraph(&mut self, text: &str);

    /// Render a build diagnostic.
    fn system_message(&mut self, message: &SystemMessage);

    /// Consume the translator and return its output.
    fn finish(self: Box<Self>) -> String;
}

/// Visit callback invoked when traversal enters a page-status node.
///
/// The node is mutable: the LaTeX visit handler removes the title child so
/// the generic child pass does not render it twice.
pub type VisitFn = fn(&mut dyn Translator, &mut PageStatusNode);

/// Depart callback invoked when traversal leaves a page-status node.
pub type DepartFn = fn(&mut dyn Translator, &mut PageStatusNode);

/// Visit/depart callback pair for one output format.
#[derive(Clone, Copy)]
pub struct NodeHandlers {
    /// Called on node entry, before the children are rendered.
    pub visit: VisitFn,
    /// Called on node exit, after the children are rendered.
    pub depart: DepartFn,
}

impl fmt::Debug for NodeHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeHandlers").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_identifiers() {
        let ids: Vec<_> = Format::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(ids, vec!["html", "latex", "text", "man", "texinfo"]);
    }

    #[test]
    fn test_translator_for_every_format() {
        for format in Format::ALL {
            let translator = format.translator();
            assert_eq!(translator.finish(), "");
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_format_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&Format::Latex).unwrap(),
            r#""latex""#
        );
    }
}

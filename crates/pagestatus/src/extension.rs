//! Extension lifecycle: the `setup` entry point and metadata record.

use crate::directive::PageStatusDirective;
use crate::error::RegistryError;
use crate::escape::escape_latex;
use crate::node::PageStatusNode;
use crate::registry::Registry;
use crate::translator::{Format, NodeHandlers, Translator, hypertarget_to};

/// Event declared for other extensions to hook into after a page-status
/// node is defined. Declared only; nothing emits it yet.
pub const EVENT_PAGE_STATUS_DEFINED: &str = "page_status-defined";

/// Capability metadata returned from [`setup`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExtensionMetadata {
    /// Extension version string.
    pub version: &'static str,
    /// Schema/environment compatibility version.
    pub env_version: u32,
    /// Safe for concurrent reading of documents: the extension holds no
    /// mutable cross-document state.
    pub parallel_read_safe: bool,
}

/// Register the page-status extension with a host registry.
///
/// Performs all registrations once: the `page_status-defined` event, the
/// visit/depart pair for each of the five output formats, and the
/// `::page_status` directive. Calling it a second time on the same
/// registry fails with a duplicate-registration error.
///
/// # Errors
///
/// Returns [`RegistryError`] when any registration collides with an
/// existing one.
///
/// # Example
///
/// ```
/// use pagestatus::{Format, Registry, setup};
///
/// let mut registry = Registry::new();
/// let metadata = setup(&mut registry).unwrap();
/// assert!(metadata.parallel_read_safe);
///
/// let doc = registry.build_document("guide", None, "::page_status{kind=draft}");
/// let html = registry.render_document(&doc, Format::Html).unwrap();
/// assert!(html.contains("Page status: Draft"));
/// ```
pub fn setup(registry: &mut Registry) -> Result<ExtensionMetadata, RegistryError> {
    registry.add_event(EVENT_PAGE_STATUS_DEFINED)?;

    for format in [Format::Html, Format::Text, Format::Man, Format::Texinfo] {
        registry.add_node_handlers(
            format,
            NodeHandlers {
                visit: visit_page_status,
                depart: depart_page_status,
            },
        )?;
    }
    registry.add_node_handlers(
        Format::Latex,
        NodeHandlers {
            visit: latex_visit_page_status,
            depart: latex_depart_page_status,
        },
    )?;

    registry.add_directive(PageStatusDirective)?;

    Ok(ExtensionMetadata {
        version: env!("CARGO_PKG_VERSION"),
        env_version: 2,
        parallel_read_safe: true,
    })
}

/// Generic visit: delegate to the translator's admonition rendering.
fn visit_page_status(translator: &mut dyn Translator, node: &mut PageStatusNode) {
    translator.admonition_open(node);
}

/// Generic depart: delegate to the translator's admonition rendering.
fn depart_page_status(translator: &mut dyn Translator, node: &mut PageStatusNode) {
    translator.admonition_close(node);
}

/// LaTeX visit: emit the begin-block marker with anchor and escaped title,
/// then remove the title child so the generic child pass does not render
/// it a second time.
fn latex_visit_page_status(translator: &mut dyn Translator, node: &mut PageStatusNode) {
    translator.raw("\n\\begin{docadmonition}{note}{");
    translator.raw(&hypertarget_to(node));

    // The directive always inserts a title; its absence is a broken
    // contract, not a renderable state.
    let title = node
        .pop_title()
        .expect("page status node always carries a title child");
    translator.raw(&escape_latex(&title));
    translator.raw(":}");
}

/// LaTeX depart: emit the matching end-block marker.
fn latex_depart_page_status(translator: &mut dyn Translator, _node: &mut PageStatusNode) {
    translator.raw("\\end{docadmonition}\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;
    use crate::status::StatusKind;
    use pretty_assertions::assert_eq;

    fn registry() -> Registry {
        let mut registry = Registry::new();
        setup(&mut registry).unwrap();
        registry
    }

    #[test]
    fn test_setup_metadata() {
        let mut r = Registry::new();
        let metadata = setup(&mut r).unwrap();
        assert_eq!(metadata.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(metadata.env_version, 2);
        assert!(metadata.parallel_read_safe);
    }

    #[test]
    fn test_setup_registers_everything() {
        let r = registry();
        assert!(r.has_event(EVENT_PAGE_STATUS_DEFINED));
        assert!(r.has_directive("page_status"));
        for format in Format::ALL {
            assert!(r.has_node_handlers(format), "missing handlers: {format}");
        }
    }

    #[test]
    fn test_setup_twice_is_rejected() {
        let mut r = registry();
        assert!(setup(&mut r).is_err());
    }

    #[test]
    fn test_html_render_end_to_end() {
        let mut r = registry();
        let doc = r.build_document(
            "guide",
            None,
            "::page_status{kind=in-progress name=intro-status}\n",
        );
        let html = r.render_document(&doc, Format::Html).unwrap();
        assert_eq!(
            html,
            "<div class=\"admonition admonition-page-status\" id=\"intro-status\">\
             <p class=\"admonition-title\">Page status: In progress</p>\
             <p>This article is still being written. Some sections are incomplete, \
             and it hasn't been proofread.</p></div>"
        );
    }

    #[test]
    fn test_latex_render_end_to_end() {
        let mut r = registry();
        let doc = r.build_document("guide", None, "::page_status{kind=draft name=intro}\n");
        let latex = r.render_document(&doc, Format::Latex).unwrap();
        assert!(latex.starts_with(
            "\n\\begin{docadmonition}{note}{\\hypertarget{intro}{}Page status: Draft:}"
        ));
        assert!(latex.ends_with("\\end{docadmonition}\n"));
        // Title rendered once, inside the begin marker only.
        assert_eq!(latex.matches("Page status: Draft").count(), 1);
    }

    #[test]
    fn test_latex_pass_mutates_only_its_own_instance() {
        let mut r = registry();
        let doc = r.build_document("guide", None, "::page_status{kind=draft}\n");

        let latex = r.render_document(&doc, Format::Latex).unwrap();
        assert!(latex.contains("Page status: Draft"));

        // The document's node is untouched; a later HTML pass still
        // renders the title.
        let html = r.render_document(&doc, Format::Html).unwrap();
        assert!(html.contains("<p class=\"admonition-title\">Page status: Draft</p>"));
    }

    #[test]
    fn test_render_node_mutates_the_given_instance() {
        let mut r = registry();
        let doc = r.build_document("guide", None, "::page_status{kind=outline}\n");
        let Node::PageStatus(node) = &doc.nodes()[0] else {
            panic!("expected admonition node");
        };

        let mut latex_instance = node.clone();
        r.render_node(Format::Latex, &mut latex_instance).unwrap();
        assert_eq!(latex_instance.title_text(), None);

        let mut fresh = node.clone();
        let text = r.render_node(Format::Text, &mut fresh).unwrap();
        assert!(text.contains("Page status: Outline"));
        assert!(fresh.title_text().is_some());
    }

    #[test]
    fn test_invalid_kind_renders_diagnostic_and_build_continues() {
        let mut r = registry();
        let source = "::page_status{kind=bogus}\n\n::page_status{kind=finished}\n";
        let doc = r.build_document("guide", None, source);

        let html = r.render_document(&doc, Format::Html).unwrap();
        assert!(html.contains("system-message"));
        assert!(html.contains("Page status: Finished"));

        let text = r.render_document(&doc, Format::Text).unwrap();
        assert!(text.contains("not a valid page status kind"));
    }

    #[test]
    fn test_every_format_renders_every_kind() {
        let mut r = registry();
        for kind in StatusKind::ALL {
            let doc = r.build_document(
                "guide",
                None,
                &format!("::page_status{{kind={}}}\n", kind.keyword()),
            );
            for format in Format::ALL {
                let out = r.render_document(&doc, format).unwrap();
                assert!(
                    out.contains(kind.title()),
                    "{format} output missing title for {kind}"
                );
                assert!(
                    out.contains("Page status:"),
                    "{format} output missing prefix for {kind}"
                );
            }
        }
    }

    #[test]
    fn test_man_and_texinfo_render_admonition_blocks() {
        let mut r = registry();
        let doc = r.build_document("guide", None, "::page_status{kind=draft}\n");

        let man = r.render_document(&doc, Format::Man).unwrap();
        assert!(man.contains(".RS 4"));
        assert!(man.contains(".B \"Page status: Draft\""));
        assert!(man.contains(".RE"));

        let texinfo = r.render_document(&doc, Format::Texinfo).unwrap();
        assert!(texinfo.contains("@quotation"));
        assert!(texinfo.contains("@strong{Page status: Draft}"));
        assert!(texinfo.contains("@end quotation"));
    }
}

//! The `::page_status` directive.

use std::path::Path;

use super::{Directive, DirectiveArgs, DirectiveContext};
use crate::error::DirectiveError;
use crate::node::{Node, NodeChild, PageStatusNode};
use crate::status::StatusKind;

/// Class applied when the caller supplies none.
pub const DEFAULT_CLASS: &str = "admonition-page-status";

/// Directive producing a page-status admonition node.
///
/// Accepts no positional arguments and no body content. Options:
///
/// - `kind` (required): one of `outline | in-progress | draft | finished`
/// - `name`: unchanged string, registered as a cross-reference target
/// - `.class` tokens: CSS-like class list, normalized to slug form
#[derive(Debug, Default)]
pub struct PageStatusDirective;

impl Directive for PageStatusDirective {
    fn name(&self) -> &str {
        "page_status"
    }

    fn run(
        &mut self,
        args: DirectiveArgs,
        ctx: &DirectiveContext<'_>,
    ) -> Result<Node, DirectiveError> {
        if !args.content.is_empty() {
            return Err(DirectiveError::ContentNotPermitted);
        }

        let kind: StatusKind = args
            .get("kind")
            .ok_or(DirectiveError::MissingKind)?
            .parse()?;

        let mut classes = Vec::with_capacity(args.classes.len());
        for token in &args.classes {
            classes.push(normalize_class(token)?);
        }
        if classes.is_empty() {
            classes.push(DEFAULT_CLASS.to_owned());
        }

        let mut node = PageStatusNode::new(kind);
        node.push_child(NodeChild::Title(format!("Page status: {}", kind.title())));
        node.push_child(NodeChild::Paragraph(kind.explanation().to_owned()));
        node.classes = classes;
        if let Some(name) = args.get("name") {
            node.names.push(name.to_owned());
        }
        node.docname = ctx.docname.to_owned();
        node.source = ctx.source_path.map(Path::to_path_buf);
        node.line = ctx.line;

        Ok(Node::PageStatus(node))
    }
}

/// Normalize a class token to slug form.
///
/// Lowercases and keeps ASCII alphanumerics, hyphens and underscores. A
/// token with any other character, or an empty token, is an error.
fn normalize_class(token: &str) -> Result<String, DirectiveError> {
    if token.is_empty() {
        return Err(DirectiveError::InvalidClass(token.to_owned()));
    }
    let normalized: String = token.to_ascii_lowercase();
    if normalized
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        Ok(normalized)
    } else {
        Err(DirectiveError::InvalidClass(token.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(attrs: &str) -> Result<Node, DirectiveError> {
        run_with_content("", attrs)
    }

    fn run_with_content(content: &str, attrs: &str) -> Result<Node, DirectiveError> {
        let ctx = DirectiveContext {
            docname: "guide",
            source_path: Some(Path::new("docs/guide.md")),
            line: 12,
        };
        PageStatusDirective.run(DirectiveArgs::parse(content, attrs), &ctx)
    }

    fn expect_node(result: Result<Node, DirectiveError>) -> PageStatusNode {
        match result.unwrap() {
            Node::PageStatus(node) => node,
            Node::SystemMessage(message) => panic!("expected admonition, got {message:?}"),
        }
    }

    #[test]
    fn test_all_kinds_produce_title_and_explanation() {
        for kind in StatusKind::ALL {
            let node = expect_node(run(&format!("kind={}", kind.keyword())));
            assert_eq!(
                node.title_text(),
                Some(format!("Page status: {}", kind.title()).as_str())
            );
            let paragraphs: Vec<_> = node
                .children()
                .iter()
                .filter(|child| matches!(child, NodeChild::Paragraph(_)))
                .collect();
            assert_eq!(paragraphs.len(), 1);
            assert_eq!(
                paragraphs[0],
                &NodeChild::Paragraph(kind.explanation().to_owned())
            );
        }
    }

    #[test]
    fn test_missing_kind_is_an_error() {
        assert!(matches!(run(""), Err(DirectiveError::MissingKind)));
    }

    #[test]
    fn test_unknown_kind_is_an_error() {
        assert!(matches!(
            run("kind=bogus"),
            Err(DirectiveError::UnknownKind(_))
        ));
    }

    #[test]
    fn test_content_is_rejected() {
        assert!(matches!(
            run_with_content("stray text", "kind=draft"),
            Err(DirectiveError::ContentNotPermitted)
        ));
    }

    #[test]
    fn test_default_class_applied() {
        let node = expect_node(run("kind=draft"));
        assert_eq!(node.classes, vec![DEFAULT_CLASS.to_owned()]);
    }

    #[test]
    fn test_explicit_classes_kept() {
        let node = expect_node(run(".Wide .sidebar-note kind=draft"));
        assert_eq!(node.classes, vec!["wide", "sidebar-note"]);
    }

    #[test]
    fn test_invalid_class_is_an_error() {
        assert!(matches!(
            run(".bad/class kind=draft"),
            Err(DirectiveError::InvalidClass(_))
        ));
    }

    #[test]
    fn test_name_recorded_on_node() {
        let node = expect_node(run("kind=finished name=conclusion"));
        assert_eq!(node.names, vec!["conclusion".to_owned()]);
    }

    #[test]
    fn test_source_info_recorded() {
        let node = expect_node(run("kind=outline"));
        assert_eq!(node.docname, "guide");
        assert_eq!(node.source.as_deref(), Some(Path::new("docs/guide.md")));
        assert_eq!(node.line, 12);
    }
}

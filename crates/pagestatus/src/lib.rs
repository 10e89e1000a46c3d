//! Page-status admonition directive with pluggable per-format renderers.
//!
//! This crate provides a single documentation-build extension: the
//! `::page_status{kind=...}` directive, which renders an admonition
//! describing the editorial status of a page ("Outline", "In progress",
//! "Draft", "Finished") across five output formats (HTML, LaTeX, plain
//! text, man, Texinfo).
//!
//! # Architecture
//!
//! The extension registers three things with a [`Registry`] via [`setup`]:
//!
//! 1. The [`PageStatusDirective`](directive::PageStatusDirective), which
//!    validates the `kind`, `name` and class options and produces a
//!    [`PageStatusNode`] carrying a title and explanation paragraph.
//! 2. A visit/depart callback pair per [`Format`](translator::Format).
//!    Four formats delegate to the translator's generic admonition
//!    rendering; LaTeX emits its begin/end block pair manually, escaping
//!    the title and removing the title child so the generic child pass
//!    does not render it twice.
//! 3. The `page_status-defined` event, declared for other extensions.
//!
//! Option validation failures become [`SystemMessage`] diagnostic nodes at
//! the offending location; the rest of the document still builds.
//!
//! # Example
//!
//! ```
//! use pagestatus::{Format, Registry, setup};
//!
//! let mut registry = Registry::new();
//! let metadata = setup(&mut registry).unwrap();
//! assert_eq!(metadata.env_version, 2);
//!
//! let source = "::page_status{kind=outline name=overview}";
//! let doc = registry.build_document("guide", None, source);
//!
//! let html = registry.render_document(&doc, Format::Html).unwrap();
//! assert!(html.contains("Page status: Outline"));
//! assert_eq!(doc.resolve_target("overview"), Some("overview"));
//! ```

pub mod directive;
mod document;
mod error;
mod escape;
mod extension;
mod node;
mod registry;
mod status;
pub mod translator;

pub use document::{Document, make_id};
pub use error::{DirectiveError, RegistryError, RenderError};
pub use escape::{escape_html, escape_latex};
pub use extension::{EVENT_PAGE_STATUS_DEFINED, ExtensionMetadata, setup};
pub use node::{MessageLevel, Node, NodeChild, PageStatusNode, SystemMessage};
pub use registry::Registry;
pub use status::{StatusKind, UnknownStatusKind};
pub use translator::Format;

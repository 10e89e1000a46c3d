//! Error types for directive processing and extension registration.

use crate::status::UnknownStatusKind;
use crate::translator::Format;

/// Error raised while validating a directive invocation.
///
/// These are recoverable: the build replaces the admonition with a
/// [`SystemMessage`](crate::SystemMessage) node and continues.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DirectiveError {
    /// The required `kind` option was not supplied.
    #[error("missing required option 'kind' (one of: outline, in-progress, draft, finished)")]
    MissingKind,

    /// The `kind` option value is outside the closed enumeration.
    #[error(transparent)]
    UnknownKind(#[from] UnknownStatusKind),

    /// A class token contains no usable characters after normalization.
    #[error("invalid class token '{0}'")]
    InvalidClass(String),

    /// The directive was invoked with body content, which it does not accept.
    #[error("no content permitted in 'page_status' directive")]
    ContentNotPermitted,
}

/// Error from extension registration.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// An event with the same name is already declared.
    #[error("event '{0}' is already declared")]
    DuplicateEvent(String),

    /// A directive with the same name is already registered.
    #[error("directive '{0}' is already registered")]
    DuplicateDirective(String),

    /// Node handlers for this format are already registered.
    #[error("node handlers for format '{0}' are already registered")]
    DuplicateHandlers(Format),
}

/// Error from rendering a document or node.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// No visit/depart pair was registered for the requested format.
    #[error("no node handlers registered for format '{0}'")]
    MissingHandlers(Format),
}

//! Directive argument parsing.
//!
//! Parses the `[content]{.class key="value"}` syntax from directive lines.

use std::collections::HashMap;

/// Parsed arguments from directive syntax.
///
/// Represents the content and attributes extracted from a directive:
/// `::name[content]{.class key="value"}`
///
/// # Example
///
/// ```
/// use pagestatus::directive::DirectiveArgs;
///
/// let args = DirectiveArgs::parse("", r#".wide kind=draft name="intro status""#);
/// assert_eq!(args.classes, vec!["wide"]);
/// assert_eq!(args.get("kind"), Some("draft"));
/// assert_eq!(args.get("name"), Some("intro status"));
/// ```
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DirectiveArgs {
    /// Content from brackets: `[content]` (empty string if not provided).
    pub content: String,
    /// Classes from attributes: `{.class1 .class2}`.
    pub classes: Vec<String>,
    /// Key-value attributes: `{key="value"}`.
    pub attrs: HashMap<String, String>,
}

impl DirectiveArgs {
    /// Parse content and attributes string into structured arguments.
    ///
    /// # Arguments
    ///
    /// * `content` - The content from brackets `[content]`
    /// * `attrs_str` - The attributes string from braces `{...}` (without braces)
    #[must_use]
    pub fn parse(content: &str, attrs_str: &str) -> Self {
        let mut args = Self {
            content: content.to_owned(),
            ..Default::default()
        };

        // Parse attributes: .class, key="value", key='value', or key=value
        let mut remaining = attrs_str.trim();

        while !remaining.is_empty() {
            remaining = remaining.trim_start();

            if remaining.starts_with('.') {
                // Class: .my-class
                let end = remaining[1..]
                    .find(|c: char| c.is_whitespace() || c == '.')
                    .map_or(remaining.len(), |i| i + 1);
                args.classes.push(remaining[1..end].to_owned());
                remaining = &remaining[end..];
            } else if let Some((key, value, rest)) = parse_key_value(remaining) {
                // Key-value: key="value" or key='value' or key=value
                args.attrs.insert(key.to_owned(), value.to_owned());
                remaining = rest;
            } else if remaining.is_empty() {
                break;
            } else {
                // Skip unrecognized character
                remaining = &remaining[1..];
            }
        }

        args
    }

    /// Get an attribute value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }
}

/// Parse a key-value pair from the attributes string.
///
/// Supports: `key="value"`, `key='value'`, `key=value`
fn parse_key_value(s: &str) -> Option<(&str, &str, &str)> {
    let eq_pos = s.find('=')?;
    let key = s[..eq_pos].trim();

    if key.is_empty() || key.starts_with('.') || key.contains(char::is_whitespace) {
        return None;
    }

    let after_eq = &s[eq_pos + 1..];

    if let Some(stripped) = after_eq.strip_prefix('"') {
        // Quoted with double quotes
        let end_quote = stripped.find('"')?;
        Some((key, &stripped[..end_quote], &stripped[end_quote + 1..]))
    } else if let Some(stripped) = after_eq.strip_prefix('\'') {
        // Quoted with single quotes
        let end_quote = stripped.find('\'')?;
        Some((key, &stripped[..end_quote], &stripped[end_quote + 1..]))
    } else {
        // Unquoted value (until whitespace)
        let end = after_eq.find(char::is_whitespace).unwrap_or(after_eq.len());
        Some((key, &after_eq[..end], &after_eq[end..]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_args() {
        let args = DirectiveArgs::parse("", "");
        assert_eq!(args.content, "");
        assert!(args.classes.is_empty());
        assert!(args.attrs.is_empty());
    }

    #[test]
    fn test_content_only() {
        let args = DirectiveArgs::parse("hello world", "");
        assert_eq!(args.content, "hello world");
        assert!(args.classes.is_empty());
    }

    #[test]
    fn test_single_class() {
        let args = DirectiveArgs::parse("", ".foo");
        assert_eq!(args.classes, vec!["foo"]);
    }

    #[test]
    fn test_multiple_classes() {
        let args = DirectiveArgs::parse("", ".foo .bar .baz");
        assert_eq!(args.classes, vec!["foo", "bar", "baz"]);
    }

    #[test]
    fn test_compact_classes() {
        let args = DirectiveArgs::parse("", ".foo.bar.baz");
        assert_eq!(args.classes, vec!["foo", "bar", "baz"]);
    }

    #[test]
    fn test_unquoted_value() {
        let args = DirectiveArgs::parse("", "kind=draft");
        assert_eq!(args.get("kind"), Some("draft"));
    }

    #[test]
    fn test_double_quoted_value() {
        let args = DirectiveArgs::parse("", r#"name="intro status""#);
        assert_eq!(args.get("name"), Some("intro status"));
    }

    #[test]
    fn test_single_quoted_value() {
        let args = DirectiveArgs::parse("", "name='Hello World'");
        assert_eq!(args.get("name"), Some("Hello World"));
    }

    #[test]
    fn test_mixed_attributes() {
        let args = DirectiveArgs::parse("", r#".foo kind=draft name="status here""#);
        assert_eq!(args.classes, vec!["foo"]);
        assert_eq!(args.get("kind"), Some("draft"));
        assert_eq!(args.get("name"), Some("status here"));
    }

    #[test]
    fn test_empty_quoted_value() {
        let args = DirectiveArgs::parse("", r#"name="""#);
        assert_eq!(args.get("name"), Some(""));
    }

    #[test]
    fn test_get_nonexistent() {
        let args = DirectiveArgs::parse("", "kind=draft");
        assert_eq!(args.get("name"), None);
    }
}

//! Line-level recognition of leaf directives.
//!
//! A leaf directive occupies a whole line: `::name[content]{attrs}`.
//! Directive syntax inside fenced code blocks is ignored via [`FenceTracker`].

/// A directive line split into its raw parts.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ParsedDirective<'a> {
    /// Directive name following the `::` marker.
    pub name: &'a str,
    /// Raw content between brackets (without brackets).
    pub content: &'a str,
    /// Raw attribute string between braces (without braces).
    pub attrs: &'a str,
}

/// Parse a leaf directive line: `::name[content]{attrs}`.
///
/// Returns `None` for anything else, including container syntax (`:::`).
pub(crate) fn parse_leaf_line(line: &str) -> Option<ParsedDirective<'_>> {
    let trimmed = line.trim();
    let rest = trimmed.strip_prefix("::")?;
    if rest.starts_with(':') {
        // Container directive syntax, not handled here.
        return None;
    }

    let name_end = rest
        .find(|c: char| !c.is_ascii_alphanumeric() && c != '_' && c != '-')
        .unwrap_or(rest.len());
    let name = &rest[..name_end];
    if name.is_empty() {
        return None;
    }

    let mut remaining = &rest[name_end..];
    let mut content = "";
    let mut attrs = "";

    if let Some(after_bracket) = remaining.strip_prefix('[') {
        let close = after_bracket.find(']')?;
        content = &after_bracket[..close];
        remaining = &after_bracket[close + 1..];
    }

    if let Some(after_brace) = remaining.strip_prefix('{') {
        let close = after_brace.find('}')?;
        attrs = &after_brace[..close];
        remaining = &after_brace[close + 1..];
    }

    // Trailing text disqualifies the line.
    if !remaining.trim().is_empty() {
        return None;
    }

    Some(ParsedDirective {
        name,
        content,
        attrs,
    })
}

/// Tracks code fence state during line-by-line processing.
///
/// Code fences can use backticks or tildes (three or more). The closing
/// fence must use the same character and be at least as long as the
/// opening fence.
#[derive(Debug, Default)]
pub(crate) struct FenceTracker {
    fence_char: Option<char>,
    fence_len: usize,
}

impl FenceTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Check if currently inside a fenced code block.
    pub(crate) fn in_fence(&self) -> bool {
        self.fence_char.is_some()
    }

    /// Update fence state based on a line.
    ///
    /// Returns `true` if the line is a fence marker (opening or closing).
    pub(crate) fn update(&mut self, line: &str) -> bool {
        let trimmed = line.trim_start();

        if let Some(fence_char) = self.fence_char {
            if is_closing_fence(trimmed, fence_char, self.fence_len) {
                self.fence_char = None;
                self.fence_len = 0;
                return true;
            }
            false
        } else if let Some((ch, len)) = detect_fence(trimmed) {
            self.fence_char = Some(ch);
            self.fence_len = len;
            true
        } else {
            false
        }
    }
}

/// Detect if a line opens a code fence, returning the character and length.
fn detect_fence(trimmed: &str) -> Option<(char, usize)> {
    let first = trimmed.chars().next()?;
    if first != '`' && first != '~' {
        return None;
    }

    let count = trimmed.chars().take_while(|&c| c == first).count();
    (count >= 3).then_some((first, count))
}

/// Check if a line closes the current fence.
fn is_closing_fence(trimmed: &str, expected_char: char, min_len: usize) -> bool {
    let count = trimmed.chars().take_while(|&c| c == expected_char).count();
    count >= min_len && trimmed[count..].trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_bare_directive() {
        let parsed = parse_leaf_line("::page_status").unwrap();
        assert_eq!(parsed.name, "page_status");
        assert_eq!(parsed.content, "");
        assert_eq!(parsed.attrs, "");
    }

    #[test]
    fn test_parse_with_attrs() {
        let parsed = parse_leaf_line("::page_status{kind=draft name=intro}").unwrap();
        assert_eq!(parsed.name, "page_status");
        assert_eq!(parsed.attrs, "kind=draft name=intro");
    }

    #[test]
    fn test_parse_with_content_and_attrs() {
        let parsed = parse_leaf_line("::page_status[stray]{kind=draft}").unwrap();
        assert_eq!(parsed.content, "stray");
        assert_eq!(parsed.attrs, "kind=draft");
    }

    #[test]
    fn test_parse_allows_indentation() {
        let parsed = parse_leaf_line("   ::page_status{kind=outline}").unwrap();
        assert_eq!(parsed.name, "page_status");
    }

    #[test]
    fn test_rejects_container_syntax() {
        assert_eq!(parse_leaf_line(":::tabs"), None);
    }

    #[test]
    fn test_rejects_plain_text() {
        assert_eq!(parse_leaf_line("just a line"), None);
        assert_eq!(parse_leaf_line("::"), None);
    }

    #[test]
    fn test_rejects_trailing_text() {
        assert_eq!(parse_leaf_line("::page_status{kind=draft} trailing"), None);
    }

    #[test]
    fn test_rejects_unclosed_braces() {
        assert_eq!(parse_leaf_line("::page_status{kind=draft"), None);
    }

    #[test]
    fn test_fence_tracker_backticks() {
        let mut fence = FenceTracker::new();
        assert!(fence.update("```rust"));
        assert!(fence.in_fence());
        assert!(!fence.update("::page_status{kind=draft}"));
        assert!(fence.in_fence());
        assert!(fence.update("```"));
        assert!(!fence.in_fence());
    }

    #[test]
    fn test_fence_tracker_closing_must_match_char() {
        let mut fence = FenceTracker::new();
        fence.update("~~~");
        assert!(!fence.update("```"));
        assert!(fence.in_fence());
        assert!(fence.update("~~~"));
        assert!(!fence.in_fence());
    }

    #[test]
    fn test_fence_tracker_closing_must_be_long_enough() {
        let mut fence = FenceTracker::new();
        fence.update("````");
        assert!(!fence.update("```"));
        assert!(fence.in_fence());
        assert!(fence.update("````"));
        assert!(!fence.in_fence());
    }
}

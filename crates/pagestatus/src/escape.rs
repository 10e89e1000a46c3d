//! Markup escaping helpers shared by the translators.

use std::borrow::Cow;

/// Escape HTML special characters.
///
/// Returns a borrowed string when no escaping is needed.
#[must_use]
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

/// Escape LaTeX reserved characters.
///
/// Covers the full reserved set: `\ { } $ & # _ % ^ ~`. The backslash must
/// map to `\textbackslash{}` (not `\\`, which is a line break).
///
/// # Example
///
/// ```
/// use pagestatus::escape_latex;
///
/// assert_eq!(escape_latex("50% & up"), r"50\% \& up");
/// ```
#[must_use]
pub fn escape_latex(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str(r"\textbackslash{}"),
            '{' => escaped.push_str(r"\{"),
            '}' => escaped.push_str(r"\}"),
            '$' => escaped.push_str(r"\$"),
            '&' => escaped.push_str(r"\&"),
            '#' => escaped.push_str(r"\#"),
            '_' => escaped.push_str(r"\_"),
            '%' => escaped.push_str(r"\%"),
            '^' => escaped.push_str(r"\textasciicircum{}"),
            '~' => escaped.push_str(r"\textasciitilde{}"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

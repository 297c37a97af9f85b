//! Verbatim boundary detection.
//!
//! A boundary is `<textarea` or `<pre`, optionally with a `/` after the `<`,
//! matched ASCII case-insensitively and followed by a word boundary.

/// Elements whose body whitespace is never collapsed.
pub const VERBATIM_TAGS: [&str; 2] = ["textarea", "pre"];

/// A verbatim tag start found in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary {
    /// Byte offset of the `<`.
    pub pos: usize,
    /// `</pre` or `</textarea`.
    pub closing: bool,
}

impl Boundary {
    /// Whitespace before an opening boundary is outside any verbatim body.
    #[inline]
    pub const fn is_opening(&self) -> bool {
        !self.closing
    }
}

/// Find the first verbatim boundary at or after `from`.
pub fn next_boundary(html: &str, from: usize) -> Option<Boundary> {
    let bytes = html.as_bytes();
    let mut pos = from;

    while let Some(offset) = bytes.get(pos..)?.iter().position(|&b| b == b'<') {
        let lt = pos + offset;
        if let Some(closing) = boundary_at(html, lt) {
            return Some(Boundary { pos: lt, closing });
        }
        pos = lt + 1;
    }

    None
}

/// Check whether a verbatim tag starts at the `<` at `lt`.
///
/// Returns `Some(closing)` on a match.
fn boundary_at(html: &str, lt: usize) -> Option<bool> {
    let rest = &html.as_bytes()[lt + 1..];
    let (closing, name_start) = match rest.first() {
        Some(b'/') => (true, 1),
        _ => (false, 0),
    };
    let rest = &rest[name_start..];

    VERBATIM_TAGS
        .iter()
        .find(|tag| {
            rest.len() >= tag.len()
                && rest[..tag.len()].eq_ignore_ascii_case(tag.as_bytes())
                && ends_word(html, lt + 1 + name_start + tag.len())
        })
        .map(|_| closing)
}

/// Word boundary after a tag name: end of input or a non-word character.
fn ends_word(html: &str, pos: usize) -> bool {
    html.get(pos..)
        .and_then(|s| s.chars().next())
        .is_none_or(|c| !(c.is_alphanumeric() || c == '_'))
}

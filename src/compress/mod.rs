//! Whitespace collapsing for rendered HTML.
//!
//! Removes runs of whitespace between and around tags, leaving the bodies of
//! `<pre>` and `<textarea>` untouched. This is not a full minifier: tags,
//! attributes, comments and inline scripts are passed through as-is.
//!
//! # Rules
//!
//! - A *collapsible run* is a maximal run of ASCII whitespace that is either
//!   longer than one character, or a single character other than `' '`.
//!   A lone space between words always survives.
//! - A run is deleted (not replaced by a space) when the next verbatim tag
//!   ahead of it is an opening one (`<pre`, `<textarea`) or when no verbatim
//!   tag follows at all.
//! - A run whose next verbatim tag is a closing one (`</pre`, `</textarea`)
//!   sits inside a verbatim body and is kept.
//!
//! Only the next verbatim tag is consulted, so malformed markup is handled
//! on a best-effort basis: a stray `</pre>` protects the runs before it, and
//! an unclosed `<pre>` protects nothing.
//!
//! # Example
//!
//! ```
//! use presshtml::compress::compress;
//!
//! assert_eq!(compress("<p>Hello</p>\n\n<p>World</p>"), "<p>Hello</p><p>World</p>");
//! assert_eq!(compress("<pre>a\n\n  b</pre>"), "<pre>a\n\n  b</pre>");
//! ```

mod boundary;

pub use boundary::{Boundary, VERBATIM_TAGS, next_boundary};

/// Collapse whitespace in an HTML document.
///
/// Total over all inputs; the result is never longer than `html`.
pub fn compress(html: &str) -> String {
    let bytes = html.as_bytes();
    let mut out = String::with_capacity(html.len());
    let mut lookahead = Lookahead::new(html);
    // Start of the input not yet copied to `out`
    let mut pending = 0;
    let mut i = 0;

    while i < bytes.len() {
        if !is_whitespace(bytes[i]) {
            i += 1;
            continue;
        }

        let start = i;
        while i < bytes.len() && is_whitespace(bytes[i]) {
            i += 1;
        }

        if is_collapsible(&bytes[start..i]) && lookahead.outside_verbatim(i) {
            // Run is pure ASCII, so both ends are char boundaries
            out.push_str(&html[pending..start]);
            pending = i;
        }
    }

    out.push_str(&html[pending..]);
    out
}

/// ASCII whitespace, including vertical tab.
#[inline]
const fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0B' | b'\x0C' | b'\r')
}

/// Anything but a single plain space.
#[inline]
fn is_collapsible(run: &[u8]) -> bool {
    run.len() > 1 || run.first().is_some_and(|&b| b != b' ')
}

/// Cached search for the next verbatim boundary.
///
/// Queries come in increasing position order, so each boundary is found
/// once and the whole scan stays linear.
struct Lookahead<'a> {
    html: &'a str,
    /// Position the cached result was searched from.
    from: usize,
    next: Option<Boundary>,
}

impl<'a> Lookahead<'a> {
    fn new(html: &'a str) -> Self {
        Self {
            html,
            from: 0,
            next: next_boundary(html, 0),
        }
    }

    /// Whether whitespace ending at `pos` lies outside a verbatim body.
    fn outside_verbatim(&mut self, pos: usize) -> bool {
        let stale = pos < self.from || self.next.is_some_and(|b| b.pos < pos);
        if stale {
            self.from = pos;
            self.next = next_boundary(self.html, pos);
        }
        self.next.is_none_or(|b| b.is_opening())
    }
}

#[cfg(test)]
mod tests;

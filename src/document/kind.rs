//! Document kind.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Dated permalink segment: `2014/01/02/`.
static RE_POST_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|/)[0-9]{4}/[0-9]{2}/[0-9]{2}/").unwrap());

/// Kind of rendered document handed to the writer.
///
/// Both kinds are compressed and written the same way; the kind only
/// labels log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentKind {
    /// Standalone page (`about.html`, `index.html`).
    #[default]
    Page,
    /// Dated blog post.
    Post,
}

impl DocumentKind {
    /// Classify a routed URL. Dated permalinks are posts, the rest are pages.
    pub fn from_url(url: &str) -> Self {
        if RE_POST_DATE.is_match(url) {
            Self::Post
        } else {
            Self::Page
        }
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Post => "post",
        }
    }

    #[inline]
    pub fn is_post(&self) -> bool {
        matches!(self, Self::Post)
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

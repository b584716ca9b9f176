//! Comment tokens as handed over by a front-end, and delimiter stripping.
//!
//! The scanner never looks at a syntax tree. A front-end (see
//! [`crate::core::parsers::source`]) turns a parsed file into
//! [`SourceComments`]: ordered groups of raw comment tokens, each tagged with an
//! opaque position handle that a [`PositionResolver`] can turn into a
//! [`Position`].

use std::fmt;

/// A resolved source location. `line` and `column` are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub filename: String,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.filename, self.line, self.column)
    }
}

/// Maps a front-end's position handle to a [`Position`].
pub trait PositionResolver {
    type Handle: Copy;

    fn resolve_position(&self, handle: Self::Handle) -> Position;
}

/// A single `//...` or `/*...*/` comment, delimiters included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentToken<H> {
    pub text: String,
    pub pos: H,
}

impl<H> CommentToken<H> {
    pub fn new(text: impl Into<String>, pos: H) -> Self {
        Self {
            text: text.into(),
            pos,
        }
    }
}

/// A run of adjacent comment tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentGroup<H> {
    pub list: Vec<CommentToken<H>>,
}

/// All comments of one file, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceComments<H> {
    pub groups: Vec<CommentGroup<H>>,
}

impl<H> Default for SourceComments<H> {
    fn default() -> Self {
        Self { groups: Vec::new() }
    }
}

impl<H> SourceComments<H> {
    /// Iterate every token of every group in file order.
    pub fn tokens(&self) -> impl Iterator<Item = &CommentToken<H>> {
        self.groups.iter().flat_map(|group| group.list.iter())
    }
}

/// Strip comment delimiters from a raw token.
///
/// Line comments lose `//` and at most one following space. Block comments lose
/// `/*` and `*/`; their interior, newlines included, is returned as is.
/// Text with no recognized delimiter is returned unchanged.
pub fn normalize(raw: &str) -> &str {
    if let Some(rest) = raw.strip_prefix("//") {
        return rest.strip_prefix(' ').unwrap_or(rest);
    }
    if let Some(rest) = raw.strip_prefix("/*") {
        return rest.strip_suffix("*/").unwrap_or(rest);
    }
    raw
}

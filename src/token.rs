//! The formatting token model.
//!
//! This is the vocabulary [`crate::builder`] emits and [`crate::scanner`] / [`crate::printer`]
//! consume. The variant set is closed: every implementer of a token-stream-producing visitor must
//! express its decisions in terms of these nine cases.

use std::borrow::Cow;

/// How the breaks within a [`Group`] decide whether to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupStyle {
    /// All breaks within the group fire together once the group doesn't fit.
    Consistent,
    /// Each break fires independently based on remaining space at that point.
    Inconsistent,
}

/// The kind of comment a [`Token::Comment`] carries.
///
/// `Line` and `Block` are ordinary comments; `DocLine`/`DocBlock` are documentation comments,
/// which additionally force a line break after themselves (see [`crate::comment_printer`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    Line,
    DocLine,
    Block,
    DocBlock,
}

/// A single formatting primitive.
///
/// See `spec.md` §3 "Tokens" for the authoritative description of each case; the doc comments
/// here summarize the contract but the scanner/printer behavior is the source of truth.
#[derive(Debug, Clone, PartialEq)]
pub enum Token<'a> {
    /// Literal text to emit. Length is the column width of `text`.
    Syntax(Cow<'a, str>),

    /// An optional breakpoint. `size` spaces when not broken; a newline plus the enclosing
    /// group's cumulative offset (plus `offset`) when broken.
    Break { size: usize, offset: isize },

    /// Hard whitespace of `size` columns. Never a breakpoint.
    Space(usize),

    /// Begins a group of the given `style`, with an indent `offset` added to breaks within it.
    Open { style: GroupStyle, offset: isize },

    /// Ends the nearest unclosed group. Zero length.
    Close,

    /// Forced line break(s). `count` must be `>= 1`; contributes `count - 1` extra bare newlines
    /// beyond the first. Always forces enclosing groups to break (assigned the max line width).
    Newline { count: usize, offset: isize },

    /// Cancels a pending deferred break so subsequent content starts fresh on the line, without
    /// itself emitting anything.
    Reset,

    /// A comment of the given kind.
    Comment { kind: CommentKind, text: Cow<'a, str> },

    /// Raw text, preserving internal relative indentation. Assigned length is the max line width,
    /// so any enclosing group containing one always breaks.
    Verbatim(Cow<'a, str>),
}

impl<'a> Token<'a> {
    pub fn syntax(text: impl Into<Cow<'a, str>>) -> Self {
        Token::Syntax(text.into())
    }

    pub fn open(style: GroupStyle, offset: isize) -> Self {
        Token::Open { style, offset }
    }

    pub fn close() -> Self {
        Token::Close
    }

    pub fn space(size: usize) -> Self {
        Token::Space(size)
    }

    pub fn brk(size: usize, offset: isize) -> Self {
        Token::Break { size, offset }
    }

    pub fn newline(count: usize) -> Self {
        debug_assert!(count >= 1, "Token::newline count must be >= 1");
        Token::Newline { count: count.max(1), offset: 0 }
    }

    /// Like [`Token::newline`], but carrying its own indent delta — used where the forced newline
    /// itself is what opens or closes a group's indented region (e.g. a brace block's first/last
    /// line) rather than sitting between two already-indented siblings.
    pub fn newline_offset(count: usize, offset: isize) -> Self {
        debug_assert!(count >= 1, "Token::newline_offset count must be >= 1");
        Token::Newline { count: count.max(1), offset }
    }

    pub fn comment(kind: CommentKind, text: impl Into<Cow<'a, str>>) -> Self {
        Token::Comment { kind, text: text.into() }
    }

    pub fn verbatim(text: impl Into<Cow<'a, str>>) -> Self {
        Token::Verbatim(text.into())
    }

    /// `true` for the two tokens that open/close a group; used by balance checks.
    pub fn is_open(&self) -> bool {
        matches!(self, Token::Open { .. })
    }

    pub fn is_close(&self) -> bool {
        matches!(self, Token::Close)
    }

    pub fn is_break(&self) -> bool {
        matches!(self, Token::Break { .. })
    }
}

/// A flat, append-only sequence of [`Token`]s produced by the builder.
///
/// This mirrors the teacher's `TokenStream<T>` newtype: a thin wrapper that exists mostly to host
/// convenience push/trim helpers rather than to add real invariants over `Vec`.
#[derive(Debug, Clone, Default)]
pub struct TokenStream<'a>(Vec<Token<'a>>);

impl<'a> TokenStream<'a> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, token: Token<'a>) {
        self.0.push(token);
    }

    pub fn extend(&mut self, tokens: impl IntoIterator<Item = Token<'a>>) {
        self.0.extend(tokens);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Token<'a>] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Token<'a>> {
        self.0
    }

    /// Opens a group and returns a guard-free marker; callers are responsible for emitting the
    /// matching [`Token::Close`] (the scanner rejects unbalanced streams, see `spec.md` §3's
    /// group invariant).
    pub fn open_group(&mut self, style: GroupStyle, offset: isize) {
        self.push(Token::open(style, offset));
    }

    pub fn close_group(&mut self) {
        self.push(Token::close());
    }
}

impl<'a> IntoIterator for TokenStream<'a> {
    type Item = Token<'a>;
    type IntoIter = std::vec::IntoIter<Token<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn constructors_round_trip() {
        let t = Token::syntax("x");
        assert_eq!(t, Token::Syntax(Cow::Borrowed("x")));
        assert!(Token::open(GroupStyle::Consistent, 2).is_open());
        assert!(Token::close().is_close());
        assert!(Token::brk(1, 0).is_break());
    }

    #[test]
    fn stream_push_and_len() {
        let mut ts = TokenStream::new();
        ts.open_group(GroupStyle::Inconsistent, 2);
        ts.push(Token::syntax("a"));
        ts.close_group();
        assert_eq!(ts.len(), 3);
        assert!(!ts.is_empty());
    }
}

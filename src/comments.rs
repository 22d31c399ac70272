//! Trivia adapter: surfaces newlines and comments from AST leaf trivia into tokens.
//!
//! Grounded on the teacher's `nova_format::comments::CommentStore`: that module walks all tokens
//! in lexical order and attaches each comment to a stable anchor independent of where a parser's
//! trivia nesting happens to place it, because comments attached tree-locally can end up in
//! unintuitive places. This crate's AST already stores trivia directly on the leaf that follows it
//! (`spec.md` §6's AST provider contract), so there is no re-nesting problem to solve — what this
//! module keeps from the teacher is the *shape*: resolve raw trivia into a sequence of anchored
//! [`ResolvedComment`]s plus blank-line counts, so [`crate::builder`] never inspects
//! [`crate::ast::TriviaPiece`] directly.

use crate::ast::{Trivia, TriviaPiece};
use crate::token::CommentKind;

/// A single comment, resolved from a [`TriviaPiece::Comment`] plus the blank-line run (if any)
/// that preceded it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedComment {
    pub kind: CommentKind,
    pub text: String,
    /// Blank source lines (capped at 1 by the caller per `respects_existing_line_breaks`) before
    /// this comment.
    pub blank_lines_before: bool,
}

/// The leading trivia of one leaf, split into the blank-line/comment items that come before the
/// leaf's own text, plus whether the very first item is an end-of-line comment that in fact
/// belongs to the *previous* leaf (`spec.md` §4.3 step 1).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedTrivia {
    /// `Some(comment)` when the first raw trivia piece is a bare comment (no newline before it):
    /// this belongs to the previous leaf's emission, not this leaf's.
    pub inline_with_previous: Option<ResolvedComment>,
    /// The remaining comments/blank-line markers that do belong to this leaf, in order.
    pub items: Vec<TriviaItem>,
    /// Blank line(s) immediately before this leaf's own text (after any comments above).
    pub blank_lines_before_leaf: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TriviaItem {
    Comment(ResolvedComment),
}

/// Resolves a leaf's raw [`Trivia`] into [`ResolvedTrivia`], per `spec.md` §4.3 step 1 and the
/// `respectsExistingLineBreaks` option (blank-line runs are capped to one blank line here, at the
/// point the builder consumes them, matching the teacher's single config-driven cap rather than
/// duplicating the cap at every call site).
pub fn resolve(trivia: &Trivia) -> ResolvedTrivia {
    let mut pieces = trivia.0.iter().peekable();
    let mut inline_with_previous = None;

    if let Some(TriviaPiece::Comment { kind, text }) = pieces.peek() {
        inline_with_previous = Some(ResolvedComment {
            kind: *kind,
            text: text.clone(),
            blank_lines_before: false,
        });
        pieces.next();
    }

    let mut items = Vec::new();
    let mut pending_blank = false;
    let mut blank_lines_before_leaf = false;

    for piece in pieces {
        match piece {
            TriviaPiece::Newlines(n) => {
                pending_blank = *n >= 2;
                blank_lines_before_leaf = pending_blank;
            }
            TriviaPiece::Comment { kind, text } => {
                items.push(TriviaItem::Comment(ResolvedComment {
                    kind: *kind,
                    text: text.clone(),
                    blank_lines_before: pending_blank,
                }));
                pending_blank = false;
                blank_lines_before_leaf = false;
            }
        }
    }

    ResolvedTrivia { inline_with_previous, items, blank_lines_before_leaf }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_leading_comment_is_inline_with_previous() {
        let trivia = Trivia(vec![TriviaPiece::Comment {
            kind: CommentKind::Line,
            text: "// eol".to_string(),
        }]);
        let resolved = resolve(&trivia);
        assert!(resolved.inline_with_previous.is_some());
        assert!(resolved.items.is_empty());
    }

    #[test]
    fn newline_then_comment_is_a_leading_item_not_inline() {
        let trivia = Trivia(vec![
            TriviaPiece::Newlines(1),
            TriviaPiece::Comment { kind: CommentKind::Line, text: "// own line".to_string() },
            TriviaPiece::Newlines(1),
        ]);
        let resolved = resolve(&trivia);
        assert!(resolved.inline_with_previous.is_none());
        assert_eq!(resolved.items.len(), 1);
        assert!(!resolved.blank_lines_before_leaf);
    }

    #[test]
    fn blank_run_before_leaf_is_detected() {
        let trivia = Trivia(vec![TriviaPiece::Newlines(2)]);
        let resolved = resolve(&trivia);
        assert!(resolved.blank_lines_before_leaf);
    }

    #[test]
    fn blank_run_before_comment_is_attached_to_that_comment() {
        let trivia = Trivia(vec![
            TriviaPiece::Newlines(3),
            TriviaPiece::Comment { kind: CommentKind::Block, text: "/* x */".to_string() },
            TriviaPiece::Newlines(1),
        ]);
        let resolved = resolve(&trivia);
        let TriviaItem::Comment(c) = &resolved.items[0];
        assert!(c.blank_lines_before);
        assert!(!resolved.blank_lines_before_leaf);
    }
}

//! Renders a single resolved comment into a [`Token`], as `spec.md` §4.7.
//!
//! This is the one place that knows how each [`CommentKind`] maps onto the token model: line
//! comments drop their trailing line ending (the builder is responsible for whatever line break
//! follows); the other three kinds pass their text through unchanged, since `spec.md` §4.7 is
//! explicit that block/doc-block comments are "preserved verbatim" and only `DocLine` gets
//! re-indentation, which [`crate::printer::Printer::write_comment`] already performs dynamically
//! against the *live* indent at print time — baking a indent guess in here, ahead of the
//! scan/print passes that actually decide which groups break, would just be wrong for any comment
//! sitting inside a group whose break decision isn't known yet.

use crate::comments::ResolvedComment;
use crate::token::{CommentKind, Token};

/// Turns a resolved comment into the single [`Token::Comment`] that represents it.
pub fn render(comment: &ResolvedComment) -> Token<'static> {
    match comment.kind {
        CommentKind::Line => Token::comment(CommentKind::Line, trim_trailing_eol(&comment.text)),
        CommentKind::DocLine | CommentKind::Block | CommentKind::DocBlock => {
            Token::comment(comment.kind, comment.text.clone())
        }
    }
}

fn trim_trailing_eol(text: &str) -> String {
    text.trim_end_matches(['\r', '\n']).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn resolved(kind: CommentKind, text: &str) -> ResolvedComment {
        ResolvedComment { kind, text: text.to_string(), blank_lines_before: false }
    }

    #[test]
    fn line_comment_trims_trailing_newline() {
        let tok = render(&resolved(CommentKind::Line, "// hi\n"));
        assert_eq!(tok, Token::comment(CommentKind::Line, "// hi"));
    }

    #[test]
    fn block_comment_passes_through_verbatim() {
        let tok = render(&resolved(CommentKind::Block, "/*\n   aligned\n*/"));
        assert_eq!(tok, Token::comment(CommentKind::Block, "/*\n   aligned\n*/"));
    }

    #[test]
    fn doc_block_passes_through_verbatim() {
        let tok = render(&resolved(CommentKind::DocBlock, "/**\n * one\n */"));
        assert_eq!(tok, Token::comment(CommentKind::DocBlock, "/**\n * one\n */"));
    }

    #[test]
    fn doc_line_passes_through_for_dynamic_reindentation() {
        let tok = render(&resolved(CommentKind::DocLine, "/// one\n/// two"));
        assert_eq!(tok, Token::comment(CommentKind::DocLine, "/// one\n/// two"));
    }
}

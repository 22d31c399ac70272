//! The scan pass: computes a parallel array of effective token lengths, as `spec.md` §4.4.
//!
//! This is the classic two-phase Oppen/Wadler trick also used by `rustc_ast_pretty`/`prettyplease`
//! (see the pack's `other_examples/…prettyplease…algorithm.rs`), specialized here into two fully
//! materialized passes (scan, then print) rather than a streaming ring buffer, matching the
//! pipeline `spec.md` §2 draws: `[Token] -> Scanner -> ([Token],[Length]) -> Printer`.

use crate::error::FormatError;
use crate::token::Token;

/// A length no real line width will ever reach, used for tokens that must always force every
/// enclosing group to break regardless of how much of the line is free (`Newline`, `Verbatim`).
/// Using `max_line_width` itself here would under-fire at column zero, where `remaining` starts
/// out exactly equal to it and the fit check's `<=` would pass. Named and valued after
/// `other_examples/…prettyplease…algorithm.rs`'s `SIZE_INFINITY`.
const SIZE_INFINITY: isize = 0xffff;

/// Computes the effective length of each token in `tokens`.
///
/// The result is paired with `tokens` and fed to [`crate::printer::print`], which supplies the
/// actual line width; the scan pass itself needs no width beyond [`SIZE_INFINITY`].
pub fn scan(tokens: &[Token<'_>]) -> Result<Vec<isize>, FormatError> {
    let mut lengths = vec![0isize; tokens.len()];
    let mut total: isize = 0;
    let mut delim_index_stack: Vec<usize> = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::Syntax(text) => {
                let w = column_width(text) as isize;
                lengths[i] = w;
                total += w;
            }
            Token::Open { .. } => {
                delim_index_stack.push(i);
                lengths[i] = -total;
            }
            Token::Close => {
                let top = delim_index_stack.pop().ok_or_else(|| {
                    FormatError::MalformedTokenStream(format!(
                        "unmatched `close` token at index {i}"
                    ))
                })?;
                if tokens[top].is_break() {
                    lengths[top] += total;
                    let open_idx = delim_index_stack.pop().ok_or_else(|| {
                        FormatError::MalformedTokenStream(format!(
                            "`break` at index {top} has no enclosing `open`"
                        ))
                    })?;
                    debug_assert!(tokens[open_idx].is_open());
                    lengths[open_idx] += total;
                } else {
                    debug_assert!(tokens[top].is_open());
                    lengths[top] += total;
                }
                lengths[i] = 0;
            }
            Token::Break { size, .. } => {
                if let Some(&top) = delim_index_stack.last() {
                    if tokens[top].is_break() {
                        lengths[top] += total;
                        delim_index_stack.pop();
                    }
                }
                delim_index_stack.push(i);
                lengths[i] = -total;
                total += *size as isize;
            }
            Token::Newline { .. } => {
                if let Some(&top) = delim_index_stack.last() {
                    if tokens[top].is_break() {
                        lengths[top] += total;
                        delim_index_stack.pop();
                    }
                }
                lengths[i] = SIZE_INFINITY;
                total += SIZE_INFINITY;
            }
            Token::Space(size) => {
                lengths[i] = *size as isize;
                total += *size as isize;
            }
            Token::Reset => {
                if let Some(&top) = delim_index_stack.last() {
                    if tokens[top].is_break() {
                        lengths[top] += total;
                        delim_index_stack.pop();
                    }
                }
                lengths[i] = 0;
            }
            Token::Comment { text, .. } => {
                let w = comment_render_width(text) as isize;
                lengths[i] = w;
                total += w;
            }
            Token::Verbatim(_) => {
                lengths[i] = SIZE_INFINITY;
                total += SIZE_INFINITY;
            }
        }
    }

    if !delim_index_stack.is_empty() {
        return Err(FormatError::MalformedTokenStream(format!(
            "{} unclosed group(s)/break(s) at end of stream",
            delim_index_stack.len()
        )));
    }

    Ok(lengths)
}

/// Column width of a single line of text. ASCII fast path mirrors the teacher's `text_width`.
pub(crate) fn column_width(text: &str) -> usize {
    if text.is_ascii() {
        text.len()
    } else {
        text.chars().count()
    }
}

/// Width of the widest line in (possibly multi-line) comment text.
pub(crate) fn comment_render_width(text: &str) -> usize {
    text.lines().map(column_width).max().unwrap_or(0)
}

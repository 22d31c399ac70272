//! The error taxonomy, as `spec.md` §7.

use thiserror::Error;

/// Errors the core can produce.
///
/// `IoFailure` is retained for taxonomy completeness (`spec.md` §7 names it as a sibling kind)
/// even though the core itself never performs file I/O — that's a front-end concern per §1 — so
/// the core never constructs this variant, only re-exports it for a front end to fold its own
/// I/O errors into the same enum if convenient.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The input could not be parsed into an AST. Surfaced unchanged to the caller; formatting of
    /// that file is aborted but the process continues.
    #[error("parse failure: {0}")]
    ParseFailure(String),

    /// The token stream builder produced unbalanced `open`/`close` tokens, or the scanner or
    /// printer observed another invariant violation. This indicates a builder bug, not bad input.
    #[error("malformed token stream: {0}")]
    MalformedTokenStream(String),

    /// Reading or writing a file failed (front-end concern; never constructed by the core).
    #[error("I/O failure: {0}")]
    IoFailure(String),
}

//! `bracefmt`: a two-phase, Oppen-style pretty printer for curly-brace, statically typed
//! languages.
//!
//! The pipeline (`spec.md` §2):
//!
//! ```text
//! AST ── TokenStreamBuilder ──▶ [Token] ──▶ Scanner ──▶ ([Token],[Length]) ──▶ Printer ──▶ String
//! ```
//!
//! [`ast`] models the tree the builder walks (the syntactic parser itself is out of scope, see
//! `spec.md` §1); [`builder`] assigns tokens to it; [`scanner`] computes effective lengths;
//! [`printer`] renders the final text. [`format`] composes all four for the common case; the
//! stages are also exposed individually for callers that want to intervene between them (e.g. to
//! dump the raw token stream for debugging, as the builder's own unit tests do).

pub mod ast;
pub mod builder;
pub mod comment_printer;
pub mod comments;
pub mod config;
pub mod diagnostic;
pub mod error;
pub mod indent;
pub mod printer;
pub mod rule;
pub mod scanner;
pub mod token;

pub use ast::Document;
pub use config::{Config, ConfigError};
pub use diagnostic::{Diagnostic, Severity, SourcePosition, SourceRange};
pub use error::FormatError;
pub use rule::{run_rules, Rule};
pub use token::{CommentKind, GroupStyle, Token, TokenStream};

/// Formats `doc` under `config`, running the full `AST -> [Token] -> Scanner -> Printer` pipeline.
///
/// Assigns stable leaf ids on `doc` itself (`spec.md`'s "Decoration registries" design note)
/// before handing it to the builder, so callers never have to remember to call
/// [`ast::Document::assign_ids`] themselves.
#[tracing::instrument(level = "debug", skip_all, fields(max_line_length = config.max_line_length() as u64))]
pub fn format(doc: &mut Document, config: &Config) -> Result<String, FormatError> {
    doc.assign_ids();
    let tokens = builder::build(doc, config);
    format_tokens(tokens, config)
}

/// Runs the scan+print half of the pipeline alone, for a caller that already has a built
/// [`TokenStream`] (e.g. one assembled by a builder other than [`builder::build`], or cached from
/// a previous call).
#[tracing::instrument(level = "trace", skip_all)]
pub fn format_tokens(tokens: TokenStream<'_>, config: &Config) -> Result<String, FormatError> {
    let tokens = tokens.into_vec();
    let lengths = scanner::scan(&tokens)?;
    tracing::trace!(tokens = tokens.len(), "scan complete");
    Ok(printer::print(&tokens, &lengths, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Decl, Leaf, StructDecl};
    use pretty_assertions::assert_eq;

    #[test]
    fn format_assigns_ids_and_renders_without_panicking() {
        let mut doc = Document {
            decls: vec![Decl::Struct(StructDecl {
                attributes: vec![],
                keyword: Leaf::new("struct"),
                name: Leaf::new("S"),
                generics: None,
                conformance: None,
                left_brace: Leaf::new("{"),
                members: vec![],
                right_brace: Leaf::new("}"),
            })],
        };
        let config = Config::default();
        assert_eq!(format(&mut doc, &config).unwrap(), "struct S { }");
    }

    #[test]
    fn format_tokens_rejects_a_malformed_stream() {
        let tokens = TokenStream::new();
        let mut tokens = tokens;
        tokens.push(Token::close());
        let config = Config::default();
        assert!(format_tokens(tokens, &config).is_err());
    }
}

//! The rule collaborator contract, as `spec.md` §6: "each lint/format rule is an independent
//! pre-pass accepting the parsed AST and returning a (possibly rewritten) AST plus a set of
//! diagnostics."
//!
//! No concrete rule lives here — rule-driven behavioral rewrites are an explicit Non-goal
//! (`spec.md` §1) — only the trait a rule pass must satisfy and the registry shape
//! (`stjude-rust-labs-sprocket`'s `wdl-lint::Rule`/`rules()`) so the boundary between the core and
//! its neighbors compiles and is testable in isolation.

use crate::ast::Document;
use crate::diagnostic::Diagnostic;

/// An independent AST rewrite pass.
///
/// `check` takes the AST by reference and returns `Some(rewritten)` when it wants to replace the
/// tree the pretty-printer will eventually consume, plus whatever diagnostics it produced along
/// the way. Returning `None` leaves the tree as the caller already has it (a rule that only
/// diagnoses and never rewrites, e.g. a naming-convention check, always does this).
pub trait Rule {
    /// A short, stable identifier (e.g. `"UnusedImport"`), used by front ends to let users
    /// enable/disable individual rules.
    fn id(&self) -> &'static str;

    /// A one-sentence description of what the rule checks or rewrites.
    fn description(&self) -> &'static str;

    /// Runs the rule over `doc`, producing an optional rewritten tree and any diagnostics.
    fn check(&self, doc: &Document) -> (Option<Document>, Vec<Diagnostic>);
}

/// Runs `rules` over `doc` in order, threading each rule's rewrite (if any) into the next rule's
/// input, and collecting every diagnostic along the way.
///
/// This is the shape the pretty-printer's caller is expected to drive (`spec.md` §6: "the
/// pretty-printer consumes only the final AST") — the core itself never calls this.
pub fn run_rules(doc: &Document, rules: &[Box<dyn Rule>]) -> (Document, Vec<Diagnostic>) {
    let mut current = doc.clone();
    let mut diagnostics = Vec::new();
    for rule in rules {
        let (rewritten, mut found) = rule.check(&current);
        if let Some(rewritten) = rewritten {
            current = rewritten;
        }
        diagnostics.append(&mut found);
    }
    (current, diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Decl, StructDecl};
    use crate::diagnostic::{Diagnostic, Severity, SourcePosition, SourceRange};
    use pretty_assertions::assert_eq;

    struct NoOpRule;

    impl Rule for NoOpRule {
        fn id(&self) -> &'static str {
            "NoOp"
        }

        fn description(&self) -> &'static str {
            "never rewrites, always emits one note"
        }

        fn check(&self, _doc: &Document) -> (Option<Document>, Vec<Diagnostic>) {
            let range = SourceRange::new(SourcePosition::new(0, 0), SourcePosition::new(0, 0));
            (None, vec![Diagnostic::new(Severity::Note, "checked", range)])
        }
    }

    fn empty_struct_doc() -> Document {
        Document {
            decls: vec![Decl::Struct(StructDecl {
                attributes: vec![],
                keyword: crate::ast::Leaf::new("struct"),
                name: crate::ast::Leaf::new("S"),
                generics: None,
                conformance: None,
                left_brace: crate::ast::Leaf::new("{"),
                members: vec![],
                right_brace: crate::ast::Leaf::new("}"),
            })],
        }
    }

    #[test]
    fn no_op_rule_leaves_tree_unchanged_and_collects_its_diagnostic() {
        let doc = empty_struct_doc();
        let rules: Vec<Box<dyn Rule>> = vec![Box::new(NoOpRule)];
        let (rewritten, diagnostics) = run_rules(&doc, &rules);
        assert_eq!(rewritten, doc);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Note);
    }
}

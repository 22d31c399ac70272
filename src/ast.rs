//! A minimal AST for the builder to walk.
//!
//! The syntactic parser is explicitly out of scope (`spec.md` §1): no concrete grammar is
//! specified for the source language, only the leaf/trivia contract a parser must satisfy (§6's
//! "AST provider contract"). This module supplies just enough of a tree — declarations,
//! properties with accessor blocks, initializers with parameter lists, conformance clauses,
//! attributes, generic/`where` clauses, and `#if`/`#elseif`/`#else`/`#endif` regions — to exercise
//! every grouping idiom `spec.md` §4.3 names and every scenario §8 walks through end to end.
//!
//! Every leaf is assigned a stable [`LeafId`] (see [`Document::assign_ids`]) so the builder's
//! `before`/`after` decoration registries can key on identity without pointer games, per the
//! "Decoration registries" design note.

use crate::token::CommentKind;

/// A stable integer identity for an AST leaf, assigned once by [`Document::assign_ids`].
///
/// The design notes call for "stable integer ids assigned during traversal rather than pointer
/// identity so the registry is arena-backed and cache-friendly"; this is that id.
pub type LeafId = u32;

/// One piece of leading trivia, in source order.
///
/// A [`TriviaPiece::Newlines`] is present whenever at least one newline separates the previous
/// trivia item (or the owning leaf, for the final run) from the next; its value is the *total*
/// newline count, not the blank-line count (a plain line break with no blank line is
/// `Newlines(1)`; one blank line is `Newlines(2)`, etc. — "run" in §4.3 means this total). A bare
/// [`TriviaPiece::Comment`] with no preceding `Newlines` piece (including being the very first
/// piece in the vec) means that comment sits on the *same physical line* as whatever precedes it.
#[derive(Debug, Clone, PartialEq)]
pub enum TriviaPiece {
    Newlines(usize),
    Comment { kind: CommentKind, text: String },
}

/// Leading trivia attached to a [`Leaf`]: blank-line runs and comments, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trivia(pub Vec<TriviaPiece>);

impl Trivia {
    pub fn none() -> Self {
        Self(Vec::new())
    }

    /// `true` if the first piece is a bare comment (no newline before it): the "end-of-line
    /// comment" case `spec.md` §4.3 step 1 calls out, which belongs to the *previous* leaf.
    pub fn starts_with_inline_comment(&self) -> bool {
        matches!(self.0.first(), Some(TriviaPiece::Comment { .. }))
    }
}

/// A terminal symbol: textual content plus leading trivia.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    pub id: LeafId,
    pub text: String,
    pub leading_trivia: Trivia,
}

impl Leaf {
    pub fn new(text: impl Into<String>) -> Self {
        Self { id: 0, text: text.into(), leading_trivia: Trivia::none() }
    }

    pub fn with_trivia(text: impl Into<String>, leading_trivia: Trivia) -> Self {
        Self { id: 0, text: text.into(), leading_trivia }
    }
}

/// A declaration attribute, e.g. `@available(...)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub leaf: Leaf,
}

/// A generic parameter clause, e.g. `<T, U>`, with an optional trailing `where` clause.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GenericParamClause {
    pub left_angle: Leaf,
    pub params: Vec<Leaf>,
    pub right_angle: Leaf,
    pub where_clause: Option<WhereClause>,
}

/// A `where T: Equatable, U: Hashable` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct WhereClause {
    pub keyword: Leaf,
    pub requirements: Vec<Leaf>,
}

/// An inheritance/conformance clause: `: A, B, C`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConformanceClause {
    pub colon: Leaf,
    pub types: Vec<Leaf>,
}

/// `{ get set }` / `{ get }` on a property.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessorBlock {
    pub left_brace: Leaf,
    pub accessors: Vec<Leaf>,
    pub right_brace: Leaf,
}

/// A stored or computed property requirement/declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDecl {
    pub attributes: Vec<Attribute>,
    pub keyword: Leaf,
    pub name: Leaf,
    pub colon: Leaf,
    pub type_name: Leaf,
    pub accessor_block: Option<AccessorBlock>,
}

/// A single `name: Type` parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: Leaf,
    pub colon: Leaf,
    pub type_name: Leaf,
}

/// A parenthesized, comma-separated parameter list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParamList {
    pub left_paren: Leaf,
    pub params: Vec<Param>,
    pub right_paren: Leaf,
}

/// One statement inside a [`Body`]. The grammar of statements is out of scope; each is either an
/// ordinary leaf-bearing expression statement, or a [`Stmt::Verbatim`] leaf whose text the builder
/// emits as a [`crate::token::Token::Verbatim`] rather than a [`crate::token::Token::Syntax`] (used
/// to exercise §4.5's verbatim re-indentation rule, e.g. for a multi-line string literal).
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expr(Leaf),
    Verbatim(Leaf),
}

/// A brace-delimited function/initializer body.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Body {
    pub left_brace: Leaf,
    pub statements: Vec<Stmt>,
    pub right_brace: Leaf,
}

/// An initializer declaration: `init(a: Int, b: Int) { ... }`.
#[derive(Debug, Clone, PartialEq)]
pub struct InitializerDecl {
    pub attributes: Vec<Attribute>,
    pub keyword: Leaf,
    pub params: ParamList,
    pub body: Body,
}

/// A member of a `struct`/`protocol` body.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Property(PropertyDecl),
    Initializer(InitializerDecl),
}

/// A `protocol Name: Conformance, ... { members }` declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolDecl {
    pub attributes: Vec<Attribute>,
    pub keyword: Leaf,
    pub name: Leaf,
    pub generics: Option<GenericParamClause>,
    pub conformance: Option<ConformanceClause>,
    pub left_brace: Leaf,
    pub members: Vec<Member>,
    pub right_brace: Leaf,
}

/// A `struct Name: Conformance, ... { members }` declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct StructDecl {
    pub attributes: Vec<Attribute>,
    pub keyword: Leaf,
    pub name: Leaf,
    pub generics: Option<GenericParamClause>,
    pub conformance: Option<ConformanceClause>,
    pub left_brace: Leaf,
    pub members: Vec<Member>,
    pub right_brace: Leaf,
}

/// One `#if`/`#elseif`/`#else` arm of a [`ConditionalRegion`].
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalBranch {
    /// The directive line's own text, e.g. `#if X` or `#else`. Carries its own leading trivia so
    /// a comment or blank line before the directive is preserved like any other leaf.
    pub directive: Leaf,
    pub body: Vec<Decl>,
}

/// A `#if ... #elseif ... #else ... #endif` conditional-compilation region.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalRegion {
    pub branches: Vec<ConditionalBranch>,
    pub endif: Leaf,
}

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Protocol(ProtocolDecl),
    Struct(StructDecl),
    Conditional(ConditionalRegion),
}

/// The root of the tree the builder walks.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub decls: Vec<Decl>,
}

impl Document {
    /// Assigns a stable, monotonically increasing [`LeafId`] to every leaf in the tree, in
    /// document order. Must be called before the tree is handed to
    /// [`crate::builder::TokenStreamBuilder`].
    pub fn assign_ids(&mut self) {
        let mut next = 0u32;
        for decl in &mut self.decls {
            assign_decl_ids(decl, &mut next);
        }
    }
}

fn assign_leaf_id(leaf: &mut Leaf, next: &mut u32) {
    leaf.id = *next;
    *next += 1;
}

fn assign_attrs_ids(attrs: &mut [Attribute], next: &mut u32) {
    for attr in attrs {
        assign_leaf_id(&mut attr.leaf, next);
    }
}

fn assign_generics_ids(generics: &mut Option<GenericParamClause>, next: &mut u32) {
    let Some(generics) = generics else { return };
    assign_leaf_id(&mut generics.left_angle, next);
    for param in &mut generics.params {
        assign_leaf_id(param, next);
    }
    assign_leaf_id(&mut generics.right_angle, next);
    if let Some(where_clause) = &mut generics.where_clause {
        assign_leaf_id(&mut where_clause.keyword, next);
        for req in &mut where_clause.requirements {
            assign_leaf_id(req, next);
        }
    }
}

fn assign_conformance_ids(conformance: &mut Option<ConformanceClause>, next: &mut u32) {
    let Some(conformance) = conformance else { return };
    assign_leaf_id(&mut conformance.colon, next);
    for ty in &mut conformance.types {
        assign_leaf_id(ty, next);
    }
}

fn assign_member_ids(member: &mut Member, next: &mut u32) {
    match member {
        Member::Property(prop) => {
            assign_attrs_ids(&mut prop.attributes, next);
            assign_leaf_id(&mut prop.keyword, next);
            assign_leaf_id(&mut prop.name, next);
            assign_leaf_id(&mut prop.colon, next);
            assign_leaf_id(&mut prop.type_name, next);
            if let Some(block) = &mut prop.accessor_block {
                assign_leaf_id(&mut block.left_brace, next);
                for accessor in &mut block.accessors {
                    assign_leaf_id(accessor, next);
                }
                assign_leaf_id(&mut block.right_brace, next);
            }
        }
        Member::Initializer(init) => {
            assign_attrs_ids(&mut init.attributes, next);
            assign_leaf_id(&mut init.keyword, next);
            assign_leaf_id(&mut init.params.left_paren, next);
            for param in &mut init.params.params {
                assign_leaf_id(&mut param.name, next);
                assign_leaf_id(&mut param.colon, next);
                assign_leaf_id(&mut param.type_name, next);
            }
            assign_leaf_id(&mut init.params.right_paren, next);
            assign_body_ids(&mut init.body, next);
        }
    }
}

fn assign_body_ids(body: &mut Body, next: &mut u32) {
    assign_leaf_id(&mut body.left_brace, next);
    for stmt in &mut body.statements {
        match stmt {
            Stmt::Expr(leaf) | Stmt::Verbatim(leaf) => assign_leaf_id(leaf, next),
        }
    }
    assign_leaf_id(&mut body.right_brace, next);
}

fn assign_decl_ids(decl: &mut Decl, next: &mut u32) {
    match decl {
        Decl::Protocol(p) => {
            assign_attrs_ids(&mut p.attributes, next);
            assign_leaf_id(&mut p.keyword, next);
            assign_leaf_id(&mut p.name, next);
            assign_generics_ids(&mut p.generics, next);
            assign_conformance_ids(&mut p.conformance, next);
            assign_leaf_id(&mut p.left_brace, next);
            for member in &mut p.members {
                assign_member_ids(member, next);
            }
            assign_leaf_id(&mut p.right_brace, next);
        }
        Decl::Struct(s) => {
            assign_attrs_ids(&mut s.attributes, next);
            assign_leaf_id(&mut s.keyword, next);
            assign_leaf_id(&mut s.name, next);
            assign_generics_ids(&mut s.generics, next);
            assign_conformance_ids(&mut s.conformance, next);
            assign_leaf_id(&mut s.left_brace, next);
            for member in &mut s.members {
                assign_member_ids(member, next);
            }
            assign_leaf_id(&mut s.right_brace, next);
        }
        Decl::Conditional(region) => {
            for branch in &mut region.branches {
                assign_leaf_id(&mut branch.directive, next);
                for decl in &mut branch.body {
                    assign_decl_ids(decl, next);
                }
            }
            assign_leaf_id(&mut region.endif, next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_ids_is_monotonic_and_unique() {
        let mut doc = Document {
            decls: vec![Decl::Struct(StructDecl {
                attributes: vec![],
                keyword: Leaf::new("struct"),
                name: Leaf::new("S"),
                generics: None,
                conformance: None,
                left_brace: Leaf::new("{"),
                members: vec![Member::Initializer(InitializerDecl {
                    attributes: vec![],
                    keyword: Leaf::new("init"),
                    params: ParamList::default(),
                    body: Body {
                        left_brace: Leaf::new("{"),
                        statements: vec![],
                        right_brace: Leaf::new("}"),
                    },
                })],
                right_brace: Leaf::new("}"),
            })],
        };
        doc.assign_ids();
        let Decl::Struct(s) = &doc.decls[0] else { unreachable!() };
        let Member::Initializer(init) = &s.members[0] else { unreachable!() };
        let mut ids = vec![
            s.keyword.id,
            s.name.id,
            s.left_brace.id,
            init.keyword.id,
            init.params.left_paren.id,
            init.params.right_paren.id,
            init.body.left_brace.id,
            init.body.right_brace.id,
            s.right_brace.id,
        ];
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), ids.len(), "ids must be unique: {ids:?}");
        ids.sort_unstable();
        assert_eq!(ids, (0..ids.len() as u32).collect::<Vec<_>>());
    }
}

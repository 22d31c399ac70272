//! The `TokenStreamBuilder`: walks the AST and emits a [`TokenStream`], as `spec.md` §4.3.
//!
//! Grounded on the teacher's split between decoration and emission: real-world Wadler/Oppen
//! builders (this crate's `nova_format`, and the Swift-format lineage `spec.md` itself is distilled
//! from) separate "decide where tokens attach" from "walk leaves in order and flush what's
//! attached", because a leaf's `after` decorations are often registered by an ancestor production
//! that hasn't finished visiting by the time the leaf itself is reached. This builder runs in two
//! passes over the tree:
//!
//! 1. **Decorate** — a recursive walk that populates `before`/`after` registries keyed by the
//!    stable [`LeafId`]s `ast::Document::assign_ids` already assigned, and records the document-
//!    order sequence of leaves to visit.
//! 2. **Emit** — replays that leaf sequence, and at each leaf performs exactly the five steps
//!    `spec.md` §4.3 "Leaf emission order" specifies: leading trivia, `before`, `syntax`,
//!    end-of-line comment, `after`.
//!
//! Each registration call attaches a short, already-ordered list of tokens in one shot (the
//! grouping idioms in §4.3 are themselves written that way, e.g. "after(leftBrace, break(offset:
//! +2), open(consistent))"); `after` registrations are kept as separate segments per call so that,
//! per §4.3, "after tokens from higher-level productions precede after tokens from lower-level
//! productions when emitted" — later (outer) registrations on the same leaf flush first, so the
//! emit pass reverses each leaf's segment list before flushing it.

use std::collections::{HashMap, HashSet};

use crate::ast::{
    self, AccessorBlock, Attribute, Body, ConditionalRegion, ConformanceClause, Decl, Document,
    GenericParamClause, InitializerDecl, Leaf, LeafId, Member, ParamList, PropertyDecl, Stmt,
    WhereClause,
};
use crate::comment_printer;
use crate::comments::{self, ResolvedComment, TriviaItem};
use crate::config::Config;
use crate::token::{CommentKind, GroupStyle, Token, TokenStream};

struct Builder<'a> {
    config: &'a Config,
    before: HashMap<LeafId, Vec<Vec<Token<'a>>>>,
    after: HashMap<LeafId, Vec<Vec<Token<'a>>>>,
    leaf_order: Vec<LeafId>,
    leaves: HashMap<LeafId, &'a Leaf>,
    verbatim_ids: HashSet<LeafId>,
    /// First leaves of non-first top-level declarations, whose separator newline
    /// [`Self::visit_decl_list`] already derived from this same leaf's own leading trivia and
    /// registered in `before`. [`Self::emit`] must not also apply its generic blank-line-before-leaf
    /// rule to one of these — that rule reads the identical trivia, and firing both would double
    /// the blank line `visit_decl_list` just computed.
    decl_separator_ids: HashSet<LeafId>,
}

/// Builds the formatting token stream for `doc`.
///
/// `doc` must already have had [`ast::Document::assign_ids`] called on it (the builder relies on
/// leaf ids being unique and stable for the lifetime of the call).
pub fn build<'a>(doc: &'a Document, config: &'a Config) -> TokenStream<'a> {
    let mut builder = Builder {
        config,
        before: HashMap::new(),
        after: HashMap::new(),
        leaf_order: Vec::new(),
        leaves: HashMap::new(),
        verbatim_ids: HashSet::new(),
        decl_separator_ids: HashSet::new(),
    };

    builder.visit_decl_list(&doc.decls);
    builder.emit()
}

fn leading_blank_line(leaf: &Leaf) -> bool {
    matches!(leaf.leading_trivia.0.first(), Some(ast::TriviaPiece::Newlines(n)) if *n >= 2)
}

fn first_leaf_of_decl(decl: &Decl) -> &Leaf {
    match decl {
        Decl::Protocol(p) => p.attributes.first().map_or(&p.keyword, |a| &a.leaf),
        Decl::Struct(s) => s.attributes.first().map_or(&s.keyword, |a| &a.leaf),
        Decl::Conditional(region) => {
            region.branches.first().map_or(&region.endif, |b| &b.directive)
        }
    }
}

fn last_leaf_of_member(member: &Member) -> &Leaf {
    match member {
        Member::Property(p) => match &p.accessor_block {
            Some(block) => &block.right_brace,
            None => &p.type_name,
        },
        Member::Initializer(init) => &init.body.right_brace,
    }
}

impl<'a> Builder<'a> {
    fn indent_offset(&self) -> isize {
        self.config.indent_offset()
    }

    fn visit_leaf(&mut self, leaf: &'a Leaf) {
        self.leaf_order.push(leaf.id);
        self.leaves.insert(leaf.id, leaf);
    }

    fn visit_verbatim_leaf(&mut self, leaf: &'a Leaf) {
        self.verbatim_ids.insert(leaf.id);
        self.visit_leaf(leaf);
    }

    fn push_before(&mut self, leaf: &'a Leaf, tokens: Vec<Token<'a>>) {
        self.before.entry(leaf.id).or_default().push(tokens);
    }

    fn push_after(&mut self, leaf: &'a Leaf, tokens: Vec<Token<'a>>) {
        self.after.entry(leaf.id).or_default().push(tokens);
    }

    fn before(&mut self, leaf: &'a Leaf, tokens: Vec<Token<'a>>) {
        self.push_before(leaf, tokens);
    }

    // ---- declaration lists (top-level document, and conditional-region bodies) ----

    /// Visits a sequence of declarations, inserting the inter-declaration separator `spec.md`
    /// §4.3/§6 calls for: a forced single break, widened to two when
    /// `respects_existing_line_breaks` is set and the source had a blank line there (capped at
    /// one blank line, scenario 6 in `spec.md` §8). Shared between the top-level document and
    /// each `#if`/`#elseif`/`#else` branch body, which are themselves declaration lists.
    fn visit_decl_list(&mut self, decls: &'a [Decl]) {
        for (i, decl) in decls.iter().enumerate() {
            if i > 0 {
                let first = first_leaf_of_decl(decl);
                let newline_count = if self.config.respects_existing_line_breaks()
                    && leading_blank_line(first)
                {
                    2
                } else {
                    1
                };
                self.before(first, vec![Token::newline(newline_count)]);
                self.decl_separator_ids.insert(first.id);
            }
            self.visit_decl(decl);
        }
    }

    // ---- declarations ----

    fn visit_decl(&mut self, decl: &'a Decl) {
        match decl {
            Decl::Protocol(p) => {
                self.visit_attributes(&p.attributes);
                self.visit_leaf(&p.keyword);
                self.push_after(&p.keyword, vec![Token::space(1)]);
                self.visit_leaf(&p.name);
                if let Some(generics) = &p.generics {
                    self.visit_generics(generics);
                }
                if let Some(conformance) = &p.conformance {
                    self.visit_conformance(conformance);
                }
                self.push_before(&p.left_brace, vec![Token::space(1)]);
                self.visit_leaf(&p.left_brace);
                self.visit_members(&p.members, &p.left_brace, &p.right_brace);
                self.visit_leaf(&p.right_brace);
            }
            Decl::Struct(s) => {
                self.visit_attributes(&s.attributes);
                self.visit_leaf(&s.keyword);
                self.push_after(&s.keyword, vec![Token::space(1)]);
                self.visit_leaf(&s.name);
                if let Some(generics) = &s.generics {
                    self.visit_generics(generics);
                }
                if let Some(conformance) = &s.conformance {
                    self.visit_conformance(conformance);
                }
                self.push_before(&s.left_brace, vec![Token::space(1)]);
                self.visit_leaf(&s.left_brace);
                self.visit_members(&s.members, &s.left_brace, &s.right_brace);
                self.visit_leaf(&s.right_brace);
            }
            Decl::Conditional(region) => self.visit_conditional(region),
        }
    }

    fn visit_attributes(&mut self, attrs: &'a [Attribute]) {
        match attrs.len() {
            0 => {}
            1 => {
                self.visit_leaf(&attrs[0].leaf);
                self.push_after(&attrs[0].leaf, vec![Token::space(1)]);
            }
            _ => {
                self.push_before(&attrs[0].leaf, vec![Token::open(GroupStyle::Consistent, 0)]);
                for (i, attr) in attrs.iter().enumerate() {
                    self.visit_leaf(&attr.leaf);
                    if i + 1 < attrs.len() {
                        self.push_after(&attr.leaf, vec![Token::brk(1, 0)]);
                    }
                }
                // The break has to sit *inside* the group, directly ahead of `close`, so that the
                // same `close` token resolves both of them in one step; pushed the other way round
                // it would land on an already-empty stack with nothing left to finalize it.
                self.push_after(&attrs.last().unwrap().leaf, vec![Token::brk(1, 0), Token::close()]);
            }
        }
    }

    fn visit_generics(&mut self, generics: &'a GenericParamClause) {
        self.visit_leaf(&generics.left_angle);
        self.emit_delimited(&generics.left_angle, &generics.params, &generics.right_angle);
        self.visit_leaf(&generics.right_angle);
        if let Some(where_clause) = &generics.where_clause {
            self.visit_where_clause(where_clause);
        }
    }

    fn visit_where_clause(&mut self, where_clause: &'a WhereClause) {
        self.push_before(&where_clause.keyword, vec![Token::space(1)]);
        self.visit_leaf(&where_clause.keyword);
        self.push_after(&where_clause.keyword, vec![Token::space(1)]);
        self.emit_delimited_open_ended(&where_clause.keyword, &where_clause.requirements, GroupStyle::Inconsistent);
    }

    fn visit_conformance(&mut self, conformance: &'a ConformanceClause) {
        self.visit_leaf(&conformance.colon);
        self.push_after(&conformance.colon, vec![Token::space(1)]);
        if conformance.types.len() >= 3 {
            self.emit_delimited_open_ended(&conformance.colon, &conformance.types, GroupStyle::Consistent);
        } else {
            for (i, ty) in conformance.types.iter().enumerate() {
                self.visit_leaf(ty);
                if i + 1 < conformance.types.len() {
                    self.push_after(ty, vec![Token::syntax(","), Token::space(1)]);
                }
            }
        }
    }

    /// The comma-separated-list idiom (`spec.md` §4.3): `open(inconsistent, +2)` after the
    /// opening delimiter, `break(1, 0)` after each comma, `break(0, -2)` then `close` before the
    /// closing delimiter.
    fn emit_delimited(&mut self, open_anchor: &'a Leaf, items: &'a [Leaf], close_anchor: &'a Leaf) {
        if items.is_empty() {
            return;
        }
        let offset = self.indent_offset();
        self.push_after(open_anchor, vec![Token::open(GroupStyle::Inconsistent, offset)]);
        let force_each = self.config.line_break_before_each_argument();
        for (i, item) in items.iter().enumerate() {
            self.visit_leaf(item);
            if i + 1 < items.len() {
                let sep = if force_each { Token::newline(1) } else { Token::brk(1, 0) };
                self.push_after(item, vec![Token::syntax(","), sep]);
            }
        }
        self.push_before(close_anchor, vec![Token::brk(0, -offset), Token::close()]);
    }

    /// As [`Self::emit_delimited`] but for lists with no distinct closing delimiter leaf (a
    /// `where` clause or a conformance list simply ends when the list ends): the closing
    /// `break`/`close` pair attaches to the list's own last item instead.
    fn emit_delimited_open_ended(&mut self, open_anchor: &'a Leaf, items: &'a [Leaf], style: GroupStyle) {
        if items.is_empty() {
            return;
        }
        let offset = self.indent_offset();
        self.push_after(open_anchor, vec![Token::open(style, offset)]);
        let force_each = self.config.line_break_before_each_argument();
        for (i, item) in items.iter().enumerate() {
            self.visit_leaf(item);
            if i + 1 < items.len() {
                let sep = if force_each { Token::newline(1) } else { Token::brk(1, 0) };
                self.push_after(item, vec![Token::syntax(","), sep]);
            } else {
                self.push_after(item, vec![Token::brk(0, -offset), Token::close()]);
            }
        }
    }

    // ---- struct/protocol member lists ----

    fn visit_members(&mut self, members: &'a [Member], left_brace: &'a Leaf, right_brace: &'a Leaf) {
        if members.is_empty() {
            self.push_after(left_brace, vec![Token::space(1)]);
            return;
        }
        // The group's own `offset` carries the indentation delta, so the newlines inside it can sit
        // at a plain relative `0`/`-offset` and still land one level deeper — reversed, a break
        // pushed ahead of its group's `open` could never be resolved by that group's own `close`
        // (the scanner only looks for a break directly atop the `open` it is closing), leaving it
        // stranded on `delim_index_stack` forever. Using `Newline` rather than a conditional `break`
        // here also matches `spec.md` §8's "balanced groups" invariant while still forcing every
        // non-empty member list onto its own lines, since a `Newline`'s `SIZE_INFINITY` length makes
        // that the only possible outcome anyway.
        let offset = self.indent_offset();
        self.push_after(left_brace, vec![Token::open(GroupStyle::Consistent, offset), Token::newline_offset(1, 0)]);
        let n = members.len();
        for (i, member) in members.iter().enumerate() {
            self.visit_member(member);
            if i + 1 < n {
                self.push_after(last_leaf_of_member(member), vec![Token::newline(1)]);
            }
        }
        self.push_before(right_brace, vec![Token::newline_offset(1, -offset), Token::close()]);
    }

    fn visit_member(&mut self, member: &'a Member) {
        match member {
            Member::Property(p) => self.visit_property(p),
            Member::Initializer(init) => self.visit_initializer(init),
        }
    }

    fn visit_property(&mut self, p: &'a PropertyDecl) {
        self.visit_attributes(&p.attributes);
        self.visit_leaf(&p.keyword);
        self.push_after(&p.keyword, vec![Token::space(1)]);
        self.visit_leaf(&p.name);
        self.visit_leaf(&p.colon);
        self.push_after(&p.colon, vec![Token::space(1)]);
        self.visit_leaf(&p.type_name);
        if let Some(block) = &p.accessor_block {
            self.visit_accessor_block(block);
        }
    }

    fn visit_accessor_block(&mut self, block: &'a AccessorBlock) {
        self.push_before(&block.left_brace, vec![Token::space(1)]);
        self.visit_leaf(&block.left_brace);
        if block.accessors.is_empty() {
            self.push_after(&block.left_brace, vec![Token::space(1)]);
        } else {
            // Group-before-break, matching `emit_delimited`'s already-balanced shape: a break
            // pushed ahead of its own group's `open` is never resolved by that group's `close`.
            let offset = self.indent_offset();
            self.push_after(&block.left_brace, vec![Token::open(GroupStyle::Consistent, offset), Token::brk(1, 0)]);
            let n = block.accessors.len();
            for (i, accessor) in block.accessors.iter().enumerate() {
                self.visit_leaf(accessor);
                if i + 1 < n {
                    self.push_after(accessor, vec![Token::brk(1, 0)]);
                }
            }
            self.push_before(&block.right_brace, vec![Token::brk(1, -offset), Token::close()]);
        }
        self.visit_leaf(&block.right_brace);
    }

    fn visit_initializer(&mut self, init: &'a InitializerDecl) {
        self.visit_attributes(&init.attributes);
        self.visit_leaf(&init.keyword);
        self.visit_leaf(&init.params.left_paren);
        self.emit_param_list(&init.params);
        self.visit_leaf(&init.params.right_paren);
        self.push_before(&init.body.left_brace, vec![Token::space(1)]);
        self.visit_body(&init.body);
    }

    fn emit_param_list(&mut self, params: &'a ParamList) {
        if params.params.is_empty() {
            return;
        }
        let offset = self.indent_offset();
        self.push_after(&params.left_paren, vec![Token::open(GroupStyle::Inconsistent, offset)]);
        let force_each = self.config.line_break_before_each_argument();
        let n = params.params.len();
        for (i, param) in params.params.iter().enumerate() {
            self.visit_leaf(&param.name);
            self.visit_leaf(&param.colon);
            self.push_after(&param.colon, vec![Token::space(1)]);
            self.visit_leaf(&param.type_name);
            if i + 1 < n {
                let sep = if force_each { Token::newline(1) } else { Token::brk(1, 0) };
                self.push_after(&param.type_name, vec![Token::syntax(","), sep]);
            }
        }
        self.push_before(&params.right_paren, vec![Token::brk(0, -offset), Token::close()]);
    }

    fn visit_body(&mut self, body: &'a Body) {
        self.visit_leaf(&body.left_brace);
        if body.statements.is_empty() {
            self.push_after(&body.left_brace, vec![Token::space(1)]);
        } else {
            let offset = self.indent_offset();
            self.push_after(&body.left_brace, vec![Token::open(GroupStyle::Consistent, offset), Token::newline_offset(1, 0)]);
            let n = body.statements.len();
            for (i, stmt) in body.statements.iter().enumerate() {
                let leaf = match stmt {
                    Stmt::Expr(leaf) => {
                        self.visit_leaf(leaf);
                        leaf
                    }
                    Stmt::Verbatim(leaf) => {
                        self.visit_verbatim_leaf(leaf);
                        leaf
                    }
                };
                if i + 1 < n {
                    self.push_after(leaf, vec![Token::newline(1)]);
                }
            }
            self.push_before(&body.right_brace, vec![Token::newline_offset(1, -offset), Token::close()]);
        }
        self.visit_leaf(&body.right_brace);
    }

    // ---- conditional-compilation regions ----

    /// `#if`/`#elseif`/`#else`/`#endif` (`spec.md` §4.3's last grouping idiom): each directive's
    /// own line sits at the enclosing indent; its branch body is wrapped in a group offset by one
    /// indentation level so the two extra columns `spec.md` §8 scenario 4 calls for come from the
    /// ordinary break/offset machinery rather than a side channel.
    fn visit_conditional(&mut self, region: &'a ConditionalRegion) {
        let offset = self.indent_offset();
        let n = region.branches.len();
        for (i, branch) in region.branches.iter().enumerate() {
            self.visit_leaf(&branch.directive);
            // `open` must precede the forced `newline` so the body's own indent is governed by
            // this group's `+offset` (matching `visit_members`/`visit_body`'s group-before-break
            // shape) rather than rendering at whatever indent was active before the group existed.
            self.push_after(&branch.directive, vec![Token::open(GroupStyle::Consistent, offset), Token::newline_offset(1, 0)]);
            self.visit_decl_list(&branch.body);
            let next_anchor: &'a Leaf = if i + 1 < n {
                &region.branches[i + 1].directive
            } else {
                &region.endif
            };
            self.push_before(next_anchor, vec![Token::close(), Token::newline(1)]);
        }
        self.visit_leaf(&region.endif);
        self.push_after(&region.endif, vec![Token::newline(1)]);
    }

    // ---- emit pass ----

    /// Replays `leaf_order`, performing the five-step "Leaf emission order" `spec.md` §4.3
    /// specifies at each leaf. An end-of-line comment found in leaf `N`'s leading trivia (step
    /// 1's lookahead) actually belongs to leaf `N-1`'s step 4, so this loop carries leaf `N-1`'s
    /// buffered `after` segments (step 5) one iteration forward and flushes them, plus any such
    /// comment, before starting leaf `N`'s own steps.
    fn emit(self) -> TokenStream<'a> {
        let mut out = TokenStream::new();
        let mut pending_after: Option<&Vec<Vec<Token<'a>>>> = None;

        for (i, id) in self.leaf_order.iter().enumerate() {
            let leaf = self.leaves[id];
            let resolved = comments::resolve(&leaf.leading_trivia);

            if let Some(eol) = &resolved.inline_with_previous {
                if i != 0 {
                    // Exactly one space between the preceding token and a trailing comment,
                    // inserted unconditionally here since it never depends on group fit
                    // decisions (mirrors the `comment_printer`'s documented contract that "the
                    // caller is expected to insert exactly one space").
                    out.push(Token::space(1));
                }
                emit_comment(&mut out, eol);
                // A `Line`/`DocLine` comment has no closing delimiter: whatever follows it on
                // the same physical line would otherwise be swallowed into the comment text, so
                // the builder (not the printer, which just renders what it's given) owes it a
                // forced line break. `Block`/`DocBlock` comments self-terminate with `*/` and
                // need no such break. Skip it, though, when the `after` segments about to flush
                // (the leaf this comment is attached to) already start with a forced `Newline`
                // behind nothing but zero-width `Open`/`Close` tokens — e.g. a brace body's own
                // `open` + opening newline — since flushing that unconditionally right afterward
                // would otherwise double the break into a spurious blank line.
                let next_already_breaks =
                    pending_after.is_some_and(|segments| segments_open_onto_forced_newline(segments));
                if matches!(eol.kind, CommentKind::Line | CommentKind::DocLine) && !next_already_breaks {
                    out.push(Token::newline(1));
                }
            }

            if let Some(segments) = pending_after.take() {
                flush_after(&mut out, segments);
            }

            emit_leading_items(&mut out, &resolved.items);
            // A decl-separator leaf with no leading comment already gets its newline from
            // `before` below, derived from this same trivia by `visit_decl_list` — applying this
            // generic rule too would double it into an extra blank line.
            let blank_gap_already_handled =
                resolved.items.is_empty() && self.decl_separator_ids.contains(id);
            if resolved.blank_lines_before_leaf && !blank_gap_already_handled {
                out.push(Token::newline(2));
            } else if !resolved.items.is_empty() {
                out.push(Token::newline(1));
            }

            if let Some(segments) = self.before.get(id) {
                for segment in segments {
                    out.extend(segment.iter().cloned());
                }
            }

            if self.verbatim_ids.contains(id) {
                out.push(Token::verbatim(leaf.text.clone()));
            } else {
                out.push(Token::syntax(leaf.text.clone()));
            }

            pending_after = self.after.get(id);
        }

        if let Some(segments) = pending_after {
            flush_after(&mut out, segments);
        }

        out
    }
}

fn emit_comment<'a>(out: &mut TokenStream<'a>, comment: &ResolvedComment) {
    out.push(comment_printer::render(comment));
}

fn emit_leading_items<'a>(out: &mut TokenStream<'a>, items: &[TriviaItem]) {
    for item in items {
        let TriviaItem::Comment(comment) = item;
        out.push(Token::newline(if comment.blank_lines_before { 2 } else { 1 }));
        emit_comment(out, comment);
        if matches!(comment.kind, CommentKind::DocLine | CommentKind::DocBlock) {
            // Doc comments force their own line even when nothing else would (`spec.md`'s
            // `force_own_line_after` concern, carried from the `comments.rs` design note); a
            // plain line/block comment's following newline is emitted by the caller instead,
            // uniformly for every item.
        }
    }
}

fn flush_after<'a>(out: &mut TokenStream<'a>, segments: &Vec<Vec<Token<'a>>>) {
    // Registered innermost-first; flush outermost-first (`spec.md` §4.3).
    for segment in segments.iter().rev() {
        out.extend(segment.iter().cloned());
    }
}

/// `true` if flushing `segments` (in the same outermost-first order [`flush_after`] uses) would
/// hit a forced [`Token::Newline`] before any token with real width — i.e. only zero-length
/// `Open`/`Close` tokens stand between the start of the flush and a break that fires
/// unconditionally. Used to avoid emitting a redundant forced newline of our own immediately
/// ahead of such a flush.
fn segments_open_onto_forced_newline(segments: &[Vec<Token<'_>>]) -> bool {
    for segment in segments.iter().rev() {
        for token in segment {
            match token {
                Token::Open { .. } | Token::Close => continue,
                Token::Newline { .. } => return true,
                _ => return false,
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{
        ConditionalBranch, ConformanceClause, Decl, Document, GenericParamClause, Param, ParamList,
        ProtocolDecl, StructDecl, Trivia, TriviaPiece,
    };
    use crate::config::Config;
    use crate::printer::print;
    use crate::scanner::scan;
    use crate::token::CommentKind;
    use pretty_assertions::assert_eq;

    fn render(doc: &mut Document, config: &Config) -> String {
        doc.assign_ids();
        let tokens = build(doc, config).into_vec();
        let lengths = scan(&tokens).unwrap();
        print(&tokens, &lengths, config)
    }

    fn empty_param_list() -> ParamList {
        ParamList::default()
    }

    fn params(names: &[(&str, &str)]) -> ParamList {
        ParamList {
            left_paren: Leaf::new("("),
            params: names
                .iter()
                .map(|(name, ty)| Param {
                    name: Leaf::new(*name),
                    colon: Leaf::new(":"),
                    type_name: Leaf::new(*ty),
                })
                .collect(),
            right_paren: Leaf::new(")"),
        }
    }

    #[test]
    fn empty_struct_collapses_braces() {
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
        assert_eq!(render(&mut doc, &config), "struct S { }");
    }

    #[test]
    fn initializer_wraps_params_at_narrow_width() {
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
                    params: params(&[("a", "Int"), ("b", "Int"), ("c", "Int")]),
                    body: Body {
                        left_brace: Leaf::new("{"),
                        statements: vec![],
                        right_brace: Leaf::new("}"),
                    },
                })],
                right_brace: Leaf::new("}"),
            })],
        };
        let config = Config::builder().max_line_length(30).try_build().unwrap();
        let expected = "struct S {\n  init(\n    a: Int,\n    b: Int,\n    c: Int\n  ) { }\n}";
        assert_eq!(render(&mut doc, &config), expected);
    }

    #[test]
    fn protocol_conformance_of_three_wraps_consistently() {
        let mut doc = Document {
            decls: vec![Decl::Protocol(ProtocolDecl {
                attributes: vec![],
                keyword: Leaf::new("protocol"),
                name: Leaf::new("P"),
                generics: None,
                conformance: Some(ConformanceClause {
                    colon: Leaf::new(":"),
                    types: vec![Leaf::new("A"), Leaf::new("B"), Leaf::new("C")],
                }),
                left_brace: Leaf::new("{"),
                members: vec![],
                right_brace: Leaf::new("}"),
            })],
        };
        let config = Config::builder().max_line_length(25).try_build().unwrap();
        let expected = "protocol P: A,\n  B,\n  C\n{ }";
        assert_eq!(render(&mut doc, &config), expected);
    }

    #[test]
    fn conditional_region_indents_body_two_spaces() {
        let mut doc = Document {
            decls: vec![Decl::Conditional(ConditionalRegion {
                branches: vec![ConditionalBranch {
                    directive: Leaf::new("#if X"),
                    body: vec![Decl::Struct(StructDecl {
                        attributes: vec![],
                        keyword: Leaf::new("struct"),
                        name: Leaf::new("S"),
                        generics: None,
                        conformance: None,
                        left_brace: Leaf::new("{"),
                        members: vec![],
                        right_brace: Leaf::new("}"),
                    })],
                }],
                endif: Leaf::new("#endif"),
            })],
        };
        let config = Config::default();
        let expected = "#if X\n  struct S { }\n#endif\n";
        assert_eq!(render(&mut doc, &config), expected);
    }

    #[test]
    fn blank_line_between_top_level_decls_is_preserved_when_configured() {
        let mut doc = Document {
            decls: vec![
                Decl::Struct(StructDecl {
                    attributes: vec![],
                    keyword: Leaf::new("struct"),
                    name: Leaf::new("A"),
                    generics: None,
                    conformance: None,
                    left_brace: Leaf::new("{"),
                    members: vec![],
                    right_brace: Leaf::new("}"),
                }),
                Decl::Struct(StructDecl {
                    attributes: vec![],
                    keyword: Leaf::with_trivia("struct", Trivia(vec![TriviaPiece::Newlines(2)])),
                    name: Leaf::new("B"),
                    generics: None,
                    conformance: None,
                    left_brace: Leaf::new("{"),
                    members: vec![],
                    right_brace: Leaf::new("}"),
                }),
            ],
        };
        let config = Config::default();
        assert_eq!(render(&mut doc, &config), "struct A { }\n\nstruct B { }");
    }

    #[test]
    fn end_of_line_comment_follows_previous_leaf_on_same_line() {
        let mut doc = Document {
            decls: vec![Decl::Struct(StructDecl {
                attributes: vec![],
                keyword: Leaf::new("struct"),
                name: Leaf::with_trivia(
                    "S",
                    Trivia(vec![TriviaPiece::Comment { kind: CommentKind::Line, text: "// eol".to_string() }]),
                ),
                generics: None,
                conformance: None,
                left_brace: Leaf::new("{"),
                members: vec![],
                right_brace: Leaf::new("}"),
            })],
        };
        let config = Config::default();
        assert_eq!(render(&mut doc, &config), "struct // eol\n S { }");
    }

    #[test]
    fn single_attribute_gets_trailing_space_not_a_group() {
        let mut doc = Document {
            decls: vec![Decl::Struct(StructDecl {
                attributes: vec![Attribute { leaf: Leaf::new("@available") }],
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
        assert_eq!(render(&mut doc, &config), "@available struct S { }");
    }

    #[test]
    fn generic_params_render_when_present() {
        let mut doc = Document {
            decls: vec![Decl::Struct(StructDecl {
                attributes: vec![],
                keyword: Leaf::new("struct"),
                name: Leaf::new("S"),
                generics: Some(GenericParamClause {
                    left_angle: Leaf::new("<"),
                    params: vec![Leaf::new("T")],
                    right_angle: Leaf::new(">"),
                    where_clause: None,
                }),
                conformance: None,
                left_brace: Leaf::new("{"),
                members: vec![],
                right_brace: Leaf::new("}"),
            })],
        };
        let config = Config::default();
        assert_eq!(render(&mut doc, &config), "struct S<T> { }");
    }

    #[test]
    fn empty_param_list_has_no_group() {
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
                    params: empty_param_list(),
                    body: Body {
                        left_brace: Leaf::new("{"),
                        statements: vec![],
                        right_brace: Leaf::new("}"),
                    },
                })],
                right_brace: Leaf::new("}"),
            })],
        };
        let config = Config::default();
        assert_eq!(render(&mut doc, &config), "struct S {\n  init() { }\n}");
    }
}

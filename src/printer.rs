//! The print pass: consumes `(token, length)` pairs and produces the final text, as `spec.md`
//! §4.5/§4.6/§4.8.
//!
//! Grounded on the same classical scan+print algorithm as [`crate::scanner`]
//! (`other_examples/…prettyplease…algorithm.rs`'s `Printer`), adapted to this crate's token
//! vocabulary and to the deferred-break/`reset` behavior `spec.md` §4.6 specifies.

use crate::config::Config;
use crate::indent::render_columns;
use crate::scanner::column_width;
use crate::token::{CommentKind, GroupStyle, Token};

const NEWLINE: &str = "\n";

/// One live group on the printer's stack.
struct GroupFrame {
    style: GroupStyle,
    /// Base offset for breaks directly inside this group: the running indent at the time this
    /// group opened, plus this group's own `offset`.
    cumulative_offset: isize,
    /// Once a `Consistent` group has broken once, every break inside it fires (`spec.md` §4.8's
    /// latch). Unused for `Inconsistent` groups, which decide every break independently.
    broken: bool,
    /// The running indent to restore when this group closes (`spec.md` §4.5 "Indent pop policy").
    saved_indent: isize,
}

struct Printer<'cfg> {
    config: &'cfg Config,
    out: String,
    /// Columns remaining on the current line.
    remaining: isize,
    /// The running indent: what the next firing break/newline would add on top of (and what the
    /// next `open` bases its own `cumulative_offset` on).
    current_indent: isize,
    group_stack: Vec<GroupFrame>,
    /// A break that decided not to fire, buffered until the next non-break token either writes
    /// its spaces (if something follows) or drops them (if a firing break/newline/EOF follows).
    pending_break: Option<usize>,
}

impl<'cfg> Printer<'cfg> {
    fn new(config: &'cfg Config) -> Self {
        Self {
            config,
            out: String::new(),
            remaining: config.max_line_length() as isize,
            current_indent: 0,
            group_stack: Vec::new(),
            pending_break: None,
        }
    }

    fn indent_text(&self) -> String {
        render_columns(self.current_indent, self.config.indent().kind, self.config.tab_width())
    }

    fn indent_columns(&self) -> isize {
        match self.config.indent().kind {
            crate::indent::IndentKind::Spaces => self.current_indent,
            crate::indent::IndentKind::Tabs => {
                self.current_indent * self.config.tab_width() as isize
            }
        }
    }

    /// Writes the spaces owed by a previously buffered, non-firing break. Called before any
    /// token other than another `Break` or `Reset` is written.
    fn flush_pending_break(&mut self) {
        if let Some(size) = self.pending_break.take() {
            self.out.push_str(&" ".repeat(size));
        }
    }

    fn top_style(&self) -> GroupStyle {
        self.group_stack.last().map(|f| f.style).unwrap_or(GroupStyle::Inconsistent)
    }

    fn top_broken(&self) -> bool {
        self.group_stack.last().map(|f| f.broken).unwrap_or(false)
    }

    fn top_cumulative_offset(&self) -> isize {
        self.group_stack.last().map(|f| f.cumulative_offset).unwrap_or(0)
    }

    fn mark_top_broken(&mut self) {
        if let Some(frame) = self.group_stack.last_mut() {
            frame.broken = true;
        }
    }

    fn emit_line_break(&mut self, offset: isize) {
        self.current_indent = self.top_cumulative_offset() + offset;
        self.out.push_str(NEWLINE);
        self.out.push_str(&self.indent_text());
        self.remaining = self.config.max_line_length() as isize - self.indent_columns();
    }

    fn write_syntax(&mut self, text: &str, length: isize) {
        self.flush_pending_break();
        self.out.push_str(text);
        self.remaining -= length;
    }

    fn write_comment(&mut self, kind: CommentKind, text: &str, length: isize) {
        self.flush_pending_break();
        match kind {
            CommentKind::Line | CommentKind::Block | CommentKind::DocBlock => {
                self.out.push_str(text);
            }
            CommentKind::DocLine => {
                let indent = self.indent_text();
                let mut lines = text.split('\n');
                if let Some(first) = lines.next() {
                    self.out.push_str(first);
                }
                for line in lines {
                    self.out.push_str(NEWLINE);
                    self.out.push_str(&indent);
                    self.out.push_str(line);
                }
            }
        }
        self.remaining -= length;
    }

    fn write_verbatim(&mut self, text: &str) {
        self.flush_pending_break();
        let indent = self.indent_text();
        let mut lines = text.split('\n');
        let Some(first) = lines.next() else { return };
        self.out.push_str(&indent);
        self.out.push_str(first);
        let first_leading = leading_whitespace(first);
        let mut last_len = indent.len() + column_width(first);
        for line in lines {
            self.out.push_str(NEWLINE);
            let line_leading = leading_whitespace(line);
            let effective = line_leading.max(first_leading);
            let trimmed = line.trim_start();
            self.out.push_str(&indent);
            self.out.push_str(&" ".repeat(effective));
            self.out.push_str(trimmed);
            last_len = indent.len() + effective + column_width(trimmed);
        }
        self.remaining = self.config.max_line_length() as isize - last_len as isize;
    }
}

fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| *c == ' ').count()
}

/// Renders `tokens` (paired with `lengths`, as produced by [`crate::scanner::scan`]) into text.
pub fn print(tokens: &[Token<'_>], lengths: &[isize], config: &Config) -> String {
    let mut printer = Printer::new(config);

    for (i, token) in tokens.iter().enumerate() {
        let length = lengths[i];
        match token {
            Token::Syntax(text) => printer.write_syntax(text, length),

            Token::Space(size) => {
                printer.flush_pending_break();
                printer.out.push_str(&" ".repeat(*size));
                printer.remaining -= length;
            }

            Token::Open { style, offset } => {
                printer.flush_pending_break();
                let fits = length <= printer.remaining;
                tracing::trace!(?style, length, remaining = printer.remaining, fits, "group open");
                let cumulative_offset = printer.current_indent + offset;
                let broken = *style == GroupStyle::Consistent && !fits;
                printer.group_stack.push(GroupFrame {
                    style: *style,
                    cumulative_offset,
                    broken,
                    saved_indent: printer.current_indent,
                });
            }

            Token::Close => {
                // Any break buffered right before a group closes is left pending, not discarded:
                // it flushes normally against whatever content follows the close (the "trailing
                // comma" idiom relies on this — it gives that break `size: 0` so there is nothing
                // to flush — rather than on `close` special-casing pending breaks away).
                if let Some(frame) = printer.group_stack.pop() {
                    printer.current_indent = frame.saved_indent;
                }
            }

            Token::Break { size, offset } => {
                let fires = (printer.top_style() == GroupStyle::Consistent
                    && printer.top_broken())
                    || length > printer.remaining;
                tracing::trace!(length, remaining = printer.remaining, fires, "break decision");
                if fires {
                    if printer.top_style() == GroupStyle::Consistent {
                        printer.mark_top_broken();
                    }
                    printer.pending_break = None;
                    printer.emit_line_break(*offset);
                } else {
                    printer.pending_break = Some(*size);
                    printer.remaining -= *size as isize;
                }
            }

            Token::Newline { count, offset } => {
                printer.pending_break = None;
                if printer.top_style() == GroupStyle::Consistent {
                    printer.mark_top_broken();
                }
                for _ in 0..count.saturating_sub(1) {
                    printer.out.push_str(NEWLINE);
                }
                printer.emit_line_break(*offset);
            }

            Token::Reset => {
                // Never writes anything and never adjusts `remaining` (`spec.md` §4.6): it only
                // suppresses the spaces a buffered break would otherwise contribute.
                printer.pending_break = None;
            }

            Token::Comment { kind, text } => printer.write_comment(*kind, text, length),

            Token::Verbatim(text) => printer.write_verbatim(text),
        }
    }

    printer.out
}

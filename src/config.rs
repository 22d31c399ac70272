//! Formatting configuration, as `spec.md` §6.

use serde::{Deserialize, Serialize};

use crate::indent::{Indent, IndentKind};

/// The default maximum line length most callers configure.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 100;
/// The default indentation unit.
pub const DEFAULT_INDENT: Indent = Indent { kind: IndentKind::Spaces, count: 2 };
/// The default tab width used for measuring (not rendering) tab-based indentation.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Configuration for the core, enumerating exactly the options `spec.md` §6 names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// The target column limit.
    max_line_length: usize,
    /// The unit added per indentation level.
    indent: Indent,
    /// Column width of a tab when measuring length.
    tab_width: usize,
    /// When true, a single blank line between top-level declarations is preserved (capped at
    /// one blank line).
    respects_existing_line_breaks: bool,
    /// Forces `else`, `catch`, and similar control-flow continuation keywords onto a new line
    /// when true.
    line_break_before_control_flow_keywords: bool,
    /// Forces a break before every argument in any wrapped call.
    line_break_before_each_argument: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            indent: DEFAULT_INDENT,
            tab_width: DEFAULT_TAB_WIDTH,
            respects_existing_line_breaks: true,
            line_break_before_control_flow_keywords: false,
            line_break_before_each_argument: false,
        }
    }
}

impl Config {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn max_line_length(&self) -> usize {
        self.max_line_length
    }

    pub fn indent(&self) -> Indent {
        self.indent
    }

    pub fn tab_width(&self) -> usize {
        self.tab_width
    }

    pub fn respects_existing_line_breaks(&self) -> bool {
        self.respects_existing_line_breaks
    }

    pub fn line_break_before_control_flow_keywords(&self) -> bool {
        self.line_break_before_control_flow_keywords
    }

    pub fn line_break_before_each_argument(&self) -> bool {
        self.line_break_before_each_argument
    }

    /// The signed column offset the builder should use for one indentation level's worth of
    /// `open`/`break` tokens (`spec.md` §4.3's grouping idioms all use `indent.count` as their
    /// `+2`/`-2`-style offsets).
    pub fn indent_offset(&self) -> isize {
        self.indent.count as isize
    }
}

/// An error produced by [`Builder::try_build`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("max_line_length must be greater than zero")]
    ZeroMaxLineLength,
    #[error("tab_width must be at least one")]
    ZeroTabWidth,
    #[error("invalid indent: {0}")]
    InvalidIndent(String),
}

/// A builder for [`Config`], following the fallible-builder pattern used by the `wdl-format`
/// crate's `config::Builder` (`stjude-rust-labs-sprocket`'s `crates/wdl-format/src/config/builder.rs`),
/// adapted here to validate against this crate's own option set rather than `Builder::Missing`.
#[derive(Debug, Clone)]
pub struct Builder {
    max_line_length: usize,
    indent: Indent,
    tab_width: usize,
    respects_existing_line_breaks: bool,
    line_break_before_control_flow_keywords: bool,
    line_break_before_each_argument: bool,
}

impl Default for Builder {
    fn default() -> Self {
        let defaults = Config::default();
        Self {
            max_line_length: defaults.max_line_length,
            indent: defaults.indent,
            tab_width: defaults.tab_width,
            respects_existing_line_breaks: defaults.respects_existing_line_breaks,
            line_break_before_control_flow_keywords: defaults
                .line_break_before_control_flow_keywords,
            line_break_before_each_argument: defaults.line_break_before_each_argument,
        }
    }
}

impl Builder {
    pub fn max_line_length(mut self, value: usize) -> Self {
        self.max_line_length = value;
        self
    }

    pub fn indent(mut self, value: Indent) -> Self {
        self.indent = value;
        self
    }

    pub fn tab_width(mut self, value: usize) -> Self {
        self.tab_width = value;
        self
    }

    pub fn respects_existing_line_breaks(mut self, value: bool) -> Self {
        self.respects_existing_line_breaks = value;
        self
    }

    pub fn line_break_before_control_flow_keywords(mut self, value: bool) -> Self {
        self.line_break_before_control_flow_keywords = value;
        self
    }

    pub fn line_break_before_each_argument(mut self, value: bool) -> Self {
        self.line_break_before_each_argument = value;
        self
    }

    pub fn try_build(self) -> Result<Config, ConfigError> {
        if self.max_line_length == 0 {
            return Err(ConfigError::ZeroMaxLineLength);
        }
        if self.tab_width == 0 {
            return Err(ConfigError::ZeroTabWidth);
        }
        if self.indent.kind == IndentKind::Tabs && self.indent.count != 1 {
            return Err(ConfigError::InvalidIndent(
                "tab indentation must have a count of 1".to_string(),
            ));
        }

        Ok(Config {
            max_line_length: self.max_line_length,
            indent: self.indent,
            tab_width: self.tab_width,
            respects_existing_line_breaks: self.respects_existing_line_breaks,
            line_break_before_control_flow_keywords: self.line_break_before_control_flow_keywords,
            line_break_before_each_argument: self.line_break_before_each_argument,
        })
    }
}

//! Physical indentation units, as `spec.md` §4.2.

use serde::{Deserialize, Serialize};

/// The character family an [`Indent`] unit renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndentKind {
    Spaces,
    Tabs,
}

impl IndentKind {
    fn character(self) -> char {
        match self {
            IndentKind::Spaces => ' ',
            IndentKind::Tabs => '\t',
        }
    }
}

/// One indentation unit: a kind plus a repeat count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indent {
    pub kind: IndentKind,
    pub count: usize,
}

impl Indent {
    pub fn try_new(kind: IndentKind, count: usize) -> Result<Self, String> {
        if kind == IndentKind::Tabs && count != 1 {
            return Err("tab indentation units always have a count of 1".to_string());
        }
        Ok(Self { kind, count })
    }

    /// The text this unit renders as.
    pub fn text(&self) -> String {
        std::iter::repeat(self.kind.character())
            .take(self.count)
            .collect()
    }

    /// Column width of this unit, given a configured tab width.
    pub fn columns(&self, tab_width: usize) -> usize {
        match self.kind {
            IndentKind::Spaces => self.count,
            IndentKind::Tabs => self.count * tab_width,
        }
    }
}

/// Renders a raw column count as indentation text of the given `kind`.
///
/// `columns` is clamped at zero (a malformed offset chain should never drive indentation
/// negative, but clamping keeps rendering total even if it does). For [`IndentKind::Tabs`],
/// `tab_width` converts the column count into whole tabs plus a spaces remainder.
pub fn render_columns(columns: isize, kind: IndentKind, tab_width: usize) -> String {
    let columns = columns.max(0) as usize;
    match kind {
        IndentKind::Spaces => " ".repeat(columns),
        IndentKind::Tabs => {
            let tab_width = tab_width.max(1);
            let tabs = columns / tab_width;
            let rest = columns % tab_width;
            format!("{}{}", "\t".repeat(tabs), " ".repeat(rest))
        }
    }
}

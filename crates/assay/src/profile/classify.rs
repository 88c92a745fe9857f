//! Per-cell classification, the core of the quality profile.

use crate::input::Cell;

/// Placeholder token treated as a written-out missing value.
pub const NULL_TOKEN: &str = "null";

/// Identity of a substantive value for uniqueness and duplicate counting.
///
/// Text compares by trimmed content. Floats compare by bit pattern, which
/// gives `Eq` and `Hash` without an epsilon policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKey<'a> {
    Text(&'a str),
    Integer(i64),
    Float(u64),
    Boolean(bool),
}

/// Classification of a single cell. Exactly one category applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellClass<'a> {
    /// No value present in the source.
    Null,
    /// Text trimming to the empty string.
    Empty,
    /// Text whose trimmed content equals the placeholder token,
    /// compared case-insensitively.
    NullLiteral,
    /// Everything else, carrying its comparison key.
    Substantive(ValueKey<'a>),
}

/// Classify one cell.
///
/// Non-text scalars are always substantive; only text goes through the
/// trim and placeholder checks.
pub fn classify(cell: &Cell) -> CellClass<'_> {
    match cell {
        Cell::Null => CellClass::Null,
        Cell::Text(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                CellClass::Empty
            } else if trimmed.eq_ignore_ascii_case(NULL_TOKEN) {
                CellClass::NullLiteral
            } else {
                CellClass::Substantive(ValueKey::Text(trimmed))
            }
        }
        Cell::Integer(v) => CellClass::Substantive(ValueKey::Integer(*v)),
        Cell::Float(v) => CellClass::Substantive(ValueKey::Float(v.to_bits())),
        Cell::Boolean(v) => CellClass::Substantive(ValueKey::Boolean(*v)),
    }
}

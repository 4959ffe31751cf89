//! Field values and caller-supplied row accessors.
//!
//! The grid never inspects row contents directly. Everything it knows
//! about a row comes through accessor closures supplied by the caller:
//! a [`RowIdFn`] for the stable identifier, and [`FieldFn`]s for the
//! values shown in cells, matched against the search query, or compared
//! when sorting. This keeps rows fully generic with no reflection-style
//! field lookup.

use std::cmp::Ordering;
use std::sync::Arc;

/// Type alias for the row-identifier accessor.
///
/// Must return a stable, unique identifier per row. Uniqueness is the
/// caller's responsibility; the grid does not deduplicate (documented
/// precondition, checked only in debug builds).
pub type RowIdFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// Type alias for a field accessor used by columns, search, and sort.
pub type FieldFn<T> = Arc<dyn Fn(&T) -> FieldValue + Send + Sync>;

/// Type-erased container for a single field of a row.
///
/// `FieldValue` is what a [`FieldFn`] extracts from a row. It is the unit
/// of cell display, search matching, and sort comparison.
///
/// # Example
///
/// ```
/// use salam_grid::model::FieldValue;
///
/// let data = FieldValue::from("Fiqih");
/// assert_eq!(data.as_text(), Some("Fiqih"));
///
/// let data = FieldValue::from(42);
/// assert_eq!(data.as_int(), Some(42));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FieldValue {
    /// No data. Renders as a fallback dash, sorts last, never matches a query.
    #[default]
    None,
    /// Text data.
    Text(String),
    /// Integer data.
    Int(i64),
    /// Floating point data.
    Float(f64),
    /// Boolean data.
    Bool(bool),
}

impl FieldValue {
    /// Returns `true` if this is `FieldValue::None`.
    pub fn is_none(&self) -> bool {
        matches!(self, FieldValue::None)
    }

    /// Returns `true` if this contains some data.
    pub fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// Attempts to get the data as a string slice.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Attempts to get the data as an owned string.
    pub fn into_text(self) -> Option<String> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to get the data as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to get the data as a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            FieldValue::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to get the data as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The stringified form used for search matching and fallback display.
    ///
    /// `None` yields no text at all, so an absent field can never match a
    /// query.
    pub fn to_query_text(&self) -> Option<String> {
        match self {
            FieldValue::None => None,
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::Int(n) => Some(n.to_string()),
            FieldValue::Float(n) => Some(n.to_string()),
            FieldValue::Bool(b) => Some(b.to_string()),
        }
    }

    /// Case-insensitive substring match against an already-lowercased query.
    ///
    /// Callers lowercase the query once per filter pass rather than once
    /// per cell.
    pub fn matches_folded_query(&self, folded_query: &str) -> bool {
        match self.to_query_text() {
            Some(text) => text.to_lowercase().contains(folded_query),
            None => false,
        }
    }

    /// Compares two field values for sorting.
    ///
    /// Text compares case-folded first (byte order breaks exact ties so the
    /// result is a total order), numbers compare numerically across
    /// `Int`/`Float` using IEEE total ordering (`f64::total_cmp`, so NaN
    /// has a fixed place instead of breaking transitivity), and `None`
    /// always sorts after any value. Values of incomparable kinds are
    /// treated as equal so a stable sort leaves their source order
    /// untouched.
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        use FieldValue::*;
        match (self, other) {
            (None, None) => Ordering::Equal,
            (None, _) => Ordering::Greater,
            (_, None) => Ordering::Less,
            (Text(a), Text(b)) => {
                let folded = a.to_lowercase().cmp(&b.to_lowercase());
                if folded == Ordering::Equal {
                    a.cmp(b)
                } else {
                    folded
                }
            }
            (Int(a), Int(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Int(a), Float(b)) => (*a as f64).total_cmp(b),
            (Float(a), Int(b)) => a.total_cmp(&(*b as f64)),
            (Bool(a), Bool(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Int(n)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Int(n as i64)
    }
}

impl From<u32> for FieldValue {
    fn from(n: u32) -> Self {
        FieldValue::Int(n as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Float(n)
    }
}

impl From<f32> for FieldValue {
    fn from(n: f32) -> Self {
        FieldValue::Float(n as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<Option<String>> for FieldValue {
    fn from(opt: Option<String>) -> Self {
        match opt {
            Some(s) => FieldValue::Text(s),
            None => FieldValue::None,
        }
    }
}

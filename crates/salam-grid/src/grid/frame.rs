//! Renderer-agnostic frame output.
//!
//! A [`GridFrame`] is everything one render pass needs, as plain data.
//! Front ends (or tests) pattern-match on it; the grid stays free of any
//! drawing or DOM concern. Table and card frames are produced from the
//! same derived window, so toggling view mode changes the frame variant
//! and nothing else.

use std::sync::Arc;

use crate::model::FieldValue;

use super::column::Alignment;
use super::pipeline::PageInfo;
use super::view_state::SortDirection;

/// Type alias for the caller's card renderer.
pub type CardRenderFn<T> = Arc<dyn Fn(&T) -> CardContent + Send + Sync>;

/// One column header cell of a table frame.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    /// Column id, echoed back so a header click can be routed to
    /// [`DataGrid::sort_by`](super::DataGrid::sort_by).
    pub id: String,
    /// Header title text.
    pub title: String,
    /// Cell alignment.
    pub align: Alignment,
    /// Minimum width hint, in logical pixels.
    pub min_width: Option<f32>,
    /// Sort indicator to draw, if this column is the sorted one.
    pub sort: Option<SortDirection>,
    /// Whether a click on this header should trigger a sort.
    pub sortable: bool,
}

/// One visible row of a table frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// The row's stable identifier.
    pub id: String,
    /// Cell values, one per column, in column order.
    pub cells: Vec<FieldValue>,
}

/// Tabular rendering of the visible window.
#[derive(Debug, Clone, PartialEq)]
pub struct TableFrame {
    /// Header cells, in column order.
    pub headers: Vec<HeaderCell>,
    /// Visible rows, in display order.
    pub rows: Vec<TableRow>,
    /// Pagination facts for the pager.
    pub pages: PageInfo,
}

/// Caller-rendered content of one card.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CardContent {
    /// Prominent first line.
    pub title: String,
    /// Secondary line under the title.
    pub subtitle: Option<String>,
    /// Labelled detail lines, in order.
    pub details: Vec<(String, String)>,
}

impl CardContent {
    /// Creates card content with just a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Sets the subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Appends a labelled detail line.
    pub fn with_detail(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.push((label.into(), value.into()));
        self
    }
}

/// One visible card of a card frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    /// The row's stable identifier.
    pub id: String,
    /// The rendered content.
    pub content: CardContent,
}

/// Card-grid rendering of the visible window.
#[derive(Debug, Clone, PartialEq)]
pub struct CardFrame {
    /// Visible cards, in display order.
    pub cards: Vec<Card>,
    /// Pagination facts for the pager.
    pub pages: PageInfo,
}

/// The output of one render pass.
///
/// Exactly one variant applies, with this precedence: loading beats
/// error, error beats rows, and the two empty states are distinct so a
/// user can tell "nothing exists" from "your search matched nothing".
#[derive(Debug, Clone, PartialEq)]
pub enum GridFrame {
    /// A fetch is in flight; suppress the row area for a loading indicator.
    Loading,
    /// The caller's fetch failed. The message is opaque to the grid.
    Failed {
        /// Human-readable error text handed through from the caller.
        message: String,
        /// Whether the caller registered a retry affordance.
        retryable: bool,
    },
    /// The collection itself is empty.
    Empty,
    /// Rows exist, but the filter matched none of them.
    NoMatches {
        /// The query that matched nothing, for "no results for …" text.
        query: String,
    },
    /// Tabular rendering of the visible window.
    Table(TableFrame),
    /// Card-grid rendering of the visible window.
    Cards(CardFrame),
}

impl GridFrame {
    /// The pagination facts, when the frame has a row area.
    pub fn pages(&self) -> Option<&PageInfo> {
        match self {
            GridFrame::Table(frame) => Some(&frame.pages),
            GridFrame::Cards(frame) => Some(&frame.pages),
            _ => None,
        }
    }

    /// Convenience predicate for tests and status bars.
    pub fn is_loading(&self) -> bool {
        matches!(self, GridFrame::Loading)
    }
}

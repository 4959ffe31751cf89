//! Derivation of the visible row window.
//!
//! The pipeline is a pure function from (rows, controls) to the visible
//! slice, applied in a fixed order: filter, then sort, then paginate.
//! Nothing here mutates the model; the output is a mapping from window
//! positions to source row indices, which both render modes share.

use crate::model::{FieldFn, FieldValue};

use super::view_state::SortDirection;

/// Pagination facts about a derived window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// The effective page, after clamping.
    pub page: usize,
    /// Number of pages the filtered result spans (0 when no rows match).
    pub page_count: usize,
    /// Total number of rows that passed the filter.
    pub total: usize,
    /// The page size the window was derived with.
    pub page_size: usize,
}

impl PageInfo {
    /// One-based index of the first visible row, for "showing X–Y of Z"
    /// pager labels. 0 when the window is empty.
    pub fn first(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.page * self.page_size + 1
        }
    }

    /// One-based index of the last visible row. 0 when the window is empty.
    pub fn last(&self) -> usize {
        ((self.page + 1) * self.page_size).min(self.total)
    }

    /// Whether a later page exists.
    pub fn has_next(&self) -> bool {
        self.page + 1 < self.page_count
    }

    /// Whether an earlier page exists.
    pub fn has_prev(&self) -> bool {
        self.page > 0
    }
}

/// The visible window: source indices of the rows on the current page,
/// in display order, plus pagination facts.
#[derive(Debug)]
pub struct RowWindow {
    /// Source row indices of the visible slice, in display order.
    pub indices: Vec<usize>,
    /// Pagination facts, including the clamped page.
    pub pages: PageInfo,
}

/// Derives the visible window from the full collection and the controls.
///
/// Order is fixed:
///
/// 1. **Filter**: an empty query keeps every row; otherwise a row is kept
///    when any search field's stringified value contains the case-folded
///    query as a substring.
/// 2. **Sort**: stable, so rows with equal keys keep their source order;
///    descending reverses the comparator, not the slice, which preserves
///    tie order.
/// 3. **Clamp + paginate**: if the requested page starts at or past the
///    end of the filtered result, it is clamped back to the last non-empty
///    page; the caller syncs its view state from `pages.page`.
///
/// `page_size` must be >= 1; view-state construction enforces this.
pub(crate) fn derive_window<T>(
    rows: &[T],
    search_fields: &[FieldFn<T>],
    query: &str,
    sort: Option<(&FieldFn<T>, SortDirection)>,
    page: usize,
    page_size: usize,
) -> RowWindow {
    debug_assert!(page_size >= 1);

    // Filter
    let mut visible: Vec<usize> = if query.is_empty() {
        (0..rows.len()).collect()
    } else {
        let folded = query.to_lowercase();
        (0..rows.len())
            .filter(|&index| {
                search_fields
                    .iter()
                    .any(|field| field(&rows[index]).matches_folded_query(&folded))
            })
            .collect()
    };

    // Sort
    if let Some((key, direction)) = sort {
        let keys: Vec<FieldValue> = rows.iter().map(|row| key(row)).collect();
        visible.sort_by(|&a, &b| {
            let cmp = keys[a].compare(&keys[b]);
            match direction {
                SortDirection::Ascending => cmp,
                SortDirection::Descending => cmp.reverse(),
            }
        });
    }

    // Clamp + paginate
    let total = visible.len();
    let page_count = total.div_ceil(page_size);
    let page = if page_count == 0 {
        0
    } else {
        page.min(page_count - 1)
    };
    let offset = page * page_size;
    let end = (offset + page_size).min(total);
    visible.drain(..offset);
    visible.truncate(end - offset);

    RowWindow {
        indices: visible,
        pages: PageInfo {
            page,
            page_count,
            total,
            page_size,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone)]
    struct Subject {
        name: &'static str,
        code: &'static str,
    }

    fn subjects() -> Vec<Subject> {
        vec![
            Subject { name: "Fiqih", code: "FQ" },
            Subject { name: "Tajwid", code: "TJ" },
            Subject { name: "Tauhid", code: "TH" },
        ]
    }

    fn name_field() -> FieldFn<Subject> {
        Arc::new(|s: &Subject| FieldValue::from(s.name))
    }

    fn code_field() -> FieldFn<Subject> {
        Arc::new(|s: &Subject| FieldValue::from(s.code))
    }

    fn names(rows: &[Subject], window: &RowWindow) -> Vec<&'static str> {
        window.indices.iter().map(|&i| rows[i].name).collect()
    }

    #[test]
    fn test_empty_query_is_identity() {
        let rows = subjects();
        let fields = [name_field(), code_field()];

        let window = derive_window(&rows, &fields, "", None, 0, 10);
        assert_eq!(window.indices, vec![0, 1, 2]);
        assert_eq!(window.pages.total, 3);
    }

    #[test]
    fn test_filter_matches_any_search_field() {
        let rows = subjects();
        let fields = [name_field(), code_field()];

        // "ta" matches Tajwid and Tauhid by name, case-insensitively.
        let window = derive_window(&rows, &fields, "TA", None, 0, 10);
        assert_eq!(names(&rows, &window), vec!["Tajwid", "Tauhid"]);

        // "fq" matches Fiqih by code only.
        let window = derive_window(&rows, &fields, "fq", None, 0, 10);
        assert_eq!(names(&rows, &window), vec!["Fiqih"]);

        // No match at all.
        let window = derive_window(&rows, &fields, "zz", None, 0, 10);
        assert!(window.indices.is_empty());
        assert_eq!(window.pages.total, 0);
        assert_eq!(window.pages.page_count, 0);
    }

    #[test]
    fn test_filtered_is_subset_in_source_order() {
        let rows = subjects();
        let fields = [name_field()];

        let window = derive_window(&rows, &fields, "i", None, 0, 10);
        // Every returned index is a source index, strictly increasing.
        assert!(window.indices.windows(2).all(|w| w[0] < w[1]));
        assert!(window.indices.iter().all(|&i| i < rows.len()));
    }

    #[test]
    fn test_sort_ascending_and_descending() {
        let rows = subjects();
        let fields = [name_field()];
        let key = name_field();

        let window =
            derive_window(&rows, &fields, "", Some((&key, SortDirection::Ascending)), 0, 10);
        assert_eq!(names(&rows, &window), vec!["Fiqih", "Tajwid", "Tauhid"]);

        let window =
            derive_window(&rows, &fields, "", Some((&key, SortDirection::Descending)), 0, 10);
        assert_eq!(names(&rows, &window), vec!["Tauhid", "Tajwid", "Fiqih"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        struct Term {
            year: i64,
            label: &'static str,
        }
        let rows = vec![
            Term { year: 2024, label: "Ganjil" },
            Term { year: 2023, label: "Ganjil" },
            Term { year: 2024, label: "Genap" },
            Term { year: 2023, label: "Genap" },
        ];
        let year_key: FieldFn<Term> = Arc::new(|t: &Term| FieldValue::from(t.year));

        let window = derive_window(
            &rows,
            &[],
            "",
            Some((&year_key, SortDirection::Ascending)),
            0,
            10,
        );
        let labels: Vec<_> = window.indices.iter().map(|&i| rows[i].label).collect();
        // Equal years keep their source order.
        assert_eq!(labels, vec!["Ganjil", "Genap", "Ganjil", "Genap"]);

        // Descending reverses year groups but not tie order.
        let window = derive_window(
            &rows,
            &[],
            "",
            Some((&year_key, SortDirection::Descending)),
            0,
            10,
        );
        let labels: Vec<_> = window.indices.iter().map(|&i| rows[i].label).collect();
        assert_eq!(labels, vec!["Ganjil", "Genap", "Ganjil", "Genap"]);
    }

    #[test]
    fn test_pagination_covers_sequence_exactly_once() {
        let rows: Vec<Subject> = (0..23)
            .map(|_| Subject { name: "x", code: "y" })
            .collect();
        let fields = [name_field()];

        let mut seen = Vec::new();
        let mut page = 0;
        loop {
            let window = derive_window(&rows, &fields, "", None, page, 5);
            seen.extend(window.indices.iter().copied());
            if !window.pages.has_next() {
                break;
            }
            page += 1;
        }

        assert_eq!(seen, (0..23).collect::<Vec<_>>());
    }

    #[test]
    fn test_page_slicing() {
        let rows = subjects();
        let fields = [name_field()];

        let window = derive_window(&rows, &fields, "", None, 0, 2);
        assert_eq!(names(&rows, &window), vec!["Fiqih", "Tajwid"]);
        assert_eq!(window.pages.page_count, 2);
        assert!(window.pages.has_next());
        assert!(!window.pages.has_prev());

        let window = derive_window(&rows, &fields, "", None, 1, 2);
        assert_eq!(names(&rows, &window), vec!["Tauhid"]);
        assert!(!window.pages.has_next());
        assert!(window.pages.has_prev());
    }

    #[test]
    fn test_clamp_on_shrink() {
        let rows = subjects();
        let fields = [name_field()];

        // Page 1 of 3 rows at size 2 shows the third row.
        let window = derive_window(&rows, &fields, "", None, 1, 2);
        assert_eq!(window.pages.page, 1);
        assert_eq!(names(&rows, &window), vec!["Tauhid"]);

        // The third row is deleted; page 1 now starts past the end and
        // must clamp back to page 0, not render empty with total 2.
        let shrunk = &rows[..2];
        let window = derive_window(shrunk, &fields, "", None, 1, 2);
        assert_eq!(window.pages.page, 0);
        assert_eq!(window.pages.total, 2);
        assert_eq!(names(shrunk, &window), vec!["Fiqih", "Tajwid"]);
    }

    #[test]
    fn test_page_info_labels() {
        let rows: Vec<Subject> = (0..7)
            .map(|_| Subject { name: "x", code: "y" })
            .collect();

        let window = derive_window(&rows, &[name_field()], "", None, 1, 3);
        assert_eq!(window.pages.first(), 4);
        assert_eq!(window.pages.last(), 6);
        assert_eq!(window.pages.total, 7);

        let empty = derive_window(&rows, &[name_field()], "zz", None, 0, 3);
        assert_eq!(empty.pages.first(), 0);
        assert_eq!(empty.pages.last(), 0);
    }
}

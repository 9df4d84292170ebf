//! Deterministic derivation of a display page from an in-memory collection.

use super::definition::{ListQuery, SortDirection};
use super::page;

/// Errors for invalid query arguments
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// Page size must be a positive row count
    #[error("page size must be a positive number of rows (got {0})")]
    InvalidPageSize(usize),
}

/// One displayable page of records plus its pagination metadata
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult<R> {
    /// The page slice, in sorted order
    pub items: Vec<R>,
    /// How many records matched the filters, across all pages
    pub total_matched: usize,
    /// Total pages, never zero
    pub total_pages: usize,
    /// The page actually served, after clamping
    pub page: usize,
}

/// Run a query against a collection, producing one page of records
///
/// Filters, sorts and paginates without mutating the input; re-running with
/// identical arguments yields an identical result.
///
/// # Arguments
/// * `records` - The full in-memory collection, as fetched by the caller
/// * `query` - Filter, sort and pagination parameters for one view
///
/// # Errors
/// Returns [`QueryError::InvalidPageSize`] if the page size is zero.
pub fn run_query<R: Clone>(
    records: &[R],
    query: &ListQuery<R>,
) -> Result<QueryResult<R>, QueryError> {
    if query.page_size == 0 {
        return Err(QueryError::InvalidPageSize(query.page_size));
    }

    // Lower-case both sides once so matching stays consistent for any input.
    let needle = query.search_text.trim().to_lowercase();

    let mut matched: Vec<&R> = records
        .iter()
        .filter(|&record| matches_text(record, query, &needle))
        .filter(|&record| matches_date(record, query))
        .collect();

    if let Some((comparator, direction)) = &query.sort {
        // sort_by is stable: records with equal keys keep collection order,
        // so repeated queries over unchanged data are deterministic.
        matched.sort_by(|a, b| {
            let ordering = comparator(*a, *b);
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }

    let total_matched = matched.len();
    let bounds = page::bounds(total_matched, query.page_size, query.page);
    let items: Vec<R> = matched[bounds.start..bounds.end]
        .iter()
        .copied()
        .cloned()
        .collect();

    log::debug!(
        "query matched {total_matched} of {} records, serving page {}/{}",
        records.len(),
        bounds.page,
        bounds.total_pages
    );

    Ok(QueryResult {
        items,
        total_matched,
        total_pages: bounds.total_pages,
        page: bounds.page,
    })
}

fn matches_text<R>(record: &R, query: &ListQuery<R>, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let Some(accessor) = &query.search_fields else {
        // No searchable fields configured; the text filter is inert.
        return true;
    };
    accessor(record)
        .iter()
        .any(|value| value.to_lowercase().contains(needle))
}

fn matches_date<R>(record: &R, query: &ListQuery<R>) -> bool {
    let Some(day) = query.date_filter else {
        return true;
    };
    match &query.date_accessor {
        Some(accessor) => accessor(record) == Some(day),
        None => true,
    }
}

//! Query definition supplied by a list view.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::pipeline::{self, QueryError, QueryResult};

/// Strings a record exposes to the free-text filter
///
/// Views map missing field values to empty strings, so the filter never has
/// to reason about absent data.
pub type SearchFields<R> = Box<dyn Fn(&R) -> SmallVec<[String; 4]> + Send + Sync>;

/// Total order over records for one sortable column
pub type Comparator<R> = Box<dyn Fn(&R, &R) -> Ordering + Send + Sync>;

/// The calendar day a record belongs to, when it has one
pub type DateAccessor<R> = Box<dyn Fn(&R) -> Option<NaiveDate> + Send + Sync>;

/// Sort direction for a list column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    /// Ascending order
    #[serde(rename = "asc")]
    Asc,
    /// Descending order
    #[serde(rename = "desc")]
    Desc,
}

/// One list view's combination of filter, sort and pagination parameters
///
/// Built with the chainable constructors below and executed with
/// [`ListQuery::run`]. The query itself is inert data plus accessors; running
/// it never mutates the record collection.
pub struct ListQuery<R> {
    pub(crate) search_text: String,
    pub(crate) search_fields: Option<SearchFields<R>>,
    pub(crate) sort: Option<(Comparator<R>, SortDirection)>,
    pub(crate) date_filter: Option<NaiveDate>,
    pub(crate) date_accessor: Option<DateAccessor<R>>,
    pub(crate) page: usize,
    pub(crate) page_size: usize,
}

impl<R> ListQuery<R> {
    /// Create a query showing the first page of `page_size` rows
    ///
    /// A zero `page_size` is reported by [`ListQuery::run`], not here, so a
    /// misconfigured view fails where the caller can surface the error.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            search_text: String::new(),
            search_fields: None,
            sort: None,
            date_filter: None,
            date_accessor: None,
            page: 1,
            page_size,
        }
    }

    /// Set the strings each record exposes to the free-text filter
    #[must_use]
    pub fn search_fields<F>(mut self, accessor: F) -> Self
    where
        F: Fn(&R) -> SmallVec<[String; 4]> + Send + Sync + 'static,
    {
        self.search_fields = Some(Box::new(accessor));
        self
    }

    /// Set the free-text filter
    ///
    /// Matching is a case-insensitive substring test against every string
    /// produced by the search-field accessor. Empty text keeps all records.
    #[must_use]
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Sort by the given comparator and direction
    ///
    /// The comparator must be a total order for the column; descending
    /// order reverses it. Ties keep their original collection order.
    #[must_use]
    pub fn sort_by<F>(mut self, comparator: F, direction: SortDirection) -> Self
    where
        F: Fn(&R, &R) -> Ordering + Send + Sync + 'static,
    {
        self.sort = Some((Box::new(comparator), direction));
        self
    }

    /// Flip the direction of the current sort, if any
    #[must_use]
    pub fn reversed(mut self) -> Self {
        if let Some((_, direction)) = &mut self.sort {
            *direction = match direction {
                SortDirection::Asc => SortDirection::Desc,
                SortDirection::Desc => SortDirection::Asc,
            };
        }
        self
    }

    /// Set the accessor resolving each record to its calendar day
    #[must_use]
    pub fn date_accessor<F>(mut self, accessor: F) -> Self
    where
        F: Fn(&R) -> Option<NaiveDate> + Send + Sync + 'static,
    {
        self.date_accessor = Some(Box::new(accessor));
        self
    }

    /// Keep only records falling on the given calendar day
    ///
    /// Day equality is evaluated on plain [`NaiveDate`] values; the pipeline
    /// performs no timezone conversion. Records whose accessor yields `None`
    /// are excluded while the filter is set.
    #[must_use]
    pub fn on_date(mut self, day: NaiveDate) -> Self {
        self.date_filter = Some(day);
        self
    }

    /// Request a page number (1-based)
    ///
    /// Out-of-range pages are clamped when the query runs, so a stale page
    /// number from a previous, larger result set still yields rows.
    #[must_use]
    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Run the query against an in-memory collection
    ///
    /// # Errors
    /// Returns [`QueryError::InvalidPageSize`] if the page size is zero.
    pub fn run(&self, records: &[R]) -> Result<QueryResult<R>, QueryError>
    where
        R: Clone,
    {
        pipeline::run_query(records, self)
    }
}

// The accessor closures have no useful Debug form; show the plain fields.
impl<R> fmt::Debug for ListQuery<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListQuery")
            .field("search_text", &self.search_text)
            .field("date_filter", &self.date_filter)
            .field("page", &self.page)
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}

//! Filter, search and sort over a calculation collection

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::record::CalculationRecord;
use crate::shape::{self, ShapeKind, ValidationError};

/// Shape type filter; `"all"` is the pass-through sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeFilter {
    #[default]
    All,
    Only(ShapeKind),
}

impl ShapeFilter {
    fn accepts(&self, record: &CalculationRecord) -> bool {
        match self {
            ShapeFilter::All => true,
            ShapeFilter::Only(kind) => record.shape_type == *kind,
        }
    }
}

impl FromStr for ShapeFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(ShapeFilter::All);
        }
        s.parse().map(ShapeFilter::Only)
    }
}

impl fmt::Display for ShapeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeFilter::All => f.write_str("all"),
            ShapeFilter::Only(kind) => write!(f, "{kind}"),
        }
    }
}

/// Ordering of a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Timestamp descending
    #[default]
    Newest,
    /// Timestamp ascending
    Oldest,
    AreaAsc,
    AreaDesc,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Newest => "newest",
            SortMode::Oldest => "oldest",
            SortMode::AreaAsc => "area-asc",
            SortMode::AreaDesc => "area-desc",
        }
    }

    fn compare(&self, a: &CalculationRecord, b: &CalculationRecord) -> Ordering {
        match self {
            SortMode::Newest => b.timestamp.cmp(&a.timestamp),
            SortMode::Oldest => a.timestamp.cmp(&b.timestamp),
            SortMode::AreaAsc => a.area.partial_cmp(&b.area).unwrap_or(Ordering::Equal),
            SortMode::AreaDesc => b.area.partial_cmp(&a.area).unwrap_or(Ordering::Equal),
        }
    }
}

/// Unrecognised names fall back to `newest`
impl FromStr for SortMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "oldest" => SortMode::Oldest,
            "area-asc" => SortMode::AreaAsc,
            "area-desc" => SortMode::AreaDesc,
            _ => SortMode::Newest,
        })
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bundled view criteria
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub search: String,
    pub filter: ShapeFilter,
    pub sort: SortMode,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn filter(mut self, filter: ShapeFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    pub fn run(&self, records: &[CalculationRecord]) -> Vec<CalculationRecord> {
        query(records, &self.search, self.filter, self.sort)
    }
}

/// Build a filtered, searched and sorted view of `records`
///
/// The sort is stable: records that compare equal keep their collection order.
pub fn query(
    records: &[CalculationRecord],
    search_term: &str,
    filter: ShapeFilter,
    sort: SortMode,
) -> Vec<CalculationRecord> {
    let term = search_term.to_lowercase();

    let mut view: Vec<CalculationRecord> = records
        .iter()
        .filter(|record| filter.accepts(record))
        .filter(|record| term.is_empty() || matches_search(record, &term))
        .cloned()
        .collect();

    view.sort_by(|a, b| sort.compare(a, b));
    view
}

/// `term` must already be lowercase. Areas are matched against their
/// browser-style rendering, so `1e-7` and `1e+200` are searchable.
fn matches_search(record: &CalculationRecord, term: &str) -> bool {
    record.shape_type.as_str().contains(term)
        || shape::format_number(record.area).contains(term)
        || (!record.description.is_empty() && record.description.to_lowercase().contains(term))
}

//! Domain types shared by the query pipeline and its hosts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Departments offered by the record-entry form.
pub const DEPARTMENTS: [&str; 5] = ["CSE", "ECE", "ME", "CE", "EE"];

/// Valid values of `StudentRecord::year`.
pub const YEARS: [u8; 4] = [1, 2, 3, 4];

/// Page size used by the browsing view.
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Sentinel a filter control sends for "no filtering".
pub const ALL: &str = "all";

/// One student row.
///
/// - `roll_number`: unique within a collection (enforced by the entry form)
/// - `department`: opaque for filtering, normally one of [`DEPARTMENTS`]
/// - `year`: normally one of [`YEARS`]
/// - `score`: grade point average in `0.0..=10.0`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub roll_number: String,
    pub name: String,
    pub department: String,
    pub year: u8,
    #[serde(alias = "cgpa")]
    pub score: f64,
}

impl StudentRecord {
    pub fn new(
        roll_number: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
        year: u8,
        score: f64,
    ) -> Self {
        Self {
            roll_number: roll_number.into(),
            name: name.into(),
            department: department.into(),
            year,
            score,
        }
    }

    pub fn score_band(&self) -> ScoreBand { ScoreBand::of(self.score) }
}

/// Badge tier for a score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

impl ScoreBand {
    pub fn of(score: f64) -> Self {
        if score >= 8.5 {
            ScoreBand::High
        } else if score >= 7.0 {
            ScoreBand::Medium
        } else {
            ScoreBand::Low
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Name,
    Score,
}

impl FromStr for SortField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SortField::Name),
            "score" | "cgpa" => Ok(SortField::Score),
            _ => Err(Error::InvalidSortField(s.to_string())),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortField::Name => f.write_str("name"),
            SortField::Score => f.write_str("score"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(Error::InvalidSortDirection(s.to_string())),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("asc"),
            SortDirection::Descending => f.write_str("desc"),
        }
    }
}

/// Sort key plus direction.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self { Self { field, direction } }

    /// Column-header click: the active field flips direction, any other
    /// field becomes active in ascending order.
    pub fn toggle(self, field: SortField) -> Self {
        if self.field == field {
            Self { field, direction: self.direction.reversed() }
        } else {
            Self { field, direction: SortDirection::Ascending }
        }
    }
}

/// Parameters of one pipeline invocation.
///
/// `page` is signed on purpose: any value is accepted and clamped by the
/// paginator. Callers reset it to 1 whenever search, filter or sort change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub search_text: String,
    pub department: Option<String>,
    pub year: Option<u8>,
    pub sort: SortSpec,
    pub page: i64,
    pub page_size: usize,
}

impl Default for QueryRequest {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            department: None,
            year: None,
            sort: SortSpec::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QueryRequest {
    pub fn new() -> Self { Self::default() }

    pub fn with_search(mut self, text: impl Into<String>) -> Self { self.search_text = text.into(); self }

    pub fn with_department(mut self, department: impl Into<String>) -> Self { self.department = Some(department.into()); self }

    pub fn with_year(mut self, year: u8) -> Self { self.year = Some(year); self }

    pub fn with_sort(mut self, field: SortField, direction: SortDirection) -> Self { self.sort = SortSpec::new(field, direction); self }

    pub fn with_page(mut self, page: i64) -> Self { self.page = page; self }

    pub fn with_page_size(mut self, page_size: usize) -> Self { self.page_size = page_size; self }

    /// Department to filter on, treating the `"all"` sentinel as absent.
    pub fn department_filter(&self) -> Option<&str> {
        self.department.as_deref().filter(|d| *d != ALL)
    }
}

/// One served page plus the metadata a pager needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult {
    pub items: Vec<StudentRecord>,
    pub total_matches: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub page_size: usize,
    /// Size of the unfiltered collection, for "N of M" labels.
    pub total_records: usize,
}

impl PageResult {
    /// 1-based inclusive positions of the served items within all matches.
    pub fn range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let first = (self.current_page - 1) * self.page_size + 1;
        Some((first, first + self.items.len() - 1))
    }

    pub fn has_previous(&self) -> bool { self.current_page > 1 }

    pub fn has_next(&self) -> bool { self.current_page < self.total_pages }
}

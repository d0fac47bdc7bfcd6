//! Search request and response value objects.
//!
//! [`SearchParams`] is the best-effort, self-correcting request side: malformed
//! input degrades to defaults. [`SearchResult`] is the strict response side:
//! it is validated on construction and rejects inconsistent metadata.

pub mod params;
pub mod result;

pub use params::SearchParams;
pub use result::{SearchResult, SearchResultProps};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

/// Sort direction of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Parses `asc`/`desc`, ignoring case and surrounding whitespace.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of a sortable field, compared with the field's natural ordering.
///
/// Text compares by code point (case-sensitive), numbers numerically, dates
/// chronologically and identifiers by their string form. Keys of different
/// kinds never appear in the same sort; if they do they order by kind.
#[derive(Debug, Clone)]
pub enum SortKey {
    Text(String),
    Integer(i64),
    Date(DateTime<Utc>),
    Id(String),
}

impl SortKey {
    fn rank(&self) -> u8 {
        match self {
            Self::Text(_) => 0,
            Self::Integer(_) => 1,
            Self::Date(_) => 2,
            Self::Id(_) => 3,
        }
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) | (Self::Id(a), Self::Id(b)) => a.cmp(b),
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}

//! Listing request parameters.

use serde::{Deserialize, Serialize};

/// Sort order accepted by the listing endpoints.
///
/// # Examples
///
/// ```
/// use herald_core::ListingSort;
///
/// let sort: ListingSort = "rising".parse().unwrap();
/// assert_eq!(sort, ListingSort::Rising);
/// assert_eq!(ListingSort::Top.to_string(), "top");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ListingSort {
    /// Newest first
    #[default]
    New,
    /// Front-page ranking
    Hot,
    /// Gaining traction
    Rising,
    /// Highest score
    Top,
    /// Most contested
    Controversial,
}

/// One page request against a listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct ListingRequest {
    /// Listing section, e.g. `new` or `r/rust/new`
    section: String,
    /// Sort order
    sort: ListingSort,
    /// Fullname of the newest record already seen; empty on the first poll
    before: String,
    /// Maximum number of records
    limit: u32,
}

impl ListingRequest {
    /// Build a request for a page of `section`.
    pub fn new(
        section: impl Into<String>,
        sort: ListingSort,
        before: impl Into<String>,
        limit: u32,
    ) -> Self {
        Self {
            section: section.into(),
            sort,
            before: before.into(),
            limit,
        }
    }
}

//! Listing pagination cursor.

use herald_core::{ListingPage, ListingRequest, ListingSort};

/// Position in the polled listing.
///
/// Starts with no `before` and the small first-page limit. After each cycle
/// the limit widens to the full page size and `before` moves to the newest
/// record seen, so only newer posts come back. An empty page leaves
/// `before` where it was.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct Cursor {
    /// Fullname of the newest record seen; empty before the first record
    before: String,
    /// Limit for the next request
    limit: u32,
    /// Limit used once the first cycle has run
    page_limit: u32,
}

impl Cursor {
    /// Fresh cursor for a process that has seen nothing yet.
    pub fn new(first_page_limit: u32, page_limit: u32) -> Self {
        Self {
            before: String::new(),
            limit: first_page_limit,
            page_limit,
        }
    }

    /// The request for the next poll.
    pub fn request(&self, section: &str, sort: ListingSort) -> ListingRequest {
        ListingRequest::new(section, sort, self.before.clone(), self.limit)
    }

    /// Move past `page`.
    pub fn advance(&mut self, page: &ListingPage) {
        if let Some(newest) = page.first() {
            self.before = newest.fullname().clone();
        }
        self.limit = self.page_limit;
    }
}

#![forbid(unsafe_code)]

//! Page shape shared by static and remote option sources.
//!
//! Page numbers are 1-based: `number == 1` is the first page. A page
//! carries its own pagination metadata so callers never need to know
//! which kind of source produced it.

/// Default page size used when a caller does not specify one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// A bounded slice of options plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Page<T> {
    /// Options on this page, in source order.
    pub content: Vec<T>,
    /// Total matching options across all pages.
    pub total_elements: u64,
    /// Total number of pages (`0` when nothing matches).
    pub total_pages: u32,
    /// Requested page size.
    pub size: u32,
    /// 1-based page number that was requested.
    pub number: u32,
    /// True on the first page.
    pub first: bool,
    /// True on the last page (and on any page past the end).
    pub last: bool,
    /// Number of options actually on this page.
    pub number_of_elements: u32,
}

impl<T> Page<T> {
    /// An empty page at the given position.
    pub fn empty(number: u32, size: u32) -> Self {
        Self {
            content: Vec::new(),
            total_elements: 0,
            total_pages: 0,
            size,
            number,
            first: number <= 1,
            last: true,
            number_of_elements: 0,
        }
    }

    /// Build a page from one window of an already-filtered result set.
    ///
    /// `window` holds the options for this page only; `total_matches`
    /// counts the whole filtered set.
    pub fn windowed(window: Vec<T>, total_matches: u64, number: u32, size: u32) -> Self {
        let total_pages = total_pages(total_matches, size);
        let number_of_elements = window.len() as u32;
        Self {
            content: window,
            total_elements: total_matches,
            total_pages,
            size,
            number,
            first: number <= 1,
            last: number >= total_pages,
            number_of_elements,
        }
    }

    /// Check the structural page invariant.
    ///
    /// `number_of_elements` always mirrors `content.len()`. The count
    /// stays within `size` for adapter-produced pages; presence
    /// augmentation may push it past `size`, which is why `size` is not
    /// part of this check.
    pub fn is_consistent(&self) -> bool {
        self.number_of_elements as usize == self.content.len()
            && self.first == (self.number <= 1)
    }
}

/// Compute the page count for a result-set size.
pub fn total_pages(total: u64, size: u32) -> u32 {
    if total == 0 || size == 0 {
        return 0;
    }
    total.div_ceil(u64::from(size)).min(u64::from(u32::MAX)) as u32
}

/// What a fetcher receives: the opaque query plus the page window.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRequest {
    /// Opaque filter string, passed through to the source.
    pub query: String,
    /// 1-based page number.
    pub number: u32,
    /// Page size.
    pub size: u32,
}

impl PageRequest {
    /// Create a request for one page window.
    pub fn new(query: impl Into<String>, number: u32, size: u32) -> Self {
        Self {
            query: query.into(),
            number,
            size,
        }
    }
}

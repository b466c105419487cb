#![forbid(unsafe_code)]

//! Watch token for page change detection.
//!
//! A token bundles everything that can make a resolved page stale. The
//! adapter stores the previously seen token and recomputes or refetches
//! only when the stored and incoming tokens differ; a fetch result
//! stamped with an outdated token is dropped on arrival.

use crate::page::PageRequest;

/// Change-detection token: `{reload, query, number, size}`.
///
/// `reload` is an opaque caller-supplied value; bumping it forces a
/// recompute/refetch without changing the visible request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WatchToken {
    /// Opaque reload trigger.
    pub reload: u64,
    /// Filter query.
    pub query: String,
    /// 1-based page number.
    pub number: u32,
    /// Page size.
    pub size: u32,
}

impl WatchToken {
    /// Build a token from its parts.
    pub fn new(reload: u64, query: impl Into<String>, number: u32, size: u32) -> Self {
        Self {
            reload,
            query: query.into(),
            number,
            size,
        }
    }

    /// The page request this token describes.
    pub fn request(&self) -> PageRequest {
        PageRequest::new(self.query.clone(), self.number, self.size)
    }
}

#![forbid(unsafe_code)]

//! Scripted fetch double.
//!
//! Records every request and parks its completion handle until the test
//! settles it. Handles can be completed out of order, which is how the
//! stale-result guard is exercised.

use fform_core::error::FetchError;
use fform_core::page::{Page, PageRequest};
use fform_options::source::{FetchHandle, FetchOptions};
use std::cell::RefCell;
use std::rc::Rc;

struct Inner<T> {
    requests: Vec<PageRequest>,
    pending: Vec<FetchHandle<T>>,
}

/// A fetcher whose completions are driven by the test.
///
/// Clones share state: keep one clone as the controller and move the
/// other into [`OptionsSource::remote`].
///
/// [`OptionsSource::remote`]: fform_options::source::OptionsSource::remote
pub struct ScriptedFetcher<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> ScriptedFetcher<T> {
    /// A fetcher with no recorded requests.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                requests: Vec::new(),
                pending: Vec::new(),
            })),
        }
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<PageRequest> {
        self.inner.borrow().requests.clone()
    }

    /// Number of requests received so far.
    pub fn request_count(&self) -> usize {
        self.inner.borrow().requests.len()
    }

    /// Number of requests not yet completed.
    pub fn pending_len(&self) -> usize {
        self.inner.borrow().pending.len()
    }

    /// Complete the oldest pending request. Returns false when there is
    /// nothing pending.
    pub fn complete_next(&self, result: Result<Page<T>, FetchError>) -> bool {
        self.complete_nth(0, result)
    }

    /// Complete the pending request at `index` (0 is the oldest).
    pub fn complete_nth(&self, index: usize, result: Result<Page<T>, FetchError>) -> bool {
        let handle = {
            let mut inner = self.inner.borrow_mut();
            if index >= inner.pending.len() {
                return false;
            }
            inner.pending.remove(index)
        };
        handle.complete(result);
        true
    }

    /// Drop the pending request at `index` without completing it,
    /// simulating a fetch that never settles.
    pub fn abandon_nth(&self, index: usize) -> bool {
        let mut inner = self.inner.borrow_mut();
        if index >= inner.pending.len() {
            return false;
        }
        drop(inner.pending.remove(index));
        true
    }
}

impl<T> Default for ScriptedFetcher<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ScriptedFetcher<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> FetchOptions<T> for ScriptedFetcher<T> {
    fn fetch(&mut self, request: PageRequest, done: FetchHandle<T>) {
        let mut inner = self.inner.borrow_mut();
        inner.requests.push(request);
        inner.pending.push(done);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fform_core::identity::IdentitySpec;
    use fform_options::adapter::{PagedOptions, ResolveParams};
    use fform_options::source::OptionsSource;

    #[test]
    fn records_requests_and_parks_handles() {
        let fetcher: ScriptedFetcher<String> = ScriptedFetcher::new();
        let ctl = fetcher.clone();
        let mut paged = PagedOptions::new(
            OptionsSource::remote(fetcher),
            IdentitySpec::new(|s: &String| s.clone()),
        );

        let resolved = paged.resolve(&ResolveParams::new().size(5)).unwrap();
        assert!(resolved.is_loading);
        assert_eq!(ctl.request_count(), 1);
        assert_eq!(ctl.pending_len(), 1);
        assert_eq!(ctl.requests()[0], PageRequest::new("", 1, 5));
    }

    #[test]
    fn complete_next_is_fifo() {
        let fetcher: ScriptedFetcher<u8> = ScriptedFetcher::new();
        let ctl = fetcher.clone();
        assert!(!ctl.complete_next(Ok(Page::empty(1, 1))));

        let mut paged = PagedOptions::new(
            OptionsSource::remote(fetcher),
            IdentitySpec::new(|v: &u8| v.to_string()),
        );
        paged.resolve(&ResolveParams::new()).unwrap();
        assert!(ctl.complete_next(Ok(Page::empty(1, 10))));
        assert_eq!(ctl.pending_len(), 0);
    }
}

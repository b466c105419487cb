#![forbid(unsafe_code)]

//! Option sources and fetch completion plumbing.
//!
//! A source is an explicit tagged variant: a fixed list, or a remote
//! fetcher. The fetcher receives a token-stamped completion handle and
//! may settle it from any thread; the adapter drains completions on the
//! caller's thread and drops any reply whose token is no longer
//! current.

use fform_core::error::FetchError;
use fform_core::page::{Page, PageRequest};
use fform_core::token::WatchToken;
use std::fmt;
use std::sync::mpsc;

/// A caller-supplied paginated fetch.
///
/// `fetch` must not block: start the work (inline completion is fine
/// for in-memory backends) and settle `done` exactly once, whenever the
/// result is ready. There is no cancellation; a handle for a token that
/// has since changed is simply ignored on arrival.
pub trait FetchOptions<T> {
    /// Begin fetching one page window.
    fn fetch(&mut self, request: PageRequest, done: FetchHandle<T>);
}

impl<T, F> FetchOptions<T> for F
where
    F: FnMut(PageRequest, FetchHandle<T>),
{
    fn fetch(&mut self, request: PageRequest, done: FetchHandle<T>) {
        self(request, done)
    }
}

/// Where options come from: a fixed list or a remote fetcher.
pub enum OptionsSource<T> {
    /// Fixed in-memory list, filtered and sliced synchronously.
    List(Vec<T>),
    /// Asynchronous paginated fetch.
    Remote(Box<dyn FetchOptions<T>>),
}

impl<T> OptionsSource<T> {
    /// Source backed by a fixed list.
    pub fn list(items: impl Into<Vec<T>>) -> Self {
        Self::List(items.into())
    }

    /// Source backed by a fetch implementation.
    pub fn remote(fetcher: impl FetchOptions<T> + 'static) -> Self {
        Self::Remote(Box::new(fetcher))
    }

    /// List length for static sources, `None` for remote ones.
    pub fn static_len(&self) -> Option<usize> {
        match self {
            Self::List(items) => Some(items.len()),
            Self::Remote(_) => None,
        }
    }
}

impl<T> fmt::Debug for OptionsSource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List(items) => f.debug_tuple("List").field(&items.len()).finish(),
            Self::Remote(_) => f.write_str("Remote"),
        }
    }
}

/// One fetch completion, stamped with the token it belongs to.
pub(crate) struct FetchReply<T> {
    pub(crate) token: WatchToken,
    pub(crate) result: Result<Page<T>, FetchError>,
}

/// Completion handle given to a fetcher.
///
/// Consumed by [`FetchHandle::complete`]; dropping it without
/// completing leaves the adapter loading until its token changes.
pub struct FetchHandle<T> {
    token: WatchToken,
    tx: mpsc::Sender<FetchReply<T>>,
}

impl<T> FetchHandle<T> {
    pub(crate) fn new(token: WatchToken, tx: mpsc::Sender<FetchReply<T>>) -> Self {
        Self { token, tx }
    }

    /// The token this handle is stamped with.
    pub fn token(&self) -> &WatchToken {
        &self.token
    }

    /// Deliver the fetch result.
    ///
    /// The send fails only when the adapter is gone; the reply is
    /// discarded in that case.
    pub fn complete(self, result: Result<Page<T>, FetchError>) {
        let _ = self.tx.send(FetchReply {
            token: self.token,
            result,
        });
    }
}

impl<T> fmt::Debug for FetchHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchHandle")
            .field("token", &self.token)
            .finish()
    }
}

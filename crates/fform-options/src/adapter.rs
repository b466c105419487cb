#![forbid(unsafe_code)]

//! Page cache adapter.
//!
//! Owns one [`OptionsSource`] and resolves it to the current page. The
//! previously seen watch token is an explicit field; an unchanged token
//! returns the cached page untouched. For remote sources the previous
//! page stays visible while a fetch is outstanding, and a reply whose
//! token is no longer current is dropped on arrival.

use crate::metrics;
use crate::source::{FetchHandle, FetchReply, OptionsSource};
use ahash::AHashMap;
use fform_core::error::FetchError;
use fform_core::identity::IdentitySpec;
use fform_core::page::{DEFAULT_PAGE_SIZE, Page};
use fform_core::token::WatchToken;
use std::sync::mpsc;
use web_time::Instant;

/// Inputs of one resolution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveParams {
    /// Filter query, matched case-insensitively against option labels
    /// on the static path and passed through opaquely to fetchers.
    pub query: String,
    /// 1-based page number.
    pub number: u32,
    /// Page size.
    pub size: u32,
    /// Opaque reload trigger; bump to force a recompute or refetch.
    pub reload: u64,
}

impl Default for ResolveParams {
    fn default() -> Self {
        Self {
            query: String::new(),
            number: 1,
            size: DEFAULT_PAGE_SIZE,
            reload: 0,
        }
    }
}

impl ResolveParams {
    /// Params for the first page at the default size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter query.
    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Set the 1-based page number.
    #[must_use]
    pub fn page(mut self, number: u32) -> Self {
        self.number = number;
        self
    }

    /// Set the page size.
    #[must_use]
    pub fn size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Set the reload trigger.
    #[must_use]
    pub fn reload(mut self, reload: u64) -> Self {
        self.reload = reload;
        self
    }

    /// The watch token these params derive.
    pub fn token(&self) -> WatchToken {
        WatchToken::new(self.reload, self.query.clone(), self.number, self.size)
    }
}

/// Outcome of a resolution pass.
#[derive(Debug)]
pub struct Resolved<'a, T> {
    /// The current page. While a fetch is outstanding this is the
    /// previously resolved page.
    pub page: &'a Page<T>,
    /// True while a remote fetch is outstanding.
    pub is_loading: bool,
}

/// One source of options resolved to a current page.
pub struct PagedOptions<T> {
    source: OptionsSource<T>,
    spec: IdentitySpec<T>,
    page: Page<T>,
    prev_token: Option<WatchToken>,
    loading: bool,
    failed: Option<FetchError>,
    collisions: Vec<(String, u32)>,
    fetch_started: Option<Instant>,
    tx: mpsc::Sender<FetchReply<T>>,
    rx: mpsc::Receiver<FetchReply<T>>,
}

impl<T> std::fmt::Debug for PagedOptions<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PagedOptions")
            .field("source", &self.source)
            .field("prev_token", &self.prev_token)
            .field("loading", &self.loading)
            .field("failed", &self.failed.is_some())
            .finish()
    }
}

impl<T: Clone> PagedOptions<T> {
    /// Create an adapter over a source with the given identity spec.
    pub fn new(source: OptionsSource<T>, spec: IdentitySpec<T>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            source,
            spec,
            page: Page::empty(1, DEFAULT_PAGE_SIZE),
            prev_token: None,
            loading: false,
            failed: None,
            collisions: Vec::new(),
            fetch_started: None,
            tx,
            rx,
        }
    }

    /// Resolve the current page for these params.
    ///
    /// Static sources recompute synchronously on a token change and
    /// return the cached page otherwise. Remote sources issue a fetch
    /// on a token change and keep the previous page visible while it is
    /// outstanding. A failed fetch is returned here, unchanged, on
    /// every call until the token changes; there is no implicit retry.
    pub fn resolve(&mut self, params: &ResolveParams) -> Result<Resolved<'_, T>, FetchError> {
        self.drain_replies();

        let token = params.token();
        if self.prev_token.as_ref() != Some(&token) {
            self.failed = None;
            match &mut self.source {
                OptionsSource::List(items) => {
                    let (page, collisions) = resolve_static(items, &self.spec, &token);
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        target: "fform.options",
                        number = token.number,
                        size = token.size,
                        total = page.total_elements,
                        "static page recomputed"
                    );
                    self.page = page;
                    self.collisions = collisions;
                    self.loading = false;
                }
                OptionsSource::Remote(fetcher) => {
                    self.loading = true;
                    self.fetch_started = Some(Instant::now());
                    metrics::record_fetch_issued();
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        target: "fform.options",
                        query = %token.query,
                        number = token.number,
                        size = token.size,
                        "fetch issued"
                    );
                    let done = FetchHandle::new(token.clone(), self.tx.clone());
                    fetcher.fetch(token.request(), done);
                }
            }
            self.prev_token = Some(token);
            // A fetcher may complete inline; pick that up immediately.
            self.drain_replies();
        }

        if let Some(err) = &self.failed {
            return Err(err.clone());
        }
        metrics::record_page_resolved();
        Ok(Resolved {
            page: &self.page,
            is_loading: self.loading,
        })
    }

    /// Minimal resolution used to learn the total option count.
    ///
    /// Remote sources are asked for a size-1 page; the caller should
    /// keep polling while [`Resolved::is_loading`] is true.
    pub fn probe(&mut self, query: &str, reload: u64) -> Result<Resolved<'_, T>, FetchError> {
        let params = ResolveParams::new().query(query).page(1).size(1).reload(reload);
        self.resolve(&params)
    }

    fn drain_replies(&mut self) {
        while let Ok(reply) = self.rx.try_recv() {
            let current = self.loading && self.prev_token.as_ref() == Some(&reply.token);
            if !current {
                metrics::record_stale_drop();
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    target: "fform.options",
                    token = ?reply.token,
                    "stale fetch result dropped"
                );
                continue;
            }
            if let Some(started) = self.fetch_started.take() {
                let us = started.elapsed().as_micros() as u64;
                metrics::record_fetch_duration(us);
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    target: "fform.options",
                    duration_us = us,
                    ok = reply.result.is_ok(),
                    "fetch completed"
                );
            }
            self.loading = false;
            match reply.result {
                Ok(page) => {
                    debug_assert!(page.is_consistent());
                    self.page = page;
                }
                Err(err) => {
                    self.failed = Some(err);
                }
            }
        }
    }
}

impl<T> PagedOptions<T> {
    /// The most recently resolved page.
    pub fn page(&self) -> &Page<T> {
        &self.page
    }

    /// True while a remote fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The failure of the current token's fetch, if any.
    pub fn failure(&self) -> Option<&FetchError> {
        self.failed.as_ref()
    }

    /// The identity spec this adapter filters and matches with.
    pub fn spec(&self) -> &IdentitySpec<T> {
        &self.spec
    }

    /// List length for static sources, `None` for remote ones.
    pub fn static_len(&self) -> Option<usize> {
        self.source.static_len()
    }

    /// The token of the most recent resolution, if any.
    pub fn last_token(&self) -> Option<&WatchToken> {
        self.prev_token.as_ref()
    }

    /// Derived keys that more than one option on the current static
    /// page's filtered set maps to, with their counts.
    ///
    /// Such options compare equal through the identity fallback chain;
    /// this surfaces the conflation without changing behavior.
    pub fn key_collisions(&self) -> &[(String, u32)] {
        &self.collisions
    }
}

/// Filter a static list by label substring and slice one page window.
fn resolve_static<T: Clone>(
    items: &[T],
    spec: &IdentitySpec<T>,
    token: &WatchToken,
) -> (Page<T>, Vec<(String, u32)>) {
    let needle = token.query.trim().to_lowercase();
    let filtered: Vec<&T> = items
        .iter()
        .filter(|option| needle.is_empty() || spec.label(option).to_lowercase().contains(&needle))
        .collect();

    let mut counts: AHashMap<String, u32> = AHashMap::new();
    for option in &filtered {
        *counts.entry(spec.derive_key(option)).or_insert(0) += 1;
    }
    let mut collisions: Vec<(String, u32)> = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .collect();
    collisions.sort();
    #[cfg(feature = "tracing")]
    for (key, count) in &collisions {
        tracing::warn!(
            target: "fform.options",
            key = %key,
            count = *count,
            "distinct options share a derived key"
        );
    }

    let total = filtered.len() as u64;
    let start = (token.number.saturating_sub(1) as usize).saturating_mul(token.size as usize);
    let window: Vec<T> = filtered
        .into_iter()
        .skip(start)
        .take(token.size as usize)
        .cloned()
        .collect();
    (
        Page::windowed(window, total, token.number, token.size),
        collisions,
    )
}

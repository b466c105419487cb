#![forbid(unsafe_code)]

//! Fetch failure type.
//!
//! A failed fetch is handed back to the caller as-is: the adapter never
//! substitutes a fallback page and never retries. The error is
//! reference-counted so it can be held by the adapter (a failure stays
//! observable until the watch token changes) and returned to every
//! caller that asks.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Failure reported by a caller-supplied fetch function.
#[derive(Debug, Clone)]
pub struct FetchError {
    inner: Arc<dyn Error + Send + Sync + 'static>,
}

impl FetchError {
    /// Wrap a fetcher's error.
    pub fn new(err: impl Error + Send + Sync + 'static) -> Self {
        Self {
            inner: Arc::new(err),
        }
    }

    /// Build from a plain message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self::new(Message(message.into()))
    }

    /// Borrow the underlying error.
    pub fn get_ref(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.inner
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "options fetch failed: {}", self.inner)
    }
}

impl Error for FetchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

#[derive(Debug)]
struct Message(String);

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Error for Message {}

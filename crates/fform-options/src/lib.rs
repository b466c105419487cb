#![forbid(unsafe_code)]

//! Unified option paging for FrankenForm.
//!
//! One abstraction over two kinds of option sources: a fixed in-memory
//! list (filtered and sliced synchronously) and a caller-supplied
//! asynchronous paginated fetch. Both produce the same [`Page`] shape,
//! so widgets never care which kind they are looking at.
//!
//! The adapter recomputes only when its watch token changes, drops
//! fetch results that arrive for an outdated token, and never retries
//! or masks a fetch failure. The presence guarantor post-processes a
//! resolved page so currently-selected values stay visible even when
//! the page no longer contains them.
//!
//! [`Page`]: fform_core::Page

pub mod adapter;
pub mod metrics;
pub mod presence;
pub mod source;

pub use adapter::{PagedOptions, Resolved, ResolveParams};
pub use presence::{PresenceGuarantee, ensure_present};
pub use source::{FetchHandle, FetchOptions, OptionsSource};

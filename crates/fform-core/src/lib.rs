#![forbid(unsafe_code)]

//! Option identity and paging data model for FrankenForm.
//!
//! This crate holds the pure, dependency-light foundation of the option
//! resolution engine: stable key derivation for application values,
//! equality and selection-membership tests, the page shape shared by
//! static and remote option sources, and the watch token used for
//! change detection.
//!
//! # Role in FrankenForm
//! `fform-core` isolates the identity and data-model layer so the page
//! adapter and the adaptive selector can stay source-agnostic. It does
//! not depend on any fetching or presentation concern.

pub mod error;
pub mod identity;
pub mod page;
pub mod selection;
pub mod token;

pub use error::FetchError;
pub use identity::IdentitySpec;
pub use page::{DEFAULT_PAGE_SIZE, Page, PageRequest, total_pages};
pub use selection::Selection;
pub use token::WatchToken;

#![forbid(unsafe_code)]

//! Test harness and reference fixtures for FrankenForm.
//!
//! Deterministic fetch doubles for exercising the page adapter and the
//! adaptive selector without a real backend: a scripted fetcher whose
//! completions the test controls (including out-of-order delivery for
//! stale-result coverage), an in-memory backend that answers inline,
//! and page fixture builders.

pub mod pages;
pub mod scripted;

pub use pages::{InstantBackend, label_spec, names, served_page};
pub use scripted::ScriptedFetcher;

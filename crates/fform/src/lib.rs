#![forbid(unsafe_code)]

//! FrankenForm public facade crate.
//!
//! Re-exports the common types from the internal crates and offers a
//! lightweight prelude for day-to-day usage.

// --- Core re-exports -------------------------------------------------------

pub use fform_core::error::FetchError;
pub use fform_core::identity::IdentitySpec;
pub use fform_core::page::{DEFAULT_PAGE_SIZE, Page, PageRequest, total_pages};
pub use fform_core::selection::Selection;
pub use fform_core::token::WatchToken;

// --- Options re-exports ----------------------------------------------------

pub use fform_options::adapter::{PagedOptions, Resolved, ResolveParams};
pub use fform_options::presence::{PresenceGuarantee, ensure_present};
pub use fform_options::source::{FetchHandle, FetchOptions, OptionsSource};

// --- Widget re-exports -----------------------------------------------------

#[cfg(feature = "widgets")]
pub use fform_widgets::adaptive::{AdaptiveSelect, Phase, StrategyState, TransitionEvent};
#[cfg(feature = "widgets")]
pub use fform_widgets::strategy::{SelectionMode, Strategy};

/// Convenience imports for building a selection widget.
pub mod prelude {
    pub use fform_core::identity::IdentitySpec;
    pub use fform_core::page::Page;
    pub use fform_core::selection::Selection;
    pub use fform_options::adapter::{PagedOptions, ResolveParams};
    pub use fform_options::presence::PresenceGuarantee;
    pub use fform_options::source::OptionsSource;

    #[cfg(feature = "widgets")]
    pub use fform_widgets::adaptive::AdaptiveSelect;
    #[cfg(feature = "widgets")]
    pub use fform_widgets::strategy::{SelectionMode, Strategy};
}

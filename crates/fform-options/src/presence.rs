#![forbid(unsafe_code)]

//! Value presence guarantor.
//!
//! A filtered or refetched page may no longer contain values the user
//! has already selected. When the guarantee is enabled, every selected
//! value missing from the page is synthesized into it so the selection
//! stays visible.

use crate::metrics;
use fform_core::identity::IdentitySpec;
use fform_core::page::Page;
use fform_core::selection::Selection;

/// Whether selected values are guaranteed to appear on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresenceGuarantee {
    /// Missing selected values are prepended to the page.
    #[default]
    Enabled,
    /// The page is returned untouched.
    Disabled,
}

/// Ensure every selected value is represented on the page.
///
/// Selected values with no equal element in `page.content` are
/// prepended in selection order; elements already present keep their
/// position. `number_of_elements` grows with the synthesized entries
/// while `total_elements` stays what the source reported: the entries
/// are a view-level augmentation, not new source rows, so the count can
/// exceed `size` and the page totals deliberately do not change.
pub fn ensure_present<T: Clone>(
    page: Page<T>,
    selection: &Selection<T>,
    spec: &IdentitySpec<T>,
    guarantee: PresenceGuarantee,
) -> Page<T> {
    if guarantee == PresenceGuarantee::Disabled || selection.is_none() {
        return page;
    }

    let mut missing: Vec<T> = Vec::new();
    for selected in selection.iter() {
        let represented = page
            .content
            .iter()
            .any(|option| spec.options_equal(option, selected))
            || missing
                .iter()
                .any(|synth| spec.options_equal(synth, selected));
        if !represented {
            missing.push(selected.clone());
        }
    }
    if missing.is_empty() {
        return page;
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "fform.options",
        synthesized = missing.len(),
        "selected values missing from page, prepending"
    );
    metrics::record_presence_synthesized(missing.len() as u64);

    let mut page = page;
    page.content.splice(0..0, missing);
    page.number_of_elements = page.content.len() as u32;
    page
}

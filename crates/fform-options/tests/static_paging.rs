//! Property-based invariants for the static path and the presence
//! guarantor.
//!
//! 1. Page 1 contains exactly the case-insensitive label-substring
//!    matches, truncated to page size.
//! 2. Resolving twice with an unchanged token yields structurally
//!    identical pages.
//! 3. Every page window respects the size bound and page metadata.
//! 4. With the presence guarantee enabled, every selected value is
//!    matched by the resulting page.
//! 5. With the guarantee disabled, the page is unchanged.

use fform_core::page::Page;
use fform_core::selection::Selection;
use fform_harness::label_spec;
use fform_options::adapter::{PagedOptions, ResolveParams};
use fform_options::presence::{PresenceGuarantee, ensure_present};
use fform_options::source::OptionsSource;
use proptest::prelude::*;

fn label() -> impl Strategy<Value = String> {
    "[a-cA-C]{0,4}"
}

fn labels(max_len: usize) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(label(), 0..=max_len)
}

fn naive_matches(items: &[String], query: &str) -> Vec<String> {
    let needle = query.trim().to_lowercase();
    items
        .iter()
        .filter(|item| needle.is_empty() || item.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

proptest! {
    #[test]
    fn page_one_holds_the_filtered_prefix(
        items in labels(30),
        query in "[a-cA-C]{0,2}",
        size in 1u32..8,
    ) {
        let mut paged = PagedOptions::new(OptionsSource::list(items.clone()), label_spec());
        let params = ResolveParams::new().query(query.clone()).size(size);
        let resolved = paged.resolve(&params).unwrap();

        let expected = naive_matches(&items, &query);
        let prefix: Vec<String> = expected.iter().take(size as usize).cloned().collect();
        prop_assert_eq!(&resolved.page.content, &prefix);
        prop_assert_eq!(resolved.page.total_elements, expected.len() as u64);
        prop_assert!(resolved.page.number_of_elements <= size);
    }

    #[test]
    fn unchanged_token_is_idempotent(
        items in labels(20),
        query in "[a-cA-C]{0,2}",
        number in 1u32..5,
        size in 1u32..6,
    ) {
        let mut paged = PagedOptions::new(OptionsSource::list(items), label_spec());
        let params = ResolveParams::new().query(query).page(number).size(size);
        let first = paged.resolve(&params).unwrap().page.clone();
        let second = paged.resolve(&params).unwrap().page.clone();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn every_window_is_consistent(
        items in labels(30),
        number in 1u32..8,
        size in 1u32..6,
    ) {
        let mut paged = PagedOptions::new(OptionsSource::list(items), label_spec());
        let params = ResolveParams::new().page(number).size(size);
        let resolved = paged.resolve(&params).unwrap();
        prop_assert!(resolved.page.is_consistent());
        prop_assert!(resolved.page.content.len() <= size as usize);
        prop_assert_eq!(resolved.page.number, number);
        prop_assert_eq!(resolved.page.last, number >= resolved.page.total_pages);
    }

    #[test]
    fn presence_enabled_covers_every_selected_value(
        content in labels(10),
        selected in labels(5),
    ) {
        let spec = label_spec();
        let total = content.len() as u64;
        let page = Page::windowed(content, total, 1, 10);
        let selection = Selection::Many(selected);

        let out = ensure_present(page, &selection, &spec, PresenceGuarantee::Enabled);
        for value in selection.iter() {
            prop_assert!(out.content.iter().any(|o| spec.options_equal(o, value)));
        }
        prop_assert!(out.is_consistent());
        prop_assert_eq!(out.total_elements, total);
    }

    #[test]
    fn presence_disabled_changes_nothing(
        content in labels(10),
        selected in labels(5),
    ) {
        let spec = label_spec();
        let total = content.len() as u64;
        let page = Page::windowed(content, total, 1, 10);
        let selection = Selection::Many(selected);

        let out = ensure_present(page.clone(), &selection, &spec, PresenceGuarantee::Disabled);
        prop_assert_eq!(out, page);
    }
}

#[test]
fn carl_prepended_when_absent_from_the_page() {
    let spec = label_spec();
    let mut paged = PagedOptions::new(
        OptionsSource::list(vec![
            "Alice".to_string(),
            "Bob".to_string(),
            "Carl".to_string(),
        ]),
        label_spec(),
    );
    let resolved = paged.resolve(&ResolveParams::new().size(2)).unwrap();
    let page = resolved.page.clone();

    let selection = Selection::Single("Carl".to_string());
    let out = ensure_present(page, &selection, &spec, PresenceGuarantee::Enabled);
    assert_eq!(out.content, vec!["Carl", "Alice", "Bob"]);
    assert_eq!(out.number_of_elements, 3);
    assert_eq!(out.total_elements, 3);
}

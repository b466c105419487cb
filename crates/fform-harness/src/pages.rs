#![forbid(unsafe_code)]

//! Page fixtures and an inline in-memory backend.

use fform_core::identity::IdentitySpec;
use fform_core::page::{Page, PageRequest};
use fform_options::source::{FetchHandle, FetchOptions};
use std::cell::RefCell;
use std::rc::Rc;

/// Identity spec whose label is the string itself.
pub fn label_spec() -> IdentitySpec<String> {
    IdentitySpec::new(|s: &String| s.clone())
}

/// `n` distinct option labels: `Item 01`, `Item 02`, ...
pub fn names(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("Item {i:02}")).collect()
}

/// Serve one page the way a paginated backend would: case-insensitive
/// substring filter on the trimmed query, then a 1-based window.
pub fn served_page(items: &[String], request: &PageRequest) -> Page<String> {
    let needle = request.query.trim().to_lowercase();
    let filtered: Vec<&String> = items
        .iter()
        .filter(|item| needle.is_empty() || item.to_lowercase().contains(&needle))
        .collect();
    let total = filtered.len() as u64;
    let start = (request.number.saturating_sub(1) as usize).saturating_mul(request.size as usize);
    let window: Vec<String> = filtered
        .into_iter()
        .skip(start)
        .take(request.size as usize)
        .cloned()
        .collect();
    Page::windowed(window, total, request.number, request.size)
}

/// Remote backend that answers inline from a shared item list.
///
/// Clones share the list, so a test can mutate it between resolutions
/// to simulate a backend whose total count changes.
pub struct InstantBackend {
    items: Rc<RefCell<Vec<String>>>,
}

impl InstantBackend {
    /// Backend serving these items.
    pub fn new(items: Vec<String>) -> Self {
        Self {
            items: Rc::new(RefCell::new(items)),
        }
    }

    /// Replace the served items.
    pub fn set_items(&self, items: Vec<String>) {
        *self.items.borrow_mut() = items;
    }

    /// Append one item.
    pub fn push(&self, item: impl Into<String>) {
        self.items.borrow_mut().push(item.into());
    }

    /// Current item count.
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    /// True when the backend serves nothing.
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl Clone for InstantBackend {
    fn clone(&self) -> Self {
        Self {
            items: Rc::clone(&self.items),
        }
    }
}

impl FetchOptions<String> for InstantBackend {
    fn fetch(&mut self, request: PageRequest, done: FetchHandle<String>) {
        let page = served_page(&self.items.borrow(), &request);
        done.complete(Ok(page));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_distinct_and_ordered() {
        let items = names(12);
        assert_eq!(items.len(), 12);
        assert_eq!(items[0], "Item 01");
        assert_eq!(items[11], "Item 12");
    }

    #[test]
    fn served_page_filters_and_windows() {
        let items = vec!["Alice".to_string(), "Bob".to_string(), "Carl".to_string()];
        let page = served_page(&items, &PageRequest::new("", 1, 2));
        assert_eq!(page.content, vec!["Alice", "Bob"]);
        assert_eq!(page.total_elements, 3);
        assert_eq!(page.total_pages, 2);

        let page = served_page(&items, &PageRequest::new("AR", 1, 10));
        assert_eq!(page.content, vec!["Carl"]);
    }

    #[test]
    fn instant_backend_shares_items_across_clones() {
        let backend = InstantBackend::new(names(3));
        let handle = backend.clone();
        handle.push("Item 99");
        assert_eq!(backend.len(), 4);
    }
}

#![forbid(unsafe_code)]

//! Stable identity for option values.
//!
//! Every selectable value gets a string key through a fallback chain:
//! an explicit key function, then a stringified identifier, then the
//! display label. Equality and selection membership are defined on top
//! of that key unless the caller supplies its own equality test.
//!
//! Two distinct values that share a derived label and have no
//! identifier compare equal. The static filter path reports such
//! collisions (see `fform-options`), but the resolver itself never
//! treats them as an error.

use crate::selection::Selection;
use std::fmt;

type KeyFn<T> = Box<dyn Fn(&T) -> String>;
type EqFn<T> = Box<dyn Fn(&T, &T) -> bool>;
type IdentFn<T> = Box<dyn Fn(&T) -> Option<String>>;
type LabelFn<T> = Box<dyn Fn(&T) -> String>;

/// Identity configuration for option values of type `T`.
///
/// The label function is required; everything else is optional and
/// only narrows how keys and equality are derived.
pub struct IdentitySpec<T> {
    key: Option<KeyFn<T>>,
    eq: Option<EqFn<T>>,
    ident: Option<IdentFn<T>>,
    label: LabelFn<T>,
}

impl<T> IdentitySpec<T> {
    /// Create a spec from the required label-derivation function.
    pub fn new(label: impl Fn(&T) -> String + 'static) -> Self {
        Self {
            key: None,
            eq: None,
            ident: None,
            label: Box::new(label),
        }
    }

    /// Use an explicit key-derivation function.
    ///
    /// Takes precedence over the identifier accessor and the label.
    #[must_use]
    pub fn with_key(mut self, key: impl Fn(&T) -> String + 'static) -> Self {
        self.key = Some(Box::new(key));
        self
    }

    /// Use an identifier accessor.
    ///
    /// Consulted when no explicit key function is set; a `None` return
    /// falls through to the label.
    #[must_use]
    pub fn with_ident(mut self, ident: impl Fn(&T) -> Option<String> + 'static) -> Self {
        self.ident = Some(Box::new(ident));
        self
    }

    /// Use an explicit equality test instead of key comparison.
    #[must_use]
    pub fn with_eq(mut self, eq: impl Fn(&T, &T) -> bool + 'static) -> Self {
        self.eq = Some(Box::new(eq));
        self
    }

    /// The display label for an option.
    pub fn label(&self, option: &T) -> String {
        (self.label)(option)
    }

    /// Derive the stable key for an option.
    ///
    /// Resolution order: explicit key function, identifier accessor,
    /// display label. Deterministic for a fixed `(option, spec)` pair.
    pub fn derive_key(&self, option: &T) -> String {
        if let Some(key) = &self.key {
            return key(option);
        }
        if let Some(ident) = &self.ident
            && let Some(id) = ident(option)
        {
            return id;
        }
        self.label(option)
    }

    /// Whether two options denote the same selectable value.
    pub fn options_equal(&self, a: &T, b: &T) -> bool {
        match &self.eq {
            Some(eq) => eq(a, b),
            None => self.derive_key(a) == self.derive_key(b),
        }
    }

    /// Whether `option` is part of the current selection.
    pub fn is_selected(&self, option: &T, selection: &Selection<T>) -> bool {
        match selection {
            Selection::None => false,
            Selection::Single(value) => self.options_equal(value, option),
            Selection::Many(values) => values.iter().any(|v| self.options_equal(v, option)),
        }
    }
}

impl<T: fmt::Display> IdentitySpec<T> {
    /// Spec whose label is the value's `Display` rendering.
    pub fn from_display() -> Self {
        Self::new(|option: &T| option.to_string())
    }
}

impl<T> fmt::Debug for IdentitySpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentitySpec")
            .field("key", &self.key.is_some())
            .field("eq", &self.eq.is_some())
            .field("ident", &self.ident.is_some())
            .finish()
    }
}

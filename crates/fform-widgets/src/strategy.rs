#![forbid(unsafe_code)]

//! Strategy table.
//!
//! The chosen strategy is a pure function of the total option count and
//! the selection mode; nothing else feeds the decision.

/// Whether one or several options can be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionMode {
    /// Exactly one option.
    Single,
    /// An ordered set of options.
    Multiple,
}

/// How the options are presented for selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Inline exclusive list (radio-style), single mode, up to 3 options.
    InlineList,
    /// Inline dropdown, single mode, 4 to 10 options.
    InlineDropdown,
    /// Inline checkbox grid, multiple mode, up to 10 options.
    CheckboxGrid,
    /// Paged modal list, either mode, 11 options and up.
    PagedModal,
}

impl Strategy {
    /// Pick the strategy for a total option count.
    pub fn choose(total_elements: u64, mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => match total_elements {
                0..=3 => Self::InlineList,
                4..=10 => Self::InlineDropdown,
                _ => Self::PagedModal,
            },
            SelectionMode::Multiple => {
                if total_elements <= 10 {
                    Self::CheckboxGrid
                } else {
                    Self::PagedModal
                }
            }
        }
    }

    /// True when the strategy pages through options in a modal.
    pub fn is_paged(self) -> bool {
        self == Self::PagedModal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    // Disambiguate the local `Strategy` enum from `proptest::strategy::Strategy`,
    // both of which are brought in by the glob imports above.
    use super::Strategy;

    #[test]
    fn single_mode_boundaries() {
        for total in 0..=3 {
            assert_eq!(
                Strategy::choose(total, SelectionMode::Single),
                Strategy::InlineList
            );
        }
        for total in 4..=10 {
            assert_eq!(
                Strategy::choose(total, SelectionMode::Single),
                Strategy::InlineDropdown
            );
        }
        assert_eq!(
            Strategy::choose(11, SelectionMode::Single),
            Strategy::PagedModal
        );
        assert_eq!(
            Strategy::choose(5000, SelectionMode::Single),
            Strategy::PagedModal
        );
    }

    #[test]
    fn multiple_mode_boundaries() {
        for total in 0..=10 {
            assert_eq!(
                Strategy::choose(total, SelectionMode::Multiple),
                Strategy::CheckboxGrid
            );
        }
        assert_eq!(
            Strategy::choose(11, SelectionMode::Multiple),
            Strategy::PagedModal
        );
    }

    #[test]
    fn only_the_modal_pages() {
        assert!(Strategy::PagedModal.is_paged());
        assert!(!Strategy::InlineList.is_paged());
        assert!(!Strategy::InlineDropdown.is_paged());
        assert!(!Strategy::CheckboxGrid.is_paged());
    }

    proptest! {
        // The decision depends on nothing but (total, mode).
        #[test]
        fn choose_is_deterministic(total in 0u64..100_000) {
            let single = Strategy::choose(total, SelectionMode::Single);
            prop_assert_eq!(single, Strategy::choose(total, SelectionMode::Single));
            let multiple = Strategy::choose(total, SelectionMode::Multiple);
            prop_assert_eq!(multiple, Strategy::choose(total, SelectionMode::Multiple));
        }

        #[test]
        fn large_counts_always_page(total in 11u64..100_000) {
            prop_assert_eq!(Strategy::choose(total, SelectionMode::Single), Strategy::PagedModal);
            prop_assert_eq!(Strategy::choose(total, SelectionMode::Multiple), Strategy::PagedModal);
        }
    }
}

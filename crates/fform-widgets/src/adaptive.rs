#![forbid(unsafe_code)]

//! Adaptive selector state machine.
//!
//! On first use a probe learns the total option count (static lists
//! answer from their length; remote sources are asked for a size-1
//! page). The count picks a strategy, and ordinary page resolutions
//! keep watching it: when the count crosses a strategy boundary the
//! active sub-widget is swapped and its local state discarded. That
//! loss is observable, documented behavior, surfaced as a
//! [`TransitionEvent`] rather than a side effect.

use crate::strategy::{SelectionMode, Strategy};
use fform_core::error::FetchError;
use fform_core::identity::IdentitySpec;
use fform_core::page::{DEFAULT_PAGE_SIZE, Page};
use fform_core::selection::Selection;
use fform_options::adapter::{PagedOptions, ResolveParams};
use fform_options::presence::{PresenceGuarantee, ensure_present};
use fform_options::source::OptionsSource;
use std::sync::atomic::{AtomicU64, Ordering};

static STRATEGY_TRANSITIONS_TOTAL: AtomicU64 = AtomicU64::new(0);

/// Total strategy swaps across all selectors (monotonic counter).
#[must_use]
pub fn strategy_transitions_total() -> u64 {
    STRATEGY_TRANSITIONS_TOTAL.load(Ordering::Relaxed)
}

/// Where the selector is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Probing for the option count; render only a progress indicator.
    Booting,
    /// A strategy is active.
    Settled(Strategy),
    /// The count crossed a boundary; the next step installs `to` with
    /// fresh local state.
    Transitioning {
        /// Strategy being torn down.
        from: Strategy,
        /// Strategy about to be installed.
        to: Strategy,
    },
}

/// One completed strategy swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionEvent {
    /// Strategy that was torn down, with its local state.
    pub from: Strategy,
    /// Strategy now active.
    pub to: Strategy,
    /// The total count that forced the swap.
    pub total_elements: u64,
}

/// Local state of the inline exclusive list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListLocal {
    /// Cursor position within the visible options.
    pub cursor: usize,
}

/// Local state of the inline dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownLocal {
    /// Whether the dropdown is unfolded.
    pub open: bool,
    /// Cursor position within the unfolded list.
    pub cursor: usize,
}

/// Local state of the checkbox grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridLocal {
    /// Cursor position within the grid.
    pub cursor: usize,
}

/// Local state of the paged modal picker.
///
/// `staged` is the provisional, unsaved selection built while the modal
/// is open; it is exactly the state lost when a count change swaps the
/// strategy before the user confirms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalLocal<T> {
    /// Whether the modal is open.
    pub open: bool,
    /// Provisional selection, not yet confirmed by the user.
    pub staged: Vec<T>,
    /// 1-based page the modal is showing.
    pub page_number: u32,
}

impl<T> Default for ModalLocal<T> {
    fn default() -> Self {
        Self {
            open: false,
            staged: Vec::new(),
            page_number: 1,
        }
    }
}

/// Strategy-local transient state, tagged by strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategyState<T> {
    /// State of the inline exclusive list.
    InlineList(ListLocal),
    /// State of the inline dropdown.
    InlineDropdown(DropdownLocal),
    /// State of the checkbox grid.
    CheckboxGrid(GridLocal),
    /// State of the paged modal picker.
    PagedModal(ModalLocal<T>),
}

impl<T> StrategyState<T> {
    /// Fresh default state for a strategy.
    pub fn default_for(strategy: Strategy) -> Self {
        match strategy {
            Strategy::InlineList => Self::InlineList(ListLocal::default()),
            Strategy::InlineDropdown => Self::InlineDropdown(DropdownLocal::default()),
            Strategy::CheckboxGrid => Self::CheckboxGrid(GridLocal::default()),
            Strategy::PagedModal => Self::PagedModal(ModalLocal::default()),
        }
    }

    /// The strategy this state belongs to.
    pub fn strategy(&self) -> Strategy {
        match self {
            Self::InlineList(_) => Strategy::InlineList,
            Self::InlineDropdown(_) => Strategy::InlineDropdown,
            Self::CheckboxGrid(_) => Strategy::CheckboxGrid,
            Self::PagedModal(_) => Strategy::PagedModal,
        }
    }
}

/// Selector that adapts its presentation strategy to the option count.
#[derive(Debug)]
pub struct AdaptiveSelect<T> {
    options: PagedOptions<T>,
    mode: SelectionMode,
    presence: PresenceGuarantee,
    phase: Phase,
    local: Option<StrategyState<T>>,
    known_total: Option<u64>,
    view: Option<Page<T>>,
    query: String,
    page_number: u32,
    page_size: u32,
    reload: u64,
}

impl<T: Clone> AdaptiveSelect<T> {
    /// Create a selector over a source.
    pub fn new(source: OptionsSource<T>, spec: IdentitySpec<T>, mode: SelectionMode) -> Self {
        Self {
            options: PagedOptions::new(source, spec),
            mode,
            presence: PresenceGuarantee::Enabled,
            phase: Phase::Booting,
            local: None,
            known_total: None,
            view: None,
            query: String::new(),
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
            reload: 0,
        }
    }

    /// Set the page size used for ordinary resolutions.
    #[must_use]
    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = size;
        self
    }

    /// Set whether selected values are kept visible on every page.
    #[must_use]
    pub fn presence(mut self, guarantee: PresenceGuarantee) -> Self {
        self.presence = guarantee;
        self
    }

    /// Drive the selector one step.
    ///
    /// Call once per event-loop turn (and after completing fetches).
    /// Returns the transition event when a strategy swap finishes. A
    /// fetch failure propagates out unchanged; stepping again with the
    /// same inputs will not retry it.
    pub fn step(
        &mut self,
        selection: &Selection<T>,
    ) -> Result<Option<TransitionEvent>, FetchError> {
        let mut event = None;

        match self.phase {
            Phase::Booting => {
                let total = match self.options.static_len() {
                    Some(len) => Some(len as u64),
                    None => {
                        let probed = self.options.probe(&self.query, self.reload)?;
                        if probed.is_loading {
                            None
                        } else {
                            Some(probed.page.total_elements)
                        }
                    }
                };
                let Some(total) = total else {
                    // Probe still outstanding; render progress only.
                    return Ok(None);
                };
                let strategy = Strategy::choose(total, self.mode);
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    target: "fform.adaptive",
                    total,
                    strategy = ?strategy,
                    "selector settled"
                );
                self.known_total = Some(total);
                self.local = Some(StrategyState::default_for(strategy));
                self.phase = Phase::Settled(strategy);
            }
            Phase::Transitioning { from, to } => {
                self.local = Some(StrategyState::default_for(to));
                self.phase = Phase::Settled(to);
                STRATEGY_TRANSITIONS_TOTAL.fetch_add(1, Ordering::Relaxed);
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    target: "fform.adaptive",
                    from = ?from,
                    to = ?to,
                    "strategy swapped, local state discarded"
                );
                event = Some(TransitionEvent {
                    from,
                    to,
                    total_elements: self.known_total.unwrap_or(0),
                });
            }
            Phase::Settled(_) => {}
        }

        let params = ResolveParams::new()
            .query(self.query.clone())
            .page(self.page_number)
            .size(self.page_size)
            .reload(self.reload);
        let resolved = self.options.resolve(&params)?;
        let is_loading = resolved.is_loading;
        let total = resolved.page.total_elements;
        let page = resolved.page.clone();

        let view = ensure_present(page, selection, self.options.spec(), self.presence);
        self.view = Some(view);

        if !is_loading {
            self.known_total = Some(total);
            if let Phase::Settled(current) = self.phase {
                let target = Strategy::choose(total, self.mode);
                if target != current {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        target: "fform.adaptive",
                        total,
                        from = ?current,
                        to = ?target,
                        "option count crossed a strategy boundary"
                    );
                    self.phase = Phase::Transitioning {
                        from: current,
                        to: target,
                    };
                }
            }
        }

        Ok(event)
    }

    /// Change the filter query; resets to the first page.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query != self.query {
            self.query = query;
            self.page_number = 1;
        }
    }

    /// Jump to a 1-based page.
    pub fn set_page(&mut self, number: u32) {
        self.page_number = number.max(1);
    }

    /// Force a recompute/refetch on the next step.
    pub fn force_reload(&mut self) {
        self.reload = self.reload.wrapping_add(1);
    }
}

impl<T> AdaptiveSelect<T> {
    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The currently installed strategy, if any.
    ///
    /// During a transition this is still the outgoing strategy; the
    /// incoming one is installed by the next [`AdaptiveSelect::step`].
    pub fn strategy(&self) -> Option<Strategy> {
        match self.phase {
            Phase::Booting => None,
            Phase::Settled(strategy) => Some(strategy),
            Phase::Transitioning { from, .. } => Some(from),
        }
    }

    /// Local state of the active strategy.
    pub fn local(&self) -> Option<&StrategyState<T>> {
        self.local.as_ref()
    }

    /// Mutable local state, for the host's event handling.
    pub fn local_mut(&mut self) -> Option<&mut StrategyState<T>> {
        self.local.as_mut()
    }

    /// The presence-adjusted page for the host renderer.
    pub fn view_page(&self) -> Option<&Page<T>> {
        self.view.as_ref()
    }

    /// True while a probe or page fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        self.options.is_loading()
    }

    /// The most recently learned total option count.
    pub fn total_elements(&self) -> Option<u64> {
        self.known_total
    }

    /// The selection mode this selector was built with.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// The underlying page adapter.
    pub fn options(&self) -> &PagedOptions<T> {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> IdentitySpec<String> {
        IdentitySpec::new(|s: &String| s.clone())
    }

    fn items(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("Item {i:02}")).collect()
    }

    #[test]
    fn static_list_settles_in_one_step() {
        let mut select = AdaptiveSelect::new(
            OptionsSource::list(items(3)),
            spec(),
            SelectionMode::Single,
        );
        assert_eq!(select.phase(), Phase::Booting);
        assert_eq!(select.strategy(), None);

        let event = select.step(&Selection::None).unwrap();
        assert_eq!(event, None);
        assert_eq!(select.phase(), Phase::Settled(Strategy::InlineList));
        assert_eq!(select.total_elements(), Some(3));
        assert_eq!(select.view_page().unwrap().number_of_elements, 3);
    }

    #[test]
    fn default_state_matches_strategy() {
        for strategy in [
            Strategy::InlineList,
            Strategy::InlineDropdown,
            Strategy::CheckboxGrid,
            Strategy::PagedModal,
        ] {
            let state: StrategyState<String> = StrategyState::default_for(strategy);
            assert_eq!(state.strategy(), strategy);
        }
    }

    #[test]
    fn modal_default_starts_on_page_one() {
        let local: ModalLocal<String> = ModalLocal::default();
        assert!(!local.open);
        assert!(local.staged.is_empty());
        assert_eq!(local.page_number, 1);
    }

    #[test]
    fn multiple_mode_picks_the_grid_for_small_lists() {
        let mut select = AdaptiveSelect::new(
            OptionsSource::list(items(8)),
            spec(),
            SelectionMode::Multiple,
        );
        select.step(&Selection::None).unwrap();
        assert_eq!(select.phase(), Phase::Settled(Strategy::CheckboxGrid));
    }

    #[test]
    fn set_query_resets_the_page() {
        let mut select = AdaptiveSelect::new(
            OptionsSource::list(items(30)),
            spec(),
            SelectionMode::Single,
        );
        select.set_page(3);
        select.set_query("item");
        let params_page = {
            select.step(&Selection::None).unwrap();
            select.view_page().unwrap().number
        };
        assert_eq!(params_page, 1);
    }

    #[test]
    fn presence_keeps_selection_visible_in_view() {
        let mut select = AdaptiveSelect::new(
            OptionsSource::list(items(30)),
            spec(),
            SelectionMode::Single,
        )
        .page_size(5);
        let chosen = Selection::Single("Item 29".to_string());
        select.step(&chosen).unwrap();
        let view = select.view_page().unwrap();
        assert_eq!(view.content[0], "Item 29");
        assert_eq!(view.number_of_elements, 6);
        assert_eq!(view.total_elements, 30);
    }

    #[test]
    fn presence_can_be_disabled() {
        let mut select = AdaptiveSelect::new(
            OptionsSource::list(items(30)),
            spec(),
            SelectionMode::Single,
        )
        .page_size(5)
        .presence(PresenceGuarantee::Disabled);
        let chosen = Selection::Single("Item 29".to_string());
        select.step(&chosen).unwrap();
        assert_eq!(select.view_page().unwrap().number_of_elements, 5);
    }
}

#![forbid(unsafe_code)]

//! Adaptive selection presentation for FrankenForm.
//!
//! Different option counts want different widgets: a three-entry
//! exclusive list reads well inline, three thousand entries need a
//! paged modal. This crate picks the presentation strategy from the
//! live total option count and migrates between strategies as that
//! count changes across a run.
//!
//! Rendering is the host's job; the selector exposes the active
//! strategy, its local state, and the resolved page, nothing visual.

pub mod adaptive;
pub mod strategy;

pub use adaptive::{AdaptiveSelect, Phase, StrategyState, TransitionEvent};
pub use strategy::{SelectionMode, Strategy};

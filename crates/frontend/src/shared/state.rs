//! Reactive state owned by a single page view.
//!
//! `PageState` is a Copy struct of signals, created by the page component
//! and passed explicitly to the children that need it. Timer scheduling
//! lives in the components that own the timers; the methods here are the
//! plain state transitions they drive.

use leptos::prelude::*;

/// How long the like toast stays visible after the most recent like.
pub const LIKE_TOAST_MS: u32 = 2_000;

/// Interval between automatic pane flips on the showcase page.
pub const PANE_ROTATE_MS: u32 = 10_000;

/// The two panes of the breeds/facts tab panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneKey {
    Breeds,
    Facts,
}

impl PaneKey {
    /// The opposite pane, used by the auto-rotation tick.
    pub fn other(self) -> Self {
        match self {
            PaneKey::Breeds => PaneKey::Facts,
            PaneKey::Facts => PaneKey::Breeds,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaneKey::Breeds => "Cat Breeds",
            PaneKey::Facts => "Cat Facts",
        }
    }
}

#[derive(Clone, Copy)]
pub struct PageState {
    pub active_pane: RwSignal<PaneKey>,
    pub like_count: RwSignal<u32>,
    pub like_message: RwSignal<bool>,
}

impl PageState {
    pub fn new() -> Self {
        Self {
            active_pane: RwSignal::new(PaneKey::Breeds),
            like_count: RwSignal::new(0),
            like_message: RwSignal::new(false),
        }
    }

    pub fn select_pane(&self, pane: PaneKey) {
        self.active_pane.set(pane);
    }

    /// Flip to the opposite pane. Last writer wins: a rotation tick
    /// overrides any manual selection made since the previous tick.
    pub fn rotate_pane(&self) {
        self.active_pane.update(|pane| *pane = pane.other());
    }

    pub fn register_like(&self) {
        self.like_count.update(|n| *n += 1);
        self.like_message.set(true);
    }

    pub fn hide_like_message(&self) {
        self.like_message.set(false);
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state() {
        let state = PageState::new();
        assert_eq!(state.active_pane.get_untracked(), PaneKey::Breeds);
        assert_eq!(state.like_count.get_untracked(), 0);
        assert!(!state.like_message.get_untracked());
    }

    #[test]
    fn last_selection_wins() {
        let state = PageState::new();
        state.select_pane(PaneKey::Facts);
        state.select_pane(PaneKey::Breeds);
        state.select_pane(PaneKey::Facts);
        assert_eq!(state.active_pane.get_untracked(), PaneKey::Facts);
    }

    #[test]
    fn selecting_current_pane_is_a_no_op() {
        let state = PageState::new();
        state.select_pane(PaneKey::Breeds);
        assert_eq!(state.active_pane.get_untracked(), PaneKey::Breeds);
    }

    #[test]
    fn rotation_alternates_panes() {
        let state = PageState::new();
        state.rotate_pane();
        assert_eq!(state.active_pane.get_untracked(), PaneKey::Facts);
        state.rotate_pane();
        assert_eq!(state.active_pane.get_untracked(), PaneKey::Breeds);
        state.rotate_pane();
        assert_eq!(state.active_pane.get_untracked(), PaneKey::Facts);
    }

    #[test]
    fn rotation_overrides_manual_selection() {
        let state = PageState::new();
        state.select_pane(PaneKey::Facts);
        state.rotate_pane();
        assert_eq!(state.active_pane.get_untracked(), PaneKey::Breeds);
    }

    #[test]
    fn like_burst_counts_every_click() {
        let state = PageState::new();
        for expected in 1..=5 {
            state.register_like();
            assert_eq!(state.like_count.get_untracked(), expected);
            assert!(state.like_message.get_untracked());
        }
    }

    #[test]
    fn hide_is_idempotent_and_reversible() {
        let state = PageState::new();
        state.register_like();
        state.hide_like_message();
        assert!(!state.like_message.get_untracked());
        state.hide_like_message();
        assert!(!state.like_message.get_untracked());
        // count survives the toast hiding
        assert_eq!(state.like_count.get_untracked(), 1);
        state.register_like();
        assert!(state.like_message.get_untracked());
        assert_eq!(state.like_count.get_untracked(), 2);
    }

    #[test]
    fn pane_key_other_is_an_involution() {
        assert_eq!(PaneKey::Breeds.other(), PaneKey::Facts);
        assert_eq!(PaneKey::Facts.other(), PaneKey::Breeds);
        assert_eq!(PaneKey::Breeds.other().other(), PaneKey::Breeds);
    }
}

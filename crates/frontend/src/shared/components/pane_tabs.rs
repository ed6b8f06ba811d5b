//! Two-button tab selector for the breeds/facts panel.
//!
//! The panes themselves stay mounted; the pages toggle their visibility
//! with the `pane--hidden` modifier based on `PageState::active_pane`.

use crate::shared::icons::icon;
use crate::shared::state::{PageState, PaneKey};
use leptos::prelude::*;

#[component]
pub fn PaneTabs(
    state: PageState,
    /// Render a leading icon in each tab (showcase variant).
    #[prop(optional)]
    with_icons: bool,
) -> impl IntoView {
    view! {
        <div class="pane-tabs" role="tablist">
            <PaneTab state=state pane=PaneKey::Breeds with_icons=with_icons />
            <PaneTab state=state pane=PaneKey::Facts with_icons=with_icons />
        </div>
    }
}

#[component]
fn PaneTab(state: PageState, pane: PaneKey, with_icons: bool) -> impl IntoView {
    let is_active = move || state.active_pane.get() == pane;
    let icon_name = match pane {
        PaneKey::Breeds => "cat",
        PaneKey::Facts => "info",
    };

    view! {
        <button
            class="pane-tabs__tab"
            class:pane-tabs__tab--active=is_active
            role="tab"
            aria-selected=move || is_active().to_string()
            on:click=move |_| state.select_pane(pane)
        >
            {with_icons.then(|| icon(icon_name))}
            <span>{pane.label()}</span>
        </button>
    }
}

//! The enhanced page variant: tab icons, a visible like counter and tabs
//! that rotate on their own every 10 seconds.

use crate::shared::components::{BreedList, Carousel, FactList, LikeButton, LikeToast, PaneTabs};
use crate::shared::data::{INTRO_TEXT, PAGE_TITLE};
use crate::shared::icons::icon;
use crate::shared::state::{PageState, PaneKey, PANE_ROTATE_MS};
use gloo_timers::callback::Interval;
use leptos::logging::log;
use leptos::prelude::*;

#[component]
pub fn ShowcasePage() -> impl IntoView {
    let state = PageState::new();

    // The rotation tick is last-writer-wins against manual selection: it
    // flips the pane unconditionally, even right after a user click.
    let rotation: StoredValue<Option<Interval>, LocalStorage> = StoredValue::new_local(Some(
        Interval::new(PANE_ROTATE_MS, move || state.rotate_pane()),
    ));

    on_cleanup(move || {
        if let Some(interval) = rotation.try_update_value(|slot| slot.take()).flatten() {
            interval.cancel();
            log!("showcase unmounted, pane rotation stopped");
        }
    });

    view! {
        <div class="page page--showcase">
            <div class="page__column">
                <h1 class="page__title">
                    {icon("sparkles")}
                    {PAGE_TITLE}
                    {icon("sparkles")}
                </h1>

                <Carousel />

                <p class="page__intro">{INTRO_TEXT}</p>

                <div class="page__actions">
                    <LikeButton state=state show_count=true />
                </div>
                <LikeToast state=state />

                <PaneTabs state=state with_icons=true />
                <div class="pane" class:pane--hidden=move || state.active_pane.get() != PaneKey::Breeds>
                    <BreedList />
                </div>
                <div class="pane" class:pane--hidden=move || state.active_pane.get() != PaneKey::Facts>
                    <FactList />
                </div>
            </div>
        </div>
    }
}

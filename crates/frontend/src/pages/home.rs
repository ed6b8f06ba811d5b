//! The basic page variant: manual tab switching only, plain controls.

use crate::shared::components::{BreedList, Carousel, FactList, LikeButton, LikeToast, PaneTabs};
use crate::shared::data::{INTRO_TEXT, PAGE_TITLE};
use crate::shared::state::{PageState, PaneKey};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let state = PageState::new();

    view! {
        <div class="page">
            <div class="page__column">
                <h1 class="page__title">{PAGE_TITLE}</h1>

                <Carousel />

                <p class="page__intro">{INTRO_TEXT}</p>

                <div class="page__actions">
                    <LikeButton state=state />
                </div>
                <LikeToast state=state />

                <PaneTabs state=state />
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

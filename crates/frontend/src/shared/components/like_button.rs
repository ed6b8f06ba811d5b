//! Like button. Owns the single toast-hide timer: every click replaces
//! the pending timeout, so a burst of likes produces exactly one hide
//! 2000 ms after the last click and the toast never flickers.

use crate::shared::icons::icon;
use crate::shared::state::{PageState, LIKE_TOAST_MS};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

#[component]
pub fn LikeButton(
    state: PageState,
    /// Render the running like count next to the label (showcase variant).
    #[prop(optional)]
    show_count: bool,
) -> impl IntoView {
    // At most one pending hide. `Timeout` cancels on drop, so replacing
    // the stored handle also cancels the previous schedule.
    let pending_hide: StoredValue<Option<Timeout>, LocalStorage> = StoredValue::new_local(None);

    let on_like = move |_| {
        state.register_like();
        let hide = Timeout::new(LIKE_TOAST_MS, move || state.hide_like_message());
        pending_hide.set_value(Some(hide));
    };

    // A hide firing after the page is gone would mutate disposed state.
    on_cleanup(move || {
        if let Some(hide) = pending_hide.try_update_value(|slot| slot.take()).flatten() {
            hide.cancel();
        }
    });

    view! {
        <button class="like-button" on:click=on_like>
            {icon("heart")}
            <span>"Like"</span>
            {show_count
                .then(|| {
                    view! {
                        <span class="like-button__count">{move || state.like_count.get()}</span>
                    }
                })}
        </button>
    }
}

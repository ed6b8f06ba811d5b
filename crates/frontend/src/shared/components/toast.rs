use crate::shared::state::PageState;
use leptos::prelude::*;

/// Transient confirmation shown while `like_message` is set. The hide is
/// scheduled by [`LikeButton`](super::LikeButton), which owns the timer.
#[component]
pub fn LikeToast(state: PageState) -> impl IntoView {
    view! {
        <Show when=move || state.like_message.get()>
            <div class="toast" role="status">
                "Thanks for the love! Cats everywhere purr in your honor."
            </div>
        </Show>
    }
}

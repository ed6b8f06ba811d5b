//! BreedCard - Thaw Card with the `card-appear` animation from `app.css`.
//!
//! `delay_ms` staggers the cascade when a list of cards is rendered:
//! card 1 gets 0, card 2 gets 80, card 3 gets 160, and so on.

use crate::shared::data::BreedEntry;
use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn BreedCard(
    entry: BreedEntry,
    /// Animation delay in milliseconds (for the stagger effect).
    #[prop(optional)]
    delay_ms: u32,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.5s ease-out {}ms both;", delay_ms);

    view! {
        <div class="breed-card" style=style>
            <Card>
                <h3 class="breed-card__name">{entry.name}</h3>
                <p class="breed-card__description">{entry.description}</p>
            </Card>
        </div>
    }
}

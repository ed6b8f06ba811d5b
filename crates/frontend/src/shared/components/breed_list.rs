use crate::shared::components::BreedCard;
use crate::shared::data::{BREEDS_HEADING, CAT_BREEDS};
use leptos::prelude::*;

#[component]
pub fn BreedList() -> impl IntoView {
    view! {
        <section class="pane-section">
            <h2 class="pane-section__heading">{BREEDS_HEADING}</h2>
            {CAT_BREEDS
                .iter()
                .enumerate()
                .map(|(position, entry)| {
                    let delay_ms = position as u32 * 80;
                    view! { <BreedCard entry=*entry delay_ms=delay_ms /> }
                })
                .collect_view()}
        </section>
    }
}

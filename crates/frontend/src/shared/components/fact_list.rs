use crate::shared::data::{CAT_FACTS, FACTS_HEADING};
use leptos::prelude::*;

#[component]
pub fn FactList() -> impl IntoView {
    view! {
        <section class="pane-section">
            <h2 class="pane-section__heading">{FACTS_HEADING}</h2>
            {CAT_FACTS
                .iter()
                .enumerate()
                .map(|(position, fact)| {
                    let style = format!(
                        "animation: fact-appear 0.5s ease-out {}ms both;",
                        position as u32 * 80
                    );
                    view! {
                        <div class="fact-card" style=style>
                            <p>{*fact}</p>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}

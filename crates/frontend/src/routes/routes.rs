use crate::pages::home::HomePage;
use crate::pages::showcase::ShowcasePage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/showcase") view=ShowcasePage />
            </Routes>
        </Router>
    }
}

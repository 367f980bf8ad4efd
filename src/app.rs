//! Birthday Card App
//!
//! Top-level component: one card centred on the page.

use leptos::prelude::*;

use crate::components::BirthdayCard;
use crate::config::CardConfig;

#[component]
pub fn App(config: CardConfig) -> impl IntoView {
    view! {
        <main class="app-layout">
            <BirthdayCard config=config />
        </main>
    }
}

//! Balloon Row Component
//!
//! One button per balloon. Clicking the next balloon pops it.

use leptos::prelude::*;

use crate::context::use_card_context;
use crate::state::CardStateStoreFields;

const BALLOON_COLORS: [&str; 5] = ["#7FFF00", "#4ECDC4", "#45B7D1", "#FFA07A", "#FFFF00"];

#[component]
pub fn BalloonRow() -> impl IntoView {
    let ctx = use_card_context();
    let total = ctx.store.total_balloons().get_untracked();

    view! {
        <div class="balloon-section">
            <h3 class="section-title">"Pop the balloons:"</h3>
            <div class="balloon-row">
            {(0..total)
                .map(move |index| {
                    let is_popped = move || ctx.store.popped_count().get() > index;
                    let color = BALLOON_COLORS[index % BALLOON_COLORS.len()];
                    view! {
                        <button
                            class=move || if is_popped() { "balloon popped" } else { "balloon" }
                            style=format!("--balloon-color: {};", color)
                            title=format!("Balloon {}", index + 1)
                            on:click=move |_| ctx.pop_balloon(index)
                        >
                            <span class="balloon-body"></span>
                            <span class="balloon-string"></span>
                        </button>
                    }
                })
                .collect_view()}
            </div>
        </div>
    }
}

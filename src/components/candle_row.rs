//! Candle Row Component
//!
//! One button per candle. Clicking the next unlit candle lights it.

use leptos::prelude::*;

use crate::context::use_card_context;
use crate::state::CardStateStoreFields;

const CANDLE_COLORS: [&str; 7] = ["#BB8FCE", "#000000", "#A52A2A", "#0000FF", "#98D8C8", "#4ECDC4", "#FFFF00"];

/// Gap between candle pop-ins while celebrating
const CELEBRATION_STAGGER_MS: usize = 500;

/// Inline style for candle `index`: its colour, plus a staggered
/// pop-in delay while the celebration sequence runs
fn candle_style(index: usize, celebrating: bool) -> String {
    let color = CANDLE_COLORS[index % CANDLE_COLORS.len()];
    let delay_ms = if celebrating { index * CELEBRATION_STAGGER_MS } else { 0 };
    format!("--candle-color: {}; --pop-delay: {}ms;", color, delay_ms)
}

#[component]
pub fn CandleRow() -> impl IntoView {
    let ctx = use_card_context();
    let total = ctx.store.total_candles().get_untracked();

    view! {
        <div class="candle-section">
            <h3 class="section-title">"Light the candles:"</h3>
            <div class="candle-row">
                {(0..total)
                    .map(move |index| {
                        let is_lit = move || ctx.store.lit_count().get() > index;
                        view! {
                            <button
                                class=move || if is_lit() { "candle lit" } else { "candle" }
                                style=move || candle_style(index, ctx.store.is_celebrating().get())
                                title=format!("Candle {}", index + 1)
                                on:click=move |_| ctx.light_candle(index)
                            >
                                <span class="flame"></span>
                                <span class="wick"></span>
                                <span class="stick"></span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
